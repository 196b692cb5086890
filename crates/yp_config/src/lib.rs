// crates/yp_config/src/lib.rs

//! YPlus Config Layer
//!
//! 配置层，提供流体预设表与计算请求文件，供展示层使用。
//!
//! # 模块概览
//!
//! - [`fluids`]: 只读流体预设表 `FluidTable`
//! - [`request`]: JSON 计算请求 `CalculationRequest`
//! - [`error`]: 配置错误类型
//!
//! # 层级架构
//!
//! ```text
//! Layer 4: yp_cli        ─> uses FluidTable, CalculationRequest
//! Layer 3: yp_config     ─> FluidTable, CalculationRequest (本层)
//! Layer 2: yp_physics    ─> 计算核心
//! Layer 1: yp_foundation
//! ```
//!
//! 预设表由调用方创建后注入，不存在进程级可变状态。

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod fluids;
pub mod request;

// 重导出核心类型
pub use error::ConfigError;
pub use fluids::{FluidPreset, FluidTable, DEFAULT_FLUID};
pub use request::{CalculationRequest, ModeConfig, RawNumber};
