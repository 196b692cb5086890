// crates/yp_foundation/src/lib.rs

//! YPlus Foundation Layer
//!
//! 基础层，提供整个项目共享的错误类型与输入验证工具。
//!
//! # 模块概览
//!
//! - [`error`]: 统一错误类型
//! - [`validation`]: 数值字段解析与正值检查
//!
//! # 设计原则
//!
//! 1. **最少依赖**: 仅依赖 serde 和 thiserror
//! 2. **不吞错误**: 所有失败都以显式错误值返回
//! 3. **一次报告**: 正值检查收集全部越界字段

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod validation;

// 重导出常用类型
pub use error::{
    ErrorKind, RangeViolation, ShearAttemptFailure, SkipReason, YpError, YpResult,
};
pub use validation::{ensure_positive, parse_field, ValidationReport};

/// Prelude 模块，包含常用类型
pub mod prelude {
    pub use crate::error::{ErrorKind, YpError, YpResult};
    pub use crate::validation::{ensure_positive, parse_field, ValidationReport};
}
