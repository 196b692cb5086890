// crates/yp_physics/src/lib.rs

//! y⁺ 计算核心
//!
//! 根据流动参数与三种互斥的壁面剪切给定方式，计算无量纲壁面距离 y⁺
//! 并给出近壁网格分级：
//! - 流动参数与输入验证 (params)
//! - 计算模式 (mode)
//! - 平板摩擦关联式 (correlation)
//! - 剪切输入解析链 (shear)
//! - 网格分级 (classify)
//! - 计算结果与推导文本 (result, report)
//! - 引擎入口 (engine)
//!
//! # Trait 抽象
//!
//! - [`WallShearModel`]: 各模式的摩擦速度估算接口
//!
//! 本 crate 不做任何 IO 与日志，所有函数都是纯函数。

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod correlation;
pub mod engine;
pub mod mode;
pub mod params;
mod report;
pub mod result;
pub mod shear;

// 重导出常用类型
pub use classify::{classify, MeshCategory};
pub use correlation::{FlowRegime, TRANSITION_REYNOLDS};
pub use engine::{
    calculate, compute, compute_blasius, compute_direct_cf, compute_direct_tau_or_utau,
    evaluate, BlasiusCorrelation, DirectShear, DirectSkinFriction, WallShearModel,
    YPlusEngine,
};
pub use mode::{ModeInputs, ModeKind};
pub use params::{validate_common, FlowParameters, RawFlowInputs};
pub use result::{CalculationResult, WallShearEstimate};
pub use shear::{ResolvedShear, ShearAttempt, ShearInputs, ShearSource, SHEAR_RESOLUTION_ORDER};
