// crates/yp_physics/src/engine.rs

//! y⁺ 计算引擎
//!
//! 每种模式实现 [`WallShearModel`]，只负责给出摩擦速度与相关中间量；
//! 引擎统一完成 y⁺ 计算、网格分级和推导文本生成。
//!
//! 引擎不持有任何状态，所有函数都是输入的纯函数，可在多线程中直接调用。
//!
//! # 示例
//!
//! ```
//! use yp_physics::engine::{calculate, compute_direct_cf, validate_common};
//! use yp_physics::{MeshCategory, ModeInputs, RawFlowInputs};
//!
//! let raw = RawFlowInputs::new("1.204", "1.810e-5", "10.0", "1e-6", "1.0");
//! let params = validate_common(&raw).unwrap();
//! let result = compute_direct_cf(&params, 0.01).unwrap();
//! assert_eq!(result.category(), MeshCategory::FullyResolved);
//!
//! let same = calculate(&raw, &ModeInputs::direct_cf("0.01")).unwrap();
//! assert_eq!(same.y_plus(), result.y_plus());
//! ```

use crate::correlation::{reynolds_number, skin_friction};
use crate::mode::{ModeInputs, ModeKind};
use crate::params::{FlowParameters, RawFlowInputs};
use crate::result::{CalculationResult, WallShearEstimate};
use crate::shear::{resolve_shear, ShearInputs};
use yp_foundation::validation::{ensure_positive, parse_field};
use yp_foundation::YpResult;

pub use crate::classify::classify;
pub use crate::params::validate_common;

/// 壁面剪切模型接口
pub trait WallShearModel {
    /// 模式标识
    fn mode(&self) -> ModeKind;

    /// 估算摩擦速度及相关中间量
    fn estimate(&self, params: &FlowParameters) -> YpResult<WallShearEstimate>;
}

/// 模式 A：Blasius / Schlichting 平板关联式
#[derive(Debug, Clone, Copy, Default)]
pub struct BlasiusCorrelation;

impl WallShearModel for BlasiusCorrelation {
    fn mode(&self) -> ModeKind {
        ModeKind::Blasius
    }

    fn estimate(&self, params: &FlowParameters) -> YpResult<WallShearEstimate> {
        Ok(Self::correlate(params))
    }
}

impl BlasiusCorrelation {
    /// 由 Re_x 估算 C_f 与 u_τ，有效输入下不会失败
    pub fn correlate(params: &FlowParameters) -> WallShearEstimate {
        let re_x = reynolds_number(params);
        let (regime, cf) = skin_friction(re_x);
        WallShearEstimate {
            re_x: Some(re_x),
            regime: Some(regime),
            ..WallShearEstimate::from_cf(params, cf)
        }
    }
}

/// 模式 B：给定摩擦系数
#[derive(Debug, Clone, Copy)]
pub struct DirectSkinFriction {
    /// 摩擦系数 C_f
    pub cf: f64,
}

impl WallShearModel for DirectSkinFriction {
    fn mode(&self) -> ModeKind {
        ModeKind::DirectCf
    }

    fn estimate(&self, params: &FlowParameters) -> YpResult<WallShearEstimate> {
        let cf = ensure_positive("cf", self.cf)?;
        Ok(WallShearEstimate::from_cf(params, cf))
    }
}

/// 模式 C：给定剪应力或摩擦速度
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectShear<'a> {
    /// 原始剪切输入
    pub inputs: ShearInputs<'a>,
}

impl WallShearModel for DirectShear<'_> {
    fn mode(&self) -> ModeKind {
        ModeKind::DirectShear
    }

    fn estimate(&self, params: &FlowParameters) -> YpResult<WallShearEstimate> {
        let resolved = resolve_shear(&self.inputs, params.rho())?;
        Ok(WallShearEstimate {
            re_x: None,
            regime: None,
            cf: None,
            u_tau: resolved.u_tau,
            tau_w: resolved.tau_w,
            shear_source: Some(resolved.source),
        })
    }
}

/// 以任意模型完成一次计算
pub fn evaluate<M: WallShearModel + ?Sized>(
    model: &M,
    params: &FlowParameters,
) -> YpResult<CalculationResult> {
    let estimate = model.estimate(params)?;
    CalculationResult::assemble(model.mode(), *params, estimate)
}

/// 模式 A 计算
///
/// 仅当输入量级极端、派生量超出浮点范围时返回范围错误。
pub fn compute_blasius(params: &FlowParameters) -> YpResult<CalculationResult> {
    CalculationResult::assemble(
        ModeKind::Blasius,
        *params,
        BlasiusCorrelation::correlate(params),
    )
}

/// 模式 B 计算，C_f ≤ 0 时返回范围错误
pub fn compute_direct_cf(params: &FlowParameters, cf: f64) -> YpResult<CalculationResult> {
    evaluate(&DirectSkinFriction { cf }, params)
}

/// 模式 C 计算，τw 与 u_τ 均不可用时返回缺少剪切输入错误
pub fn compute_direct_tau_or_utau(
    params: &FlowParameters,
    tau_raw: Option<&str>,
    u_tau_raw: Option<&str>,
) -> YpResult<CalculationResult> {
    let model = DirectShear {
        inputs: ShearInputs {
            tau_w: tau_raw,
            u_tau: u_tau_raw,
        },
    };
    evaluate(&model, params)
}

/// 以已验证参数按模式分发
///
/// 模式 B 的 C_f 文本在此解析，无法解析时返回解析错误。
pub fn compute(params: &FlowParameters, inputs: &ModeInputs) -> YpResult<CalculationResult> {
    match inputs {
        ModeInputs::Blasius => compute_blasius(params),
        ModeInputs::DirectCf { cf } => {
            let cf = parse_field("cf", cf)?;
            compute_direct_cf(params, cf)
        }
        ModeInputs::DirectShear { tau_w, u_tau } => {
            compute_direct_tau_or_utau(params, tau_w.as_deref(), u_tau.as_deref())
        }
    }
}

/// 从原始输入完成一次完整计算
pub fn calculate(raw: &RawFlowInputs, inputs: &ModeInputs) -> YpResult<CalculationResult> {
    let params = validate_common(raw)?;
    compute(&params, inputs)
}

/// 引擎门面
///
/// 零大小类型，仅用于以方法形式调用上面的自由函数。
#[derive(Debug, Clone, Copy, Default)]
pub struct YPlusEngine;

impl YPlusEngine {
    /// 创建引擎
    pub fn new() -> Self {
        Self
    }

    /// 见 [`calculate`]
    pub fn calculate(
        &self,
        raw: &RawFlowInputs,
        inputs: &ModeInputs,
    ) -> YpResult<CalculationResult> {
        calculate(raw, inputs)
    }

    /// 见 [`compute`]
    pub fn compute(
        &self,
        params: &FlowParameters,
        inputs: &ModeInputs,
    ) -> YpResult<CalculationResult> {
        compute(params, inputs)
    }
}
