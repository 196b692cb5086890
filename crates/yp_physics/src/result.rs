// crates/yp_physics/src/result.rs

//! 计算结果
//!
//! [`CalculationResult`] 在一次计算中生成一次，之后只读。所有中间量
//! （Re_x、C_f、u_τ、τw、y⁺）连同推导文本和网格分级都保存在其中，
//! 供展示层与导出层使用。

use crate::classify::{classify, MeshCategory};
use crate::correlation::{self, FlowRegime};
use crate::mode::ModeKind;
use crate::params::FlowParameters;
use crate::report;
use crate::shear::ShearSource;
use serde::Serialize;
use yp_foundation::{ValidationReport, YpResult};

/// 壁面剪切估计
///
/// 由各模式的 [`WallShearModel`](crate::engine::WallShearModel) 给出，
/// 尚未计算 y⁺。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallShearEstimate {
    /// 雷诺数（仅模式 A）
    pub re_x: Option<f64>,
    /// 流态（仅模式 A）
    pub regime: Option<FlowRegime>,
    /// 摩擦系数（模式 A、B）
    pub cf: Option<f64>,
    /// 摩擦速度 [m/s]
    pub u_tau: f64,
    /// 壁面剪应力 [Pa]
    pub tau_w: f64,
    /// τw 来源（仅模式 C）
    pub shear_source: Option<ShearSource>,
}

impl WallShearEstimate {
    /// 由摩擦系数构造，τw 由 ρu_τ² 反算
    pub fn from_cf(params: &FlowParameters, cf: f64) -> Self {
        let u_tau = correlation::friction_velocity_from_cf(cf, params.velocity());
        Self {
            re_x: None,
            regime: None,
            cf: Some(cf),
            u_tau,
            tau_w: correlation::wall_shear_from_friction_velocity(u_tau, params.rho()),
            shear_source: None,
        }
    }
}

/// 计算结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    mode: ModeKind,
    params: FlowParameters,
    re_x: Option<f64>,
    regime: Option<FlowRegime>,
    cf: Option<f64>,
    u_tau: f64,
    tau_w: f64,
    shear_source: Option<ShearSource>,
    y_plus: f64,
    category: MeshCategory,
    narrative: String,
}

impl CalculationResult {
    /// 由剪切估计组装结果：计算 y⁺、分级并生成推导文本
    ///
    /// 正输入下所有派生量都应为有限正数；浮点上溢或下溢得到的
    /// `inf`/`NaN`/`0` 以范围错误报告，列出全部出问题的派生量。
    pub(crate) fn assemble(
        mode: ModeKind,
        params: FlowParameters,
        estimate: WallShearEstimate,
    ) -> YpResult<Self> {
        let y_plus = correlation::y_plus(&params, estimate.u_tau);

        let mut checks = ValidationReport::new();
        if let Some(re_x) = estimate.re_x {
            checks.require_positive("re_x", re_x);
        }
        if let Some(cf) = estimate.cf {
            checks.require_positive("cf", cf);
        }
        checks
            .require_positive("u_tau", estimate.u_tau)
            .require_positive("tau_w", estimate.tau_w)
            .require_positive("y_plus", y_plus);
        checks.into_result()?;

        let mut result = Self {
            mode,
            params,
            re_x: estimate.re_x,
            regime: estimate.regime,
            cf: estimate.cf,
            u_tau: estimate.u_tau,
            tau_w: estimate.tau_w,
            shear_source: estimate.shear_source,
            y_plus,
            category: classify(y_plus),
            narrative: String::new(),
        };
        result.narrative = report::render(&result);
        Ok(result)
    }

    /// 计算模式
    pub fn mode(&self) -> ModeKind {
        self.mode
    }

    /// 输入参数
    pub fn params(&self) -> &FlowParameters {
        &self.params
    }

    /// 运动粘度 ν [m²/s]
    pub fn nu(&self) -> f64 {
        self.params.nu()
    }

    /// 雷诺数（仅模式 A）
    pub fn re_x(&self) -> Option<f64> {
        self.re_x
    }

    /// 流态（仅模式 A）
    pub fn regime(&self) -> Option<FlowRegime> {
        self.regime
    }

    /// 摩擦系数
    pub fn cf(&self) -> Option<f64> {
        self.cf
    }

    /// 摩擦速度 u_τ [m/s]
    pub fn u_tau(&self) -> f64 {
        self.u_tau
    }

    /// 壁面剪应力 τw [Pa]
    pub fn tau_w(&self) -> f64 {
        self.tau_w
    }

    /// τw 来源（仅模式 C）
    pub fn shear_source(&self) -> Option<ShearSource> {
        self.shear_source
    }

    /// 无量纲壁面距离 y⁺
    pub fn y_plus(&self) -> f64 {
        self.y_plus
    }

    /// 网格分级
    pub fn category(&self) -> MeshCategory {
        self.category
    }

    /// 推导文本
    pub fn narrative(&self) -> &str {
        &self.narrative
    }
}
