// crates/yp_physics/src/correlation.rs

//! 平板边界层摩擦关联式
//!
//! # 算法
//!
//! 雷诺数:
//! ```text
//! Re_x = ρ U L / μ
//! ```
//!
//! 摩擦系数（Blasius / Schlichting）:
//! ```text
//! 层流 (Re_x < 5×10⁵):  C_f = 0.664 / √Re_x
//! 湍流 (Re_x ≥ 5×10⁵):  C_f = 0.455 / (log₁₀ Re_x)^2.58
//! ```
//!
//! 摩擦速度与壁面距离:
//! ```text
//! u_τ = U √(C_f / 2)
//! y⁺  = y u_τ / ν
//! ```

use crate::params::FlowParameters;
use serde::{Deserialize, Serialize};

/// 层流-湍流转捩雷诺数
pub const TRANSITION_REYNOLDS: f64 = 5.0e5;

/// 层流 Blasius 系数
pub const LAMINAR_COEFF: f64 = 0.664;

/// Schlichting 湍流系数
pub const TURBULENT_COEFF: f64 = 0.455;

/// Schlichting 湍流指数
pub const TURBULENT_EXPONENT: f64 = 2.58;

/// 边界层流态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowRegime {
    /// 层流
    Laminar,
    /// 湍流
    Turbulent,
}

impl FlowRegime {
    /// 按雷诺数判定流态，恰好等于转捩值时视为湍流
    #[inline]
    pub fn from_reynolds(re_x: f64) -> Self {
        if re_x < TRANSITION_REYNOLDS {
            Self::Laminar
        } else {
            Self::Turbulent
        }
    }

    /// 报告中的流态名
    pub fn label(&self) -> &'static str {
        match self {
            Self::Laminar => "层流",
            Self::Turbulent => "湍流",
        }
    }

    /// 报告中的公式名
    pub fn formula(&self) -> &'static str {
        match self {
            Self::Laminar => "C_f = 0.664 / √Re_x",
            Self::Turbulent => "C_f = 0.455 / (log₁₀(Re_x))^2.58",
        }
    }
}

/// 以特征长度为基准的雷诺数 Re_x = ρUL/μ
#[inline]
pub fn reynolds_number(params: &FlowParameters) -> f64 {
    params.rho() * params.velocity() * params.length() / params.mu()
}

/// 由雷诺数估算摩擦系数
///
/// 返回所用流态与 C_f。
pub fn skin_friction(re_x: f64) -> (FlowRegime, f64) {
    let regime = FlowRegime::from_reynolds(re_x);
    let cf = match regime {
        FlowRegime::Laminar => LAMINAR_COEFF / re_x.sqrt(),
        FlowRegime::Turbulent => TURBULENT_COEFF / re_x.log10().powf(TURBULENT_EXPONENT),
    };
    (regime, cf)
}

/// 由摩擦系数计算摩擦速度 u_τ = U √(C_f/2)
#[inline]
pub fn friction_velocity_from_cf(cf: f64, velocity: f64) -> f64 {
    (cf / 2.0).sqrt() * velocity
}

/// 由壁面剪应力计算摩擦速度 u_τ = √(τw/ρ)
#[inline]
pub fn friction_velocity_from_shear(tau_w: f64, rho: f64) -> f64 {
    (tau_w / rho).sqrt()
}

/// 由摩擦速度反算壁面剪应力 τw = ρ u_τ²
#[inline]
pub fn wall_shear_from_friction_velocity(u_tau: f64, rho: f64) -> f64 {
    u_tau * u_tau * rho
}

/// 无量纲壁面距离 y⁺ = y u_τ / ν
#[inline]
pub fn y_plus(params: &FlowParameters, u_tau: f64) -> f64 {
    params.height() * u_tau / params.nu()
}
