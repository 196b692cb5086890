// crates/yp_physics/src/shear.rs

//! 剪切输入解析链
//!
//! 模式 C 允许用户给出壁面剪应力 τw 或摩擦速度 u_τ。按
//! [`SHEAR_RESOLUTION_ORDER`] 依次尝试，每一步要么得到结果，要么记录跳过原因
//! 并进入下一步；全部失败时返回 [`YpError::MissingShearInput`]。

use crate::correlation::{friction_velocity_from_shear, wall_shear_from_friction_velocity};
use serde::{Deserialize, Serialize};
use yp_foundation::validation::parse_field;
use yp_foundation::{ShearAttemptFailure, SkipReason, YpError, YpResult};

/// τw 的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShearSource {
    /// 用户直接给出 τw
    Supplied,
    /// 由 u_τ 反算 τw
    Derived,
}

/// 单次解析尝试
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShearAttempt {
    /// 使用壁面剪应力 τw
    WallShearStress,
    /// 使用摩擦速度 u_τ
    FrictionVelocity,
}

/// 解析优先级：τw 优先，u_τ 回退
pub const SHEAR_RESOLUTION_ORDER: [ShearAttempt; 2] =
    [ShearAttempt::WallShearStress, ShearAttempt::FrictionVelocity];

/// 已解析的剪切量
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedShear {
    /// 壁面剪应力 [Pa]
    pub tau_w: f64,
    /// 摩擦速度 [m/s]
    pub u_tau: f64,
    /// τw 来源
    pub source: ShearSource,
}

/// 模式 C 的原始剪切输入
#[derive(Debug, Clone, Copy, Default)]
pub struct ShearInputs<'a> {
    /// τw 原始文本
    pub tau_w: Option<&'a str>,
    /// u_τ 原始文本
    pub u_tau: Option<&'a str>,
}

impl ShearAttempt {
    /// 尝试对应的字段名
    pub fn field(&self) -> &'static str {
        match self {
            Self::WallShearStress => "tau_w",
            Self::FrictionVelocity => "u_tau",
        }
    }

    /// 选取本次尝试所用的原始文本
    fn raw<'a>(&self, inputs: &ShearInputs<'a>) -> Option<&'a str> {
        match self {
            Self::WallShearStress => inputs.tau_w,
            Self::FrictionVelocity => inputs.u_tau,
        }
    }

    /// 执行单次尝试
    pub fn resolve(
        &self,
        inputs: &ShearInputs<'_>,
        rho: f64,
    ) -> Result<ResolvedShear, ShearAttemptFailure> {
        let field = self.field();
        let fail = |reason| ShearAttemptFailure { field, reason };

        let raw = self.raw(inputs).ok_or_else(|| fail(SkipReason::Missing))?;
        let value = parse_field(field, raw).map_err(|_| {
            fail(SkipReason::Unparseable {
                raw: raw.to_owned(),
            })
        })?;
        if value <= 0.0 {
            return Err(fail(SkipReason::NonPositive { value }));
        }

        Ok(match self {
            Self::WallShearStress => ResolvedShear {
                tau_w: value,
                u_tau: friction_velocity_from_shear(value, rho),
                source: ShearSource::Supplied,
            },
            Self::FrictionVelocity => ResolvedShear {
                tau_w: wall_shear_from_friction_velocity(value, rho),
                u_tau: value,
                source: ShearSource::Derived,
            },
        })
    }
}

/// 按优先级解析剪切输入
pub fn resolve_shear(inputs: &ShearInputs<'_>, rho: f64) -> YpResult<ResolvedShear> {
    let mut failures = Vec::with_capacity(SHEAR_RESOLUTION_ORDER.len());
    for attempt in SHEAR_RESOLUTION_ORDER {
        match attempt.resolve(inputs, rho) {
            Ok(resolved) => return Ok(resolved),
            Err(failure) => failures.push(failure),
        }
    }
    Err(YpError::missing_shear(failures))
}
