// crates/yp_config/src/request.rs

//! 计算请求文件
//!
//! 以 JSON 描述一次计算。数值字段既可写成 JSON 数字，也可写成字符串；
//! 字符串原样交给计算核心解析，以便报告准确的解析错误。
//!
//! ```json
//! {
//!   "fluid": "water-20c",
//!   "velocity": 2.0,
//!   "height": "5e-5",
//!   "length": 0.5,
//!   "mode": { "kind": "direct_shear", "tau_w": "abc", "u_tau": 0.05 }
//! }
//! ```
//!
//! 显式给出的 `rho` / `mu` 覆盖流体预设中的对应值。

use crate::error::ConfigError;
use crate::fluids::FluidTable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use yp_foundation::validation::{ensure_positive, parse_field};
use yp_physics::shear::{resolve_shear, ShearInputs};
use yp_physics::{validate_common, FlowParameters, ModeInputs, ModeKind, RawFlowInputs};

/// 数字或文本形式的原始数值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    /// JSON 数字
    Number(f64),
    /// 文本
    Text(String),
}

impl RawNumber {
    /// 交给计算核心的文本
    pub fn to_raw(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RawNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for RawNumber {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for RawNumber {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

fn default_velocity() -> RawNumber {
    RawNumber::Number(10.0)
}

fn default_height() -> RawNumber {
    RawNumber::Number(1e-6)
}

fn default_length() -> RawNumber {
    RawNumber::Number(1.0)
}

fn default_cf() -> RawNumber {
    RawNumber::Number(0.01)
}

/// 模式配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModeConfig {
    /// 模式 A
    #[default]
    Blasius,
    /// 模式 B
    DirectCf {
        /// 摩擦系数
        #[serde(default = "default_cf")]
        cf: RawNumber,
    },
    /// 模式 C，未给出的字段视为缺失
    DirectShear {
        /// 壁面剪应力 [Pa]
        #[serde(default)]
        tau_w: Option<RawNumber>,
        /// 摩擦速度 [m/s]
        #[serde(default)]
        u_tau: Option<RawNumber>,
    },
}

impl ModeConfig {
    /// 指定模式的缺省配置
    pub fn for_kind(kind: ModeKind) -> Self {
        match kind {
            ModeKind::Blasius => Self::Blasius,
            ModeKind::DirectCf => Self::DirectCf { cf: default_cf() },
            ModeKind::DirectShear => Self::DirectShear {
                tau_w: None,
                u_tau: None,
            },
        }
    }

    /// 模式标识
    pub fn kind(&self) -> ModeKind {
        match self {
            Self::Blasius => ModeKind::Blasius,
            Self::DirectCf { .. } => ModeKind::DirectCf,
            Self::DirectShear { .. } => ModeKind::DirectShear,
        }
    }

    /// 转换为核心模式输入
    pub fn to_inputs(&self) -> ModeInputs {
        match self {
            Self::Blasius => ModeInputs::Blasius,
            Self::DirectCf { cf } => ModeInputs::DirectCf { cf: cf.to_raw() },
            Self::DirectShear { tau_w, u_tau } => ModeInputs::DirectShear {
                tau_w: tau_w.as_ref().map(RawNumber::to_raw),
                u_tau: u_tau.as_ref().map(RawNumber::to_raw),
            },
        }
    }
}

/// 计算请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// 流体预设（键或显示名称），缺省使用预设表默认项
    #[serde(default)]
    pub fluid: Option<String>,

    /// 密度 ρ，覆盖预设
    #[serde(default)]
    pub rho: Option<RawNumber>,

    /// 动力粘度 μ，覆盖预设
    #[serde(default)]
    pub mu: Option<RawNumber>,

    /// 流速 U [m/s]
    #[serde(default = "default_velocity")]
    pub velocity: RawNumber,

    /// 第一层高度 y [m]
    #[serde(default = "default_height")]
    pub height: RawNumber,

    /// 特征长度 L [m]
    #[serde(default = "default_length")]
    pub length: RawNumber,

    /// 计算模式
    #[serde(default)]
    pub mode: ModeConfig,
}

impl Default for CalculationRequest {
    fn default() -> Self {
        Self {
            fluid: None,
            rho: None,
            mu: None,
            velocity: default_velocity(),
            height: default_height(),
            length: default_length(),
            mode: ModeConfig::default(),
        }
    }
}

impl CalculationRequest {
    /// 从 JSON 文本加载
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// 从文件加载
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// 解析为核心输入
    ///
    /// 只有在 ρ 或 μ 未显式给出时才查找流体预设。
    pub fn resolve(&self, fluids: &FluidTable) -> Result<(RawFlowInputs, ModeInputs), ConfigError> {
        let (rho, mu) = match (&self.rho, &self.mu) {
            (Some(rho), Some(mu)) => (rho.to_raw(), mu.to_raw()),
            (rho, mu) => {
                let preset = match &self.fluid {
                    Some(name) => fluids.lookup(name)?,
                    None => fluids.default_preset(),
                };
                log::debug!("使用流体预设: {} (ρ={}, μ={})", preset.name, preset.rho, preset.mu);
                (
                    rho.as_ref().map_or_else(|| preset.rho.to_string(), RawNumber::to_raw),
                    mu.as_ref().map_or_else(|| preset.mu.to_string(), RawNumber::to_raw),
                )
            }
        };

        let raw = RawFlowInputs {
            rho,
            mu,
            velocity: self.velocity.to_raw(),
            height: self.height.to_raw(),
            length: self.length.to_raw(),
        };
        Ok((raw, self.mode.to_inputs()))
    }

    /// 验证请求但不计算 y⁺
    ///
    /// 依次检查预设、通用参数，以及当前模式的专用字段。
    pub fn check(&self, fluids: &FluidTable) -> Result<FlowParameters, ConfigError> {
        let (raw, inputs) = self.resolve(fluids)?;
        let params = validate_common(&raw)?;
        match &inputs {
            ModeInputs::Blasius => {}
            ModeInputs::DirectCf { cf } => {
                ensure_positive("cf", parse_field("cf", cf)?)?;
            }
            ModeInputs::DirectShear { tau_w, u_tau } => {
                let shear = ShearInputs {
                    tau_w: tau_w.as_deref(),
                    u_tau: u_tau.as_deref(),
                };
                resolve_shear(&shear, params.rho())?;
            }
        }
        Ok(params)
    }
}
