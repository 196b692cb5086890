// crates/yp_physics/src/mode.rs

//! 计算模式
//!
//! 三种模式互斥：
//!
//! | 模式 | 额外输入 | 摩擦速度来源 |
//! |------|----------|--------------|
//! | A: Blasius | 无 | Re_x 经验公式估算 Cf |
//! | B: DirectCf | Cf | 直接给定 Cf |
//! | C: DirectShear | τw 和/或 u_τ | 剪应力或摩擦速度，带回退 |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use yp_foundation::YpError;

/// 计算模式标识（不带数据）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeKind {
    /// 模式 A：Blasius 公式
    Blasius,
    /// 模式 B：直接输入 Cf
    DirectCf,
    /// 模式 C：直接输入 τw 或 u_τ
    DirectShear,
}

impl ModeKind {
    /// 全部模式
    pub const ALL: [ModeKind; 3] = [Self::Blasius, Self::DirectCf, Self::DirectShear];

    /// 报告标题中的模式名
    pub fn title(&self) -> &'static str {
        match self {
            Self::Blasius => "模式 A：Blasius 公式",
            Self::DirectCf => "模式 B：直接输入摩擦系数",
            Self::DirectShear => "模式 C：直接输入剪应力或摩擦速度",
        }
    }

    /// 导出时使用的短名称
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Blasius => "Blasius 公式",
            Self::DirectCf => "直接输入 Cf",
            Self::DirectShear => "直接输入 τw/u_τ",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for ModeKind {
    type Err = YpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "blasius" => Ok(Self::Blasius),
            "b" | "cf" | "direct-cf" | "direct_cf" => Ok(Self::DirectCf),
            "c" | "tau" | "shear" | "direct-shear" | "direct_shear" => Ok(Self::DirectShear),
            _ => Err(YpError::mode_selection(s)),
        }
    }
}

/// 模式输入
///
/// 每个变体只携带其公式需要的原始字段，解析推迟到计算时进行。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeInputs {
    /// 模式 A 无额外输入
    Blasius,
    /// 模式 B：摩擦系数文本
    DirectCf {
        /// Cf 原始文本
        cf: String,
    },
    /// 模式 C：剪应力与摩擦速度文本，至少一个可用
    DirectShear {
        /// τw 原始文本 [Pa]
        tau_w: Option<String>,
        /// u_τ 原始文本 [m/s]
        u_tau: Option<String>,
    },
}

impl ModeInputs {
    /// 对应的模式标识
    pub fn kind(&self) -> ModeKind {
        match self {
            Self::Blasius => ModeKind::Blasius,
            Self::DirectCf { .. } => ModeKind::DirectCf,
            Self::DirectShear { .. } => ModeKind::DirectShear,
        }
    }

    /// 模式 B 输入
    pub fn direct_cf(cf: impl Into<String>) -> Self {
        Self::DirectCf { cf: cf.into() }
    }

    /// 模式 C 输入
    pub fn direct_shear(tau_w: Option<&str>, u_tau: Option<&str>) -> Self {
        Self::DirectShear {
            tau_w: tau_w.map(str::to_owned),
            u_tau: u_tau.map(str::to_owned),
        }
    }
}
