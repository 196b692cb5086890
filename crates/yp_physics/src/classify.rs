// crates/yp_physics/src/classify.rs

//! 近壁网格质量分级
//!
//! | 范围 | 分级 |
//! |------|------|
//! | y⁺ < 1 | [`MeshCategory::FullyResolved`] |
//! | 1 ≤ y⁺ ≤ 5 | [`MeshCategory::StandardResolved`] |
//! | 5 < y⁺ ≤ 30 | [`MeshCategory::BufferZone`] |
//! | 30 < y⁺ ≤ 300 | [`MeshCategory::WallFunctionRange`] |
//! | y⁺ > 300 | [`MeshCategory::TooCoarse`] |

use serde::{Deserialize, Serialize};
use std::fmt;

/// 粘性底层上界（含）
pub const VISCOUS_SUBLAYER_MAX: f64 = 5.0;
/// 缓冲层上界（含）
pub const BUFFER_LAYER_MAX: f64 = 30.0;
/// 壁面函数适用上界（含）
pub const WALL_FUNCTION_MAX: f64 = 300.0;

/// 网格分级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshCategory {
    /// y⁺ < 1
    FullyResolved,
    /// 1 ≤ y⁺ ≤ 5
    StandardResolved,
    /// 5 < y⁺ ≤ 30
    BufferZone,
    /// 30 < y⁺ ≤ 300
    WallFunctionRange,
    /// y⁺ > 300
    TooCoarse,
}

impl MeshCategory {
    /// 由 y⁺ 判定分级
    pub fn from_y_plus(y_plus: f64) -> Self {
        if y_plus < 1.0 {
            Self::FullyResolved
        } else if y_plus <= VISCOUS_SUBLAYER_MAX {
            Self::StandardResolved
        } else if y_plus <= BUFFER_LAYER_MAX {
            Self::BufferZone
        } else if y_plus <= WALL_FUNCTION_MAX {
            Self::WallFunctionRange
        } else {
            Self::TooCoarse
        }
    }

    /// 区间描述
    pub fn range_label(&self) -> &'static str {
        match self {
            Self::FullyResolved => "y⁺ < 1",
            Self::StandardResolved => "1 ≤ y⁺ ≤ 5",
            Self::BufferZone => "5 < y⁺ ≤ 30",
            Self::WallFunctionRange => "30 < y⁺ ≤ 300",
            Self::TooCoarse => "y⁺ > 300",
        }
    }

    /// 评估标题
    pub fn headline(&self) -> &'static str {
        match self {
            Self::FullyResolved => "精确解析边界层",
            Self::StandardResolved => "标准精确解析范围",
            Self::BufferZone => "介于两种方法之间",
            Self::WallFunctionRange => "壁面函数适用范围",
            Self::TooCoarse => "过于粗糙的网格",
        }
    }

    /// 建议
    pub fn advice(&self) -> &'static str {
        match self {
            Self::FullyResolved => "适用于 LES/DNS，需要精细网格",
            Self::StandardResolved => "推荐用于精确的 RANS 模拟",
            Self::BufferZone => "不推荐，建议调整网格",
            Self::WallFunctionRange => "适用于壁面函数法 RANS",
            Self::TooCoarse => "需要更精细的边界层网格",
        }
    }

    /// 是否为推荐使用的范围
    pub fn is_recommended(&self) -> bool {
        !matches!(self, Self::BufferZone | Self::TooCoarse)
    }

    /// 报告中的状态符号
    pub fn marker(&self) -> &'static str {
        if self.is_recommended() {
            "✓"
        } else {
            "⚠"
        }
    }
}

impl fmt::Display for MeshCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}（{}）", self.headline(), self.range_label())
    }
}

/// 由 y⁺ 判定网格分级
#[inline]
pub fn classify(y_plus: f64) -> MeshCategory {
    MeshCategory::from_y_plus(y_plus)
}
