// crates/yp_foundation/src/error.rs

//! 错误处理模块，定义统一错误类型
//!
//! 提供 `YpError` 枚举和 `YpResult` 类型别名，供计算核心及上层使用。
//!
//! # 错误分类
//!
//! | 变体 | 含义 |
//! |------|------|
//! | [`YpError::Parse`] | 字段不是有效数值 |
//! | [`YpError::Range`] | 必须为正的字段 ≤ 0 |
//! | [`YpError::MissingShearInput`] | τw 与 u_τ 均无可用正值 |
//! | [`YpError::ModeSelection`] | 无法识别的计算模式 |
//!
//! # 示例
//!
//! ```
//! use yp_foundation::error::{ErrorKind, YpError, YpResult};
//!
//! fn check(rho: f64) -> YpResult<f64> {
//!     if rho <= 0.0 {
//!         return Err(YpError::range("rho", rho));
//!     }
//!     Ok(rho)
//! }
//!
//! assert_eq!(check(-1.0).unwrap_err().kind(), ErrorKind::Range);
//! ```

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// 统一结果类型
pub type YpResult<T> = Result<T, YpError>;

/// YPlus 错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum YpError {
    /// 字段无法解析为有限数值
    #[error("输入值无效: {field} = {raw:?} 不是有效数值")]
    Parse {
        /// 字段名
        field: &'static str,
        /// 原始输入文本
        raw: String,
    },

    /// 必须为正数的字段 ≤ 0
    #[error("参数必须为正数: {}", join_violations(.violations))]
    Range {
        /// 全部越界字段
        violations: Vec<RangeViolation>,
    },

    /// 剪应力与摩擦速度均无法使用
    #[error("请输入有效的 τw 或 u_τ 值: {}", join_failures(.attempts))]
    MissingShearInput {
        /// 按优先级记录的每次解析尝试失败原因
        attempts: Vec<ShearAttemptFailure>,
    },

    /// 计算模式无法识别
    #[error("模式选择错误: 未知模式 {0:?}")]
    ModeSelection(String),
}

/// 错误大类，便于调用方按类别匹配
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// 解析错误
    Parse,
    /// 范围错误
    Range,
    /// 缺少剪切输入
    MissingShearInput,
    /// 模式选择错误
    ModeSelection,
}

/// 单个越界字段
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeViolation {
    /// 字段名
    pub field: &'static str,
    /// 实际值
    pub value: f64,
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} (期望 > 0)", self.field, self.value)
    }
}

/// 剪切输入某次解析尝试被跳过的原因
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// 未提供
    Missing,
    /// 无法解析
    Unparseable {
        /// 原始文本
        raw: String,
    },
    /// 非正值
    NonPositive {
        /// 解析得到的值
        value: f64,
    },
}

/// 剪切输入解析尝试失败记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShearAttemptFailure {
    /// 尝试的字段
    pub field: &'static str,
    /// 失败原因
    pub reason: SkipReason,
}

impl fmt::Display for ShearAttemptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            SkipReason::Missing => write!(f, "{} 未提供", self.field),
            SkipReason::Unparseable { raw } => write!(f, "{} = {:?} 无法解析", self.field, raw),
            SkipReason::NonPositive { value } => write!(f, "{} = {} 不是正数", self.field, value),
        }
    }
}

fn join_violations(violations: &[RangeViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_failures(attempts: &[ShearAttemptFailure]) -> String {
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// ========================================================================
// 便捷构造方法
// ========================================================================

impl YpError {
    /// 解析错误
    pub fn parse(field: &'static str, raw: impl Into<String>) -> Self {
        Self::Parse {
            field,
            raw: raw.into(),
        }
    }

    /// 单字段范围错误
    pub fn range(field: &'static str, value: f64) -> Self {
        Self::Range {
            violations: vec![RangeViolation { field, value }],
        }
    }

    /// 多字段范围错误
    pub fn range_set(violations: Vec<RangeViolation>) -> Self {
        Self::Range { violations }
    }

    /// 缺少剪切输入
    pub fn missing_shear(attempts: Vec<ShearAttemptFailure>) -> Self {
        Self::MissingShearInput { attempts }
    }

    /// 模式选择错误
    pub fn mode_selection(name: impl Into<String>) -> Self {
        Self::ModeSelection(name.into())
    }

    /// 错误大类
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Range { .. } => ErrorKind::Range,
            Self::MissingShearInput { .. } => ErrorKind::MissingShearInput,
            Self::ModeSelection(_) => ErrorKind::ModeSelection,
        }
    }

    /// 范围错误涉及的字段名（其他错误返回空）
    pub fn range_fields(&self) -> Vec<&'static str> {
        match self {
            Self::Range { violations } => violations.iter().map(|v| v.field).collect(),
            _ => Vec::new(),
        }
    }
}
