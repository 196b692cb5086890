// crates/yp_foundation/src/validation.rs

//! 运行时验证工具
//!
//! 提供数值字段解析与正值检查。正值检查通过 [`ValidationReport`]
//! 收集全部越界字段后一次性报告，而不是遇到第一个就返回。
//!
//! # 示例
//!
//! ```
//! use yp_foundation::validation::{parse_field, ValidationReport};
//!
//! let rho = parse_field("rho", " 1.204 ").unwrap();
//! let mut report = ValidationReport::new();
//! report.require_positive("rho", rho);
//! report.require_positive("mu", 0.0);
//! assert!(report.into_result().is_err());
//! ```

use crate::error::{RangeViolation, YpError, YpResult};

/// 解析单个数值字段
///
/// 去除首尾空白后按 `f64` 解析；空串、非数字文本以及 `NaN`/`inf` 均视为解析失败。
pub fn parse_field(field: &'static str, raw: &str) -> YpResult<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(YpError::parse(field, raw)),
    }
}

/// 检查单个值是否为有限正数
pub fn ensure_positive(field: &'static str, value: f64) -> YpResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(YpError::range(field, value))
    }
}

/// 验证报告
///
/// 收集所有越界字段，供一次性返回 [`YpError::Range`]。
#[derive(Debug, Default, Clone)]
pub struct ValidationReport {
    /// 越界字段列表
    pub violations: Vec<RangeViolation>,
}

impl ValidationReport {
    /// 创建空的验证报告
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录必须为正的字段
    pub fn require_positive(&mut self, field: &'static str, value: f64) -> &mut Self {
        if !(value.is_finite() && value > 0.0) {
            self.violations.push(RangeViolation { field, value });
        }
        self
    }

    /// 是否有错误
    pub fn has_errors(&self) -> bool {
        !self.violations.is_empty()
    }

    /// 转换为结果：无错误时 `Ok(())`，否则返回包含全部字段的范围错误
    pub fn into_result(self) -> YpResult<()> {
        if self.has_errors() {
            Err(YpError::range_set(self.violations))
        } else {
            Ok(())
        }
    }
}
