// crates/yp_physics/src/params.rs

//! 流动参数
//!
//! [`FlowParameters`] 是经过验证的通用输入：密度、动力粘度、来流速度、
//! 第一层网格高度与特征长度。运动粘度 ν = μ/ρ 只在构造时计算一次，
//! 之后所有公式都读取同一个值。

use serde::{Deserialize, Serialize};
use yp_foundation::validation::{ensure_positive, parse_field, ValidationReport};
use yp_foundation::YpResult;

/// 原始通用输入（文本形式）
///
/// 对应表单或请求文件中未经解析的五个字段。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFlowInputs {
    /// 密度 ρ [kg/m³]
    pub rho: String,
    /// 动力粘度 μ [Pa·s]
    pub mu: String,
    /// 来流速度 U [m/s]
    pub velocity: String,
    /// 第一层网格高度 y [m]
    pub height: String,
    /// 特征长度 L [m]
    pub length: String,
}

impl RawFlowInputs {
    /// 由文本字段构造
    pub fn new(
        rho: impl Into<String>,
        mu: impl Into<String>,
        velocity: impl Into<String>,
        height: impl Into<String>,
        length: impl Into<String>,
    ) -> Self {
        Self {
            rho: rho.into(),
            mu: mu.into(),
            velocity: velocity.into(),
            height: height.into(),
            length: length.into(),
        }
    }
}

/// 经过验证的流动参数
///
/// 构造成功即保证五个量及 ν 均为有限正数。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlowParameters {
    rho: f64,
    mu: f64,
    velocity: f64,
    height: f64,
    length: f64,
    nu: f64,
}

impl FlowParameters {
    /// 由数值构造并验证
    ///
    /// 五个字段一起检查，所有 ≤ 0 或非有限的字段在同一个范围错误中报告。
    pub fn new(rho: f64, mu: f64, velocity: f64, height: f64, length: f64) -> YpResult<Self> {
        let mut report = ValidationReport::new();
        report
            .require_positive("rho", rho)
            .require_positive("mu", mu)
            .require_positive("velocity", velocity)
            .require_positive("height", height)
            .require_positive("length", length);
        report.into_result()?;

        let nu = ensure_positive("nu", mu / rho)?;
        Ok(Self {
            rho,
            mu,
            velocity,
            height,
            length,
            nu,
        })
    }

    /// 由原始文本解析并验证
    ///
    /// 按 ρ, μ, U, y, L 的顺序解析，报告第一个无法解析的字段；
    /// 全部解析成功后再统一做正值检查。
    pub fn parse(raw: &RawFlowInputs) -> YpResult<Self> {
        let rho = parse_field("rho", &raw.rho)?;
        let mu = parse_field("mu", &raw.mu)?;
        let velocity = parse_field("velocity", &raw.velocity)?;
        let height = parse_field("height", &raw.height)?;
        let length = parse_field("length", &raw.length)?;
        Self::new(rho, mu, velocity, height, length)
    }

    /// 密度 ρ [kg/m³]
    #[inline]
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// 动力粘度 μ [Pa·s]
    #[inline]
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// 来流速度 U [m/s]
    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// 第一层网格高度 y [m]
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// 特征长度 L [m]
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// 运动粘度 ν = μ/ρ [m²/s]
    #[inline]
    pub fn nu(&self) -> f64 {
        self.nu
    }
}

/// 解析并验证通用输入
pub fn validate_common(raw: &RawFlowInputs) -> YpResult<FlowParameters> {
    FlowParameters::parse(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yp_foundation::{ErrorKind, YpError};

    fn air() -> RawFlowInputs {
        RawFlowInputs::new("1.204", "1.810e-5", "10.0", "1e-6", "1.0")
    }

    #[test]
    fn test_kinematic_viscosity() {
        let p = validate_common(&air()).unwrap();
        assert_eq!(p.nu(), 1.810e-5 / 1.204);
        assert!((p.nu() - 1.5033e-5).abs() < 1e-9);
    }

    #[test]
    fn test_parse_error_reports_first_bad_field() {
        let mut raw = air();
        raw.mu = "abc".into();
        raw.length = "xyz".into();
        match validate_common(&raw) {
            Err(YpError::Parse { field, .. }) => assert_eq!(field, "mu"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_range_error_reports_all_fields() {
        let raw = RawFlowInputs::new("0", "1.8e-5", "-10", "1e-6", "0.0");
        let err = validate_common(&raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.range_fields(), vec!["rho", "velocity", "length"]);
    }

    #[test]
    fn test_parse_precedes_range_check() {
        let raw = RawFlowInputs::new("-1", "1.8e-5", "10", "oops", "1");
        assert_eq!(validate_common(&raw).unwrap_err().kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_numeric_constructor() {
        assert!(FlowParameters::new(998.2, 1.002e-3, 1.0, 1e-5, 2.0).is_ok());
        assert!(FlowParameters::new(998.2, 0.0, 1.0, 1e-5, 2.0).is_err());
    }

    #[test]
    fn test_viscosity_out_of_float_range() {
        // μ/ρ 下溢为 0 或上溢为 inf
        for (rho, mu) in [(1e300, 1e-300), (1e-300, 1e300)] {
            let err = FlowParameters::new(rho, mu, 1.0, 1.0, 1.0).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Range);
            assert_eq!(err.range_fields(), vec!["nu"]);
        }
    }
}
