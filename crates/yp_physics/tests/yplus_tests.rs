// crates/yp_physics/tests/yplus_tests.rs
//!
//! y⁺ 计算核心测试
//!
//! 覆盖三种模式的基准算例、流态分界、剪切回退链、分级边界与幂等性。

use yp_foundation::{ErrorKind, YpError};
use yp_physics::{
    calculate, classify, compute, compute_blasius, compute_direct_cf,
    compute_direct_tau_or_utau, validate_common, CalculationResult, FlowParameters, FlowRegime,
    MeshCategory, ModeInputs, ModeKind, RawFlowInputs, ShearSource, TRANSITION_REYNOLDS,
};

fn rel_close(actual: f64, expected: f64, rtol: f64) -> bool {
    ((actual - expected) / expected).abs() < rtol
}

/// 空气 20°C，U=10 m/s，y=1e-6 m，L=1 m
fn air_20c() -> FlowParameters {
    FlowParameters::new(1.204, 1.810e-5, 10.0, 1e-6, 1.0).unwrap()
}

fn air_20c_raw() -> RawFlowInputs {
    RawFlowInputs::new("1.204", "1.810e-5", "10.0", "1e-6", "1.0")
}

// ============================================================
// 基准算例
// ============================================================

#[test]
fn test_golden_blasius_air() {
    let r = compute_blasius(&air_20c()).unwrap();

    assert_eq!(r.mode(), ModeKind::Blasius);
    assert!(rel_close(r.nu(), 1.503_322_259_136_212_6e-5, 1e-12));
    assert!(rel_close(r.re_x().unwrap(), 665_193.370_165_745_8, 1e-12));
    assert_eq!(r.regime(), Some(FlowRegime::Turbulent));
    assert!(rel_close(r.cf().unwrap(), 4.829_950_736_477_887e-3, 1e-10));
    assert!(rel_close(r.u_tau(), 0.491_423_988_856_765_4, 1e-10));
    assert!(rel_close(r.y_plus(), 0.032_689_197_932_792_576, 1e-10));
    assert_eq!(r.category(), MeshCategory::FullyResolved);

    // τw = ρu_τ²
    assert!(rel_close(r.tau_w(), 1.204 * r.u_tau() * r.u_tau(), 1e-14));
    assert_eq!(r.shear_source(), None);
}

#[test]
fn test_golden_direct_cf() {
    let r = compute_direct_cf(&air_20c(), 0.01).unwrap();

    assert_eq!(r.mode(), ModeKind::DirectCf);
    assert_eq!(r.re_x(), None);
    assert_eq!(r.cf(), Some(0.01));
    assert!((r.u_tau() - 0.707_11).abs() < 1e-5);
    assert!((r.y_plus() - 0.047_03).abs() < 1e-5);
    assert_eq!(r.category(), MeshCategory::FullyResolved);
}

#[test]
fn test_golden_direct_shear_fallback() {
    let r = compute_direct_tau_or_utau(&air_20c(), Some("abc"), Some("0.5")).unwrap();

    assert_eq!(r.shear_source(), Some(ShearSource::Derived));
    assert_eq!(r.u_tau(), 0.5);
    assert!((r.tau_w() - 0.301).abs() < 1e-12);
    assert!((r.y_plus() - 0.033_27).abs() < 1e-4);
    assert!(rel_close(r.y_plus(), 0.033_259_668_508_287_29, 1e-12));
    assert_eq!(r.category(), MeshCategory::FullyResolved);
}

#[test]
fn test_direct_shear_primary_path() {
    let r = compute_direct_tau_or_utau(&air_20c(), Some("0.1"), Some("not a number")).unwrap();

    assert_eq!(r.shear_source(), Some(ShearSource::Supplied));
    assert_eq!(r.tau_w(), 0.1);
    assert!(rel_close(r.u_tau(), (0.1_f64 / 1.204).sqrt(), 1e-14));
    assert!(rel_close(r.y_plus(), 1e-6 * r.u_tau() / r.nu(), 1e-14));
}

#[test]
fn test_direct_shear_neither_usable() {
    let err = compute_direct_tau_or_utau(&air_20c(), Some("abc"), Some("-1")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingShearInput);

    let err = compute_direct_tau_or_utau(&air_20c(), None, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingShearInput);
}

// ============================================================
// 层流/湍流分界
// ============================================================

#[test]
fn test_blasius_transition_boundary() {
    // ρ = μ = U = 1，Re_x 即 L
    let at = FlowParameters::new(1.0, 1.0, 1.0, 1e-3, TRANSITION_REYNOLDS).unwrap();
    let below = FlowParameters::new(1.0, 1.0, 1.0, 1e-3, 499_999.0).unwrap();

    let r_at = compute_blasius(&at).unwrap();
    assert_eq!(r_at.re_x(), Some(5.0e5));
    assert_eq!(r_at.regime(), Some(FlowRegime::Turbulent));
    let expected = 0.455 / 5.0e5_f64.log10().powf(2.58);
    assert!(rel_close(r_at.cf().unwrap(), expected, 1e-14));

    let r_below = compute_blasius(&below).unwrap();
    assert_eq!(r_below.regime(), Some(FlowRegime::Laminar));
    let expected = 0.664 / 499_999.0_f64.sqrt();
    assert!(rel_close(r_below.cf().unwrap(), expected, 1e-14));
}

#[test]
fn test_blasius_laminar_narrative_uses_laminar_formula() {
    let p = FlowParameters::new(1.204, 1.810e-5, 10.0, 1e-6, 0.1).unwrap();
    let r = compute_blasius(&p).unwrap();
    assert_eq!(r.regime(), Some(FlowRegime::Laminar));
    assert!(r.narrative().contains("C_f = 0.664 / √Re_x"));
    assert!(!r.narrative().contains("0.455"));
}

// ============================================================
// 分级边界
// ============================================================

#[test]
fn test_classify_boundaries() {
    let cases = [
        (0.999_999, MeshCategory::FullyResolved),
        (1.0, MeshCategory::StandardResolved),
        (5.0, MeshCategory::StandardResolved),
        (5.000_001, MeshCategory::BufferZone),
        (30.0, MeshCategory::BufferZone),
        (300.0, MeshCategory::WallFunctionRange),
        (300.000_001, MeshCategory::TooCoarse),
    ];
    for (y_plus, expected) in cases {
        assert_eq!(classify(y_plus), expected, "y+ = {y_plus}");
    }
}

#[test]
fn test_buffer_zone_message_in_every_mode() {
    // u_τ ≈ 0.7071，y=2e-4 → y⁺ ≈ 9.4
    let p = FlowParameters::new(1.204, 1.810e-5, 10.0, 2e-4, 1.0).unwrap();
    let b = compute_direct_cf(&p, 0.01).unwrap();
    assert_eq!(b.category(), MeshCategory::BufferZone);
    assert!(b.narrative().contains("介于两种方法之间"));

    let c = compute_direct_tau_or_utau(&p, None, Some("0.7071")).unwrap();
    assert_eq!(c.category(), MeshCategory::BufferZone);
    assert!(c.narrative().contains("介于两种方法之间"));
}

// ============================================================
// 验证与错误
// ============================================================

#[test]
fn test_invalid_common_inputs_abort() {
    let mut raw = air_20c_raw();
    raw.velocity = "-10".into();
    raw.height = "0".into();
    let err = calculate(&raw, &ModeInputs::Blasius).unwrap_err();
    match err {
        YpError::Range { violations } => {
            let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
            assert!(fields.contains(&"velocity"));
            assert!(fields.contains(&"height"));
        }
        other => panic!("unexpected: {other:?}"),
    }

    let mut raw = air_20c_raw();
    raw.rho = "1.2.0".into();
    let err = calculate(&raw, &ModeInputs::direct_cf("0.01")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_mode_specific_fields_only_checked_when_active() {
    // 模式 A 不读取 Cf / τw / u_τ
    let r = calculate(&air_20c_raw(), &ModeInputs::Blasius).unwrap();
    assert_eq!(r.mode(), ModeKind::Blasius);

    let err = calculate(&air_20c_raw(), &ModeInputs::direct_cf("-0.01")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}

// ============================================================
// 性质
// ============================================================

#[test]
fn test_y_plus_finite_and_non_negative() {
    let values = [1e-9, 1e-4, 0.5, 1.0, 7.3, 1e3, 1e6];
    for &rho in &values {
        for &mu in &values {
            for &u in &values {
                let p = FlowParameters::new(rho, mu, u, 1e-5, 0.7).unwrap();
                assert_eq!(p.nu(), mu / rho);
                let r = compute_blasius(&p).unwrap();
                assert!(r.y_plus().is_finite(), "rho={rho} mu={mu} u={u}");
                assert!(r.y_plus() >= 0.0);
            }
        }
    }
}

#[test]
fn test_extreme_magnitudes_never_yield_non_finite_y_plus() {
    // Re_x 上溢：ν = 1e-305 仍可表示，ρUL/μ 超出 f64
    let p = FlowParameters::new(1e300, 1e-5, 1e10, 1.0, 1e10).unwrap();
    let err = compute_blasius(&p).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert!(err.range_fields().contains(&"re_x"));

    // τw = ρu_τ² 与 y⁺ 同时上溢
    let p = FlowParameters::new(1.0, 1e-300, 1.0, 1e10, 1.0).unwrap();
    let err = compute_direct_tau_or_utau(&p, None, Some("1e300")).unwrap_err();
    assert_eq!(err.range_fields(), vec!["tau_w", "y_plus"]);

    // τw 下溢为 0
    let err = compute_direct_tau_or_utau(&air_20c(), None, Some("1e-200")).unwrap_err();
    assert_eq!(err.range_fields(), vec!["tau_w"]);

    // ν 本身超出范围时在参数验证阶段拒绝
    let err = FlowParameters::new(1e300, 1e-300, 1.0, 1.0, 1.0).unwrap_err();
    assert_eq!(err.range_fields(), vec!["nu"]);

    // 成功的结果总是有限且非负
    let extremes = [1e-150, 1e-30, 1.0, 1e30, 1e150];
    for &rho in &extremes {
        for &u in &extremes {
            for &y in &extremes {
                let Ok(p) = FlowParameters::new(rho, 1e-3, u, y, 1.0) else {
                    continue;
                };
                for mode in [
                    ModeInputs::Blasius,
                    ModeInputs::direct_cf("0.004"),
                    ModeInputs::direct_shear(Some("0.1"), None),
                ] {
                    if let Ok(r) = compute(&p, &mode) {
                        assert!(r.y_plus().is_finite() && r.y_plus() >= 0.0);
                        assert!(r.u_tau().is_finite() && r.tau_w().is_finite());
                    }
                }
            }
        }
    }
}

#[test]
fn test_idempotence() {
    let p = air_20c();
    let inputs = [
        ModeInputs::Blasius,
        ModeInputs::direct_cf("0.01"),
        ModeInputs::direct_shear(Some("0.1"), Some("0.5")),
        ModeInputs::direct_shear(Some("x"), Some("0.5")),
    ];
    for mode in &inputs {
        let a = compute(&p, mode).unwrap();
        let b = compute(&p, mode).unwrap();
        assert_eq!(a.y_plus().to_bits(), b.y_plus().to_bits());
        assert_eq!(a.u_tau().to_bits(), b.u_tau().to_bits());
        assert_eq!(a.tau_w().to_bits(), b.tau_w().to_bits());
        assert_eq!(a.cf().map(f64::to_bits), b.cf().map(f64::to_bits));
        assert_eq!(a.re_x().map(f64::to_bits), b.re_x().map(f64::to_bits));
        assert_eq!(a.narrative(), b.narrative());
        assert_eq!(a, b);
    }
}

#[test]
fn test_concurrent_calls() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CalculationResult>();
    assert_send_sync::<FlowParameters>();

    let baseline = compute_blasius(&air_20c()).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| compute_blasius(&air_20c()).unwrap()))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), baseline);
    }
}

// ============================================================
// 推导文本
// ============================================================

#[test]
fn test_narrative_sections() {
    let r = compute_blasius(&air_20c()).unwrap();
    let text = r.narrative();
    assert!(text.starts_with("计算结果（模式 A：Blasius 公式）"));
    assert!(text.contains("Re_x = ρ·U·L/μ = 6.6519e5（湍流）"));
    assert!(text.contains("【最终结果】"));
    assert!(text.contains("y⁺ = 0.032689"));
    assert!(text.contains("✓ 精确解析边界层（y⁺ < 1）"));

    let c = compute_direct_tau_or_utau(&air_20c(), None, Some("0.5")).unwrap();
    assert!(c.narrative().contains("对应剪应力 τ_w = u_τ²·ρ"));
    let c = compute_direct_tau_or_utau(&air_20c(), Some("0.1"), None).unwrap();
    assert!(c.narrative().contains("u_τ = √(τ_w/ρ)"));
}

#[test]
fn test_result_serializes() {
    let r = compute_direct_cf(&validate_common(&air_20c_raw()).unwrap(), 0.01).unwrap();
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["mode"], "direct_cf");
    assert_eq!(json["category"], "fully_resolved");
    assert!(json["re_x"].is_null());
    assert!(json["params"]["nu"].as_f64().is_some());
}
