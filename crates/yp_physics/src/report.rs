// crates/yp_physics/src/report.rs

//! 推导文本生成
//!
//! 按模式输出编号的计算步骤、最终 y⁺ 和网格评估。三种模式的评估段落
//! 使用同一套分级文本。

use crate::mode::ModeKind;
use crate::result::CalculationResult;
use crate::shear::ShearSource;
use std::fmt;

const RULE: &str = "═══════════════════════════════════════════";

/// 生成推导文本
pub(crate) fn render(result: &CalculationResult) -> String {
    Derivation(result).to_string()
}

struct Derivation<'a>(&'a CalculationResult);

impl fmt::Display for Derivation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        let p = r.params();

        writeln!(f, "计算结果（{}）", r.mode().title())?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "【计算步骤】")?;
        writeln!(f)?;

        writeln!(f, "1. 流动参数：")?;
        writeln!(f, "   - 密度 ρ = {:.4} kg/m³", p.rho())?;
        writeln!(f, "   - 动力粘度 μ = {:.4e} Pa·s", p.mu())?;
        writeln!(f, "   - 运动粘度 ν = {:.4e} m²/s", p.nu())?;
        writeln!(f, "   - 流速 U = {:.4} m/s", p.velocity())?;
        writeln!(f, "   - 第一层高度 y = {:.4e} m", p.height())?;
        if r.mode() == ModeKind::Blasius {
            writeln!(f, "   - 特征长度 L = {:.4} m", p.length())?;
        }
        writeln!(f)?;

        let mut step = 2;
        match r.mode() {
            ModeKind::Blasius => {
                if let (Some(re_x), Some(regime), Some(cf)) = (r.re_x(), r.regime(), r.cf()) {
                    writeln!(f, "{step}. 雷诺数：")?;
                    writeln!(f, "   Re_x = ρ·U·L/μ = {re_x:.4e}（{}）", regime.label())?;
                    writeln!(f)?;
                    step += 1;

                    writeln!(f, "{step}. 摩擦系数（Blasius-Schlichting）：")?;
                    writeln!(f, "   {}", regime.formula())?;
                    writeln!(f, "   C_f = {cf:.6e}")?;
                    writeln!(f)?;
                    step += 1;
                }
                write_friction_velocity(f, step, r)?;
                step += 1;
            }
            ModeKind::DirectCf => {
                if let Some(cf) = r.cf() {
                    writeln!(f, "{step}. 摩擦系数（输入值）：")?;
                    writeln!(f, "   C_f = {cf:.6e}")?;
                    writeln!(f)?;
                    step += 1;
                }
                write_friction_velocity(f, step, r)?;
                step += 1;
            }
            ModeKind::DirectShear => {
                writeln!(f, "{step}. 摩擦参数：")?;
                match r.shear_source() {
                    Some(ShearSource::Derived) => {
                        writeln!(f, "   - 摩擦速度 u_τ = {:.6} m/s", r.u_tau())?;
                        writeln!(f, "   - 对应剪应力 τ_w = u_τ²·ρ = {:.6e} Pa", r.tau_w())?;
                    }
                    _ => {
                        writeln!(f, "   - 剪应力 τ_w = {:.6e} Pa", r.tau_w())?;
                        writeln!(f, "   - 摩擦速度 u_τ = √(τ_w/ρ) = {:.6} m/s", r.u_tau())?;
                    }
                }
                writeln!(f)?;
                step += 1;
            }
        }

        writeln!(f, "{step}. y+ 计算：")?;
        writeln!(f, "   y⁺ = y · u_τ / ν = {:.6}", r.y_plus())?;
        writeln!(f)?;

        writeln!(f, "{RULE}")?;
        writeln!(f, "【最终结果】")?;
        writeln!(f, "y⁺ = {:.6}", r.y_plus())?;
        writeln!(f)?;

        let category = r.category();
        writeln!(f, "【网格评估】")?;
        writeln!(
            f,
            "{} {}（{}）",
            category.marker(),
            category.headline(),
            category.range_label()
        )?;
        write!(f, "   {}", category.advice())
    }
}

fn write_friction_velocity(
    f: &mut fmt::Formatter<'_>,
    step: usize,
    r: &CalculationResult,
) -> fmt::Result {
    writeln!(f, "{step}. 摩擦速度：")?;
    writeln!(f, "   u_τ = √(C_f/2) · U = {:.6} m/s", r.u_tau())?;
    writeln!(f)
}
