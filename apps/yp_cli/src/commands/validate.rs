// apps/yp_cli/src/commands/validate.rs

//! 计算请求验证命令
//!
//! 检查请求文件的格式、流体预设、通用参数与当前模式的专用字段，不计算 y⁺。

use super::load_fluids;
use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::{error, info};
use yp_config::{CalculationRequest, ConfigError};
use yp_foundation::YpError;

/// 验证参数
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// 计算请求文件（JSON）
    #[arg(short, long)]
    pub request: PathBuf,

    /// 自定义流体预设表（JSON）
    #[arg(long)]
    pub table: Option<PathBuf>,
}

/// 执行验证命令
pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("验证计算请求: {}", args.request.display());
    println!("检查计算请求: {}", args.request.display());

    let fluids = load_fluids(args.table.as_deref())?;
    let request = CalculationRequest::from_file(&args.request)
        .with_context(|| format!("无法加载计算请求: {}", args.request.display()))?;
    println!("  ✓ 请求格式有效（{}）", request.mode.kind().title());

    match request.check(&fluids) {
        Ok(params) => {
            println!("  ✓ ν = μ/ρ = {:.6e} m²/s", params.nu());
            println!("\n✓ 验证通过");
            Ok(())
        }
        Err(err) => {
            let problems = describe(&err);
            println!("\n错误 ({}):", problems.len());
            for p in &problems {
                error!("{}", p);
                println!("  ✗ {}", p);
            }
            println!("\n✗ 验证失败");
            bail!("验证失败：发现 {} 个错误", problems.len())
        }
    }
}

/// 将错误展开为逐条说明
fn describe(err: &ConfigError) -> Vec<String> {
    match err {
        ConfigError::Core(YpError::Range { violations }) => {
            violations.iter().map(|v| format!("取值越界: {v}")).collect()
        }
        ConfigError::Core(YpError::MissingShearInput { attempts }) => {
            let mut lines = vec!["τw 与 u_τ 均不可用".to_string()];
            lines.extend(attempts.iter().map(|a| format!("  {a}")));
            lines
        }
        other => vec![other.to_string()],
    }
}
