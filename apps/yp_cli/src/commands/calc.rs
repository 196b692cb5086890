// apps/yp_cli/src/commands/calc.rs

//! y⁺ 计算命令

use super::{load_fluids, FlowArgs};
use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use std::path::PathBuf;
use tracing::{info, warn};
use yp_io::{export_to_path, ExportFormat};

/// 计算参数
#[derive(Args, Debug)]
pub struct CalcArgs {
    #[command(flatten)]
    pub flow: FlowArgs,

    /// 导出文件路径（.csv 或 .txt）
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// 导出格式 (csv|text)，缺省按扩展名推断
    #[arg(long, requires = "export")]
    pub format: Option<ExportFormat>,

    /// 以 JSON 输出结果
    #[arg(long)]
    pub json: bool,
}

/// 执行计算命令
pub fn execute(args: CalcArgs) -> Result<()> {
    let fluids = load_fluids(args.flow.table.as_deref())?;
    let request = args.flow.build_request()?;
    info!("计算模式: {}", request.mode.kind());

    let (raw, inputs) = request.resolve(&fluids).context("无法解析计算请求")?;
    let result = yp_physics::calculate(&raw, &inputs).context("计算失败")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.narrative());
    }

    if !result.category().is_recommended() {
        warn!("y⁺ = {:.4}: {}", result.y_plus(), result.category());
    }

    if let Some(path) = &args.export {
        let used = export_to_path(&result, path, args.format, Local::now().naive_local())
            .with_context(|| format!("无法导出到: {}", path.display()))?;
        println!("\n已导出 ({}): {}", used, path.display());
    }

    Ok(())
}
