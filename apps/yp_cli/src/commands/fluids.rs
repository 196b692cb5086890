// apps/yp_cli/src/commands/fluids.rs

//! 流体预设列表命令

use super::load_fluids;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// 预设列表参数
#[derive(Args, Debug)]
pub struct FluidsArgs {
    /// 自定义流体预设表（JSON）
    #[arg(long)]
    pub table: Option<PathBuf>,
}

/// 执行预设列表命令
pub fn execute(args: FluidsArgs) -> Result<()> {
    let table = load_fluids(args.table.as_deref())?;
    let default_key = &table.default_preset().key;

    println!("=== 流体预设 ({}) ===", table.len());
    println!(
        "  {:<12} {:<16} {:>12} {:>12} {:>12}",
        "键", "名称", "ρ [kg/m³]", "μ [Pa·s]", "ν [m²/s]"
    );
    for f in table.iter() {
        let marker = if &f.key == default_key { "*" } else { " " };
        println!(
            "{} {:<12} {:<16} {:>12.4} {:>12.4e} {:>12.4e}",
            marker,
            f.key,
            f.name,
            f.rho,
            f.mu,
            f.nu()
        );
    }
    println!("\n* 默认预设");

    Ok(())
}
