// apps/yp_cli/src/main.rs

//! YPlus 命令行界面
//!
//! 估算 CFD 网格第一层高度对应的 y⁺，并给出近壁网格建议。
//!
//! # 架构层级
//!
//! 本模块属于 **Layer 4: Application**：
//! - 只在这一层接触 `anyhow` 与 `tracing`
//! - 流体预设表在此创建后注入到请求解析

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// YPlus 近壁网格 y⁺ 估算工具
#[derive(Parser)]
#[command(name = "yp_cli")]
#[command(author = "YPlus Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Estimate y+ for the first cell of a CFD mesh", long_about = None)]
struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short = 'L', long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 计算 y⁺
    Calc(commands::calc::CalcArgs),
    /// 列出流体预设
    Fluids(commands::fluids::FluidsArgs),
    /// 验证计算请求
    Validate(commands::validate::ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    // try_init 同时桥接库层的 log 记录
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    // 执行命令
    match cli.command {
        Commands::Calc(args) => commands::calc::execute(args),
        Commands::Fluids(args) => commands::fluids::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
    }
}
