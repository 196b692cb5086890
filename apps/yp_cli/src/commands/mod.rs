// apps/yp_cli/src/commands/mod.rs

//! 子命令实现
//!
//! - `calc`: 计算 y⁺，可导出 CSV/文本报告
//! - `fluids`: 列出流体预设
//! - `validate`: 只验证计算请求

pub mod calc;
pub mod fluids;
pub mod validate;

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use yp_config::{CalculationRequest, FluidTable, ModeConfig, RawNumber};
use yp_physics::ModeKind;

/// 流动参数与模式（calc 使用）
///
/// 数值参数保留为文本，交给计算核心解析，以便给出准确的解析错误。
#[derive(Args, Debug)]
pub struct FlowArgs {
    /// 计算请求文件（JSON），命令行参数覆盖其中字段
    #[arg(short, long)]
    pub request: Option<PathBuf>,

    /// 流体预设（键或显示名称）
    #[arg(short, long)]
    pub fluid: Option<String>,

    /// 密度 ρ [kg/m³]，覆盖预设
    #[arg(long)]
    pub rho: Option<String>,

    /// 动力粘度 μ [Pa·s]，覆盖预设
    #[arg(long)]
    pub mu: Option<String>,

    /// 流速 U [m/s]
    #[arg(short = 'u', long, allow_hyphen_values = true)]
    pub velocity: Option<String>,

    /// 第一层高度 y [m]
    #[arg(short = 'y', long, allow_hyphen_values = true)]
    pub height: Option<String>,

    /// 特征长度 L [m]
    #[arg(short = 'l', long, allow_hyphen_values = true)]
    pub length: Option<String>,

    /// 计算模式 (blasius|cf|shear，或 a|b|c)
    #[arg(short, long)]
    pub mode: Option<ModeKind>,

    /// 摩擦系数 Cf（模式 B）
    #[arg(long, allow_hyphen_values = true)]
    pub cf: Option<String>,

    /// 壁面剪应力 τw [Pa]（模式 C）
    #[arg(long, allow_hyphen_values = true)]
    pub tau_w: Option<String>,

    /// 摩擦速度 u_τ [m/s]（模式 C，τw 不可用时使用）
    #[arg(long, allow_hyphen_values = true)]
    pub u_tau: Option<String>,

    /// 自定义流体预设表（JSON）
    #[arg(long)]
    pub table: Option<PathBuf>,
}

impl FlowArgs {
    /// 合并请求文件与命令行参数
    pub fn build_request(&self) -> Result<CalculationRequest> {
        let mut request = match &self.request {
            Some(path) => CalculationRequest::from_file(path)
                .with_context(|| format!("无法加载计算请求: {}", path.display()))?,
            None => CalculationRequest::default(),
        };

        let text = |v: &String| RawNumber::from(v.as_str());
        if let Some(fluid) = &self.fluid {
            request.fluid = Some(fluid.clone());
        }
        if let Some(v) = &self.rho {
            request.rho = Some(text(v));
        }
        if let Some(v) = &self.mu {
            request.mu = Some(text(v));
        }
        if let Some(v) = &self.velocity {
            request.velocity = text(v);
        }
        if let Some(v) = &self.height {
            request.height = text(v);
        }
        if let Some(v) = &self.length {
            request.length = text(v);
        }

        if let Some(kind) = self.mode {
            if kind != request.mode.kind() {
                request.mode = ModeConfig::for_kind(kind);
            }
        }

        match &mut request.mode {
            ModeConfig::Blasius => {}
            ModeConfig::DirectCf { cf } => {
                if let Some(v) = &self.cf {
                    *cf = text(v);
                }
            }
            ModeConfig::DirectShear { tau_w, u_tau } => {
                if let Some(v) = &self.tau_w {
                    *tau_w = Some(text(v));
                }
                if let Some(v) = &self.u_tau {
                    *u_tau = Some(text(v));
                }
            }
        }

        let kind = request.mode.kind();
        if self.cf.is_some() && kind != ModeKind::DirectCf {
            warn!("--cf 仅用于模式 B，当前为 {}，已忽略", kind);
        }
        if (self.tau_w.is_some() || self.u_tau.is_some()) && kind != ModeKind::DirectShear {
            warn!("--tau-w/--u-tau 仅用于模式 C，当前为 {}，已忽略", kind);
        }

        debug!("计算请求: {:?}", request);
        Ok(request)
    }
}

/// 加载流体预设表，未指定文件时使用内置表
pub fn load_fluids(path: Option<&Path>) -> Result<FluidTable> {
    match path {
        Some(path) => FluidTable::from_file(path)
            .with_context(|| format!("无法加载流体预设表: {}", path.display())),
        None => Ok(FluidTable::builtin()),
    }
}
