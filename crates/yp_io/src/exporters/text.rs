// crates/yp_io/src/exporters/text.rs

//! 纯文本详细报告导出器

use crate::error::IoResult;
use chrono::NaiveDateTime;
use std::io::Write;
use yp_physics::CalculationResult;

use super::TIMESTAMP_FORMAT;

/// 文本报告导出器
#[derive(Debug, Clone)]
pub struct TextReportExporter {
    banner_width: usize,
}

impl Default for TextReportExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextReportExporter {
    /// 创建导出器（横幅宽 50）
    pub fn new() -> Self {
        Self { banner_width: 50 }
    }

    /// 设置横幅宽度
    pub fn banner_width(mut self, width: usize) -> Self {
        self.banner_width = width;
        self
    }

    /// 写入报告
    pub fn write<W: Write>(
        &self,
        result: &CalculationResult,
        timestamp: NaiveDateTime,
        mut writer: W,
    ) -> IoResult<()> {
        let banner = "═".repeat(self.banner_width);
        let p = result.params();

        writeln!(writer, "{banner}")?;
        writeln!(writer, "CFD y+ 计算工具 - 详细报告")?;
        writeln!(writer, "生成时间：{}", timestamp.format(TIMESTAMP_FORMAT))?;
        writeln!(writer, "{banner}")?;
        writeln!(writer)?;

        writeln!(writer, "【输入参数】")?;
        writeln!(writer, "密度 ρ: {:.6} kg/m³", p.rho())?;
        writeln!(writer, "动力粘度 μ: {:.6e} Pa·s", p.mu())?;
        writeln!(writer, "流速 U: {:.6} m/s", p.velocity())?;
        writeln!(writer, "第一层高度 y: {:.6e} m", p.height())?;
        writeln!(writer, "特征长度 L: {:.6} m", p.length())?;
        writeln!(writer, "计算模式: {}", result.mode().short_name())?;
        writeln!(writer)?;

        writeln!(writer, "【计算结果】")?;
        writeln!(writer, "{}", result.narrative())?;
        writeln!(writer)?;

        writeln!(writer, "{banner}")?;
        writeln!(writer, "报告结束")?;
        writeln!(writer, "{banner}")?;

        writer.flush()?;
        Ok(())
    }
}
