// crates/yp_io/src/exporters/csv.rs

//! CSV 结果导出器
//!
//! 行布局：
//!
//! ```text
//! CFD y+ 计算结果,<时间>
//!
//! 参数,数值,单位
//! 密度 ρ,1.204,kg/m³
//! ...
//!
//! 计算模式,<模式>
//!
//! 计算结果
//! <推导文本，每行一条记录>
//! ```

use crate::error::IoResult;
use chrono::NaiveDateTime;
use std::io::Write;
use yp_physics::CalculationResult;

use super::TIMESTAMP_FORMAT;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSV 导出器
#[derive(Debug, Clone)]
pub struct CsvExporter {
    /// 是否写入 UTF-8 BOM（便于表格软件识别中文）
    bom: bool,
    /// 分隔符
    delimiter: u8,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvExporter {
    /// 创建新的 CSV 导出器（带 BOM，逗号分隔）
    pub fn new() -> Self {
        Self {
            bom: true,
            delimiter: b',',
        }
    }

    /// 设置是否写入 BOM
    pub fn bom(mut self, bom: bool) -> Self {
        self.bom = bom;
        self
    }

    /// 设置分隔符
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// 导出单个结果
    pub fn write<W: Write>(
        &self,
        result: &CalculationResult,
        timestamp: NaiveDateTime,
        mut writer: W,
    ) -> IoResult<()> {
        if self.bom {
            writer.write_all(UTF8_BOM)?;
        }

        let mut w = ::csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .terminator(::csv::Terminator::CRLF)
            .flexible(true)
            .from_writer(writer);

        let stamp = timestamp.format(TIMESTAMP_FORMAT).to_string();
        w.write_record(["CFD y+ 计算结果", stamp.as_str()])?;
        w.write_record([""])?;

        let p = result.params();
        w.write_record(["参数", "数值", "单位"])?;
        for (name, value, unit) in [
            ("密度 ρ", p.rho(), "kg/m³"),
            ("动力粘度 μ", p.mu(), "Pa·s"),
            ("流速 U", p.velocity(), "m/s"),
            ("第一层高度 y", p.height(), "m"),
            ("特征长度 L", p.length(), "m"),
        ] {
            w.write_record([name, value.to_string().as_str(), unit])?;
        }
        w.write_record([""])?;

        w.write_record(["计算模式", result.mode().short_name()])?;
        w.write_record([""])?;

        w.write_record(["计算结果"])?;
        for line in result.narrative().lines() {
            w.write_record([line])?;
        }

        w.flush()?;
        Ok(())
    }
}
