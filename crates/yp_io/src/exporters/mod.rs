// crates/yp_io/src/exporters/mod.rs

//! 结果导出器
//!
//! - CSV：参数表加逐行推导文本，默认带 UTF-8 BOM
//! - 文本：带横幅的详细报告

pub mod csv;
pub mod text;

pub use self::csv::CsvExporter;
pub use self::text::TextReportExporter;

use crate::error::{IoError, IoResult};
use chrono::NaiveDateTime;
use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::str::FromStr;
use yp_physics::CalculationResult;

/// 导出文件中的时间格式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// CSV 表格
    Csv,
    /// 纯文本报告
    Text,
}

impl ExportFormat {
    /// 根据扩展名推断格式
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }

    /// 默认扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = IoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "txt" | "text" => Ok(Self::Text),
            other => Err(IoError::UnknownFormat(other.to_string())),
        }
    }
}

/// 导出到文件
///
/// `format` 为空时按扩展名推断，返回实际使用的格式。
pub fn export_to_path<P: AsRef<Path>>(
    result: &CalculationResult,
    path: P,
    format: Option<ExportFormat>,
    timestamp: NaiveDateTime,
) -> IoResult<ExportFormat> {
    let path = path.as_ref();
    let format = match format {
        Some(f) => f,
        None => ExportFormat::from_path(path)
            .ok_or_else(|| IoError::UnknownFormat(path.display().to_string()))?,
    };

    let writer = BufWriter::new(File::create(path)?);
    match format {
        ExportFormat::Csv => CsvExporter::new().write(result, timestamp, writer)?,
        ExportFormat::Text => TextReportExporter::new().write(result, timestamp, writer)?,
    }

    log::info!("已导出 {} 到: {}", format, path.display());
    Ok(format)
}
