// crates/yp_io/src/lib.rs

//! YPlus 导出层
//!
//! 将计算结果写成 CSV 或纯文本报告。导出器只依赖 [`std::io::Write`]，
//! 可以写入文件、内存缓冲或标准输出。

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod exporters;

pub use error::{IoError, IoResult};
pub use exporters::{
    export_to_path, CsvExporter, ExportFormat, TextReportExporter, TIMESTAMP_FORMAT,
};
