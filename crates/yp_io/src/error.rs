// crates/yp_io/src/error.rs
//! 导出错误类型定义
//!
//! 提供导出模块的统一错误枚举，通过 thiserror 自动转换底层错误。

use thiserror::Error;

/// 导出模块结果类型别名
pub type IoResult<T> = Result<T, IoError>;

/// 导出错误枚举
#[derive(Error, Debug)]
pub enum IoError {
    /// 底层 IO 错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// CSV 写入错误
    #[error("CSV 写入错误: {0}")]
    Csv(#[from] csv::Error),

    /// 无法识别导出格式
    #[error("无法识别导出格式: {0} (支持: csv, txt)")]
    UnknownFormat(String),
}
