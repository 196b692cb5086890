// crates/yp_config/src/error.rs

//! 配置层错误类型

use yp_foundation::YpError;

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 解析错误
    #[error("解析错误: {0}")]
    Parse(String),

    /// 无效值
    #[error("无效值 '{key}': {value} - {reason}")]
    InvalidValue {
        /// 配置键
        key: String,
        /// 配置值
        value: String,
        /// 原因
        reason: String,
    },

    /// 缺失配置
    #[error("缺失配置: {0}")]
    Missing(String),

    /// 未知流体
    #[error("未知流体: {0}")]
    UnknownFluid(String),

    /// 流体键重复
    #[error("流体键重复: {0}")]
    DuplicateFluid(String),

    /// 计算核心拒绝了输入
    #[error(transparent)]
    Core(#[from] YpError),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
