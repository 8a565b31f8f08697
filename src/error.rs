//! # Error Types / 错误类型
//!
//! Fatal errors that abort a run before or while the output directories are
//! prepared. Anything listed here ends the process with exit code 1.
//!
//! 在准备输出目录之前或期间中止运行的致命错误。
//! 此处列出的任何错误都会以退出码 1 结束进程。

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    /// The test configuration file does not exist.
    /// 测试配置文件不存在。
    #[error("Configuration file not found: {}", path.display())]
    ConfigurationNotFound { path: PathBuf },

    /// The configuration file is not valid ini.
    /// 配置文件不是有效的 ini 格式。
    #[error("Failed to parse configuration file {}: {source}", path.display())]
    ConfigurationParse {
        path: PathBuf,
        #[source]
        source: ConfigSyntaxError,
    },

    /// An output directory could not be created.
    /// 无法创建输出目录。
    #[error("Failed to create output directory {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a configuration file's contents were rejected.
/// 配置文件内容被拒绝的原因。
#[derive(Debug, Error)]
pub enum ConfigSyntaxError {
    #[error(transparent)]
    Ini(#[from] ini::ParseError),

    /// A key appears before the first `[section]` header.
    #[error("key '{key}' appears before any section header")]
    MissingSectionHeader { key: String },

    #[error("file is not valid UTF-8")]
    NotUtf8,
}

pub type Result<T> = std::result::Result<T, RunnerError>;
