//! # BehaveX Runner Library / BehaveX Runner 库
//!
//! This library provides the functionality behind the `behavex-runner` binary,
//! the entrypoint of a BehaveX test container. A run loads `test.config`,
//! prepares the report directories, executes BehaveX and finally renders an
//! Allure report when raw results exist.
//!
//! 此库为 `behavex-runner` 二进制文件提供功能，它是 BehaveX 测试容器的入口点。
//! 一次运行会加载 `test.config`，准备报告目录，执行 BehaveX，
//! 最后在存在原始结果时渲染 Allure 报告。
//!
//! ## Modules / 模块
//!
//! - `core` - Configuration, data models, test execution and the pipeline
//! - `infra` - Child-process execution, file system operations and logging
//! - `reporting` - Allure report generation and console summary
//! - `cli` - Command-line interface
//! - `error` - Fatal error taxonomy
//!
//! - `core` - 配置、数据模型、测试执行和管道
//! - `infra` - 子进程执行、文件系统操作和日志
//! - `reporting` - Allure 报告生成和控制台摘要
//! - `cli` - 命令行接口
//! - `error` - 致命错误分类

pub mod cli;
pub mod core;
pub mod error;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::execution;
pub use crate::core::models;
pub use error::RunnerError;
