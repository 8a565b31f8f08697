//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the runner,
//! including data models, configuration, test execution and the pipeline.
//!
//! 此模块包含运行器的核心功能，
//! 包括数据模型、配置、测试执行和管道。

pub mod config;
pub mod execution;
pub mod models;
pub mod pipeline;

// Re-exports
pub use config::TestConfig;
pub use models::{RunOutcome, RunSettings};
pub use pipeline::run_pipeline;
