//! # Pipeline Module / 管道模块
//!
//! Wires the four stages together: load config, prepare directories,
//! run tests, render the report. Each stage runs exactly once, in order.
//!
//! 将四个阶段连接在一起：加载配置、准备目录、运行测试、渲染报告。
//! 每个阶段按顺序只运行一次。

use tracing::info;

use crate::{
    core::{
        config::load_test_config,
        execution::{build_runner_command, run_tests},
        models::{RunOutcome, RunSettings},
    },
    error::Result,
    infra::fs::prepare_directories,
    reporting::allure::generate_allure_report,
};

/// Runs one full orchestration pass.
///
/// # Returns
/// The test runner's exit code together with the report outcome.
///
/// # Errors
/// Only configuration and directory failures are returned. They happen
/// before the test runner starts, so no child process has been spawned.
pub async fn run_pipeline(settings: &RunSettings) -> Result<RunOutcome> {
    info!("Starting Behave-Playwright test execution");

    let config = load_test_config(&settings.config_path)?;
    info!("Configuration loaded successfully");

    prepare_directories(&settings.output_dirs().all())?;
    info!("Output directories prepared");

    let runner = build_runner_command(settings, config.tags());
    let test_exit_code = run_tests(&runner).await;

    let report = generate_allure_report(settings).await;

    info!("Test execution completed");

    Ok(RunOutcome {
        test_exit_code,
        report,
    })
}
