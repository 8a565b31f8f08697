//! # Test Execution Module / 测试执行模块
//!
//! This module builds the BehaveX invocation and runs it. A failing test run
//! is not an error here: the runner's exit code is the result, and it is
//! handed back unchanged.
//!
//! 此模块构建 BehaveX 调用并运行它。测试运行失败在这里不是错误：
//! 运行器的退出码就是结果，并原样返回。

use tracing::{error, info};

use crate::{
    core::models::{RunSettings, RunnerCommand, STEP_SEARCH_PATH_VAR},
    infra::command::{self, GENERIC_FAILURE_CODE},
};

/// Builds the test runner command for `settings`, filtering scenarios with `tags`.
///
/// The argument order is fixed: features directory, parallel settings,
/// progress flag, then the `-t=<tags>` filter.
///
/// # Arguments
/// * `settings` - Resolved locations and parallelism knobs
/// * `tags` - Tag expression selecting which scenarios run
pub fn build_runner_command(settings: &RunSettings, tags: &str) -> RunnerCommand {
    let mut cmd = RunnerCommand::new(settings.runner_program.as_str())
        .arg(settings.features_dir().display().to_string())
        .arg("--parallel-processes")
        .arg(settings.parallel_processes.to_string())
        .arg("--parallel-delay")
        .arg(settings.parallel_delay_ms.to_string())
        .arg("--parallel-scheme")
        .arg(settings.parallel_scheme.as_str());

    if settings.show_progress_bar {
        cmd = cmd.arg("--show-progress-bar");
    }

    cmd.arg(format!("-t={tags}"))
        .env(STEP_SEARCH_PATH_VAR, settings.tests_dir.display().to_string())
        .current_dir(&settings.tests_dir)
}

/// Runs the test runner and returns its exit code.
///
/// A runner that cannot be started at all is logged and reported as
/// `GENERIC_FAILURE_CODE` rather than propagated.
pub async fn run_tests(cmd: &RunnerCommand) -> i32 {
    info!("Executing command: {}", cmd);

    match command::run_inherited(cmd).await {
        Ok(status) => {
            let code = command::exit_code_of(status);
            info!("Test execution completed with exit code: {}", code);
            code
        }
        Err(e) => {
            error!("Error executing tests: {}", e);
            GENERIC_FAILURE_CODE
        }
    }
}
