//! # Allure Report Module / Allure 报告模块
//!
//! Renders the raw Allure JSON written by the test run into a browsable
//! report. This step is best-effort: every outcome is logged and returned,
//! and none of them is allowed to change the run's exit code.
//!
//! 将测试运行写入的原始 Allure JSON 渲染为可浏览的报告。
//! 此步骤是尽力而为的：每个结果都会被记录并返回，
//! 且都不允许改变运行的退出码。

use std::path::Path;
use tracing::{error, info, warn};

use crate::{
    core::models::{ReportOutcome, RunSettings, RunnerCommand},
    infra::{command, fs::is_non_empty_dir},
};

/// Builds `allure generate <results> -o <output> --clean`.
pub fn build_allure_command(program: &str, results: &Path, output: &Path) -> RunnerCommand {
    RunnerCommand::new(program)
        .arg("generate")
        .arg(results.display().to_string())
        .arg("-o")
        .arg(output.display().to_string())
        .arg("--clean")
}

/// Generates the Allure report if raw results are present.
///
/// # Returns
/// * `Skipped` when the results directory is missing or empty
/// * `Generated` when the renderer exits successfully
/// * `ToolFailed` / `SpawnFailed` when it does not
pub async fn generate_allure_report(settings: &RunSettings) -> ReportOutcome {
    let dirs = settings.output_dirs();

    if !is_non_empty_dir(&dirs.allure_json) {
        warn!("No Allure results found, skipping report generation");
        return ReportOutcome::Skipped;
    }

    info!("Generating Allure report...");
    let cmd = build_allure_command(&settings.allure_program, &dirs.allure_json, &dirs.allure_report);

    match command::run_inherited(&cmd).await {
        Ok(status) if status.success() => {
            info!("Allure report generated: {}", dirs.allure_report.display());
            ReportOutcome::Generated {
                output: dirs.allure_report,
            }
        }
        Ok(status) => {
            let exit_code = command::exit_code_of(status);
            error!(
                "Failed to generate Allure report: command '{}' returned non-zero exit status {}",
                cmd, exit_code
            );
            ReportOutcome::ToolFailed { exit_code }
        }
        Err(e) => {
            error!("Unexpected error generating Allure report: {}", e);
            ReportOutcome::SpawnFailed {
                message: e.to_string(),
            }
        }
    }
}
