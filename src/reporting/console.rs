//! # Console Reporting Module / 控制台报告模块
//!
//! Prints a short, colourful summary of the run once both stages are done.
//!
//! 在两个阶段都完成后打印简短的彩色运行摘要。

use chrono::Local;
use colored::*;

use crate::core::models::{ReportOutcome, RunOutcome};

/// Prints a formatted summary of a finished run to stdout.
///
/// # Output Format / 输出格式
/// ```text
/// --- Run Summary ---
///   - Tests            | PASSED (exit code 0)
///   - Allure report    | generated at /reports/allure_report
///   - Finished         | 2025-01-01 12:00:00
/// ```
pub fn print_summary(outcome: &RunOutcome) {
    println!("\n{}", "--- Run Summary ---".bold());

    let tests = if outcome.tests_passed() {
        format!("PASSED (exit code {})", outcome.test_exit_code).green()
    } else {
        format!("FAILED (exit code {})", outcome.test_exit_code).red()
    };
    println!("  - {:<16} | {}", "Tests", tests);

    let report_str = outcome.report.to_string();
    let report = if outcome.report.is_failure() {
        report_str.yellow()
    } else if matches!(outcome.report, ReportOutcome::Skipped) {
        report_str.dimmed()
    } else {
        report_str.green()
    };
    println!("  - {:<16} | {}", "Allure report", report);
    println!(
        "  - {:<16} | {}",
        "Finished",
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
    );
}
