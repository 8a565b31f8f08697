//! # Reporting Module / 报告模块
//!
//! This module handles what happens after the test runner exits: rendering the
//! Allure report from raw results and printing a summary to the console.
//!
//! 此模块处理测试运行器退出后的工作：
//! 从原始结果渲染 Allure 报告并在控制台打印摘要。

pub mod allure;
pub mod console;

// Re-export common reporting functions
pub use allure::generate_allure_report;
pub use console::print_summary;
