// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

use crate::{
    core::{
        models::{
            DEFAULT_ALLURE_PROGRAM, DEFAULT_CONFIG_PATH, DEFAULT_REPORTS_DIR,
            DEFAULT_RUNNER_PROGRAM, DEFAULT_TESTS_DIR, RunOutcome, RunSettings,
        },
        pipeline::run_pipeline,
    },
    reporting::print_summary,
};

pub fn build_cli() -> Command {
    Command::new("behavex-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Runs BehaveX scenarios in parallel and renders an Allure report from the results.")
        // Later occurrences win, so wrappers can append overrides to a base invocation.
        .args_override_self(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to the ini test configuration file")
                .value_name("CONFIG")
                .default_value(DEFAULT_CONFIG_PATH)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("tests-dir")
                .long("tests-dir")
                .help("Directory holding the features and step definitions")
                .value_name("TESTS_DIR")
                .default_value(DEFAULT_TESTS_DIR)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("reports-dir")
                .long("reports-dir")
                .help("Root directory for all report outputs")
                .value_name("REPORTS_DIR")
                .default_value(DEFAULT_REPORTS_DIR)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("runner")
                .long("runner")
                .help("BehaveX executable to invoke")
                .value_name("PROGRAM")
                .default_value(DEFAULT_RUNNER_PROGRAM)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("allure")
                .long("allure")
                .help("Allure command line executable to invoke")
                .value_name("PROGRAM")
                .default_value(DEFAULT_ALLURE_PROGRAM)
                .action(ArgAction::Set),
        )
}

/// Resolves parsed arguments into `RunSettings`. The parallelism knobs are
/// not exposed on the command line and keep their defaults.
pub fn settings_from_matches(matches: &ArgMatches) -> RunSettings {
    let mut settings = RunSettings::default();
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        settings.config_path = path.clone();
    }
    if let Some(dir) = matches.get_one::<PathBuf>("tests-dir") {
        settings.tests_dir = dir.clone();
    }
    if let Some(dir) = matches.get_one::<PathBuf>("reports-dir") {
        settings.reports_dir = dir.clone();
    }
    if let Some(program) = matches.get_one::<String>("runner") {
        settings.runner_program = program.clone();
    }
    if let Some(program) = matches.get_one::<String>("allure") {
        settings.allure_program = program.clone();
    }
    settings
}

/// Parses the command line, runs the pipeline once and prints the summary.
///
/// # Errors
/// Fatal configuration or directory failures. The caller turns these into exit code 1.
pub async fn run() -> Result<RunOutcome> {
    let matches = build_cli().get_matches();
    let settings = settings_from_matches(&matches);

    let outcome = run_pipeline(&settings).await?;
    print_summary(&outcome);
    Ok(outcome)
}
