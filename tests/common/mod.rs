// Shared test helpers for integration tests
#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{TempDir, tempdir};

/// Names of the seven report directories, in creation order.
pub const OUTPUT_DIR_NAMES: [&str; 7] = [
    "allure_report",
    "html",
    "screenshots",
    "pretty",
    "json",
    "rerun",
    "allure_json",
];

/// A throwaway container layout: `tests/` with features, `reports/`, and a
/// `bin/` directory holding fake `behavex` and `allure` scripts that record
/// how they were called into `log/`.
pub struct Harness {
    root: TempDir,
}

impl Harness {
    pub fn new() -> Self {
        let root = tempdir().expect("Failed to create temporary directory");
        for dir in ["tests/features", "bin", "log"] {
            fs::create_dir_all(root.path().join(dir)).expect("Failed to create harness directory");
        }
        fs::write(
            root.path().join("tests/features/login.feature"),
            "Feature: Login\n  @smoke\n  Scenario: opens\n    Given the app\n",
        )
        .expect("Failed to write feature file");

        let harness = Self { root };
        harness.install_runner(0, false);
        harness.install_allure(0);
        harness
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn tests_dir(&self) -> PathBuf {
        self.path().join("tests")
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.path().join("reports")
    }

    pub fn config_path(&self) -> PathBuf {
        self.tests_dir().join("test.config")
    }

    fn log_dir(&self) -> PathBuf {
        self.path().join("log")
    }

    pub fn runner_path(&self) -> PathBuf {
        self.path().join("bin/behavex")
    }

    pub fn allure_path(&self) -> PathBuf {
        self.path().join("bin/allure")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write test.config");
    }

    /// Installs a fake BehaveX that records its arguments, `PYTHONPATH` and
    /// working directory, optionally drops an Allure result file, then exits
    /// with `exit_code`.
    pub fn install_runner(&self, exit_code: i32, write_results: bool) {
        let log = self.log_dir();
        let results = if write_results {
            format!(
                "mkdir -p '{dir}'\necho '{{\"name\": \"opens\"}}' > '{dir}/result.json'\n",
                dir = self.reports_dir().join("allure_json").display()
            )
        } else {
            String::new()
        };
        let script = format!(
            "#!/bin/sh\n\
             printf '%s\\n' \"$@\" > '{log}/runner_args'\n\
             printf '%s\\n' \"$PYTHONPATH\" > '{log}/runner_pythonpath'\n\
             pwd -P > '{log}/runner_cwd'\n\
             {results}\
             exit {exit_code}\n",
            log = log.display(),
        );
        write_script(&self.runner_path(), &script);
    }

    /// Installs a fake Allure CLI that records its arguments and exits with `exit_code`.
    pub fn install_allure(&self, exit_code: i32) {
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{log}/allure_args'\nexit {exit_code}\n",
            log = self.log_dir().display(),
        );
        write_script(&self.allure_path(), &script);
    }

    /// The runner binary wired to this harness.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("behavex-runner").unwrap();
        cmd.arg("--config")
            .arg(self.config_path())
            .arg("--tests-dir")
            .arg(self.tests_dir())
            .arg("--reports-dir")
            .arg(self.reports_dir())
            .arg("--runner")
            .arg(self.runner_path())
            .arg("--allure")
            .arg(self.allure_path())
            .env("RUST_LOG", "info");
        cmd
    }

    pub fn runner_invoked(&self) -> bool {
        self.log_dir().join("runner_args").exists()
    }

    pub fn allure_invoked(&self) -> bool {
        self.log_dir().join("allure_args").exists()
    }

    pub fn runner_args(&self) -> Vec<String> {
        read_lines(&self.log_dir().join("runner_args"))
    }

    pub fn allure_args(&self) -> Vec<String> {
        read_lines(&self.log_dir().join("allure_args"))
    }

    pub fn runner_pythonpath(&self) -> String {
        read_lines(&self.log_dir().join("runner_pythonpath")).join("\n")
    }

    pub fn runner_cwd(&self) -> PathBuf {
        PathBuf::from(read_lines(&self.log_dir().join("runner_cwd")).join("\n"))
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
        .lines()
        .map(str::to_string)
        .collect()
}

/// Writes an executable shell script.
pub fn write_script(path: &Path, content: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::write(path, content).expect("Failed to write script");
    let mut perms = fs::metadata(path).expect("Failed to stat script").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to make script executable");
}
