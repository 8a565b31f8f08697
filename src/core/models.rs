//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures passed between the pipeline stages:
//! the resolved run settings, the test runner invocation, and the outcomes of
//! the test and report stages.
//!
//! 此模块定义了在管道各阶段之间传递的数据结构：
//! 解析后的运行设置、测试运行器调用，以及测试和报告阶段的结果。

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Default location of the ini configuration inside the test container.
pub const DEFAULT_CONFIG_PATH: &str = "/tests/test.config";
/// Default directory holding user features and step definitions.
pub const DEFAULT_TESTS_DIR: &str = "/tests";
/// Default root for every report directory.
pub const DEFAULT_REPORTS_DIR: &str = "/reports";
/// Default BehaveX executable.
pub const DEFAULT_RUNNER_PROGRAM: &str = "behavex";
/// Default Allure command line executable.
pub const DEFAULT_ALLURE_PROGRAM: &str = "allure";

/// Number of parallel BehaveX worker processes.
pub const PARALLEL_PROCESSES: u32 = 2;
/// Delay between worker start-ups, in milliseconds.
pub const PARALLEL_DELAY_MS: u64 = 1000;
/// Granularity at which BehaveX splits work across workers.
pub const PARALLEL_SCHEME: &str = "scenario";
/// Environment variable through which the runner discovers step implementations.
pub const STEP_SEARCH_PATH_VAR: &str = "PYTHONPATH";

/// Everything the pipeline needs to know about where things live and how
/// the test runner is driven. Built once from the command line.
///
/// 管道需要知道的所有位置信息以及测试运行器的驱动方式。
/// 从命令行构建一次。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// Path of the ini configuration file. / ini 配置文件的路径。
    pub config_path: PathBuf,
    /// Working directory of the test runner and step-definition search path.
    /// 测试运行器的工作目录和步骤定义的搜索路径。
    pub tests_dir: PathBuf,
    /// Root directory under which all report directories are created.
    /// 创建所有报告目录的根目录。
    pub reports_dir: PathBuf,
    /// Test runner executable. / 测试运行器可执行文件。
    pub runner_program: String,
    /// Report renderer executable. / 报告渲染器可执行文件。
    pub allure_program: String,
    pub parallel_processes: u32,
    pub parallel_delay_ms: u64,
    pub parallel_scheme: String,
    pub show_progress_bar: bool,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            tests_dir: PathBuf::from(DEFAULT_TESTS_DIR),
            reports_dir: PathBuf::from(DEFAULT_REPORTS_DIR),
            runner_program: DEFAULT_RUNNER_PROGRAM.to_string(),
            allure_program: DEFAULT_ALLURE_PROGRAM.to_string(),
            parallel_processes: PARALLEL_PROCESSES,
            parallel_delay_ms: PARALLEL_DELAY_MS,
            parallel_scheme: PARALLEL_SCHEME.to_string(),
            show_progress_bar: true,
        }
    }
}

impl RunSettings {
    /// Directory containing the `.feature` files handed to the runner.
    pub fn features_dir(&self) -> PathBuf {
        self.tests_dir.join("features")
    }

    /// The report directory layout rooted at `reports_dir`.
    pub fn output_dirs(&self) -> OutputDirectories {
        OutputDirectories::new(&self.reports_dir)
    }
}

/// The fixed set of report and artifact directories written by a run.
///
/// 一次运行写入的固定报告和产物目录集合。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDirectories {
    pub allure_report: PathBuf,
    pub html: PathBuf,
    pub screenshots: PathBuf,
    pub pretty: PathBuf,
    pub json: PathBuf,
    pub rerun: PathBuf,
    pub allure_json: PathBuf,
}

impl OutputDirectories {
    pub fn new(root: &Path) -> Self {
        Self {
            allure_report: root.join("allure_report"),
            html: root.join("html"),
            screenshots: root.join("screenshots"),
            pretty: root.join("pretty"),
            json: root.join("json"),
            rerun: root.join("rerun"),
            allure_json: root.join("allure_json"),
        }
    }

    /// All directories in creation order.
    pub fn all(&self) -> [&Path; 7] {
        [
            &self.allure_report,
            &self.html,
            &self.screenshots,
            &self.pretty,
            &self.json,
            &self.rerun,
            &self.allure_json,
        ]
    }
}

/// A fully resolved child-process invocation. Kept as plain data so the
/// argument vector and environment can be inspected before anything runs.
///
/// 完全解析的子进程调用。保持为纯数据，以便在运行之前检查参数向量和环境。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Variables added on top of the inherited environment.
    /// 在继承的环境之上添加的变量。
    pub envs: BTreeMap<String, String>,
    pub current_dir: Option<PathBuf>,
}

impl RunnerCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: BTreeMap::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.insert(key.into(), value.into());
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// The command line as a shell would need to see it, for logging.
    pub fn display_line(&self) -> String {
        let parts = std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str));
        shlex::try_join(parts).unwrap_or_else(|_| {
            std::iter::once(self.program.clone())
                .chain(self.args.iter().cloned())
                .collect::<Vec<_>>()
                .join(" ")
        })
    }
}

impl fmt::Display for RunnerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_line())
    }
}

/// What happened to the best-effort Allure report step.
/// None of these variants affect the process exit code.
///
/// 尽力而为的 Allure 报告步骤的结果。
/// 这些变体都不会影响进程退出码。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// The report was rendered into `output`. / 报告已渲染到 `output`。
    Generated { output: PathBuf },
    /// No raw results were found, so nothing was rendered.
    /// 未找到原始结果，因此未渲染任何内容。
    Skipped,
    /// The renderer ran but exited unsuccessfully.
    /// 渲染器运行了但未成功退出。
    ToolFailed { exit_code: i32 },
    /// The renderer could not be started at all.
    /// 渲染器根本无法启动。
    SpawnFailed { message: String },
}

impl ReportOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::ToolFailed { .. } | Self::SpawnFailed { .. })
    }
}

impl fmt::Display for ReportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generated { output } => write!(f, "generated at {}", output.display()),
            Self::Skipped => f.write_str("skipped (no results)"),
            Self::ToolFailed { exit_code } => write!(f, "failed (exit code {exit_code})"),
            Self::SpawnFailed { message } => write!(f, "failed ({message})"),
        }
    }
}

/// The two independently reported results of a run. Only the test exit
/// code decides how the process exits; the report outcome is informational.
///
/// 一次运行的两个独立报告的结果。只有测试退出码决定进程如何退出；
/// 报告结果仅供参考。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub test_exit_code: i32,
    pub report: ReportOutcome,
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        self.test_exit_code
    }

    pub fn tests_passed(&self) -> bool {
        self.test_exit_code == 0
    }
}
