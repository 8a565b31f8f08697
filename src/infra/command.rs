//! # Command Execution Module / 命令执行模块
//!
//! Turns a `RunnerCommand` into a `tokio::process::Command` and waits for it.
//! Children inherit stdout and stderr so their progress output reaches the
//! container log directly.
//!
//! 将 `RunnerCommand` 转换为 `tokio::process::Command` 并等待其完成。
//! 子进程继承 stdout 和 stderr，以便其进度输出直接进入容器日志。

use std::process::{ExitStatus, Stdio};

use crate::core::models::RunnerCommand;

/// Exit code used when a child produced no code of its own.
pub const GENERIC_FAILURE_CODE: i32 = 1;

/// Builds the tokio command for `spec`. The extra variables are applied to the
/// child only; the parent environment is left untouched.
pub fn to_tokio_command(spec: &RunnerCommand) -> tokio::process::Command {
    let mut cmd = tokio::process::Command::new(&spec.program);
    cmd.args(&spec.args)
        .envs(&spec.envs)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    if let Some(dir) = &spec.current_dir {
        cmd.current_dir(dir);
    }
    cmd
}

/// Spawns `spec` with inherited output and waits for it to exit.
///
/// # Returns
/// The child's `ExitStatus`, or the spawn/wait error.
pub async fn run_inherited(spec: &RunnerCommand) -> std::io::Result<ExitStatus> {
    to_tokio_command(spec).status().await
}

/// Reduces an `ExitStatus` to a single integer exit code.
///
/// On Unix a child killed by signal `N` maps to `128 + N`, the convention
/// shells use. Any other status without a code maps to `GENERIC_FAILURE_CODE`.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    GENERIC_FAILURE_CODE
}

/// Narrows an exit code to what a process can actually return.
/// Codes outside `0..=255` become `GENERIC_FAILURE_CODE` so they can never
/// wrap around into a success.
pub fn to_process_exit_code(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(GENERIC_FAILURE_CODE as u8)
}
