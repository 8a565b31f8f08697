//! # Logging Module / 日志模块
//!
//! Sets up the process-wide `tracing` subscriber used by every stage.
//!
//! 设置所有阶段共用的进程级 `tracing` 订阅器。

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;

/// Installs the global tracing subscriber.
///
/// Lines go to stderr as `<timestamp> <LEVEL> <message>`. The level comes from
/// `RUST_LOG` and falls back to `info`. Calling this more than once is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .with_level(true)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .try_init();
}
