use behavex_runner::{cli, infra::command::to_process_exit_code, infra::logging::init_logging};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    // Run the pipeline; only fatal startup errors come back as Err
    match cli::run().await {
        Ok(outcome) => ExitCode::from(to_process_exit_code(outcome.exit_code())),
        Err(e) => {
            tracing::error!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}
