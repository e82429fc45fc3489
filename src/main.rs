use std::env;
use std::process::ExitCode;

mod core;
mod github;
mod logger;
mod utils;

use crate::utils::config::SyncConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // local runs keep their variables in .env
    let _ = dotenv::dotenv();
    let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "/tmp/logs".to_string());
    let logs_init_status = logger::init::init_logger(&log_dir);
    if !logs_init_status {
        log::error!("[main] Unable to set up file logger");
    }

    let config = match SyncConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("[main] {}", e);
            return ExitCode::FAILURE;
        }
    };
    let lookup = |key: &str| env::var(key).ok();
    match crate::core::run::run(&config, &lookup).await {
        Ok(Some(outcome)) => {
            log::info!("[main] Done, version {}", outcome.version());
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("[main] {}", e);
            ExitCode::FAILURE
        }
    }
}
