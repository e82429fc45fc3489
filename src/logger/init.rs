use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use chrono::Utc;
use env_logger::Env;
use fern::log_file;
use log::LevelFilter;

use crate::logger::cleanup::cleanup_old_logs;

const RETENTION_DAYS: u64 = 60;

fn level_from_env() -> LevelFilter {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}

/// Logs to stdout and to a per-run file under `log_dir`. Falls back to
/// stderr-only `env_logger` when the file cannot be set up.
pub fn init_logger(log_dir: &str) -> bool {
    let create_dir_res = std::fs::create_dir_all(log_dir);
    if let Err(e) = create_dir_res {
        env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
        log::error!("[init_logger] Unable to create logs dir: {:?}", e);
        return false;
    }
    cleanup_old_logs(Path::new(log_dir), Duration::from_secs(RETENTION_DAYS * 24 * 60 * 60));

    let log_file_path = Path::new(log_dir)
        .join(format!("version-sync-{}.log", Utc::now().format("%Y-%m-%d_%H-%M-%S")));
    let file_config = match log_file(&log_file_path) {
        Ok(file) => file,
        Err(e) => {
            env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
            log::error!("[init_logger] Unable to create log file: {:?}", e);
            return false;
        }
    };
    let dispatcher_res = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                message
            ))
        })
        .level(level_from_env())
        .chain(std::io::stdout())
        .chain(file_config)
        .apply();
    if let Err(e) = dispatcher_res {
        eprintln!("[init_logger] Unable to create logs file dispatcher: {:?}", e);
        return false;
    }
    log::debug!("[init_logger] Logging to {:?}", &log_file_path);
    true
}
