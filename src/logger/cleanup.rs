use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

/// Removes `.log` files in `logs_dir` last modified more than
/// `retention_period` ago. Returns how many were removed.
pub fn cleanup_old_logs(logs_dir: &Path, retention_period: Duration) -> usize {
    let entries = match fs::read_dir(logs_dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::error!("[cleanup_old_logs] Unable to read logs dir: {:?}", e);
            return 0;
        }
    };
    let current_time = SystemTime::now();
    let mut removed = 0;

    for entry_res in entries {
        let entry = match entry_res {
            Ok(entry) => entry,
            Err(e) => {
                log::error!("[cleanup_old_logs] Error in getting dir entry: {:?}", e);
                continue;
            }
        };
        let path = entry.path();
        if path.extension().map_or(true, |ext| ext != "log") {
            continue;
        }
        let modified_time_res = entry.metadata().and_then(|metadata| metadata.modified());
        let modified_time = match modified_time_res {
            Ok(modified_time) => modified_time,
            Err(e) => {
                log::error!("[cleanup_old_logs] Unable to get last modified time of {:?}: {:?}", &path, e);
                continue;
            }
        };
        // clock skew makes a file look newer than now, keep it
        let Ok(elapsed) = current_time.duration_since(modified_time) else {
            continue;
        };
        if elapsed > retention_period {
            if let Err(e) = fs::remove_file(&path) {
                log::error!("[cleanup_old_logs] Unable to remove old log file: {:?}", e);
                continue;
            }
            removed += 1;
        }
    }
    removed
}
