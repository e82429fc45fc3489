use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use super::sync::SyncOutcome;

fn format_outputs(outcome: &SyncOutcome) -> String {
    let mut lines = format!(
        "updated={}\nversion={}\n",
        outcome.commit_sha().is_some(),
        outcome.version()
    );
    if let Some(sha) = outcome.commit_sha() {
        lines.push_str(&format!("sha={sha}\n"));
    }
    lines
}

/// Appends the run's outputs to the CI step-output file. Best effort.
pub fn write_outputs(path: &Path, outcome: &SyncOutcome) -> bool {
    let file_res = OpenOptions::new().create(true).append(true).open(path);
    let mut file = match file_res {
        Ok(file) => file,
        Err(e) => {
            log::warn!("[write_outputs] Unable to open output file {:?}: {:?}", path, e);
            return false;
        }
    };
    if let Err(e) = file.write_all(format_outputs(outcome).as_bytes()) {
        log::warn!("[write_outputs] Unable to write output file {:?}: {:?}", path, e);
        return false;
    }
    log::debug!("[write_outputs] Wrote outputs to {:?}", path);
    true
}
