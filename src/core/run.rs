use crate::github::status::StatusState;
use crate::utils::{config::SyncConfig, error::SyncError, gitops::checkout_pr};

use super::outputs::write_outputs;
use super::status_report::{report_status, update_status};
use super::sync::{sync_version, SyncOutcome};
use super::trigger::{resolve_trigger, TriggerDecision};

/// Whole pipeline: trigger filter, checkout, sync, push, status, outputs.
/// Only the unrecoverable steps can return an error.
pub async fn run(
    config: &SyncConfig,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<Option<SyncOutcome>, SyncError> {
    let pr = match resolve_trigger(config, lookup)? {
        TriggerDecision::Run(pr) => pr,
        TriggerDecision::Skip(reason) => {
            log::info!("[run] Skipping: {}", reason);
            return Ok(None);
        }
    };
    log::info!(
        "[run] Pull request #{} {}:{} -> {}:{}",
        pr.number(), pr.head_repo(), pr.head_ref(), pr.base_repo(), pr.base_ref()
    );
    if pr.is_fork() {
        log::info!("[run] Pull request comes from fork {}", pr.head_repo());
    }
    if config.skip_checkout() {
        log::info!("[run] Checkout skipped, using working copy at {:?}", config.work_dir());
    } else {
        checkout_pr(config, &pr)?;
    }
    let outcome = sync_version(config, &pr)?;
    if let SyncOutcome::Updated { previous, version, commit_sha } = &outcome {
        log::info!("[run] Version {} -> {} pushed as {}", previous, version, commit_sha);
        let status = update_status(
            StatusState::Success,
            &format!("Version set to {version}"),
        );
        let attempts = report_status(config, &pr, commit_sha, &status).await;
        let delivered = attempts.iter().filter(|a| a.delivered).count();
        log::info!("[run] {}/{} status attempts delivered", delivered, attempts.len());
    }
    if let Some(output_path) = config.output_path() {
        write_outputs(output_path, &outcome);
    }
    Ok(Some(outcome))
}
