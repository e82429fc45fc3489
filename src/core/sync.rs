use crate::utils::{
    config::SyncConfig,
    error::SyncError,
    gitops::{commit_file, push_to_pr_branch},
    pr_info::PrInfo,
    version::{read_version_file, write_version_file, Version},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Unchanged {
        version: Version,
    },
    Updated {
        previous: Version,
        version: Version,
        commit_sha: String,
    },
}

impl SyncOutcome {
    pub fn version(&self) -> &Version {
        match self {
            SyncOutcome::Unchanged { version } => version,
            SyncOutcome::Updated { version, .. } => version,
        }
    }

    pub fn commit_sha(&self) -> Option<&String> {
        match self {
            SyncOutcome::Unchanged { .. } => None,
            SyncOutcome::Updated { commit_sha, .. } => Some(commit_sha),
        }
    }
}

/// The version the file should carry, or `None` when it already matches.
pub fn plan_update(current: &Version, pr_number: u64) -> Option<Version> {
    if current.patch() == pr_number {
        return None;
    }
    Some(current.with_patch(pr_number))
}

/// Rewrites the version file to carry the pull request number, commits and
/// pushes it. A no-op when the patch already equals the number.
pub fn sync_version(config: &SyncConfig, pr: &PrInfo) -> Result<SyncOutcome, SyncError> {
    let version_path = config.version_path();
    let current = read_version_file(&version_path)?;
    let Some(next) = plan_update(&current, pr.number()) else {
        log::info!("[sync_version] Version {} already matches pull request #{}", &current, pr.number());
        return Ok(SyncOutcome::Unchanged { version: current });
    };
    log::info!("[sync_version] Updating version {} -> {}", &current, &next);
    write_version_file(&version_path, &next)?;
    let message = format!("Update version to {next}");
    let commit_sha = commit_file(config, config.version_file(), &message)?;
    push_to_pr_branch(config, pr)?;
    Ok(SyncOutcome::Updated {
        previous: current,
        version: next,
        commit_sha,
    })
}
