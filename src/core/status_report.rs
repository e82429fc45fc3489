use std::fmt;

use crate::github::{
    config::AuthScheme,
    status::{post_commit_status, CommitStatus, StatusState},
};
use crate::utils::{
    config::{SyncConfig, STATUS_CONTEXT},
    pr_info::{PrInfo, RepoSlug},
};

/// Credential/transport pair used for one status attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Workflow API token, `token` scheme.
    WorkflowToken,
    /// Second token, `Bearer` scheme.
    StatusBearer,
}

impl Transport {
    pub const ALL: [Transport; 2] = [Transport::WorkflowToken, Transport::StatusBearer];

    fn credentials<'a>(&self, config: &'a SyncConfig) -> Option<(&'a String, AuthScheme)> {
        match self {
            Transport::WorkflowToken => Some((config.github_token(), AuthScheme::Token)),
            Transport::StatusBearer => config.status_token().map(|t| (t, AuthScheme::Bearer)),
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::WorkflowToken => write!(f, "workflow-token"),
            Transport::StatusBearer => write!(f, "status-bearer"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusAttempt {
    pub repo: RepoSlug,
    pub transport: Transport,
    pub delivered: bool,
}

pub fn update_status(state: StatusState, description: &str) -> CommitStatus {
    CommitStatus::new(state, STATUS_CONTEXT, Some(description.to_string()))
}

/// Posts `status` for `sha` to the base and head repositories through both
/// transports. Every attempt runs regardless of how the others went.
pub async fn report_status(
    config: &SyncConfig,
    pr: &PrInfo,
    sha: &str,
    status: &CommitStatus,
) -> Vec<StatusAttempt> {
    let repos = [pr.base_repo(), pr.head_repo()];
    let mut attempts = Vec::with_capacity(repos.len() * Transport::ALL.len());
    for repo in repos {
        for transport in Transport::ALL {
            let delivered = match transport.credentials(config) {
                Some((token, scheme)) => {
                    post_commit_status(config.api_url(), repo, sha, status, token, scheme).await
                }
                None => {
                    log::warn!("[report_status] No credentials for {} transport, skipping {}", transport, repo);
                    false
                }
            };
            if !delivered {
                log::warn!("[report_status] Status for {} via {} not delivered", repo, transport);
            }
            attempts.push(StatusAttempt {
                repo: repo.clone(),
                transport,
                delivered,
            });
        }
    }
    if !attempts.iter().any(|a| a.delivered) {
        log::warn!(
            "[report_status] None of the {} status attempts for {} succeeded",
            attempts.len(), sha
        );
    }
    attempts
}
