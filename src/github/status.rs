use serde::{Deserialize, Serialize};

use crate::utils::{pr_info::RepoSlug, reqwest_client::get_client};

use super::config::{prepare_headers, AuthScheme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusState {
    Success,
    Failure,
    Pending,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitStatus {
    state: StatusState,
    context: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl CommitStatus {
    pub fn new(state: StatusState, context: &str, description: Option<String>) -> Self {
        Self {
            state,
            context: context.to_string(),
            description,
        }
    }

    pub fn state(&self) -> StatusState {
        self.state
    }

    pub fn context(&self) -> &String {
        &self.context
    }
}

fn prepare_status_url(api_url: &str, repo: &RepoSlug, sha: &str) -> String {
    let url = format!(
        "{}/repos/{}/{}/statuses/{}",
        api_url.trim_end_matches('/'),
        repo.owner(),
        repo.name(),
        sha
    );
    log::debug!("[prepare_status_url] status url = {}", &url);
    url
}

/// Posts `status` against `sha` in `repo`. Returns whether the platform
/// accepted it; every failure is logged here and never propagated.
pub async fn post_commit_status(
    api_url: &str,
    repo: &RepoSlug,
    sha: &str,
    status: &CommitStatus,
    access_token: &str,
    scheme: AuthScheme,
) -> bool {
    let Some(headers) = prepare_headers(access_token, scheme) else {
        log::warn!("[post_commit_status] Unable to prepare headers for {}", repo);
        return false;
    };
    let url = prepare_status_url(api_url, repo, sha);
    let client = get_client();
    let response_res = client.post(&url).headers(headers).json(status).send().await;
    let response = match response_res {
        Ok(response) => response,
        Err(e) => {
            log::warn!("[post_commit_status] Failed to send status to {}: {:?}", repo, e);
            return false;
        }
    };
    if !response.status().is_success() {
        let code = response.status();
        log::warn!(
            "[post_commit_status] {} rejected status for {}, status: {}, body: {:?}",
            repo, sha, code, response.text().await
        );
        return false;
    }
    log::info!(
        "[post_commit_status] Posted {:?} status {:?} to {}@{}",
        status.state(), status.context(), repo, sha
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[test]
    fn status_serializes_lowercase_state() {
        let status = CommitStatus::new(StatusState::Success, "update_version", None);
        assert_eq!(
            serde_json::to_value(&status).unwrap(),
            json!({"state": "success", "context": "update_version"})
        );
    }

    #[tokio::test]
    async fn posts_status_with_token_scheme() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/repos/owner/repo/statuses/abc123")
            .match_header("authorization", "token t1")
            .match_header("accept", "application/vnd.github+json")
            .match_body(Matcher::PartialJson(json!({
                "state": "success",
                "context": "update_version",
            })))
            .with_status(201)
            .with_body("{}")
            .create_async()
            .await;
        let status = CommitStatus::new(StatusState::Success, "update_version", None);
        let ok = post_commit_status(
            &server.url(),
            &RepoSlug::new("owner", "repo"),
            "abc123",
            &status,
            "t1",
            AuthScheme::Token,
        )
        .await;
        assert!(ok);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn forbidden_response_is_reported_as_failure() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/repos/owner/repo/statuses/abc123")
            .with_status(403)
            .with_body(r#"{"message":"Resource not accessible by integration"}"#)
            .create_async()
            .await;
        let status = CommitStatus::new(StatusState::Success, "update_version", None);
        let ok = post_commit_status(
            &server.url(),
            &RepoSlug::new("owner", "repo"),
            "abc123",
            &status,
            "t2",
            AuthScheme::Bearer,
        )
        .await;
        assert!(!ok);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn unreachable_host_is_reported_as_failure() {
        let status = CommitStatus::new(StatusState::Failure, "update_version", None);
        let ok = post_commit_status(
            "http://127.0.0.1:1",
            &RepoSlug::new("owner", "repo"),
            "abc123",
            &status,
            "t",
            AuthScheme::Token,
        )
        .await;
        assert!(!ok);
    }
}
