use std::path::PathBuf;

use super::error::SyncError;

pub const DEFAULT_VERSION_FILE: &str = "qick_lib/qick/VERSION";
pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_SERVER_URL: &str = "https://github.com";
pub const DEFAULT_BOT_NAME: &str = "github-actions[bot]";
pub const DEFAULT_BOT_EMAIL: &str = "41898282+github-actions[bot]@users.noreply.github.com";
pub const STATUS_CONTEXT: &str = "update_version";

/// Run configuration, read once at startup from the environment.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    github_token: String,
    status_token: Option<String>,
    version_file: PathBuf,
    default_branch: String,
    api_url: String,
    server_url: String,
    work_dir: PathBuf,
    bot_name: String,
    bot_email: String,
    skip_checkout: bool,
    event_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
}

fn non_empty(lookup: &dyn Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl SyncConfig {
    pub fn from_env() -> Result<Self, SyncError> {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, so tests need not touch
    /// the process environment.
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, SyncError> {
        let github_token = non_empty(lookup, "GITHUB_TOKEN")
            .ok_or_else(|| SyncError::Config("GITHUB_TOKEN must be set".to_string()))?;
        let status_token = non_empty(lookup, "STATUS_TOKEN");
        if status_token.is_none() {
            log::warn!("[SyncConfig::from_lookup] STATUS_TOKEN not set, bearer status attempts will fail");
        }
        let skip_checkout = match non_empty(lookup, "SKIP_CHECKOUT") {
            None => false,
            Some(value) => parse_flag(&value).ok_or_else(|| {
                SyncError::Config(format!("SKIP_CHECKOUT has invalid value {:?}", value))
            })?,
        };
        let config = Self {
            github_token,
            status_token,
            version_file: PathBuf::from(
                non_empty(lookup, "VERSION_FILE").unwrap_or_else(|| DEFAULT_VERSION_FILE.to_string()),
            ),
            default_branch: non_empty(lookup, "DEFAULT_BRANCH")
                .unwrap_or_else(|| DEFAULT_BRANCH.to_string()),
            api_url: non_empty(lookup, "GITHUB_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            server_url: non_empty(lookup, "GITHUB_SERVER_URL")
                .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            work_dir: PathBuf::from(non_empty(lookup, "WORK_DIR").unwrap_or_else(|| ".".to_string())),
            bot_name: non_empty(lookup, "BOT_NAME").unwrap_or_else(|| DEFAULT_BOT_NAME.to_string()),
            bot_email: non_empty(lookup, "BOT_EMAIL")
                .unwrap_or_else(|| DEFAULT_BOT_EMAIL.to_string()),
            skip_checkout,
            event_path: non_empty(lookup, "GITHUB_EVENT_PATH").map(PathBuf::from),
            output_path: non_empty(lookup, "GITHUB_OUTPUT").map(PathBuf::from),
        };
        log::debug!(
            "[SyncConfig::from_lookup] version_file = {:?}, default_branch = {}, api_url = {}, work_dir = {:?}",
            &config.version_file, &config.default_branch, &config.api_url, &config.work_dir
        );
        Ok(config)
    }

    pub fn github_token(&self) -> &String {
        &self.github_token
    }

    pub fn status_token(&self) -> Option<&String> {
        self.status_token.as_ref()
    }

    /// Version file path, relative paths resolved against the working copy.
    pub fn version_path(&self) -> PathBuf {
        self.work_dir.join(&self.version_file)
    }

    pub fn version_file(&self) -> &PathBuf {
        &self.version_file
    }

    pub fn default_branch(&self) -> &String {
        &self.default_branch
    }

    pub fn api_url(&self) -> &String {
        &self.api_url
    }

    pub fn server_url(&self) -> &String {
        &self.server_url
    }

    pub fn work_dir(&self) -> &PathBuf {
        &self.work_dir
    }

    pub fn bot_name(&self) -> &String {
        &self.bot_name
    }

    pub fn bot_email(&self) -> &String {
        &self.bot_email
    }

    pub fn skip_checkout(&self) -> bool {
        self.skip_checkout
    }

    pub fn event_path(&self) -> Option<&PathBuf> {
        self.event_path.as_ref()
    }

    pub fn output_path(&self) -> Option<&PathBuf> {
        self.output_path.as_ref()
    }
}
