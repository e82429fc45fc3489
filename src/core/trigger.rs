use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::utils::{config::SyncConfig, error::SyncError, pr_info::{PrInfo, RepoSlug}};

const ACCEPTED_ACTIONS: [&str; 3] = ["opened", "reopened", "synchronize"];

#[derive(Debug, PartialEq, Eq)]
pub enum TriggerDecision {
    Run(PrInfo),
    Skip(String),
}

fn parse_field(path: &[&str], msg: &Value) -> Option<String> {
    let mut field_val = msg;
    for key in path {
        let next_opt = field_val.get(*key);
        if next_opt.is_none() {
            log::error!("[parse_field] {} not found in event payload", path.join("."));
            return None;
        }
        field_val = next_opt?;
    }
    match field_val {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => {
            log::error!("[parse_field] {} has unexpected type: {}", path.join("."), field_val);
            None
        }
    }
}

fn required_field(path: &[&str], msg: &Value) -> Result<String, SyncError> {
    parse_field(path, msg)
        .ok_or_else(|| SyncError::Event(format!("missing field {}", path.join("."))))
}

fn parse_pr_number(raw: &str) -> Result<u64, SyncError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| SyncError::Event(format!("pull request number {:?} is not an integer: {e}", raw)))
}

/// Reads a `pull_request` event payload into its action and descriptor.
pub fn parse_event_payload(payload: &Value) -> Result<(String, PrInfo), SyncError> {
    let action = required_field(&["action"], payload)?;
    let number = parse_pr_number(&required_field(&["pull_request", "number"], payload)?)?;
    let head_ref = required_field(&["pull_request", "head", "ref"], payload)?;
    let base_ref = required_field(&["pull_request", "base", "ref"], payload)?;
    let base_repo: RepoSlug =
        required_field(&["pull_request", "base", "repo", "full_name"], payload)?.parse()?;
    let head_repo: RepoSlug =
        required_field(&["pull_request", "head", "repo", "full_name"], payload)?.parse()?;
    Ok((action, PrInfo::new(number, head_ref, base_ref, base_repo, head_repo)))
}

fn read_event_file(path: &Path) -> Result<Value, SyncError> {
    let data = fs::read(path).map_err(|source| SyncError::EventIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice::<Value>(&data)
        .map_err(|e| SyncError::Event(format!("payload is not valid json: {e}")))
}

fn apply_overrides(pr: PrInfo, lookup: &dyn Fn(&str) -> Option<String>) -> Result<PrInfo, SyncError> {
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let number = match var("PR_NUMBER") {
        Some(raw) => parse_pr_number(&raw)?,
        None => pr.number(),
    };
    let head_ref = var("PR_HEAD_REF").unwrap_or_else(|| pr.head_ref().clone());
    let base_repo = match var("PR_BASE_REPO") {
        Some(raw) => raw.parse()?,
        None => pr.base_repo().clone(),
    };
    let head_repo = match var("PR_HEAD_REPO") {
        Some(raw) => raw.parse()?,
        None => pr.head_repo().clone(),
    };
    Ok(PrInfo::new(number, head_ref, pr.base_ref().clone(), base_repo, head_repo))
}

fn pr_from_env(config: &SyncConfig, lookup: &dyn Fn(&str) -> Option<String>) -> Result<PrInfo, SyncError> {
    let var = |key: &str| {
        lookup(key)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| SyncError::Config(format!("{key} must be set when GITHUB_EVENT_PATH is absent")))
    };
    let number = parse_pr_number(&var("PR_NUMBER")?)?;
    let head_ref = var("PR_HEAD_REF")?;
    let base_repo: RepoSlug = var("PR_BASE_REPO")?.parse()?;
    let head_repo = match lookup("PR_HEAD_REPO").filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw.parse()?,
        None => base_repo.clone(),
    };
    Ok(PrInfo::new(number, head_ref, config.default_branch().clone(), base_repo, head_repo))
}

/// Decides whether this run applies and to which pull request.
pub fn resolve_trigger(
    config: &SyncConfig,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<TriggerDecision, SyncError> {
    let Some(event_path) = config.event_path() else {
        let pr = pr_from_env(config, lookup)?;
        log::info!("[resolve_trigger] No event payload, using pull request #{} from environment", pr.number());
        return Ok(TriggerDecision::Run(pr));
    };
    let payload = read_event_file(event_path)?;
    let (action, pr) = parse_event_payload(&payload)?;
    log::debug!("[resolve_trigger] action = {}, pr = {:?}", &action, &pr);
    if !ACCEPTED_ACTIONS.contains(&action.as_str()) {
        return Ok(TriggerDecision::Skip(format!("action {:?} is not handled", action)));
    }
    if pr.base_ref() != config.default_branch() {
        return Ok(TriggerDecision::Skip(format!(
            "pull request targets {:?}, not {:?}",
            pr.base_ref(),
            config.default_branch()
        )));
    }
    let pr = apply_overrides(pr, lookup)?;
    Ok(TriggerDecision::Run(pr))
}
