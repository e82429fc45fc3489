use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::SyncError;

/// An `owner/name` repository coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSlug {
    owner: String,
    name: String,
}

impl RepoSlug {
    pub fn new(owner: &str, name: &str) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
        }
    }

    pub fn owner(&self) -> &String {
        &self.owner
    }

    pub fn name(&self) -> &String {
        &self.name
    }
}

impl FromStr for RepoSlug {
    type Err = SyncError;

    fn from_str(full_name: &str) -> Result<Self, Self::Err> {
        match full_name.trim().split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner, name))
            }
            _ => Err(SyncError::Config(format!(
                "repository {:?} is not of the form owner/name",
                full_name
            ))),
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrInfo {
    number: u64,
    head_ref: String,
    base_ref: String,
    base_repo: RepoSlug,
    head_repo: RepoSlug,
}

impl PrInfo {
    pub fn new(
        number: u64,
        head_ref: String,
        base_ref: String,
        base_repo: RepoSlug,
        head_repo: RepoSlug,
    ) -> Self {
        Self {
            number,
            head_ref,
            base_ref,
            base_repo,
            head_repo,
        }
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn head_ref(&self) -> &String {
        &self.head_ref
    }

    pub fn base_ref(&self) -> &String {
        &self.base_ref
    }

    pub fn base_repo(&self) -> &RepoSlug {
        &self.base_repo
    }

    pub fn head_repo(&self) -> &RepoSlug {
        &self.head_repo
    }

    /// True when the pull request comes from a fork.
    pub fn is_fork(&self) -> bool {
        self.base_repo != self.head_repo
    }
}
