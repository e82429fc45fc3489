pub mod config;
pub mod error;
pub mod gitops;
pub mod pr_info;
pub mod reqwest_client;
pub mod version;
