use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};

const ACCEPT_VALUE: &str = "application/vnd.github+json";
const USER_AGENT_VALUE: &str = "version-sync";

/// How the access token is presented in the `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: token <t>`
    Token,
    /// `Authorization: Bearer <t>`
    Bearer,
}

impl AuthScheme {
    pub fn prefix(&self) -> &'static str {
        match self {
            AuthScheme::Token => "token",
            AuthScheme::Bearer => "Bearer",
        }
    }
}

pub fn prepare_headers(access_token: &str, scheme: AuthScheme) -> Option<HeaderMap> {
    let mut headers = HeaderMap::new();

    let auth_header_res = HeaderValue::from_str(&format!("{} {}", scheme.prefix(), access_token));
    let mut header_authval = match auth_header_res {
        Ok(val) => val,
        Err(e) => {
            log::error!("[prepare_headers] Invalid auth header: {:?}", e);
            return None;
        }
    };
    header_authval.set_sensitive(true);
    headers.insert(AUTHORIZATION, header_authval);
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    Some(headers)
}
