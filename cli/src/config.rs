use crate::CliError;
use anyhow::Context;
use envolve_chat::{ApiKey, Identity};
use std::path::Path;

pub const API_KEY_ENV_VAR: &str = "ENVOLVE_API_KEY";

/// Picks the API key from the flag, falling back to `ENVOLVE_API_KEY`, and
/// validates its shape.
pub fn resolve_api_key(flag: Option<String>) -> Result<ApiKey, CliError> {
    let raw = match flag {
        Some(raw) => raw,
        None => std::env::var(API_KEY_ENV_VAR).map_err(|_| CliError::MissingApiKey)?,
    };
    Ok(ApiKey::parse(&raw)?)
}

pub fn load_identity_file(path: &Path) -> Result<Identity, CliError> {
    let read = || -> anyhow::Result<Identity> {
        let contents = fs_err::read_to_string(path)?;
        serde_json::from_str(&contents).context("invalid identity JSON")
    };
    read().map_err(|e| CliError::IdentityFile(path.to_path_buf(), e))
}

/// Layers explicit identity values over an optional base identity.
pub fn merge_identity(
    base: Option<Identity>,
    first_name: Option<String>,
    last_name: Option<String>,
    pic: Option<String>,
    profile_html: Option<String>,
    is_admin: Option<bool>,
) -> Identity {
    let mut identity = base.unwrap_or_default();
    if first_name.is_some() {
        identity.first_name = first_name;
    }
    if last_name.is_some() {
        identity.last_name = last_name;
    }
    if pic.is_some() {
        identity.pic = pic;
    }
    if profile_html.is_some() {
        identity.profile_html = profile_html;
    }
    if let Some(is_admin) = is_admin {
        identity.is_admin = is_admin;
    }
    identity
}
