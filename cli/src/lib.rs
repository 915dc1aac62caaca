pub mod config;
pub mod report;

use envolve_chat::EnvolveError;
use std::path::PathBuf;

/// Error type for CLI failures outside of clap's own argument validation
#[derive(Debug)]
pub enum CliError {
    MissingApiKey,
    IdentityFile(PathBuf, anyhow::Error),
    Envolve(EnvolveError),
}

impl From<EnvolveError> for CliError {
    fn from(error: EnvolveError) -> Self {
        CliError::Envolve(error)
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::MissingApiKey => {
                write!(
                    f,
                    "No Envolve API key given.\n\nPass --api-key <site_id>-<secret_key> or set {} (a .env file in the working directory is honoured).",
                    config::API_KEY_ENV_VAR
                )
            }
            CliError::IdentityFile(path, e) => {
                write!(
                    f,
                    "Failed to load identity file {}: {e:#}\n\nExpected a JSON object with any of: first_name, last_name, pic, profile_html, is_admin",
                    path.display()
                )
            }
            CliError::Envolve(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::MissingApiKey => None,
            CliError::IdentityFile(_, e) => Some(e.as_ref()),
            CliError::Envolve(e) => Some(e),
        }
    }
}
