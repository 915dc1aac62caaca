use crate::EnvolveError;
use std::str::FromStr;

const KEY_SEPARATOR: char = '-';

/// Site credential issued by Envolve, in the form `<site_id>-<secret_key>`.
///
/// The site id is public and ends up in the page markup, the secret key is only
/// used to key the command signature.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    site_id: String,
    secret_key: String,
    full_key: String,
}

impl ApiKey {
    pub fn parse(raw: &str) -> Result<Self, EnvolveError> {
        let pieces: Vec<&str> = raw.trim().split(KEY_SEPARATOR).collect();
        match pieces.as_slice() {
            [site_id, secret_key] if !site_id.is_empty() && !secret_key.is_empty() => Ok(ApiKey {
                site_id: site_id.to_string(),
                secret_key: secret_key.to_string(),
                full_key: format!("{}{}{}", site_id, KEY_SEPARATOR, secret_key),
            }),
            _ => {
                log::warn!(
                    "Rejected Envolve API key: {}",
                    describe_rejection(&pieces)
                );
                Err(EnvolveError::InvalidCredential)
            }
        }
    }

    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn full_key(&self) -> &str {
        &self.full_key
    }
}

fn describe_rejection(pieces: &[&str]) -> String {
    match pieces.len() {
        2 => "empty segment".to_string(),
        n => format!("{} segment(s), expected 2", n),
    }
}

impl FromStr for ApiKey {
    type Err = EnvolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApiKey::parse(s)
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey")
            .field("site_id", &self.site_id)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
