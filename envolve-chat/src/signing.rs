use crate::{ApiKey, EnvolveError};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use std::str::FromStr;

type HmacSha1 = Hmac<Sha1>;

const PAYLOAD_SEPARATOR: char = ';';

/// Command together with the time it was signed and its HMAC-SHA1 digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload {
    pub hex_digest: String,
    pub timestamp_millis: i64,
    pub command: String,
}

impl std::fmt::Display for SignedPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.hex_digest,
            self.timestamp_millis,
            self.command,
            sep = PAYLOAD_SEPARATOR
        )
    }
}

impl FromStr for SignedPayload {
    type Err = EnvolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, PAYLOAD_SEPARATOR);
        let (hex_digest, timestamp, command) = match (parts.next(), parts.next(), parts.next()) {
            (Some(digest), Some(timestamp), Some(command)) => (digest, timestamp, command),
            _ => {
                return Err(EnvolveError::MalformedPayload(
                    "expected <digest>;<timestamp>;<command>".to_string(),
                ))
            }
        };
        if hex_digest.is_empty() || hex::decode(hex_digest).is_err() {
            return Err(EnvolveError::MalformedPayload(format!(
                "digest is not hex: {:?}",
                hex_digest
            )));
        }
        let timestamp_millis = timestamp.parse::<i64>().map_err(|e| {
            EnvolveError::MalformedPayload(format!("bad timestamp {:?}: {}", timestamp, e))
        })?;
        Ok(SignedPayload {
            hex_digest: hex_digest.to_string(),
            timestamp_millis,
            command: command.to_string(),
        })
    }
}

/// Current wall-clock time in milliseconds, truncated to whole seconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp() * 1000
}

fn keyed_mac(api_key: &ApiKey, timestamp_millis: i64, command: &str) -> HmacSha1 {
    let mut mac = HmacSha1::new_from_slice(api_key.secret_key().as_bytes())
        .expect("HMAC accepts any key size");
    mac.update(format!("{}{}{}", timestamp_millis, PAYLOAD_SEPARATOR, command).as_bytes());
    mac
}

pub fn sign(api_key: &ApiKey, command: &str) -> SignedPayload {
    sign_at(api_key, command, now_millis())
}

/// Signs `"<timestamp_millis>;<command>"` with the key's secret.
pub fn sign_at(api_key: &ApiKey, command: &str, timestamp_millis: i64) -> SignedPayload {
    let mac = keyed_mac(api_key, timestamp_millis, command);
    let hex_digest = hex::encode(mac.finalize().into_bytes());
    log::debug!(
        "Signed {}-byte command for site {} at {}",
        command.len(),
        api_key.site_id(),
        timestamp_millis
    );
    SignedPayload {
        hex_digest,
        timestamp_millis,
        command: command.to_string(),
    }
}

/// Checks the digest against the command and timestamp, in constant time.
pub fn verify(api_key: &ApiKey, payload: &SignedPayload) -> Result<(), EnvolveError> {
    let digest = hex::decode(&payload.hex_digest)
        .map_err(|e| EnvolveError::MalformedPayload(format!("digest is not hex: {}", e)))?;
    keyed_mac(api_key, payload.timestamp_millis, &payload.command)
        .verify_slice(&digest)
        .map_err(|_| {
            log::warn!("Signature mismatch for site {}", api_key.site_id());
            EnvolveError::SignatureMismatch
        })
}

/// Like [`verify`], but also rejects payloads signed more than `max_age_millis`
/// away from `now_millis`, in either direction.
pub fn verify_fresh(
    api_key: &ApiKey,
    payload: &SignedPayload,
    now_millis: i64,
    max_age_millis: i64,
) -> Result<(), EnvolveError> {
    let age_millis = now_millis.saturating_sub(payload.timestamp_millis);
    if age_millis.saturating_abs() > max_age_millis {
        return Err(EnvolveError::PayloadExpired { age_millis });
    }
    verify(api_key, payload)
}
