use crate::CliError;
use envolve_chat::{
    decode_field, now_millis, render_widget_markup, signed_command, verify, verify_fresh, ApiKey,
    Identity, SignedPayload, ENCODED_FIELDS,
};

/// Widget markup for `envolve render`.
pub fn render_report(api_key: &ApiKey, identity: &Identity) -> Result<String, CliError> {
    log::info!(
        "Rendering widget markup for site {} ({})",
        api_key.site_id(),
        identity.login_name().unwrap_or("anonymous")
    );
    Ok(render_widget_markup(api_key.full_key(), Some(identity))?)
}

/// Signed login or logout command for `envolve sign`.
pub fn sign_report(api_key: &ApiKey, identity: &Identity) -> Result<String, CliError> {
    Ok(signed_command(api_key, Some(identity))?)
}

/// Verification result and decoded fields for `envolve verify`.
pub fn verify_report(
    api_key: &ApiKey,
    payload: &str,
    max_age_secs: Option<u64>,
) -> Result<String, CliError> {
    verify_report_at(api_key, payload, max_age_secs, now_millis())
}

pub fn verify_report_at(
    api_key: &ApiKey,
    payload: &str,
    max_age_secs: Option<u64>,
    now_millis: i64,
) -> Result<String, CliError> {
    let payload: SignedPayload = payload.trim().parse()?;
    match max_age_secs {
        Some(max_age_secs) => {
            let max_age_millis =
                i64::try_from(max_age_secs.saturating_mul(1000)).unwrap_or(i64::MAX);
            verify_fresh(api_key, &payload, now_millis, max_age_millis)?
        }
        None => verify(api_key, &payload)?,
    }

    let mut lines = vec![format!("Signature OK (signed at {} ms)", payload.timestamp_millis)];
    for field in payload.command.split(',') {
        match field.split_once('=') {
            Some((key, value)) if ENCODED_FIELDS.contains(&key) => {
                lines.push(format!("  {} = {}", key, decode_field(value)?))
            }
            Some((key, value)) => lines.push(format!("  {} = {}", key, value)),
            None => log::warn!("Unexpected command field without '=': {}", field),
        }
    }
    Ok(lines.join("\n"))
}
