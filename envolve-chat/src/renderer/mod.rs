use crate::markup::render_markup;
use crate::signing::{now_millis, sign_at};
use crate::{ApiKey, Command, EnvolveError, Identity};

/// Returns the script tags that bootstrap the chat widget for `identity`.
///
/// Without an identity, or with an empty first name, the user is rendered
/// anonymous (logout command). Only an invalid API key is an error here.
pub fn render_widget_markup(
    raw_api_key: &str,
    identity: Option<&Identity>,
) -> Result<String, EnvolveError> {
    render_widget_markup_at(raw_api_key, identity, now_millis())
}

pub fn render_widget_markup_at(
    raw_api_key: &str,
    identity: Option<&Identity>,
    timestamp_millis: i64,
) -> Result<String, EnvolveError> {
    let api_key = ApiKey::parse(raw_api_key)?;
    let signed_command = signed_command_at(&api_key, identity, timestamp_millis)?;
    Ok(render_markup(&api_key, Some(&signed_command)))
}

/// Signed login command when `identity` has a first name, logout otherwise.
pub fn signed_command(
    api_key: &ApiKey,
    identity: Option<&Identity>,
) -> Result<String, EnvolveError> {
    signed_command_at(api_key, identity, now_millis())
}

pub fn signed_command_at(
    api_key: &ApiKey,
    identity: Option<&Identity>,
    timestamp_millis: i64,
) -> Result<String, EnvolveError> {
    match identity.and_then(|id| id.login_name().map(|name| (id, name))) {
        Some((identity, first_name)) => {
            login_command_at(api_key, first_name, identity, timestamp_millis)
        }
        None => Ok(logout_command_at(api_key, timestamp_millis)),
    }
}

/// Signed login command string, `<digest>;<timestamp>;<command>`.
///
/// Unlike [`render_widget_markup`], an empty `first_name` is an error.
pub fn login_command(
    api_key: &ApiKey,
    first_name: &str,
    identity: &Identity,
) -> Result<String, EnvolveError> {
    login_command_at(api_key, first_name, identity, now_millis())
}

pub fn login_command_at(
    api_key: &ApiKey,
    first_name: &str,
    identity: &Identity,
    timestamp_millis: i64,
) -> Result<String, EnvolveError> {
    let command = Command::login(first_name, identity)?;
    Ok(sign_at(api_key, &command.to_string(), timestamp_millis).to_string())
}

/// Signed logout command string, `<digest>;<timestamp>;v=0.3,c=logout`.
pub fn logout_command(api_key: &ApiKey) -> String {
    logout_command_at(api_key, now_millis())
}

pub fn logout_command_at(api_key: &ApiKey, timestamp_millis: i64) -> String {
    sign_at(api_key, &Command::logout().to_string(), timestamp_millis).to_string()
}

#[cfg(test)]
mod tests;
