use crate::{EnvolveError, Identity, PROTOCOL_VERSION};
use base64::{engine::general_purpose::URL_SAFE, Engine};

/// Base64 with the `-`/`_` alphabet the Envolve command format expects.
///
/// Padding is kept and the output never contains line breaks.
pub fn encode_field(value: &str) -> String {
    URL_SAFE.encode(value.as_bytes())
}

/// Inverse of [`encode_field`].
pub fn decode_field(encoded: &str) -> Result<String, EnvolveError> {
    let bytes = URL_SAFE
        .decode(encoded)
        .map_err(|e| EnvolveError::MalformedPayload(format!("field {:?}: {}", encoded, e)))?;
    String::from_utf8(bytes)
        .map_err(|e| EnvolveError::MalformedPayload(format!("field {:?}: {}", encoded, e)))
}

/// Fields whose values go through [`encode_field`].
pub const ENCODED_FIELDS: [&str; 4] = ["fn", "ln", "pic", "prof"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Login,
    Logout,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Login => "login",
            CommandKind::Logout => "logout",
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical, comma-joined `key=value` command understood by the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    kind: CommandKind,
    fields: Vec<(&'static str, String)>,
}

impl Command {
    /// Builds a login command. `identity.first_name` is not consulted, the
    /// explicit `first_name` wins.
    pub fn login(first_name: &str, identity: &Identity) -> Result<Self, EnvolveError> {
        if first_name.is_empty() {
            return Err(EnvolveError::MissingFirstName);
        }
        let mut command = Command::header(CommandKind::Login);
        command.push("fn", encode_field(first_name));
        if let Some(last_name) = &identity.last_name {
            command.push("ln", encode_field(last_name));
        }
        if let Some(pic) = &identity.pic {
            command.push("pic", encode_field(pic));
        }
        if let Some(profile_html) = &identity.profile_html {
            command.push("prof", encode_field(profile_html));
        }
        let admin = if identity.is_admin { "t" } else { "f" };
        command.push("admin", admin.to_string());
        Ok(command)
    }

    pub fn logout() -> Self {
        Command::header(CommandKind::Logout)
    }

    fn header(kind: CommandKind) -> Self {
        let mut command = Command {
            kind,
            fields: Vec::with_capacity(7),
        };
        command.push("v", PROTOCOL_VERSION.to_string());
        command.push("c", kind.as_str().to_string());
        command
    }

    fn push(&mut self, key: &'static str, value: String) {
        self.fields.push((key, value));
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (key, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}
