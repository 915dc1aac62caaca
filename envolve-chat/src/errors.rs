#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvolveError {
    InvalidCredential,
    MissingFirstName,
    MalformedPayload(String),
    SignatureMismatch,
    PayloadExpired { age_millis: i64 },
}

impl std::fmt::Display for EnvolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvolveError::InvalidCredential => write!(f, "Invalid or missing Envolve API Key."),
            EnvolveError::MissingFirstName => write!(
                f,
                "You must provide at least a first name. If you are providing a username, use it for the first name."
            ),
            EnvolveError::MalformedPayload(msg) => write!(f, "Malformed signed command: {}", msg),
            EnvolveError::SignatureMismatch => {
                write!(f, "Signature does not match the command and timestamp")
            }
            EnvolveError::PayloadExpired { age_millis } => {
                write!(f, "Signed command is outside the accepted window (age {} ms)", age_millis)
            }
        }
    }
}

impl std::error::Error for EnvolveError {}
