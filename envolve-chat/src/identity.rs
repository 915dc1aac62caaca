use serde::{Deserialize, Serialize};

/// User identity shown in the chat widget.
///
/// An identity without a first name is anonymous and renders the logout flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Absolute URL of the user's avatar.
    pub pic: Option<String>,
    /// HTML inserted into the user's profile rollover.
    pub profile_html: Option<String>,
    pub is_admin: bool,
}

impl Identity {
    pub fn new(first_name: impl Into<String>) -> Self {
        Identity {
            first_name: Some(first_name.into()),
            ..Default::default()
        }
    }

    pub fn anonymous() -> Self {
        Identity::default()
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_pic(mut self, pic: impl Into<String>) -> Self {
        self.pic = Some(pic.into());
        self
    }

    pub fn with_profile_html(mut self, profile_html: impl Into<String>) -> Self {
        self.profile_html = Some(profile_html.into());
        self
    }

    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    /// First name if present and non-empty.
    pub fn login_name(&self) -> Option<&str> {
        self.first_name.as_deref().filter(|name| !name.is_empty())
    }
}
