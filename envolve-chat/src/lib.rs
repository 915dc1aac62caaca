//! Signed commands and bootstrap markup for the Envolve chat widget.
//!
//! ```
//! use envolve_chat::{render_widget_markup, Identity};
//!
//! let identity = Identity::new("Jane").with_last_name("Doe");
//! let html = render_widget_markup("123-abcdefghijklmnopqrs", Some(&identity)).unwrap();
//! assert!(html.starts_with("<!-- Envolve Chat -->"));
//! ```
pub mod api_key;
pub mod command;
pub mod errors;
pub mod identity;
pub mod markup;
pub mod renderer;
pub mod signing;

pub use api_key::ApiKey;
pub use command::{decode_field, encode_field, Command, CommandKind, ENCODED_FIELDS};
pub use errors::EnvolveError;
pub use identity::Identity;
pub use markup::render_markup;
pub use renderer::*;
pub use signing::{now_millis, sign, sign_at, verify, verify_fresh, SignedPayload};

/// Protocol version sent as the `v=` field of every command.
pub const PROTOCOL_VERSION: &str = "0.3";
/// Widget script loader, requested over the page's own scheme.
pub const SCRIPT_LOADER_HOST: &str = "d.envolve.com/env.nocache.js";
