use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "envolve",
    about = "Render signed Envolve chat widget commands and markup",
    version,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Envolve API key, <site_id>-<secret_key>. Defaults to $ENVOLVE_API_KEY
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Pick which subcommand to use
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the script tags that bootstrap the chat widget
    Render(IdentityArgs),
    /// Print only the signed login or logout command
    Sign(IdentityArgs),
    /// Check a signed command against the API key
    Verify(VerifyArgs),
}

#[derive(Args)]
pub struct IdentityArgs {
    /// JSON file with first_name, last_name, pic, profile_html and is_admin
    #[arg(long)]
    pub identity_file: Option<PathBuf>,

    /// User's first name; the user is anonymous without one
    #[arg(long)]
    pub first_name: Option<String>,

    /// User's last name
    #[arg(long)]
    pub last_name: Option<String>,

    /// Absolute URL of the user's avatar
    #[arg(long)]
    pub pic: Option<String>,

    /// HTML shown in the user's profile rollover
    #[arg(long)]
    pub profile_html: Option<String>,

    /// Chat admin status; a bare --admin means true, --admin=false overrides the file
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub admin: Option<bool>,
}

#[derive(Args)]
pub struct VerifyArgs {
    /// Signed command, <digest>;<timestamp>;<command>
    pub payload: String,

    /// Also reject commands signed more than this many seconds ago
    #[arg(long)]
    pub max_age_secs: Option<u64>,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
