mod render;
mod verify;

use crate::argparse::{Commands, IdentityArgs};
use envolve_chat::{ApiKey, Identity};
use envolve_cli::config::{load_identity_file, merge_identity};
use envolve_cli::CliError;
pub use render::{handle_render_command, handle_sign_command};
use std::error::Error;
pub use verify::handle_verify_command;

pub fn handle_command(command: Commands, api_key: &ApiKey) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Render(args) => handle_render_command(args, api_key),
        Commands::Sign(args) => handle_sign_command(args, api_key),
        Commands::Verify(args) => handle_verify_command(args, api_key),
    }
}

fn identity_from_args(args: IdentityArgs) -> Result<Identity, CliError> {
    let base = args
        .identity_file
        .as_deref()
        .map(load_identity_file)
        .transpose()?;
    Ok(merge_identity(
        base,
        args.first_name,
        args.last_name,
        args.pic,
        args.profile_html,
        args.admin,
    ))
}
