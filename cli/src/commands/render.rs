use super::identity_from_args;
use crate::argparse::IdentityArgs;
use envolve_chat::ApiKey;
use envolve_cli::report::{render_report, sign_report};
use std::error::Error;

pub fn handle_render_command(args: IdentityArgs, api_key: &ApiKey) -> Result<(), Box<dyn Error>> {
    let identity = identity_from_args(args)?;
    println!("{}", render_report(api_key, &identity)?);
    Ok(())
}

pub fn handle_sign_command(args: IdentityArgs, api_key: &ApiKey) -> Result<(), Box<dyn Error>> {
    let identity = identity_from_args(args)?;
    println!("{}", sign_report(api_key, &identity)?);
    Ok(())
}
