mod argparse;
mod commands;
mod utils;

use argparse::parse_args;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let cli = parse_args();
    utils::init_logger(cli.verbose);

    let api_key = envolve_cli::config::resolve_api_key(cli.api_key)?;
    commands::handle_command(cli.command, &api_key)?;

    Ok(())
}
