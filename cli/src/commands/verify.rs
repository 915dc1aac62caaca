use crate::argparse::VerifyArgs;
use envolve_chat::ApiKey;
use envolve_cli::report::verify_report;
use std::error::Error;

pub fn handle_verify_command(args: VerifyArgs, api_key: &ApiKey) -> Result<(), Box<dyn Error>> {
    println!(
        "{}",
        verify_report(api_key, &args.payload, args.max_age_secs)?
    );
    Ok(())
}
