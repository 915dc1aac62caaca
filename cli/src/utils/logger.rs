/// `RUST_LOG` wins when set, otherwise `info`, or `debug` with `--verbose`.
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string());
    pretty_env_logger::formatted_builder()
        .parse_filters(&filter)
        .init();
}
