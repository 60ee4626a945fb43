pub fn setup_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();

    let default_level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    builder.filter(None, default_level);

    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }

    builder.init();
}
