use log::LevelFilter;

/// Initialise the global logger, level is "debug" or anything else for info
pub fn setup_logging(level: &str) {
    let filter = match level {
        "debug" => LevelFilter::Debug,
        _ => LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format_target(false)
        .init();
}
