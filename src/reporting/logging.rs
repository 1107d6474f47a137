use log::{debug, error, info};

/// Initialize the logger.
///
/// Level comes from `RUST_LOG`; logging is off by default so normal runs
/// print nothing beyond the status line.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized");
}

/// Log scan completion
pub fn log_scan_complete(total: usize) {
    info!("Scan complete: {total} URL(s) found");
}

/// Log filter completion
pub fn log_filter_complete(total: usize, filtered: usize) {
    info!("Filter complete: {filtered} of {total} URL(s) contain the marker");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
