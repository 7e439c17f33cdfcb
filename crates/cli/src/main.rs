use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use trolley_core::config::{AppConfig, LoadOptions, LogFormat};

fn main() -> ExitCode {
    init_tracing();
    trolley_cli::run()
}

fn init_tracing() {
    // Command output goes to stdout as JSON; diagnostics stay on stderr.
    let logging = AppConfig::load(LoadOptions::default())
        .map(|config| config.logging)
        .unwrap_or_else(|_| AppConfig::default().logging);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}
