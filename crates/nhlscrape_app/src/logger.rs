// This module sets up the logger level.

use std::env;

use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout only carries the command output.
pub fn setup(logger_level: &str) {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", directives(logger_level));
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn directives(logger_level: &str) -> String {
    ["nhlscrape", "nhlscrape_infrastructure", "nhlscrape_interface"]
        .iter()
        .map(|target| format!("{target}={logger_level}"))
        .collect::<Vec<_>>()
        .join(",")
}
