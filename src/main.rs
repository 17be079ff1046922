mod cli;
mod application;
mod domain;
mod data;
mod ml;
mod infra;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

/// Default log directive when RUST_LOG is unset or unparsable
const DEFAULT_LOG: &str = "sms_spam_detector=info";

/// RUST_LOG wins when set; otherwise log this crate at info
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|spec| !spec.trim().is_empty())
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG))
}

fn main() -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_overrides_default() {
        let filter = log_filter(Some("sms_spam_detector=debug")).to_string();
        assert!(filter.contains("sms_spam_detector=debug"), "got {filter}");
        assert!(!filter.contains("info"), "got {filter}");
    }

    #[test]
    fn test_default_when_rust_log_unset() {
        assert_eq!(log_filter(None).to_string(), DEFAULT_LOG);
        assert_eq!(log_filter(Some("  ")).to_string(), DEFAULT_LOG);
    }
}
