use anyhow::Result;
use clap::Parser;
use eldercare_probe::{config, probe::Probe};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "eldercare-probe", version, about = "Send test messages to an ElderCare /run/predict endpoint")]
struct Cli {
    /// Messages to send, in order (defaults to the configured messages)
    messages: Vec<String>,

    /// Endpoint URL, overriding the config file
    #[arg(long, env = "PROBE_API_URL")]
    url: Option<String>,

    #[arg(short, long, env = "CONFIG_PATH", default_value = "probe.yaml")]
    config: PathBuf,

    /// Fail on a non-2xx status instead of printing the payload anyway
    #[arg(long)]
    fail_on_http_error: bool,
}

/// Validates a log level or `RUST_LOG`-style filter directive
fn parse_log_filter(filter: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(filter).map_err(|e| {
        anyhow::anyhow!(
            "Invalid log filter: '{}' ({}). Use a level (error, warn, info, debug, trace) \
             or directives such as eldercare_probe=debug",
            filter,
            e
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (before logging setup)
    let config = match config::load_from(&cli.config).await {
        Ok(config) => config
            .with_url_override(cli.url)
            .with_cli_overrides(cli.messages, cli.fail_on_http_error),
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG overrides the configured level
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());
    let filter = match parse_log_filter(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // stdout carries the probe output, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!("Starting ElderCare probe with log level: {}", log_level);

    let probe = Probe::from_config(&config)?;
    let stdout = std::io::stdout();
    probe.run(&config.probe.messages, &mut stdout.lock()).await?;

    Ok(())
}
