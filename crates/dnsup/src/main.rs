// # dnsup - Single-pass DDNS updater
//
// Resolves the current public IPv4 address once and points every
// configured Cloudflare record at it, then exits. Intended to run from
// cron or a systemd timer; there is no daemon loop and no state kept
// between runs.
//
// ## Configuration
//
// All configuration is via environment variables, optionally loaded
// from a `.env` file first:
//
// ### Credentials (required)
// - `CLOUDFLARE_API_KEY`: Account API key
// - `CLOUDFLARE_EMAIL`: Account email
//
// ### Domains
// - `DNSUP_DOMAINS`: Comma-separated list of domain prefixes
// - `<PREFIX>_ZONE_ID`: Zone id for that domain
// - `<PREFIX>_RECORD`: Fully-qualified record name for that domain
//
// ### Misc
// - `DNSUP_LOG_FILE`: Log file path (default: dns_update.log)
// - `DNSUP_ENV_FILE`: Alternate `.env` path (default: ./.env)
//
// ## Example
//
// ```bash
// export CLOUDFLARE_API_KEY=your_key
// export CLOUDFLARE_EMAIL=you@example.com
// export DNSUP_DOMAINS=HOME,BLOG
// export HOME_ZONE_ID=023e105f4ecef8ad9ca31a8372d0c353
// export HOME_RECORD=home.example.com
// export BLOG_ZONE_ID=9de4eb694c380d79845d35cd939cc7a7
// export BLOG_RECORD=blog.example.com
//
// dnsup
// ```

use anyhow::Result;
use std::fs::OpenOptions;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use dnsup_core::{Config, Runner};
use dnsup_ip_ipify::IpifyResolver;
use dnsup_provider_cloudflare::CloudflareProvider;

/// Exit codes for different termination scenarios
///
/// - 0: Run completed (individual records may still have failed; the
///   failure surface for those is the log, as with the per-domain
///   error handling)
/// - 1: Configuration error, nothing was attempted
/// - 2: Run aborted (IP resolution failed)
#[derive(Debug, Clone, Copy)]
enum UpdateExitCode {
    Completed = 0,
    ConfigError = 1,
    Aborted = 2,
}

impl From<UpdateExitCode> for ExitCode {
    fn from(code: UpdateExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Initialize tracing with two layers: ANSI stdout plus an append-mode
/// log file, both carrying timestamp, level, and message
fn init_logging(log_file: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set tracing subscriber: {}", e))?;

    Ok(())
}

fn main() -> ExitCode {
    // Populate the environment from a .env file before reading it.
    match std::env::var("DNSUP_ENV_FILE") {
        Ok(path) => {
            dotenvy::from_path(&path).ok();
        }
        Err(_) => {
            dotenvy::dotenv().ok();
        }
    }

    let config = Config::from_env();
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        return UpdateExitCode::ConfigError.into();
    }

    if let Err(e) = init_logging(&config.log_file) {
        eprintln!("Failed to initialize logging: {}", e);
        return UpdateExitCode::ConfigError.into();
    }

    // One thread is enough: the pass is strictly sequential.
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return UpdateExitCode::Aborted.into();
        }
    };

    rt.block_on(run(config)).into()
}

/// Build the resolver/provider pair and execute one pass
async fn run(config: Config) -> UpdateExitCode {
    info!("Starting dnsup: {} target(s)", config.targets.len());

    let resolver = IpifyResolver::new();
    let provider = CloudflareProvider::new(config.credentials);
    let runner = Runner::new(Box::new(resolver), Box::new(provider), config.targets);

    match runner.run().await {
        Ok(report) => {
            info!(
                "Run complete: {} updated, {} skipped, {} failed",
                report.updated, report.skipped, report.failed
            );
            UpdateExitCode::Completed
        }
        Err(e) => {
            error!("Run aborted: {}", e);
            UpdateExitCode::Aborted
        }
    }
}
