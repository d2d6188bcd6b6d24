use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use serde::Deserialize;

use queue_client::consumer::IDLE_BACKOFF;
use queue_client::producer::SEND_PACE;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "buoyq", about = "Producer/consumer clients for a named telemetry queue")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Publish synthetic buoy readings to a queue
    Produce(ProduceArgs),
    /// Drain a queue for a fixed wall-clock window
    Consume(ConsumeArgs),
}

#[derive(Args, Clone, Debug)]
pub struct ProduceArgs {
    #[command(flatten)]
    pub service: ServiceArgs,

    /// Queue identifier
    #[arg(long)]
    pub queue: String,

    /// Number of readings to enqueue
    #[arg(long)]
    pub count: u64,

    /// PRNG seed (0 = derive from current time)
    #[arg(long, default_value_t = 0)]
    pub seed: i64,
}

#[derive(Args, Clone, Debug)]
pub struct ConsumeArgs {
    #[command(flatten)]
    pub service: ServiceArgs,

    /// Queue identifier
    #[arg(long)]
    pub queue: String,

    /// Subscription window in minutes
    #[arg(long)]
    pub duration: f64,
}

#[derive(Args, Clone, Debug)]
pub struct ServiceArgs {
    /// Path to TOML config file
    #[arg(long, default_value = "config.toml", env = "BUOYQ_CONFIG")]
    pub config: String,

    /// Base URL of the queue service
    #[arg(long, env = "BUOYQ_URL")]
    pub url: Option<String>,

    /// Bearer token for the queue service
    #[arg(long, env = "BUOYQ_TOKEN")]
    pub token: Option<String>,
}

// ---- TOML Config ----

#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub url: Option<String>,
    pub token: Option<String>,
    /// Delay between producer sends, milliseconds.
    pub pace_ms: Option<u64>,
    /// Consumer sleep on an empty queue, milliseconds.
    pub backoff_ms: Option<u64>,
}

pub fn load_config(path: &str) -> Result<FileConfig, CliError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::Config(format!("cannot read config {path}: {e}")))?;
    toml::from_str(&content).map_err(|e| CliError::Config(format!("bad config {path}: {e}")))
}

// ---- Effective — merged config ----

/// Final configuration after the merge: config.toml < env/CLI.
pub struct Effective {
    pub url: String,
    pub token: Option<String>,
    pub pace: Duration,
    pub backoff: Duration,
}

impl Effective {
    pub fn new(service: &ServiceArgs) -> Result<Self, CliError> {
        let cfg = match load_config(&service.config) {
            Ok(c) => c,
            Err(e) => {
                if std::path::Path::new(&service.config).exists() {
                    return Err(e);
                }
                FileConfig::default()
            }
        };

        let url = service.url.clone().or(cfg.url).ok_or_else(|| {
            CliError::Config("no queue service url (--url, BUOYQ_URL or config.toml)".into())
        })?;

        Ok(Self {
            url,
            token: service.token.clone().or(cfg.token),
            pace: cfg.pace_ms.map(Duration::from_millis).unwrap_or(SEND_PACE),
            backoff: cfg
                .backoff_ms
                .map(Duration::from_millis)
                .unwrap_or(IDLE_BACKOFF),
        })
    }
}
