use clap::Args;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            timeout,
        }
    }
}

/// Connection flags; each falls back to its `FOOD_LOG_*` variable.
#[derive(Debug, Clone, Args)]
pub struct ConnectionArgs {
    /// Food log server URL
    #[arg(long, env = "FOOD_LOG_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(
        long,
        env = "FOOD_LOG_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,
}

impl From<ConnectionArgs> for ClientConfig {
    fn from(args: ConnectionArgs) -> Self {
        Self::new(args.api_url, Duration::from_secs(args.timeout))
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
