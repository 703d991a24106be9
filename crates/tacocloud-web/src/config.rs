use clap::Parser;
use std::time::Duration;

/// Upper bound for `--session-timeout`: one year.
const MAX_SESSION_TIMEOUT_MINUTES: u64 = 365 * 24 * 60;

#[derive(Debug, Parser)]
#[command(name = "tacocloud-web")]
#[command(about = "Taco Cloud - design your own taco")]
#[command(version)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Idle session timeout in minutes
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..=MAX_SESSION_TIMEOUT_MINUTES))]
    pub session_timeout: u64,

    /// Maximum concurrent sessions
    #[arg(long, default_value_t = 1000)]
    pub max_sessions: usize,

    /// Seconds between sweeps for expired sessions
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
    pub cleanup_interval: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
    pub session_timeout: Duration,
    pub max_sessions: usize,
    pub cleanup_interval: Duration,
}

impl From<Args> for WebConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            session_timeout: Duration::from_secs(args.session_timeout.saturating_mul(60)),
            max_sessions: args.max_sessions,
            cleanup_interval: Duration::from_secs(args.cleanup_interval),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            session_timeout: Duration::from_secs(30 * 60),
            max_sessions: 1000,
            cleanup_interval: Duration::from_secs(60),
        }
    }
}

impl WebConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
