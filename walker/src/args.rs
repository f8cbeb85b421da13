use clap::Parser;
use kaspa_archival_rpc::{NodeUrl, error::Error as RpcError};
use kaspa_archival_traversal::{
    TraversalConfig,
    config::{DEFAULT_PRUNING_WINDOW, DEFAULT_REPORT_INTERVAL},
};
use std::time::Duration;

/// Used for the initial connection when request timeouts are disabled
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Kaspa archival DAG walker
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// kaspad RPC server: grpc://host:port, ws://host:port, wss://host:port, or host:port for gRPC
    #[arg(short = 's', long = "rpcserver", default_value = "grpc://localhost:16110")]
    pub rpc_server: String,

    /// DAA score span kept in the seen cache
    #[arg(short, long, default_value_t = DEFAULT_PRUNING_WINDOW)]
    pub window: u64,

    /// Seconds between progress reports
    #[arg(long = "report-interval", default_value_t = DEFAULT_REPORT_INTERVAL.as_secs())]
    pub report_interval: u64,

    /// Timeout of a single RPC request in seconds, 0 to wait indefinitely
    #[arg(long = "rpc-timeout", default_value_t = 30)]
    pub rpc_timeout: u64,

    /// Logging level for all subsystems {off, error, warn, info, debug, trace}
    /// -- You may also specify <subsystem>=<level>,<subsystem2>=<level>,... to set the log level for individual subsystems
    #[arg(short = 'd', long = "loglevel", default_value = "info")]
    pub log_level: String,

    /// Directory to log output, no log files are written if omitted
    #[arg(long = "logdir")]
    pub log_dir: Option<String>,
}

impl Args {
    pub fn node_url(&self) -> Result<NodeUrl, RpcError> {
        self.rpc_server.parse()
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        (self.rpc_timeout > 0).then(|| Duration::from_secs(self.rpc_timeout))
    }

    pub fn connect_timeout(&self) -> Duration {
        self.request_timeout().unwrap_or(DEFAULT_CONNECT_TIMEOUT)
    }

    pub fn traversal_config(&self) -> TraversalConfig {
        TraversalConfig::new(self.window, Duration::from_secs(self.report_interval))
    }
}
