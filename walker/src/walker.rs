use crate::{args::Args, error::Result};
use kaspa_archival_core::{info, warn};
use kaspa_archival_rpc::{NodeClient, RpcBlockSource};
use kaspa_archival_traversal::{FinalStats, FrontierScheduler};

/// Connects to the node, walks the ancestry of its pruning point and disconnects.
///
/// Missing blocks are part of the returned stats; only connection and DAG info failures are errors.
pub async fn run(args: &Args) -> Result<FinalStats> {
    let url = args.node_url()?;
    let client = NodeClient::connect(&url, args.connect_timeout()).await?;

    let source = RpcBlockSource::new(client.rpc_api(), args.request_timeout());
    let scheduler = FrontierScheduler::new(source, args.traversal_config());
    let result = scheduler.run_from_pruning_point().await;

    if let Err(err) = client.disconnect().await {
        warn!("Failed to disconnect from {}: {}", url, err);
    }

    let stats = result?;
    if stats.is_complete() {
        info!("Every reached ancestor of the pruning point is available");
    } else {
        warn!("{} blocks could not be fetched", stats.missing_blocks.len());
    }
    Ok(stats)
}
