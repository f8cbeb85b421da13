use crate::{error::Error, result::Result};
use async_trait::async_trait;
use kaspa_archival_traversal::{BlockSource, DagBlock, DagInfo, FetchResult, SourceError};
use kaspa_hashes::Hash;
use kaspa_rpc_core::{api::rpc::RpcApi, error::RpcResult};
use std::{future::Future, sync::Arc, time::Duration};

/// [`BlockSource`] backed by a kaspad RPC client.
///
/// Blocks are requested without transactions. When a timeout is set, a request exceeding it
/// is reported as a failure.
pub struct RpcBlockSource {
    client: Arc<dyn RpcApi>,
    timeout: Option<Duration>,
}

impl RpcBlockSource {
    pub fn new(client: Arc<dyn RpcApi>, timeout: Option<Duration>) -> Self {
        Self { client, timeout }
    }

    async fn fetch_block(&self, hash: Hash) -> Result<DagBlock> {
        let block = with_timeout(self.timeout, self.client.get_block(hash, false)).await?;
        Ok(DagBlock::new(hash, block.header.daa_score, block.header.parents_by_level))
    }

    async fn fetch_dag_info(&self) -> Result<DagInfo> {
        let response = with_timeout(self.timeout, self.client.get_block_dag_info()).await?;
        Ok(DagInfo {
            network: response.network.to_string(),
            pruning_point_hash: response.pruning_point_hash,
            block_count: response.block_count,
            header_count: response.header_count,
            virtual_daa_score: response.virtual_daa_score,
        })
    }
}

#[async_trait]
impl BlockSource for RpcBlockSource {
    async fn get_dag_info(&self) -> std::result::Result<DagInfo, SourceError> {
        Ok(self.fetch_dag_info().await?)
    }

    async fn get_block(&self, hash: Hash) -> FetchResult {
        self.fetch_block(hash).await.map_err(SourceError::from).into()
    }
}

async fn with_timeout<T, F>(timeout: Option<Duration>, request: F) -> Result<T>
where
    F: Future<Output = RpcResult<T>>,
{
    match timeout {
        Some(timeout) => tokio::time::timeout(timeout, request).await.map_err(|_| Error::Timeout(timeout))?.map_err(Error::from),
        None => request.await.map_err(Error::from),
    }
}
