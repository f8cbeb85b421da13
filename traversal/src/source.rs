use crate::{
    errors::SourceError,
    model::{DagInfo, FetchResult},
};
use async_trait::async_trait;
use kaspa_hashes::Hash;
use std::sync::Arc;

/// Remote access to the block DAG.
///
/// Any timeout policy belongs to the implementor: the walker awaits every call to completion.
#[async_trait]
pub trait BlockSource: Send + Sync {
    async fn get_dag_info(&self) -> Result<DagInfo, SourceError>;

    /// Fetches the header of `hash`. Every fault (transport, unknown block, malformed
    /// response) is reported as [`FetchResult::Failed`].
    async fn get_block(&self, hash: Hash) -> FetchResult;
}

#[async_trait]
impl<T: BlockSource + ?Sized> BlockSource for Arc<T> {
    async fn get_dag_info(&self) -> Result<DagInfo, SourceError> {
        (**self).get_dag_info().await
    }

    async fn get_block(&self, hash: Hash) -> FetchResult {
        (**self).get_block(hash).await
    }
}
