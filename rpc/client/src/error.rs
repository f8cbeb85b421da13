use kaspa_archival_traversal::SourceError;
use kaspa_rpc_core::error::RpcError;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported RPC server address '{0}', expected grpc://, ws:// or wss://")]
    AddressSchema(String),

    #[error("gRPC client error: {0}")]
    GrpcClient(#[from] kaspa_grpc_client::error::Error),

    #[error("wRPC client error: {0}")]
    WrpcClient(#[from] kaspa_wrpc_client::error::Error),

    #[error("RpcApi error: {0}")]
    RpcApiError(#[from] RpcError),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

impl From<Error> for SourceError {
    fn from(err: Error) -> Self {
        SourceError::General(err.to_string())
    }
}
