use kaspa_archival_traversal::TraversalError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Rpc(#[from] kaspa_archival_rpc::error::Error),

    #[error(transparent)]
    Traversal(#[from] TraversalError),
}

pub type Result<T> = std::result::Result<T, Error>;
