use thiserror::Error;

/// A fault reported by a [`BlockSource`](crate::source::BlockSource).
///
/// The walker does not distinguish between fault kinds; the message is kept for logs only.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("{0}")]
    General(String),
}

impl From<String> for SourceError {
    fn from(err: String) -> Self {
        SourceError::General(err)
    }
}

impl From<&str> for SourceError {
    fn from(err: &str) -> Self {
        SourceError::General(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum TraversalError {
    #[error("unable to obtain the DAG info from the block source: {0}")]
    DagInfo(#[source] SourceError),
}

pub type TraversalResult<T> = std::result::Result<T, TraversalError>;
