//! Archival verification of the Kaspa block DAG.
//!
//! Starting from a block (normally the pruning point) the walker follows direct parents
//! level by level toward genesis, fetching every ancestor from a [`BlockSource`] and
//! recording the ones which can no longer be fetched.

pub mod cache;
pub mod config;
pub mod errors;
pub mod model;
pub mod reporter;
pub mod scheduler;
pub mod source;
pub mod stats;
pub mod testutils;
pub mod tracker;

pub use config::TraversalConfig;
pub use errors::{SourceError, TraversalError, TraversalResult};
pub use model::{BlockRecord, DagBlock, DagInfo, FetchResult};
pub use scheduler::FrontierScheduler;
pub use source::BlockSource;
pub use stats::{FinalStats, MissingBlock, ProgressSnapshot, TraversalProgress};
