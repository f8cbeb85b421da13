pub mod client;
pub mod error;
pub mod result;
pub mod source;

pub use client::{NodeClient, NodeUrl};
pub use source::RpcBlockSource;
