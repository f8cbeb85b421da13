extern crate self as kaspa_archival_core;

pub mod log;
pub mod panic;
