pub mod cli;
pub mod client;
pub mod config;
pub mod logging;
pub mod model;
pub mod report;
pub mod state;

#[cfg(test)]
#[path = "../tests/src_inline/support.rs"]
pub(crate) mod support;
