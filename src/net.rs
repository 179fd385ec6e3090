//! src/net.rs
//!
//! Network-facing inbound paths.

pub mod remote;

pub use remote::{RemoteRequest, bind, remote_server};
