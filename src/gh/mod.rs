//! GitHub access through the `gh` command-line client

mod client;
mod models;
mod traits;

pub use client::GhClient;
pub use models::{GatewayFailure, RepoRef};
pub use traits::RemoteGateway;
