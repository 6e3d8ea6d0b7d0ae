pub mod client;
pub mod endpoints;
pub mod transport;

pub use client::{
    AgentspaceClient, Listing, RegisterOutcome, RemoteClient, ResourceSummary, UnregisterOutcome,
};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
