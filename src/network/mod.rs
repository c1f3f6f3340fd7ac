// Network plumbing: endpoint configuration, CSRF and the fetch transport.
pub mod api_client;
pub mod config;
pub mod csrf;

// Re-export commonly used items
pub use api_client::{post_json, status_result, FetchTransport, ReorderRequest, ReorderTransport};
pub use config::{DisabledReason, Persistence, ReorderConfig};
