// frota-api: Async Rust client for the Frota fleet-management REST API

pub mod auth;
pub mod client;
pub mod dashboard;
pub mod drivers;
pub mod error;
pub mod maintenances;
pub mod notifications;
pub mod transport;
pub mod types;
pub mod vehicles;

pub use client::ApiClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
