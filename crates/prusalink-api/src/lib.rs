// prusalink-api: Async Rust client for a Prusa Link printer's local HTTP API

pub mod client;
pub mod error;
pub mod printer;
pub mod transport;

pub use client::LinkClient;
pub use error::Error;
pub use transport::TransportConfig;
