//! Travel Client - typed HTTP client for the travel booking API
//!
//! Attaches the bearer token of the current [`Session`] to every request,
//! tears the session down on `401 Unauthorized`, and exposes one typed
//! method per backend operation on [`TravelClient`].

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod storage;

pub use client::{TravelClient, TravelClientBuilder};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use session::{Session, SessionEvent, SessionState};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse};
pub use shared::models;
