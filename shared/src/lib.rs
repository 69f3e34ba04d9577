//! Shared types for the travel booking client
//!
//! Data shapes mirroring the backend resources, the auth DTOs,
//! and the client-side tour catalog filter.

pub mod catalog;
pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use catalog::{ParseBandError, PriceBand, TourQuery};
pub use client::{LoginRequest, LoginResponse};
