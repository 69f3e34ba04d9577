//! Data models
//!
//! Mirrors of the backend resources as they travel over the wire.
//! Field names are camelCase on the wire; all IDs are `i64`.

pub mod destination;
pub mod reservation;
pub mod tour;
pub mod user;

// Re-exports
pub use destination::*;
pub use reservation::*;
pub use tour::*;
pub use user::*;
