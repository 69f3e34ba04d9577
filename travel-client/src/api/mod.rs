//! Typed backend operations, grouped by resource.
//!
//! Each file adds an `impl TravelClient` block. Operations map one-to-one
//! onto backend endpoints with no client-side validation.

mod auth;
mod batch;
mod destinations;
mod reservations;
mod tours;
mod users;
