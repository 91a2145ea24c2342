//! Domain types for the asset manager.
//!
//! Holds the error taxonomy, the asset model, and field validation. The `db`
//! and `api` crates build on these types; nothing HTTP-specific lives here.

pub mod asset;
pub mod error;
pub mod types;
