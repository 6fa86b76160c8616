//! cafes - a small HTTP service listing cafés by city
//!
//! `GET /cafe?city=<name>&count=<n>&search=<substring>` answers with the
//! comma-separated cafés of a city, optionally filtered by substring and
//! limited to the first `count` matches.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod query;

pub use error::{Error, Result};
