//! Fizzy REST transport
//!
//! Authenticated HTTP client and error types for the Fizzy API.

pub mod client;
pub mod error;

pub use client::{FizzyClient, FizzyResponse};
pub use error::{FizzyError, FizzyResult};
