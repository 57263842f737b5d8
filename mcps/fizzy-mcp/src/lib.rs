//! Fizzy MCP Server
//!
//! Exposes a Fizzy account (boards, cards, columns, comments, steps, tags,
//! users, notifications) as MCP tools over stdio.
//!
//! # Layers
//! - [`config`]: base URL, account and token from file + environment
//! - [`fizzy`]: authenticated HTTP client and response normalization
//! - [`handlers`]: one function per tool, mapping arguments to a request
//! - [`server`]: tool catalogue, name dispatch and the MCP handler

pub mod config;
pub mod fizzy;
pub mod handlers;
pub mod params;
pub mod serde_utils;
pub mod server;
pub mod types;

pub use config::{Config, ConfigError};
pub use fizzy::{FizzyClient, FizzyError, FizzyResult};
pub use server::{FizzyMcpServer, TOOL_NAMES};
