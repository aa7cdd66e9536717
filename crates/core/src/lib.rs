//! Quán Ngon Core - Shared types library.
//!
//! This crate provides common types used across all Quán Ngon client
//! components:
//! - `api` - Typed HTTP client for the ordering backend
//! - `shell` - Session, alert, and loading state for the ordering UI
//! - `cli` - Command-line client
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no UI
//! state. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, phone
//!   numbers, roles, and order statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
