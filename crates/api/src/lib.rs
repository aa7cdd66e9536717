//! Quán Ngon API - Typed HTTP client for the ordering backend.
//!
//! This crate wraps the backend's REST endpoints in typed clients:
//! authentication with a pluggable persistent token store, resource
//! clients for categories, menu, orders, reviews, and users, plus the
//! derived dashboard and landing-page queries.
//!
//! Everything is stateless apart from the token store: the bearer token is
//! re-read from the store on every authenticated request, so an external
//! login or logout takes effect immediately.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod auth;
pub mod categories;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod home;
mod http;
pub mod menu;
pub mod orders;
pub mod reviews;
pub mod token;
pub mod types;
pub mod users;

pub use api::Api;
