//! Quán Ngon Shell - Session and ephemeral UI state.
//!
//! The pieces the ordering frontend keeps outside any one screen: the
//! signed-in session, the transient alert queue with its confirm prompt,
//! and the reference-counted loading gauge. All three are explicit owned
//! objects constructed at startup and passed by reference; there are no
//! globals.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod alerts;
pub mod loading;
pub mod session;

pub use alerts::{ALERT_TTL, Alert, AlertId, Alerts, ConfirmOutcome, ConfirmRequest, Severity};
pub use loading::{LoadingGauge, LoadingToken};
pub use session::SessionShell;
