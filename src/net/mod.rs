//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the wire records and payloads,
//! and `error` turns every failure into a displayable message.

pub mod api;
pub mod error;
pub mod types;
