//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers (credential generation, filtering, date rendering) live here
//! so they stay testable on the host; `clipboard` isolates browser glue.

pub mod clipboard;
pub mod credential;
pub mod dates;
pub mod filter;
