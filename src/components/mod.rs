//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the admin chrome and the form/table building blocks
//! shared by every page. They take signals and callbacks as props and never
//! call the backend themselves.

pub mod confirm_dialog;
pub mod credential_field;
pub mod error_banner;
pub mod filter_bar;
pub mod form_field;
pub mod sidebar;
