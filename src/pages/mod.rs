//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch on mount, submit, delete,
//! refetch) and delegates rendering details to `components`.

pub(crate) mod actions;
pub mod cohorts;
pub mod dashboard;
pub mod instructors;
pub mod space_confirmation;
pub mod space_new;
pub mod students;
pub mod teaching_spaces;
