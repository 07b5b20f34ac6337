//! View state for the admin screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page owns its state as plain structs wrapped in `RwSignal`s. The
//! structs expose reducer-style methods so the transitions stay testable
//! without a browser; pages only glue them to events and API calls.

pub mod cohorts;
pub mod dashboard;
pub mod deletion;
pub mod editor;
pub mod identity;
pub mod instructors;
pub mod list;
pub mod nav;
pub mod space_form;
pub mod students;
pub mod teaching_spaces;

/// Shown when a create/edit form is submitted with a blank mandatory field.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Veuillez remplir tous les champs obligatoires";
/// Context for a rejected create/update call.
pub const SAVE_ERROR: &str = "Erreur lors de l'enregistrement";
/// Context for a rejected delete call.
pub const DELETE_ERROR: &str = "Erreur lors de la suppression";
