//! Instructor (formateur) editor and filters.

#[cfg(test)]
#[path = "instructors_test.rs"]
mod instructors_test;

use super::REQUIRED_FIELDS_MESSAGE;
use super::editor::EditorMode;
use super::identity::{IdentityDraft, identity_matches};
use crate::net::types::{Instructor, InstructorPayload};
use crate::util::credential;
use crate::util::filter::{FilterSet, selector_matches};

pub const LOAD_ERROR: &str = "Erreur lors du chargement des formateurs";
pub const DELETE_PROMPT: &str = "Êtes-vous sûr de vouloir supprimer ce formateur ?";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstructorDraft {
    pub identity: IdentityDraft,
    /// Generated credential; only sent on creation.
    pub password: String,
}

impl InstructorDraft {
    /// Blank creation draft with a freshly generated credential.
    pub fn blank() -> Self {
        Self::with_password(credential::generate(credential::DEFAULT_LENGTH))
    }

    pub fn with_password(password: String) -> Self {
        Self { identity: IdentityDraft::default(), password }
    }

    pub fn from_record(record: &Instructor) -> Self {
        Self { identity: IdentityDraft::from_identity(&record.user), password: String::new() }
    }

    pub fn regenerate_password(&mut self) {
        self.password = credential::generate(credential::DEFAULT_LENGTH);
    }

    /// Validate and build the request body for `mode`.
    ///
    /// # Errors
    ///
    /// Returns the message to show in the form when a mandatory field is blank
    /// or, on creation, when the credential is too weak.
    pub fn to_payload(&self, mode: &EditorMode) -> Result<InstructorPayload, String> {
        if self.identity.missing_required() {
            return Err(REQUIRED_FIELDS_MESSAGE.to_owned());
        }
        let password = if mode.is_create() {
            credential::check(&self.password).map_err(|e| e.to_string())?;
            Some(self.password.clone())
        } else {
            None
        };
        Ok(InstructorPayload { user: self.identity.to_identity(), password })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstructorFilters {
    pub search: String,
    pub sexe: String,
}

impl FilterSet for InstructorFilters {
    type Item = Instructor;

    fn accepts(&self, item: &Instructor) -> bool {
        identity_matches(&self.search, &item.user) && selector_matches(&self.sexe, &item.user.sexe)
    }

    fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || !self.sexe.is_empty()
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
