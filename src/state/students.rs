//! Student (étudiant) editor, filters and cohort-name lookup.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use super::REQUIRED_FIELDS_MESSAGE;
use super::editor::EditorMode;
use super::identity::{IdentityDraft, identity_matches};
use crate::net::types::{CohortRef, Student, StudentPayload};
use crate::util::credential;
use crate::util::filter::{FilterSet, selector_matches, selector_matches_opt};

pub const LOAD_ERROR: &str = "Erreur lors du chargement des étudiants";
pub const DELETE_PROMPT: &str = "Êtes-vous sûr de vouloir supprimer cet étudiant ?";
/// Shown for a missing or unresolved cohort reference.
pub const NO_COHORT: &str = "-";

/// Display name of the cohort `id` refers to.
pub fn cohort_name<'a>(cohorts: &'a [CohortRef], id: Option<&str>) -> &'a str {
    id.and_then(|id| cohorts.iter().find(|c| c.id == id))
        .map_or(NO_COHORT, |c| c.nom.as_str())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub identity: IdentityDraft,
    pub password: String,
    pub date_naissance: String,
    pub lieu_naissance: String,
    pub adresse: String,
    pub promotion_id: String,
}

impl StudentDraft {
    pub fn blank() -> Self {
        Self::with_password(credential::generate(credential::DEFAULT_LENGTH))
    }

    pub fn with_password(password: String) -> Self {
        Self { password, ..Self::default() }
    }

    pub fn from_record(record: &Student) -> Self {
        Self {
            identity: IdentityDraft::from_identity(&record.user),
            password: String::new(),
            date_naissance: record.date_naissance.clone().unwrap_or_default(),
            lieu_naissance: record.lieu_naissance.clone().unwrap_or_default(),
            adresse: record.adresse.clone().unwrap_or_default(),
            promotion_id: record.promotion_id.clone().unwrap_or_default(),
        }
    }

    pub fn regenerate_password(&mut self) {
        self.password = credential::generate(credential::DEFAULT_LENGTH);
    }

    /// Validate and build the request body; blank optional fields become `null`.
    ///
    /// # Errors
    ///
    /// Returns the form message for a blank mandatory field or, on creation,
    /// a weak credential.
    pub fn to_payload(&self, mode: &EditorMode) -> Result<StudentPayload, String> {
        if self.identity.missing_required() {
            return Err(REQUIRED_FIELDS_MESSAGE.to_owned());
        }
        let password = if mode.is_create() {
            credential::check(&self.password).map_err(|e| e.to_string())?;
            Some(self.password.clone())
        } else {
            None
        };
        Ok(StudentPayload {
            user: self.identity.to_identity(),
            password,
            date_naissance: optional(&self.date_naissance),
            lieu_naissance: optional(&self.lieu_naissance),
            adresse: optional(&self.adresse),
            promotion_id: optional(&self.promotion_id),
        })
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentFilters {
    pub search: String,
    pub sexe: String,
    /// Cohort id.
    pub promotion: String,
}

impl FilterSet for StudentFilters {
    type Item = Student;

    fn accepts(&self, item: &Student) -> bool {
        identity_matches(&self.search, &item.user)
            && selector_matches(&self.sexe, &item.user.sexe)
            && selector_matches_opt(&self.promotion, item.promotion_id.as_deref())
    }

    fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || !self.sexe.is_empty() || !self.promotion.is_empty()
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
