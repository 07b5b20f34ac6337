//! Cohort (promotion) editor, filters and detail view.

#[cfg(test)]
#[path = "cohorts_test.rs"]
mod cohorts_test;

use super::REQUIRED_FIELDS_MESSAGE;
use crate::net::types::{Cohort, CohortPayload};
use crate::util::filter::{FilterSet, distinct_values, selector_matches, text_matches};

pub const LOAD_ERROR: &str = "Erreur de connexion au serveur";
pub const SAVE_ERROR: &str = "Impossible d'enregistrer la promotion.";
pub const DELETE_PROMPT: &str = "Êtes-vous sûr de vouloir supprimer cette promotion ?";
pub const NO_DESCRIPTION: &str = "Pas de description";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CohortDraft {
    pub nom: String,
    pub filiere: String,
    pub periode: String,
    pub description: String,
}

impl CohortDraft {
    pub fn from_record(record: &Cohort) -> Self {
        Self {
            nom: record.nom.clone(),
            filiere: record.filiere.clone(),
            periode: record.periode.clone(),
            description: record.description.clone(),
        }
    }

    /// Validate and build the request body. The same body serves create and update.
    ///
    /// # Errors
    ///
    /// Returns the form message when nom, filiere or periode is blank.
    pub fn to_payload(&self) -> Result<CohortPayload, String> {
        if [&self.nom, &self.filiere, &self.periode].iter().any(|f| f.trim().is_empty()) {
            return Err(REQUIRED_FIELDS_MESSAGE.to_owned());
        }
        Ok(CohortPayload {
            nom: self.nom.trim().to_owned(),
            filiere: self.filiere.trim().to_owned(),
            periode: self.periode.trim().to_owned(),
            description: self.description.trim().to_owned(),
        })
    }
}

/// Description text for the detail view.
pub fn description_or_placeholder(cohort: &Cohort) -> &str {
    if cohort.description.trim().is_empty() { NO_DESCRIPTION } else { &cohort.description }
}

/// Options for the filière selector, in first-seen order.
pub fn filiere_options(cohorts: &[Cohort]) -> Vec<String> {
    distinct_values(cohorts, |c| Some(c.filiere.as_str()))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CohortFilters {
    pub search: String,
    pub filiere: String,
}

impl FilterSet for CohortFilters {
    type Item = Cohort;

    fn accepts(&self, item: &Cohort) -> bool {
        text_matches(&self.search, [item.nom.as_str(), item.filiere.as_str()])
            && selector_matches(&self.filiere, &item.filiere)
    }

    fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || !self.filiere.is_empty()
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
