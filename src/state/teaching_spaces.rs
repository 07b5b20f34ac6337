//! Teaching-space (espace pédagogique) consultation: filters, edit draft and
//! summary statistics.

#[cfg(test)]
#[path = "teaching_spaces_test.rs"]
mod teaching_spaces_test;

use crate::net::types::{Subject, TeachingSpace, TeachingSpaceUpdate};
use crate::util::filter::{FilterSet, distinct_values, selector_matches_opt, text_matches};

pub const LOAD_ERROR: &str = "Erreur lors du chargement des espaces pédagogiques";
pub const NAME_REQUIRED: &str = "Le nom de l'espace est requis.";
/// Shown for an unset instructor, cohort or subject.
pub const UNSET: &str = "-";

pub fn instructor_name(space: &TeachingSpace) -> &str {
    space.formateur_principal_nom.as_deref().filter(|n| !n.is_empty()).unwrap_or(UNSET)
}

pub fn cohort_label(space: &TeachingSpace) -> &str {
    space.promotion_nom.as_deref().filter(|n| !n.is_empty()).unwrap_or(UNSET)
}

fn subject_name_opt(space: &TeachingSpace) -> Option<&str> {
    space.matiere.as_ref().map(|m| m.nom.as_str()).filter(|n| !n.is_empty())
}

pub fn subject_name(space: &TeachingSpace) -> &str {
    subject_name_opt(space).unwrap_or(UNSET)
}

/// "Nom (CODE)" of the subject, or [`UNSET`] when the space has none.
pub fn subject_label(space: &TeachingSpace) -> String {
    space.matiere.as_ref().map_or_else(|| UNSET.to_owned(), Subject::label)
}

pub fn subject_options(spaces: &[TeachingSpace]) -> Vec<String> {
    distinct_values(spaces, subject_name_opt)
}

pub fn cohort_options(spaces: &[TeachingSpace]) -> Vec<String> {
    distinct_values(spaces, |s| s.promotion_nom.as_deref())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeachingSpaceFilters {
    pub search: String,
    /// Subject name.
    pub matiere: String,
    /// Cohort name.
    pub promotion: String,
}

impl FilterSet for TeachingSpaceFilters {
    type Item = TeachingSpace;

    fn accepts(&self, item: &TeachingSpace) -> bool {
        let fields = [
            item.nom.as_str(),
            subject_name_opt(item).unwrap_or_default(),
            item.formateur_principal_nom.as_deref().unwrap_or_default(),
            item.promotion_nom.as_deref().unwrap_or_default(),
        ];
        text_matches(&self.search, fields)
            && selector_matches_opt(&self.matiere, subject_name_opt(item))
            && selector_matches_opt(&self.promotion, item.promotion_nom.as_deref())
    }

    fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || !self.matiere.is_empty() || !self.promotion.is_empty()
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Editable fields of an existing space.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeachingSpaceDraft {
    pub nom: String,
    pub description: String,
    pub is_actif: bool,
}

impl TeachingSpaceDraft {
    pub fn from_record(record: &TeachingSpace) -> Self {
        Self { nom: record.nom.clone(), description: record.description.clone(), is_actif: record.is_actif }
    }

    /// # Errors
    ///
    /// Returns the form message when the name is blank.
    pub fn to_update(&self) -> Result<TeachingSpaceUpdate, String> {
        let nom = self.nom.trim();
        if nom.is_empty() {
            return Err(NAME_REQUIRED.to_owned());
        }
        Ok(TeachingSpaceUpdate {
            nom: nom.to_owned(),
            description: self.description.trim().to_owned(),
            is_actif: self.is_actif,
        })
    }
}

/// Totals shown under the consultation table, computed over the visible rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpaceStats {
    pub spaces: usize,
    pub students: u64,
    pub instructors: usize,
}

impl SpaceStats {
    pub fn from_spaces(spaces: &[TeachingSpace]) -> Self {
        Self {
            spaces: spaces.len(),
            students: spaces.iter().map(|s| u64::from(s.etudiants_count)).sum(),
            instructors: distinct_values(spaces, |s| s.formateur_principal_nom.as_deref()).len(),
        }
    }
}
