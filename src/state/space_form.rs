//! Teaching-space creation form.
//!
//! DESIGN
//! ======
//! The subject catalogue is derived from the subjects referenced by existing
//! spaces. A subject typed in by the user joins the catalogue under a
//! `local-` id that the backend never sees: on submit its name is sent in
//! place of the id, the same value the free-text subject mode sends.

#[cfg(test)]
#[path = "space_form_test.rs"]
mod space_form_test;

use crate::net::types::{Cohort, Subject, TeachingSpace, TeachingSpacePayload};

pub const LOAD_ERROR: &str = "Erreur lors du chargement des données";
pub const CREATE_ERROR: &str = "Erreur lors de la création";
pub const NAME_REQUIRED: &str = "Le nom de l'espace est obligatoire";
pub const SUBJECT_REQUIRED: &str = "Veuillez sélectionner une matière";
pub const SUBJECT_NAME_REQUIRED: &str = "Veuillez saisir le nom de la matière";
pub const SUBJECT_FIELDS_REQUIRED: &str = "Veuillez remplir tous les champs pour la matière";
/// Id prefix of subjects added in the form and not yet known to the backend.
pub const LOCAL_SUBJECT_PREFIX: &str = "local-";

/// Distinct subjects referenced by `spaces`, first occurrence wins.
pub fn subject_catalogue(spaces: &[TeachingSpace]) -> Vec<Subject> {
    let mut subjects: Vec<Subject> = Vec::new();
    for space in spaces {
        let Some(subject) = &space.matiere else {
            continue;
        };
        if subject.id.is_empty() || subjects.iter().any(|s| s.id == subject.id) {
            continue;
        }
        subjects.push(subject.clone());
    }
    subjects
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubjectMode {
    /// Pick a subject from the catalogue.
    #[default]
    Select,
    /// Type a new subject.
    Input,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpaceForm {
    pub nom: String,
    pub subject_id: String,
    pub promotion_id: String,
    pub description: String,
    pub mode: SubjectMode,
    pub new_subject_nom: String,
    pub new_subject_code: String,
    pub subjects: Vec<Subject>,
    pub cohorts: Vec<Cohort>,
    pub loading: bool,
    pub submitting: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl Default for SpaceForm {
    fn default() -> Self {
        Self {
            nom: String::new(),
            subject_id: String::new(),
            promotion_id: String::new(),
            description: String::new(),
            mode: SubjectMode::Select,
            new_subject_nom: String::new(),
            new_subject_code: String::new(),
            subjects: Vec::new(),
            cohorts: Vec::new(),
            loading: true,
            submitting: false,
            error: None,
            notice: None,
        }
    }
}

impl SpaceForm {
    /// Store the catalogues fetched on mount.
    pub fn finish_load(&mut self, result: Result<(Vec<Cohort>, Vec<TeachingSpace>), String>) {
        self.loading = false;
        match result {
            Ok((cohorts, spaces)) => {
                self.cohorts = cohorts;
                self.subjects = subject_catalogue(&spaces);
            }
            Err(message) => self.error = Some(message),
        }
    }

    pub fn set_mode(&mut self, mode: SubjectMode) {
        self.mode = mode;
    }

    /// Add the typed subject to the catalogue, select it and return to select mode.
    ///
    /// # Errors
    ///
    /// Returns the form message when the name or code is blank; the form is
    /// left unchanged apart from the error.
    pub fn add_local_subject(&mut self) -> Result<(), String> {
        let nom = self.new_subject_nom.trim();
        let code = self.new_subject_code.trim();
        if nom.is_empty() || code.is_empty() {
            self.error = Some(SUBJECT_FIELDS_REQUIRED.to_owned());
            return Err(SUBJECT_FIELDS_REQUIRED.to_owned());
        }
        let subject = Subject {
            id: format!("{LOCAL_SUBJECT_PREFIX}{}", uuid::Uuid::new_v4()),
            nom: nom.to_owned(),
            code: code.to_uppercase(),
            description: None,
        };
        self.notice = Some(format!("Matière \"{}\" ajoutée à la liste !", subject.nom));
        self.error = None;
        self.subject_id.clone_from(&subject.id);
        self.subjects.push(subject);
        self.mode = SubjectMode::Select;
        self.new_subject_nom.clear();
        self.new_subject_code.clear();
        Ok(())
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        let subject_set = match self.mode {
            SubjectMode::Select => !self.subject_id.is_empty(),
            SubjectMode::Input => !self.new_subject_nom.trim().is_empty(),
        };
        !self.submitting && !self.nom.trim().is_empty() && subject_set
    }

    /// Validate and build the request body.
    ///
    /// # Errors
    ///
    /// Returns the form message for a blank name or a missing subject.
    pub fn to_payload(&self) -> Result<TeachingSpacePayload, String> {
        let nom = self.nom.trim();
        if nom.is_empty() {
            return Err(NAME_REQUIRED.to_owned());
        }
        let matiere = match self.mode {
            SubjectMode::Select => {
                if self.subject_id.is_empty() {
                    return Err(SUBJECT_REQUIRED.to_owned());
                }
                self.subject_value()
            }
            SubjectMode::Input => {
                let typed = self.new_subject_nom.trim();
                if typed.is_empty() {
                    return Err(SUBJECT_NAME_REQUIRED.to_owned());
                }
                typed.to_owned()
            }
        };
        Ok(TeachingSpacePayload {
            nom: nom.to_owned(),
            matiere,
            promotion: (!self.promotion_id.is_empty()).then(|| self.promotion_id.clone()),
            description: self.description.trim().to_owned(),
        })
    }

    fn subject_value(&self) -> String {
        if self.subject_id.starts_with(LOCAL_SUBJECT_PREFIX)
            && let Some(subject) = self.subjects.iter().find(|s| s.id == self.subject_id)
        {
            return subject.nom.clone();
        }
        self.subject_id.clone()
    }

    /// Validate and mark the form as submitting.
    ///
    /// Returns `None` when already submitting or when validation fails (the
    /// message is then set on the form).
    pub fn submit(&mut self) -> Option<TeachingSpacePayload> {
        if self.submitting {
            return None;
        }
        match self.to_payload() {
            Ok(payload) => {
                self.submitting = true;
                self.error = None;
                self.notice = None;
                Some(payload)
            }
            Err(message) => {
                self.error = Some(message);
                None
            }
        }
    }

    pub fn submit_failed(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }

    /// Clear the user's input; fetched catalogues and local subjects stay.
    pub fn reset(&mut self) {
        *self = Self {
            subjects: std::mem::take(&mut self.subjects),
            cohorts: std::mem::take(&mut self.cohorts),
            loading: self.loading,
            ..Self::default()
        };
    }

    // -------------------------------------------------------------------------
    // Récapitulatif
    // -------------------------------------------------------------------------

    pub fn summary_space(&self) -> String {
        let nom = self.nom.trim();
        if nom.is_empty() { "Non renseigné".to_owned() } else { nom.to_owned() }
    }

    pub fn summary_subject(&self) -> String {
        match self.mode {
            SubjectMode::Select if self.subject_id.is_empty() => "Non sélectionnée".to_owned(),
            SubjectMode::Select => self
                .subjects
                .iter()
                .find(|s| s.id == self.subject_id)
                .map_or_else(|| "Inconnue".to_owned(), Subject::label),
            SubjectMode::Input => {
                let typed = self.new_subject_nom.trim();
                if typed.is_empty() { "Non renseignée".to_owned() } else { typed.to_owned() }
            }
        }
    }

    pub fn summary_cohort(&self) -> String {
        if self.promotion_id.is_empty() {
            return "Aucune".to_owned();
        }
        self.cohorts
            .iter()
            .find(|c| c.id == self.promotion_id)
            .map_or_else(|| "Inconnue".to_owned(), |c| c.nom.clone())
    }
}
