//! Identity form fields shared by the instructor and student editors.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use crate::net::types::Identity;
use crate::util::filter::text_matches;

/// `(code, label)` pairs for the sex selector.
pub const SEX_OPTIONS: [(&str, &str); 2] = [("M", "Homme"), ("F", "Femme")];

/// Selector options as owned `(value, label)` pairs.
pub fn sex_options() -> Vec<(String, String)> {
    SEX_OPTIONS.iter().map(|(v, l)| ((*v).to_owned(), (*l).to_owned())).collect()
}

pub fn sex_label(code: &str) -> &str {
    SEX_OPTIONS
        .iter()
        .find(|(value, _)| *value == code)
        .map_or(code, |(_, label)| *label)
}

/// Editable copy of an [`Identity`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentityDraft {
    pub email: String,
    pub nom: String,
    pub prenom: String,
    pub sexe: String,
    pub telephone: String,
}

impl IdentityDraft {
    pub fn from_identity(identity: &Identity) -> Self {
        Self {
            email: identity.email.clone(),
            nom: identity.nom.clone(),
            prenom: identity.prenom.clone(),
            sexe: identity.sexe.clone(),
            telephone: identity.telephone.clone(),
        }
    }

    /// Whether one of email, nom, prenom or sexe is blank.
    pub fn missing_required(&self) -> bool {
        [&self.email, &self.nom, &self.prenom, &self.sexe]
            .iter()
            .any(|field| field.trim().is_empty())
    }

    pub fn to_identity(&self) -> Identity {
        Identity {
            email: self.email.trim().to_owned(),
            nom: self.nom.trim().to_owned(),
            prenom: self.prenom.trim().to_owned(),
            sexe: self.sexe.clone(),
            telephone: self.telephone.trim().to_owned(),
        }
    }
}

/// Avatar initials: first letter of prénom then nom.
pub fn initials(identity: &Identity) -> String {
    [&identity.prenom, &identity.nom]
        .iter()
        .filter_map(|part| part.trim().chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Phone number, or `-` when unset.
pub fn phone_or_dash(identity: &Identity) -> String {
    let phone = identity.telephone.trim();
    if phone.is_empty() { "-".to_owned() } else { phone.to_owned() }
}

/// Free-text search over nom, prenom and email.
pub fn identity_matches(query: &str, identity: &Identity) -> bool {
    text_matches(query, [identity.nom.as_str(), identity.prenom.as_str(), identity.email.as_str()])
}
