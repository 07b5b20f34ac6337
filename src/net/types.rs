//! Wire records exchanged with the REST backend.
//!
//! DESIGN
//! ======
//! Records decode leniently: ids arrive as strings or integers, identity
//! fields arrive either flat or nested under `user`, and nullable text
//! columns collapse to empty strings. Payload types serialize exactly the
//! shape the backend expects for create/update calls.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Identity fields shared by instructors and students (`user` sub-object).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub nom: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub prenom: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub sexe: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub telephone: String,
}

impl Identity {
    /// `Prénom Nom`, skipping empty parts.
    pub fn full_name(&self) -> String {
        [self.prenom.trim(), self.nom.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// An instructor (formateur).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "InstructorWire")]
pub struct Instructor {
    pub id: String,
    pub user: Identity,
    pub is_active: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Deserialize)]
struct InstructorWire {
    #[serde(deserialize_with = "deserialize_id")]
    id: String,
    #[serde(default)]
    user: Option<Identity>,
    #[serde(flatten)]
    flat: Identity,
    #[serde(default = "default_true")]
    is_active: bool,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
}

impl From<InstructorWire> for Instructor {
    fn from(wire: InstructorWire) -> Self {
        Self {
            id: wire.id,
            user: wire.user.unwrap_or(wire.flat),
            is_active: wire.is_active,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
        }
    }
}

/// A student (étudiant).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StudentWire")]
pub struct Student {
    pub id: String,
    pub user: Identity,
    pub date_naissance: Option<String>,
    pub lieu_naissance: Option<String>,
    pub adresse: Option<String>,
    pub promotion_id: Option<String>,
    pub is_active: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Deserialize)]
struct StudentWire {
    #[serde(deserialize_with = "deserialize_id")]
    id: String,
    #[serde(default)]
    user: Option<Identity>,
    #[serde(flatten)]
    flat: Identity,
    #[serde(default)]
    date_naissance: Option<String>,
    #[serde(default)]
    lieu_naissance: Option<String>,
    #[serde(default)]
    adresse: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    promotion_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    promotion: Option<String>,
    #[serde(default = "default_true")]
    is_active: bool,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
}

impl From<StudentWire> for Student {
    fn from(wire: StudentWire) -> Self {
        Self {
            id: wire.id,
            user: wire.user.unwrap_or(wire.flat),
            date_naissance: non_empty(wire.date_naissance),
            lieu_naissance: non_empty(wire.lieu_naissance),
            adresse: non_empty(wire.adresse),
            promotion_id: non_empty(wire.promotion_id).or_else(|| non_empty(wire.promotion)),
            is_active: wire.is_active,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
        }
    }
}

/// A cohort (promotion).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cohort {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub nom: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub filiere: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub periode: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: String,
}

/// Minimal cohort entry used to resolve a student's cohort name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortRef {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub nom: String,
}

/// An academic subject (matière).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub nom: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Subject {
    /// `Nom (CODE)`, or just the name when no code is set.
    pub fn label(&self) -> String {
        if self.code.is_empty() {
            self.nom.clone()
        } else {
            format!("{} ({})", self.nom, self.code)
        }
    }
}

/// A teaching space (espace pédagogique).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeachingSpace {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub nom: String,
    /// `None` when the backend sends `null` or omits the subject.
    #[serde(default)]
    pub matiere: Option<Subject>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub promotion: Option<String>,
    #[serde(default)]
    pub promotion_nom: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub formateur_principal: Option<String>,
    #[serde(default)]
    pub formateur_principal_nom: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: String,
    #[serde(default = "default_true")]
    pub is_actif: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub formateurs_count: u32,
    #[serde(default)]
    pub etudiants_count: u32,
}

/// Create/update body for `/formateurs/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InstructorPayload {
    pub user: Identity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Create/update body for `/etudiants/`. Empty optional fields are sent as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StudentPayload {
    pub user: Identity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub date_naissance: Option<String>,
    pub lieu_naissance: Option<String>,
    pub adresse: Option<String>,
    pub promotion_id: Option<String>,
}

/// Create/update body for `/promotion/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CohortPayload {
    pub nom: String,
    pub filiere: String,
    pub periode: String,
    pub description: String,
}

/// Create body for `/espace-pedagogique/espaces/`.
///
/// `matiere` carries either an existing subject id or a new subject name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TeachingSpacePayload {
    pub nom: String,
    pub matiere: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion: Option<String>,
    pub description: String,
}

/// Partial update body for an existing teaching space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TeachingSpaceUpdate {
    pub nom: String,
    pub description: String,
    pub is_actif: bool,
}

/// List response shapes accepted from the backend.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Paginated { results: Vec<T> },
    Wrapped { data: Vec<T> },
    Single(T),
}

impl<T> ListEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Paginated { results: items } | Self::Wrapped { data: items } => items,
            Self::Single(item) => vec![item],
        }
    }
}

/// Decode a list body in any accepted shape.
///
/// # Errors
///
/// Returns the serde error message when the body matches none of the shapes.
pub fn decode_list<T: serde::de::DeserializeOwned>(body: &str) -> Result<Vec<T>, String> {
    serde_json::from_str::<ListEnvelope<T>>(body)
        .map(ListEnvelope::into_vec)
        .map_err(|e| e.to_string())
}

fn default_true() -> bool {
    true
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_opt_id(deserializer)?.ok_or_else(|| D::Error::custom("missing id"))
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => Ok(Some(n.to_string())),
        _ => Err(D::Error::custom("expected string or integer id")),
    }
}
