use super::*;
use crate::net::types::Identity;
use crate::util::filter::apply;

fn instructor(id: &str, nom: &str, sexe: &str) -> Instructor {
    Instructor {
        id: id.to_owned(),
        user: Identity {
            email: format!("{}@univ.fr", nom.to_lowercase()),
            nom: nom.to_owned(),
            prenom: "Alex".to_owned(),
            sexe: sexe.to_owned(),
            telephone: String::new(),
        },
        is_active: true,
        created_at: None,
        updated_at: None,
    }
}

fn filled_draft(password: &str) -> InstructorDraft {
    let mut draft = InstructorDraft::with_password(password.to_owned());
    draft.identity = IdentityDraft {
        email: "jean@univ.fr".to_owned(),
        nom: "Dupont".to_owned(),
        prenom: "Jean".to_owned(),
        sexe: "M".to_owned(),
        telephone: "0102030405".to_owned(),
    };
    draft
}

// =============================================================================
// Drafts
// =============================================================================

#[test]
fn blank_draft_comes_with_valid_credential() {
    let draft = InstructorDraft::blank();
    assert_eq!(draft.identity, IdentityDraft::default());
    assert!(credential::check(&draft.password).is_ok());
    assert_eq!(draft.password.chars().count(), credential::DEFAULT_LENGTH);
}

#[test]
fn regenerate_replaces_credential_with_valid_one() {
    let mut draft = InstructorDraft::with_password("Aa1!aaaa".to_owned());
    draft.regenerate_password();
    assert!(credential::check(&draft.password).is_ok());
}

#[test]
fn from_record_seeds_identity_without_password() {
    let record = instructor("3", "Dupont", "M");
    let draft = InstructorDraft::from_record(&record);
    assert_eq!(draft.identity.nom, "Dupont");
    assert_eq!(draft.identity.email, "dupont@univ.fr");
    assert!(draft.password.is_empty());
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn empty_nom_is_rejected_before_any_request() {
    let mut draft = filled_draft("Abcdef1!xy");
    draft.identity.nom.clear();
    assert_eq!(draft.to_payload(&EditorMode::Create), Err(REQUIRED_FIELDS_MESSAGE.to_owned()));
}

#[test]
fn create_payload_carries_password() {
    let payload = filled_draft("Abcdef1!xy").to_payload(&EditorMode::Create).expect("valid draft");
    assert_eq!(payload.password.as_deref(), Some("Abcdef1!xy"));
    assert_eq!(payload.user.nom, "Dupont");
}

#[test]
fn create_rejects_weak_password() {
    let err = filled_draft("12345678").to_payload(&EditorMode::Create).expect_err("numeric only");
    assert!(err.starts_with("Le mot de passe généré est invalide"));
    assert!(filled_draft("Ab1!").to_payload(&EditorMode::Create).is_err());
}

#[test]
fn edit_payload_omits_password_and_skips_strength_check() {
    let mode = EditorMode::Edit { id: "3".to_owned() };
    let payload = filled_draft("").to_payload(&mode).expect("valid draft");
    assert_eq!(payload.password, None);
    let json = serde_json::to_value(&payload).expect("serialize");
    assert!(json.get("password").is_none());
    assert_eq!(json["user"]["email"], "jean@univ.fr");
}

// =============================================================================
// Filters
// =============================================================================

#[test]
fn search_narrows_by_name() {
    let items = vec![instructor("1", "Dupont", "M"), instructor("2", "Martin", "F")];
    let filters = InstructorFilters { search: "dup".to_owned(), ..Default::default() };
    let visible = apply(&items, &filters);
    assert_eq!(visible, vec![items[0].clone()]);
}

#[test]
fn sexe_and_search_combine() {
    let items = vec![
        instructor("1", "Dupont", "M"),
        instructor("2", "Dupuis", "F"),
        instructor("3", "Martin", "F"),
    ];
    let filters = InstructorFilters { search: "dup".to_owned(), sexe: "F".to_owned() };
    let ids: Vec<_> = apply(&items, &filters).into_iter().map(|i| i.id).collect();
    assert_eq!(ids, vec!["2"]);
}

#[test]
fn reset_restores_full_list() {
    let items = vec![instructor("1", "Dupont", "M"), instructor("2", "Martin", "F")];
    let mut filters = InstructorFilters { search: "zzz".to_owned(), sexe: "M".to_owned() };
    assert!(filters.is_active());
    assert!(apply(&items, &filters).is_empty());
    filters.reset();
    assert!(!filters.is_active());
    assert_eq!(apply(&items, &filters), items);
}
