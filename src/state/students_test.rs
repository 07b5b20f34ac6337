use super::*;
use crate::net::types::Identity;
use crate::util::filter::apply;

fn student(id: &str, nom: &str, sexe: &str, promotion: Option<&str>) -> Student {
    Student {
        id: id.to_owned(),
        user: Identity {
            email: format!("{}@etudiant.fr", nom.to_lowercase()),
            nom: nom.to_owned(),
            prenom: "Sam".to_owned(),
            sexe: sexe.to_owned(),
            telephone: String::new(),
        },
        date_naissance: Some("2001-04-12".to_owned()),
        lieu_naissance: None,
        adresse: None,
        promotion_id: promotion.map(str::to_owned),
        is_active: true,
        created_at: None,
        updated_at: None,
    }
}

fn cohorts() -> Vec<CohortRef> {
    vec![
        CohortRef { id: "p1".to_owned(), nom: "Licence 1".to_owned() },
        CohortRef { id: "p2".to_owned(), nom: "Master 2".to_owned() },
    ]
}

fn filled_draft() -> StudentDraft {
    let mut draft = StudentDraft::with_password("Xy9#abcdEF".to_owned());
    draft.identity = IdentityDraft {
        email: "sam@etudiant.fr".to_owned(),
        nom: "Durand".to_owned(),
        prenom: "Sam".to_owned(),
        sexe: "F".to_owned(),
        telephone: String::new(),
    };
    draft
}

// =============================================================================
// Cohort lookup
// =============================================================================

#[test]
fn cohort_name_resolves_known_reference() {
    assert_eq!(cohort_name(&cohorts(), Some("p2")), "Master 2");
}

#[test]
fn cohort_name_shows_placeholder_when_unresolved() {
    assert_eq!(cohort_name(&cohorts(), Some("p9")), NO_COHORT);
    assert_eq!(cohort_name(&cohorts(), None), NO_COHORT);
    assert_eq!(cohort_name(&[], Some("p1")), NO_COHORT);
}

// =============================================================================
// Drafts and payloads
// =============================================================================

#[test]
fn from_record_fills_missing_optionals_with_blank() {
    let draft = StudentDraft::from_record(&student("1", "Durand", "F", None));
    assert_eq!(draft.date_naissance, "2001-04-12");
    assert_eq!(draft.lieu_naissance, "");
    assert_eq!(draft.promotion_id, "");
    assert!(draft.password.is_empty());
}

#[test]
fn blank_optionals_serialize_as_null() {
    let payload = filled_draft().to_payload(&EditorMode::Create).expect("valid draft");
    let json = serde_json::to_value(&payload).expect("serialize");
    assert!(json["date_naissance"].is_null());
    assert!(json["adresse"].is_null());
    assert!(json["promotion_id"].is_null());
    assert_eq!(json["password"], "Xy9#abcdEF");
}

#[test]
fn filled_optionals_are_sent() {
    let mut draft = filled_draft();
    draft.promotion_id = "p1".to_owned();
    draft.lieu_naissance = " Lyon ".to_owned();
    let payload = draft.to_payload(&EditorMode::Edit { id: "4".to_owned() }).expect("valid draft");
    assert_eq!(payload.promotion_id.as_deref(), Some("p1"));
    assert_eq!(payload.lieu_naissance.as_deref(), Some("Lyon"));
    assert_eq!(payload.password, None);
}

#[test]
fn missing_sexe_is_rejected() {
    let mut draft = filled_draft();
    draft.identity.sexe.clear();
    assert_eq!(draft.to_payload(&EditorMode::Create), Err(REQUIRED_FIELDS_MESSAGE.to_owned()));
}

#[test]
fn blank_draft_credential_passes_check() {
    let draft = StudentDraft::blank();
    assert!(credential::check(&draft.password).is_ok());
    assert!(draft.promotion_id.is_empty());
}

// =============================================================================
// Filters
// =============================================================================

#[test]
fn cohort_filter_matches_reference() {
    let items = vec![
        student("1", "Durand", "F", Some("p1")),
        student("2", "Petit", "M", Some("p2")),
        student("3", "Leroy", "M", None),
    ];
    let filters = StudentFilters { promotion: "p2".to_owned(), ..Default::default() };
    let ids: Vec<_> = apply(&items, &filters).into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["2"]);
}

#[test]
fn all_criteria_are_conjunctive_and_preserve_order() {
    let items = vec![
        student("1", "Martin", "M", Some("p1")),
        student("2", "Martineau", "F", Some("p1")),
        student("3", "Martins", "M", Some("p1")),
        student("4", "Martin", "M", Some("p2")),
    ];
    let filters = StudentFilters { search: "mart".to_owned(), sexe: "M".to_owned(), promotion: "p1".to_owned() };
    let ids: Vec<_> = apply(&items, &filters).into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn reset_clears_every_criterion() {
    let mut filters = StudentFilters { search: "x".to_owned(), sexe: "F".to_owned(), promotion: "p1".to_owned() };
    filters.reset();
    assert_eq!(filters, StudentFilters::default());
    assert!(!filters.is_active());
}
