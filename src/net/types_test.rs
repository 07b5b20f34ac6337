use super::*;
use serde_json::json;

fn identity(nom: &str, prenom: &str) -> Identity {
    Identity {
        email: format!("{}@campus.test", nom.to_lowercase()),
        nom: nom.to_owned(),
        prenom: prenom.to_owned(),
        sexe: "M".to_owned(),
        telephone: String::new(),
    }
}

// =============================================================
// Instructor / Student decoding
// =============================================================

#[test]
fn instructor_decodes_nested_user() {
    let value = json!({
        "id": "f-1",
        "user": {
            "email": "jean.dupont@campus.test",
            "nom": "Dupont",
            "prenom": "Jean",
            "sexe": "M",
            "telephone": null
        },
        "is_active": true,
        "created_at": "2024-09-01T08:00:00Z"
    });
    let instructor: Instructor = serde_json::from_value(value).unwrap();
    assert_eq!(instructor.id, "f-1");
    assert_eq!(instructor.user.nom, "Dupont");
    assert_eq!(instructor.user.telephone, "");
    assert_eq!(instructor.created_at.as_deref(), Some("2024-09-01T08:00:00Z"));
}

#[test]
fn instructor_decodes_flat_identity_and_integer_id() {
    let value = json!({
        "id": 7,
        "email": "marie@campus.test",
        "nom": "Curie",
        "prenom": "Marie",
        "sexe": "F",
        "telephone": "0102030405"
    });
    let instructor: Instructor = serde_json::from_value(value).unwrap();
    assert_eq!(instructor.id, "7");
    assert_eq!(instructor.user.prenom, "Marie");
    assert_eq!(instructor.user.telephone, "0102030405");
    assert!(instructor.is_active);
}

#[test]
fn instructor_without_id_is_rejected() {
    let value = json!({ "nom": "Sans", "prenom": "Id" });
    assert!(serde_json::from_value::<Instructor>(value).is_err());
}

#[test]
fn student_decodes_cohort_reference_and_blank_optionals() {
    let value = json!({
        "id": "e-1",
        "user": { "email": "a@b.c", "nom": "Martin", "prenom": "Léa", "sexe": "F" },
        "date_naissance": "2003-04-05",
        "lieu_naissance": "",
        "adresse": null,
        "promotion_id": 12
    });
    let student: Student = serde_json::from_value(value).unwrap();
    assert_eq!(student.promotion_id.as_deref(), Some("12"));
    assert_eq!(student.date_naissance.as_deref(), Some("2003-04-05"));
    assert_eq!(student.lieu_naissance, None);
    assert_eq!(student.adresse, None);
}

#[test]
fn student_accepts_promotion_alias() {
    let value = json!({ "id": "e-2", "nom": "Petit", "prenom": "Tom", "promotion": "p-9" });
    let student: Student = serde_json::from_value(value).unwrap();
    assert_eq!(student.promotion_id.as_deref(), Some("p-9"));
}

#[test]
fn student_with_both_promotion_fields_prefers_promotion_id() {
    let value = json!({ "id": "e-3", "nom": "Roux", "prenom": "Lina", "promotion_id": 7, "promotion": "p-9" });
    let student: Student = serde_json::from_value(value).unwrap();
    assert_eq!(student.promotion_id.as_deref(), Some("7"));

    let blank_id = json!({ "id": "e-4", "nom": "Roux", "prenom": "Noé", "promotion_id": null, "promotion": 9 });
    let student: Student = serde_json::from_value(blank_id).unwrap();
    assert_eq!(student.promotion_id.as_deref(), Some("9"));
}

#[test]
fn full_name_skips_blank_parts() {
    assert_eq!(identity("Dupont", "Jean").full_name(), "Jean Dupont");
    assert_eq!(identity("Dupont", " ").full_name(), "Dupont");
}

// =============================================================
// Cohort / TeachingSpace decoding
// =============================================================

#[test]
fn cohort_null_description_becomes_empty() {
    let value = json!({ "id": 3, "nom": "M1", "filiere": "Informatique", "periode": "2024-2025", "description": null });
    let cohort: Cohort = serde_json::from_value(value).unwrap();
    assert_eq!(cohort.id, "3");
    assert_eq!(cohort.description, "");
}

#[test]
fn teaching_space_decodes_full_record() {
    let value = json!({
        "id": "s-1",
        "nom": "Algorithmique Avancée - Groupe A",
        "matiere": { "id": "m-1", "nom": "Algorithmique", "code": "ALGO", "description": null },
        "promotion": null,
        "promotion_nom": null,
        "formateur_principal": 4,
        "formateur_principal_nom": "Jean Dupont",
        "description": "",
        "is_actif": true,
        "created_at": "2024-10-01T09:30:00Z",
        "updated_at": "2024-10-01T09:30:00Z",
        "formateurs_count": 1,
        "etudiants_count": 32
    });
    let space: TeachingSpace = serde_json::from_value(value).unwrap();
    assert_eq!(space.matiere.as_ref().map(Subject::label).as_deref(), Some("Algorithmique (ALGO)"));
    assert_eq!(space.promotion, None);
    assert_eq!(space.formateur_principal.as_deref(), Some("4"));
    assert_eq!(space.etudiants_count, 32);
}

#[test]
fn teaching_space_list_tolerates_null_subject() {
    let body = json!({
        "results": [
            { "id": 1, "nom": "Algorithmique", "matiere": { "id": 5, "nom": "Informatique", "code": "INFO" } },
            { "id": 2, "nom": "Séminaire", "matiere": null },
            { "id": 3, "nom": "Atelier" }
        ]
    })
    .to_string();
    let spaces: Vec<TeachingSpace> = decode_list(&body).unwrap();
    assert_eq!(spaces.len(), 3);
    assert_eq!(spaces[0].matiere.as_ref().map(|m| m.id.as_str()), Some("5"));
    assert_eq!(spaces[1].matiere, None);
    assert_eq!(spaces[2].matiere, None);
}

#[test]
fn subject_label_without_code_is_name() {
    let subject = Subject { id: "m".to_owned(), nom: "Physique".to_owned(), code: String::new(), description: None };
    assert_eq!(subject.label(), "Physique");
}

// =============================================================
// Payloads
// =============================================================

#[test]
fn instructor_payload_omits_password_on_update() {
    let payload = InstructorPayload { user: identity("Dupont", "Jean"), password: None };
    let value = serde_json::to_value(&payload).unwrap();
    assert!(value.get("password").is_none());
    assert_eq!(value["user"]["nom"], "Dupont");
}

#[test]
fn student_payload_sends_null_optionals() {
    let payload = StudentPayload {
        user: identity("Martin", "Léa"),
        password: Some("Abcdef1!xyz".to_owned()),
        date_naissance: None,
        lieu_naissance: None,
        adresse: Some("1 rue de Paris".to_owned()),
        promotion_id: None,
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["password"], "Abcdef1!xyz");
    assert!(value["date_naissance"].is_null());
    assert!(value["promotion_id"].is_null());
    assert_eq!(value["adresse"], "1 rue de Paris");
}

#[test]
fn teaching_space_payload_omits_missing_cohort() {
    let payload = TeachingSpacePayload {
        nom: "Web".to_owned(),
        matiere: "m-1".to_owned(),
        promotion: None,
        description: String::new(),
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({ "nom": "Web", "matiere": "m-1", "description": "" })
    );
}

// =============================================================
// List envelopes
// =============================================================

#[test]
fn decode_list_accepts_bare_array() {
    let items: Vec<CohortRef> = decode_list(r#"[{"id":"p1","nom":"L1"},{"id":"p2","nom":"L2"}]"#).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].nom, "L2");
}

#[test]
fn decode_list_accepts_paginated_results() {
    let body = r#"{"count":1,"next":null,"previous":null,"results":[{"id":1,"nom":"L3"}]}"#;
    let items: Vec<CohortRef> = decode_list(body).unwrap();
    assert_eq!(items, vec![CohortRef { id: "1".to_owned(), nom: "L3".to_owned() }]);
}

#[test]
fn decode_list_accepts_data_wrapper_and_single_object() {
    let wrapped: Vec<CohortRef> = decode_list(r#"{"data":[{"id":"a","nom":"A"}]}"#).unwrap();
    assert_eq!(wrapped.len(), 1);
    let single: Vec<CohortRef> = decode_list(r#"{"id":"b","nom":"B"}"#).unwrap();
    assert_eq!(single, vec![CohortRef { id: "b".to_owned(), nom: "B".to_owned() }]);
}

#[test]
fn decode_list_rejects_scalars() {
    assert!(decode_list::<CohortRef>("42").is_err());
}
