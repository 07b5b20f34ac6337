use super::*;
use serde_json::json;

#[test]
fn error_body_classifies_raw_text() {
    assert_eq!(ErrorBody::from_raw("   "), ErrorBody::Empty);
    assert_eq!(ErrorBody::from_raw("{\"detail\":\"x\"}"), ErrorBody::Json(json!({ "detail": "x" })));
    assert_eq!(
        ErrorBody::from_raw("<html>Internal Server Error</html>"),
        ErrorBody::Text("<html>Internal Server Error</html>".to_owned())
    );
}

#[test]
fn detail_field_wins() {
    let err = ApiError::Status { status: 403, body: ErrorBody::Json(json!({ "detail": "Accès refusé" })) };
    assert_eq!(err.user_message("Erreur lors de l'enregistrement"), "Accès refusé");
}

#[test]
fn field_errors_are_joined() {
    let err = ApiError::Status {
        status: 400,
        body: ErrorBody::Json(json!({
            "email": ["Cet email existe déjà."],
            "matiere": ["Requis.", "Invalide."]
        })),
    };
    assert_eq!(
        err.user_message("ctx"),
        "email: Cet email existe déjà. | matiere: Requis., Invalide."
    );
}

#[test]
fn empty_json_object_falls_back_to_context() {
    let err = ApiError::Status { status: 400, body: ErrorBody::Json(json!({})) };
    assert_eq!(err.user_message("Erreur lors de l'enregistrement"), "Erreur lors de l'enregistrement");
}

#[test]
fn text_body_is_truncated() {
    let long = "x".repeat(500);
    let err = ApiError::Status { status: 500, body: ErrorBody::Text(long) };
    let msg = err.user_message("Erreur serveur");
    assert!(msg.starts_with("Erreur serveur (500)\n"));
    assert_eq!(msg.lines().nth(1).map(str::len), Some(200));
}

#[test]
fn empty_body_reports_status() {
    let err = ApiError::Status { status: 500, body: ErrorBody::Empty };
    assert_eq!(err.user_message("Erreur lors de la suppression"), "Erreur lors de la suppression (500)");
    assert_eq!(err.status(), Some(500));
}

#[test]
fn network_error_appends_cause() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(
        err.user_message("Erreur lors du chargement des formateurs"),
        "Erreur lors du chargement des formateurs: connection refused"
    );
    assert_eq!(err.status(), None);
}

#[test]
fn validation_error_shows_its_own_message() {
    let err = ApiError::Validation("Veuillez remplir tous les champs obligatoires".to_owned());
    assert_eq!(err.user_message("ignored"), "Veuillez remplir tous les champs obligatoires");
}

#[test]
fn unavailable_uses_context() {
    assert_eq!(ApiError::Unavailable.user_message("Chargement impossible"), "Chargement impossible");
}
