use super::*;

fn client() -> ApiClient {
    ApiClient::new(ApiConfig::new("http://127.0.0.1:8000/api").unwrap())
}

#[test]
fn resource_paths_match_backend_routes() {
    assert_eq!(Resource::Instructors.path(), "/formateurs/");
    assert_eq!(Resource::Students.path(), "/etudiants/");
    assert_eq!(Resource::Cohorts.path(), "/promotion/");
    assert_eq!(Resource::CohortLookup.path(), "/promotions/");
    assert_eq!(Resource::TeachingSpaces.path(), "/espace-pedagogique/espaces/");
}

#[test]
fn cohorts_update_with_put_others_with_patch() {
    assert_eq!(Resource::Cohorts.update_method(), Method::Put);
    assert_eq!(Resource::Instructors.update_method(), Method::Patch);
    assert_eq!(Resource::Students.update_method(), Method::Patch);
    assert_eq!(Resource::TeachingSpaces.update_method(), Method::Patch);
}

#[test]
fn write_target_posts_to_collection_on_create() {
    assert_eq!(
        client().write_target(Resource::Instructors, None),
        (Method::Post, "http://127.0.0.1:8000/api/formateurs/".to_owned())
    );
}

#[test]
fn write_target_updates_item_on_edit() {
    assert_eq!(
        client().write_target(Resource::Cohorts, Some("p-3")),
        (Method::Put, "http://127.0.0.1:8000/api/promotion/p-3/".to_owned())
    );
    assert_eq!(
        client().write_target(Resource::Students, Some("9")),
        (Method::Patch, "http://127.0.0.1:8000/api/etudiants/9/".to_owned())
    );
}

#[test]
fn check_response_accepts_2xx() {
    assert_eq!(check_response(200, "[]".to_owned()), Ok("[]".to_owned()));
    assert_eq!(check_response(204, String::new()), Ok(String::new()));
}

#[test]
fn check_response_wraps_error_body() {
    let err = check_response(500, "boom".to_owned()).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 500, body: ErrorBody::Text("boom".to_owned()) });
}

#[test]
fn unreadable_body_is_a_network_error_even_on_success() {
    let err = read_response::<&str>("/formateurs/", 200, Err("stream closed")).unwrap_err();
    assert_eq!(err, ApiError::Network("stream closed".to_owned()));
    assert_eq!(err.user_message("Erreur de chargement"), "Erreur de chargement: stream closed");
}

#[test]
fn readable_body_goes_through_status_check() {
    assert_eq!(read_response::<&str>("/formateurs/", 201, Ok("{}".to_owned())), Ok("{}".to_owned()));
    let err = read_response::<&str>("/formateurs/", 404, Ok(String::new())).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 404, body: ErrorBody::Empty });
}

#[test]
fn unserializable_payload_is_a_decode_error() {
    let mut payload = std::collections::BTreeMap::new();
    payload.insert((1_u8, 2_u8), "x");
    assert!(matches!(encode(&payload), Err(ApiError::Decode(_))));
}

#[test]
fn created_record_with_wrong_shape_is_a_decode_error() {
    let ok: crate::net::types::CohortRef = decode_record("/promotion/", r#"{"id": 4, "nom": "M2"}"#).unwrap();
    assert_eq!(ok.id, "4");
    let err = decode_record::<crate::net::types::CohortRef>("/promotion/", "<html>").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn method_names_are_uppercase_verbs() {
    assert_eq!(Method::Patch.as_str(), "PATCH");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}
