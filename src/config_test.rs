use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let owned: Vec<(String, String)> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| owned.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

#[test]
fn api_config_trims_trailing_slash() {
    let cfg = ApiConfig::new("https://campus.example/api/").unwrap();
    assert_eq!(cfg.base_url, "https://campus.example/api");
}

#[test]
fn api_config_rejects_relative_url() {
    assert_eq!(
        ApiConfig::new("campus.example/api"),
        Err(ConfigError::InvalidBaseUrl("campus.example/api".to_owned()))
    );
}

#[test]
fn endpoint_joins_collection_path() {
    let cfg = ApiConfig::new(DEFAULT_API_BASE_URL).unwrap();
    assert_eq!(cfg.endpoint("/formateurs/"), "http://127.0.0.1:8000/api/formateurs/");
    assert_eq!(
        cfg.endpoint("espace-pedagogique/espaces/"),
        "http://127.0.0.1:8000/api/espace-pedagogique/espaces/"
    );
}

#[test]
fn item_keeps_single_trailing_slash() {
    let cfg = ApiConfig::new(DEFAULT_API_BASE_URL).unwrap();
    assert_eq!(cfg.item("/etudiants/", "42"), "http://127.0.0.1:8000/api/etudiants/42/");
    assert_eq!(cfg.item("/promotion", "p-1"), "http://127.0.0.1:8000/api/promotion/p-1/");
}

#[test]
fn server_config_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api, ApiConfig::compiled());
}

#[test]
fn server_config_reads_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("CAMPUS_API_BASE_URL", "https://backend.test/api/"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api.base_url, "https://backend.test/api");
}

#[test]
fn server_config_invalid_port_errors() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));
    assert!(err.to_string().contains("invalid PORT"));
}
