use super::*;

#[test]
fn test_empty_base_url_is_rejected() {
    assert_eq!(ApiConfig::new(""), Err(ConfigError::MissingBaseUrl));
    assert_eq!(ApiConfig::new("   "), Err(ConfigError::MissingBaseUrl));
}

#[test]
fn test_scheme_added_and_trailing_slash_trimmed() {
    let cfg = ApiConfig::new("localhost:5000/").unwrap();
    assert_eq!(cfg.base_url(), "http://localhost:5000");
    assert_eq!(cfg.url_for("/predict"), "http://localhost:5000/predict");
}

#[test]
fn test_https_kept() {
    let cfg = ApiConfig::new("https://risk.example.org/api/").unwrap();
    assert_eq!(cfg.url_for("/analyze"), "https://risk.example.org/api/analyze");
}

#[test]
fn test_unsupported_scheme() {
    assert!(matches!(
        ApiConfig::new("ftp://host"),
        Err(ConfigError::UnsupportedScheme(_))
    ));
}

#[test]
fn test_scheme_is_case_insensitive() {
    let cfg = ApiConfig::new("HTTP://Risk.Example.org:5000/").unwrap();
    assert_eq!(cfg.base_url(), "http://Risk.Example.org:5000");
    let cfg = ApiConfig::new("Https://risk.example.org").unwrap();
    assert_eq!(cfg.url_for("/predict"), "https://risk.example.org/predict");
}
