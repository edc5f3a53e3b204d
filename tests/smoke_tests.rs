use brody::components::day_preparation::render::{button, render_page};
use brody::components::day_preparation::ViewState;
use brody::config::{Config, DEFAULT_API_URL, DEFAULT_LOCALE};
use brody::error::{config_error, request_error, Error};
use miette::Diagnostic;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Smoke test to verify that a default config is usable
#[tokio::test]
async fn test_default_config_is_valid() {
    let config = Config::default();

    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.locale, DEFAULT_LOCALE);
    assert!(config.validate().is_ok());
}

/// Test reading config through the shared lock, the way the client does
#[tokio::test]
async fn test_shared_config_endpoint() {
    let config = Arc::new(RwLock::new(Config {
        api_url: "http://planner.internal:8080".to_string(),
        ..Config::default()
    }));

    let endpoint = {
        let config_guard = config.read().await;
        config_guard.endpoint_url().unwrap()
    };

    assert_eq!(endpoint.as_str(), "http://planner.internal:8080/api/prepare-day");
}

/// Errors carry a diagnostic code per kind
#[test]
fn test_error_diagnostic_codes() {
    let request = request_error("connection refused");
    assert_eq!(request.to_string(), "Request failed: connection refused");
    assert_eq!(request.code().unwrap().to_string(), "brody::request");

    let config = config_error("bad url");
    assert!(matches!(config, Error::Config(_)));
    assert_eq!(config.code().unwrap().to_string(), "brody::config");
}

/// The initial page renders without a results block and with an enabled button
#[test]
fn test_initial_page() {
    let state = ViewState::new();
    assert!(!button(&state).disabled);

    let page = render_page(&state);
    assert!(page.contains("What Brody Does"));
    assert!(!page.contains("Your Day Summary"));
}
