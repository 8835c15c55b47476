//! End-to-end tests of `MessengerService` over the reqwest executor
//!
//! Runs the full stack (service, endpoints, executor, HTTP client) against a
//! wiremock Graph server.

mod support;

use messenger_domain::constants::API_ERROR_PREFIX;
use messenger_domain::{MessengerError, QueryEncoding};
use messenger_infra::{appsecret_proof, build_service};
use serde_json::json;
use support::{capture_logs, graph_config};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn get_profile_returns_decoded_profile() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v14.0/2468"))
        .and(query_param("fields", "first_name,last_name,profile_pic"))
        .and(query_param("access_token", "page-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "2468",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "profile_pic": "https://cdn.example.com/ada.png"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = build_service(&graph_config(&server.uri(), None)).expect("service");
    let profile =
        service.get_profile("2468", "first_name,last_name,profile_pic").await.expect("profile");

    assert_eq!(profile.first_name, "Ada");
    assert_eq!(profile.last_name, "Lovelace");
    assert_eq!(profile.profile_picture.as_deref(), Some("https://cdn.example.com/ada.png"));
}

#[tokio::test]
async fn get_profile_surfaces_graph_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v14.0/404"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "message": "Unsupported get request.",
                "type": "GraphMethodException",
                "code": 100,
                "error_subcode": 33,
                "fbtrace_id": "AbCdEf"
            }
        })))
        .mount(&server)
        .await;

    let service = build_service(&graph_config(&server.uri(), None)).expect("service");
    let err = service.get_profile("404", "first_name").await.unwrap_err();

    assert_eq!(err.to_string(), format!("{API_ERROR_PREFIX}Unsupported get request."));
    let api = err.api_error().expect("api error");
    assert_eq!(api.code, Some(100));
    assert_eq!(api.error_subcode, Some(33));
    assert_eq!(api.http_status, Some(400));
}

#[tokio::test]
async fn server_error_is_reported_after_a_single_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": { "message": "boom" } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = build_service(&graph_config(&server.uri(), None)).expect("service");
    let err = service.get_profile("1", "").await.unwrap_err();

    assert_eq!(err.to_string(), "Error occured: boom");
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn get_profile_with_html_error_page_yields_prefix_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let service = build_service(&graph_config(&server.uri(), None)).expect("service");
    let err = service.get_profile("1", "first_name").await.unwrap_err();

    assert_eq!(err.to_string(), API_ERROR_PREFIX);
}

#[tokio::test]
async fn get_profile_rejects_malformed_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let service = build_service(&graph_config(&server.uri(), None)).expect("service");
    let err = service.get_profile("1", "first_name").await.unwrap_err();

    assert!(matches!(err, MessengerError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn get_psid_returns_recipient() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v10.0/me"))
        .and(query_param("fields", "recipient"))
        .and(query_param("account_linking_token", "link-token"))
        .and(query_param("access_token", "page-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "recipient": "1357", "id": "page-1" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = build_service(&graph_config(&server.uri(), None)).expect("service");
    let psid = service.get_psid("link-token").await.expect("psid");

    assert_eq!(psid, "1357");
}

#[tokio::test]
async fn get_psid_surfaces_graph_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v10.0/me"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "message": "Invalid account_linking_token", "code": 10 }
        })))
        .mount(&server)
        .await;

    let service = build_service(&graph_config(&server.uri(), None)).expect("service");
    let err = service.get_psid("expired").await.unwrap_err();

    assert_eq!(err.to_string(), "Error occured: Invalid account_linking_token");
}

#[tokio::test]
async fn signed_requests_carry_appsecret_proof() {
    let server = MockServer::start().await;
    let proof = appsecret_proof("page-token", "app-secret");
    Mock::given(method("GET"))
        .and(query_param("appsecret_proof", proof.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "recipient": "9" })))
        .expect(1)
        .mount(&server)
        .await;

    let service =
        build_service(&graph_config(&server.uri(), Some("app-secret"))).expect("service");

    assert_eq!(service.get_psid("link-token").await.expect("psid"), "9");
}

#[tokio::test]
async fn percent_encoding_escapes_reserved_characters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v10.0/me"))
        .and(query_param("account_linking_token", "a&b=c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "recipient": "77" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = graph_config(&server.uri(), None);
    config.graph.query_encoding = QueryEncoding::Percent;
    let service = build_service(&config).expect("service");

    assert_eq!(service.get_psid("a&b=c").await.expect("psid"), "77");
}

#[tokio::test]
async fn connection_failure_is_a_network_error() {
    // Nothing listens on port 1.
    let service = build_service(&graph_config("http://127.0.0.1:1", None)).expect("service");
    let err = service.get_profile("1", "first_name").await.unwrap_err();

    assert!(matches!(err, MessengerError::Network(_)), "got {err:?}");
    assert!(!err.to_string().contains("page-token"));
}

#[tokio::test]
async fn access_token_never_reaches_logs() {
    let logs = capture_logs();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "message": "Invalid OAuth access token." }
        })))
        .mount(&server)
        .await;

    let service =
        build_service(&graph_config(&server.uri(), Some("app-secret"))).expect("service");
    service.get_psid("link-token").await.unwrap_err();

    assert!(logs.contains("Graph API returned an error"), "warning should be logged");
    assert!(!logs.contains("page-token"));
    assert!(!logs.contains(&appsecret_proof("page-token", "app-secret")));
}
