//! Network behavior of the production client, against a local mock server.

use pantry_core::{FetchError, HttpClient, ReqwestClient, USER_AGENT};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_success_returns_body_and_sends_browser_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipe"))
        .and(header("user-agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestClient::new().unwrap();
    let body = client
        .fetch_html(&format!("{}/recipe", server.uri()))
        .await
        .unwrap();

    assert_eq!(body, "<html>ok</html>");
}

#[tokio::test]
async fn test_error_status_is_reported_with_its_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = ReqwestClient::new().unwrap();
    let err = client
        .fetch_html(&format!("{}/missing", server.uri()))
        .await
        .unwrap_err();

    assert_eq!(err, FetchError::Status { status: 404 });
    assert_eq!(err.to_string(), "Failed to fetch URL: 404");
}

#[tokio::test]
async fn test_redirects_are_followed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("Location", format!("{}/new", server.uri())),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string("moved here"))
        .mount(&server)
        .await;

    let client = ReqwestClient::new().unwrap();
    let body = client
        .fetch_html(&format!("{}/old", server.uri()))
        .await
        .unwrap();

    assert_eq!(body, "moved here");
}

#[tokio::test]
async fn test_redirect_to_error_status_reports_final_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("Location", format!("{}/gone", server.uri())),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(410))
        .mount(&server)
        .await;

    let client = ReqwestClient::new().unwrap();
    let err = client
        .fetch_html(&format!("{}/old", server.uri()))
        .await
        .unwrap_err();

    assert_eq!(err, FetchError::Status { status: 410 });
}

#[tokio::test]
async fn test_disabled_redirects_surface_the_redirect_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("Location", format!("{}/new", server.uri())),
        )
        .mount(&server)
        .await;

    let client = ReqwestClient::builder().max_redirects(0).build().unwrap();
    let err = client.fetch_html(&server.uri()).await.unwrap_err();

    assert_eq!(err, FetchError::Status { status: 302 });
}

#[tokio::test]
async fn test_connection_refused_is_a_request_error() {
    let client = ReqwestClient::new().unwrap();
    let err = client.fetch_html("http://127.0.0.1:1/").await.unwrap_err();

    match err {
        FetchError::Request(message) => assert!(!message.is_empty()),
        other => panic!("expected request error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_url_is_a_request_error() {
    let client = ReqwestClient::new().unwrap();
    let err = client.fetch_html("not a url").await.unwrap_err();

    assert!(matches!(err, FetchError::Request(_)));
}
