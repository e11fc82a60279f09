//! Integration tests for the header echo fixture.

use serde_json::Value;

mod common;

#[tokio::test]
async fn headers_endpoint_echoes_request_headers() {
    let addr = common::start_fixture().await;

    let body: Value = reqwest::Client::new()
        .get(format!("http://{addr}/headers"))
        .header("x-test", "1")
        .header("x-fixture", "integration")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let headers = body["headers"].as_object().unwrap();
    assert_eq!(headers["x-test"], "1");
    assert_eq!(headers["x-fixture"], "integration");
    // The client always sends a host header; it must be visible in the snapshot.
    assert_eq!(headers["host"], addr.to_string());
}

#[tokio::test]
async fn snapshot_values_are_plain_strings() {
    let addr = common::start_fixture().await;

    let body: Value = reqwest::Client::new()
        .get(format!("http://{addr}/headers"))
        .header("x-test", "1")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    for (name, value) in body["headers"].as_object().unwrap() {
        assert!(value.is_string(), "header {name} must be a string");
    }
}

#[tokio::test]
async fn snapshot_survives_a_serialize_reparse_round_trip() {
    let addr = common::start_fixture().await;

    let body: Value = reqwest::Client::new()
        .get(format!("http://{addr}/headers"))
        .header("x-test", "1")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let reparsed: Value = serde_json::from_str(&serde_json::to_string(&body).unwrap()).unwrap();
    assert_eq!(reparsed, body);
}

#[tokio::test]
async fn identical_requests_produce_equal_snapshots() {
    let addr = common::start_fixture().await;
    let client = reqwest::Client::new();

    // Pin the request ID so the propagated header matches across requests.
    let fetch = || async {
        client
            .get(format!("http://{addr}/headers"))
            .header("x-test", "1")
            .header("x-request-id", "fixed-for-test")
            .send()
            .await
            .unwrap()
            .json::<Value>()
            .await
            .unwrap()
    };

    let first = fetch().await;
    let second = fetch().await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn root_renders_headers_into_html() {
    let addr = common::start_fixture().await;

    let response = reqwest::Client::new()
        .get(format!("http://{addr}/"))
        .header("x-test", "1")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let page = response.text().await.unwrap();
    assert!(page.contains("<td>x-test</td><td>1</td>"));
    assert!(page.contains(r#"id="page-data""#));
}

#[tokio::test]
async fn snapshot_is_method_agnostic() {
    let addr = common::start_fixture().await;

    let body: Value = reqwest::Client::new()
        .post(format!("http://{addr}/headers"))
        .header("x-test", "1")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["headers"]["x-test"], "1");
}

#[tokio::test]
async fn status_reports_ok() {
    let addr = common::start_fixture().await;

    let response = reqwest::Client::new()
        .get(format!("http://{addr}/status"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let addr = common::start_fixture().await;

    let response = reqwest::Client::new()
        .get(format!("http://{addr}/headers"))
        .send()
        .await
        .unwrap();

    let id = response.headers().get("x-request-id").unwrap();
    assert!(!id.to_str().unwrap().is_empty());
}
