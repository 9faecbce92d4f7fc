use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use starhunter_request::{ClientConfig, HttpClient, HttpRequest, RequestAuth, RequestError, ReqwestClient};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client() -> ReqwestClient {
    ReqwestClient::new(ClientConfig::default()).unwrap()
}

#[tokio::test]
async fn posts_json_with_bearer_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Api/graphql"))
        .and(header("authorization", "Bearer tok-1"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "query": "{ __typename }" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "__typename": "Query" } })))
        .expect(1)
        .mount(&server)
        .await;

    let request = HttpRequest::post(&format!("{}/Api/graphql", server.uri()))
        .unwrap()
        .json(&json!({ "query": "{ __typename }" }))
        .unwrap()
        .auth(RequestAuth::bearer("tok-1"));

    let response = client().send(request).await.unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!({ "data": { "__typename": "Query" } }));
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .mount(&server)
        .await;

    let request = HttpRequest::post(&server.uri()).unwrap();
    let err = client().send(request).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "request failed with status 401: invalid token");
}

#[tokio::test]
async fn empty_body_decodes_as_null() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let response = client()
        .send(HttpRequest::post(&server.uri()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.body, serde_json::Value::Null);
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = client()
        .send(HttpRequest::post(&server.uri()).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, RequestError::Decode(_)));
}

#[tokio::test]
async fn per_request_timeout_wins() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let request = HttpRequest::post(&server.uri())
        .unwrap()
        .timeout(Duration::from_millis(50));
    let err = client().send(request).await.unwrap_err();
    assert!(matches!(err, RequestError::Timeout(d) if d == Duration::from_millis(50)));
}
