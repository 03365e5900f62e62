//! HTTP contract of the recent-history endpoint, against a mock backend.

use api::{
    fetch_recent_history, request_recent_history, ApiConfig, ApiError, Credential,
    ResponseEnvelope, RECENT_HISTORY_PATH,
};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn token() -> Credential {
    Credential::new("tok").expect("non-empty token")
}

async fn backend(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RECENT_HISTORY_PATH))
        .and(header("authorization", "Bearer tok"))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn success_body_keeps_backend_order() {
    let server = backend(
        ResponseTemplate::new(200).set_body_json(json!({
            "code": "SU",
            "message": "Success.",
            "concentrationTests": [
                { "testDate": "2024-05-02", "measurementScore": 41, "errorCount": 2 },
                { "testDate": "2024-05-01", "measurementScore": 30, "errorCount": 7 }
            ]
        })),
    )
    .await;

    let envelope = fetch_recent_history(&ApiConfig::new(server.uri()), &token()).await;
    let Some(ResponseEnvelope::Success(records)) = envelope else {
        panic!("expected success, got {envelope:?}");
    };
    let dates: Vec<&str> = records.iter().map(|r| r.test_date.as_str()).collect();
    assert_eq!(dates, vec!["2024-05-02", "2024-05-01"]);
    assert_eq!(records[0].measurement_score, 41.0);
}

#[tokio::test]
async fn error_status_bodies_still_decode() {
    let auth = backend(
        ResponseTemplate::new(401)
            .set_body_json(json!({ "code": "AF", "message": "Authorization Failed." })),
    )
    .await;
    assert_eq!(
        fetch_recent_history(&ApiConfig::new(auth.uri()), &token()).await,
        Some(ResponseEnvelope::AuthFailure)
    );

    let database = backend(
        ResponseTemplate::new(500)
            .set_body_json(json!({ "code": "DBE", "message": "Database error." })),
    )
    .await;
    assert_eq!(
        fetch_recent_history(&ApiConfig::new(database.uri()), &token()).await,
        Some(ResponseEnvelope::DatabaseError)
    );
}

#[tokio::test]
async fn undecodable_body_is_a_decode_error() {
    let server = backend(
        ResponseTemplate::new(500).set_body_string("<html>Internal Server Error</html>"),
    )
    .await;
    let config = ApiConfig::new(server.uri());

    assert!(matches!(
        request_recent_history(&config, &token()).await,
        Err(ApiError::Decode(_))
    ));
}

#[tokio::test]
async fn undecodable_body_is_not_an_envelope() {
    let server = backend(
        ResponseTemplate::new(500).set_body_string("<html>Internal Server Error</html>"),
    )
    .await;
    assert_eq!(
        fetch_recent_history(&ApiConfig::new(server.uri()), &token()).await,
        None
    );
}

#[tokio::test]
async fn token_is_sent_as_bearer_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RECENT_HISTORY_PATH))
        .and(header("authorization", "Bearer tok"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "code": "AF", "message": "" })),
        )
        .mount(&server)
        .await;
    let config = ApiConfig::new(server.uri());

    let other = Credential::new("other").expect("non-empty token");
    // Unmatched requests get an empty 404, which is not an envelope.
    assert_eq!(fetch_recent_history(&config, &other).await, None);
    assert_eq!(
        fetch_recent_history(&config, &token()).await,
        Some(ResponseEnvelope::AuthFailure)
    );
}
