use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use paw::domain::config::{ApiConfig, SslConfig};
use paw_server::Server;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, response.into_body().collect().await.unwrap().to_bytes().to_vec())
}

fn json_of(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[test]
fn builds_with_default_config() {
    let server = Server::builder().port(0).build().unwrap();
    assert_eq!(server.state().slice_count(), 1);
    assert_eq!(server.state().config.server.port, 0);
}

#[test]
fn missing_certificates_fail_the_build() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = ApiConfig::default();
    cfg.server.ssl =
        Some(SslConfig { cert: dir.path().join("cert.pem"), key: dir.path().join("key.pem") });

    let err = Server::builder().config(cfg).build().unwrap_err();
    assert!(err.to_string().starts_with("SSL certificate not found at:"));
}

#[tokio::test]
async fn system_and_feature_routes_are_mounted() {
    let app = Server::builder().build().unwrap().router();

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)["status"], "up");

    let (status, body) = send(&app, Method::GET, "/pet-types", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body).as_array().unwrap().len(), 2);

    let (status, _) = send(&app, Method::GET, "/api", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn wizard_runs_end_to_end() {
    let app = Server::builder().build().unwrap().router();

    let (status, body) = send(&app, Method::POST, "/registrations", None).await;
    assert_eq!(status, StatusCode::CREATED);
    let key = json_of(&body)["sessionKey"].as_str().unwrap().to_owned();

    let steps = [
        ("step1", json!({ "name": "  whiskers", "typeId": 2 })),
        ("step2", json!({ "breedChoice": "custom", "customText": "Tabby" })),
    ];
    for (step, payload) in steps {
        let (status, _) =
            send(&app, Method::POST, &format!("/registrations/{key}/{step}"), Some(payload)).await;
        assert_eq!(status, StatusCode::OK, "{step}");
    }

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/registrations/{key}/step3"),
        Some(json!({ "sex": "Unknown", "knowsBirthDate": "yes", "dateOfBirth": "2021-02-03" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let pet_id = json_of(&body)["petId"].as_u64().unwrap();

    let (_, body) = send(&app, Method::GET, "/pets", None).await;
    let pets = json_of(&body);
    assert_eq!(pets[0]["id"], pet_id);
    assert_eq!(pets[0]["name"], "Whiskers");
    assert_eq!(pets[0]["customBreedLabel"], "Tabby");
    assert_eq!(pets[0]["dateOfBirth"], "2021-02-03");
    assert_eq!(pets[0]["isDangerousAnimal"], false);
}
