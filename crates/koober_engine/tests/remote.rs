use std::time::Duration;

use koober_core::{NewAccount, Secret};
use koober_engine::{
    AuthRemoteApi, FailureKind, FakeAuthRemoteApi, KooberCloudAuthRemoteApi, RemoteSettings,
};
use serde_json::json;
use url::Url;
use wiremock::matchers::{basic_auth, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> RemoteSettings {
    RemoteSettings {
        base_url: Url::parse(&server.uri()).unwrap(),
        ..RemoteSettings::default()
    }
}

fn session_body() -> serde_json::Value {
    json!({
        "token": "abc123",
        "profile": {
            "name": "Johnny Appleseed",
            "email": "johnny@gmail.com",
            "mobileNumber": "510-736-8754",
            "avatar": "https://example.com/a.png"
        }
    })
}

#[tokio::test]
async fn sign_in_sends_basic_auth_and_parses_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(basic_auth("johnny@gmail.com", "password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body()))
        .mount(&server)
        .await;

    let api = KooberCloudAuthRemoteApi::new(settings_for(&server)).unwrap();
    let session = api
        .sign_in("johnny@gmail.com", &Secret::new("password"))
        .await
        .expect("sign in ok");

    assert_eq!(session.remote_session.token, "abc123");
    assert_eq!(session.profile.name, "Johnny Appleseed");
    assert_eq!(session.profile.mobile_number, "510-736-8754");
}

#[tokio::test]
async fn sign_in_maps_unauthorized_to_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let api = KooberCloudAuthRemoteApi::new(settings_for(&server)).unwrap();
    let err = api
        .sign_in("johnny@gmail.com", &Secret::new("wrong"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidCredentials);
}

#[tokio::test]
async fn sign_up_posts_account_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/signup"))
        .and(body_json(json!({
            "fullName": "Jane Doe",
            "nickname": "jane",
            "email": "jane@example.com",
            "mobileNumber": "555-0100",
            "password": "s3cret"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(session_body()))
        .mount(&server)
        .await;

    let api = KooberCloudAuthRemoteApi::new(settings_for(&server)).unwrap();
    let account = NewAccount {
        full_name: "Jane Doe".to_string(),
        nickname: "jane".to_string(),
        email: "jane@example.com".to_string(),
        mobile_number: "555-0100".to_string(),
        password: Secret::new("s3cret"),
    };

    let session = api.sign_up(&account).await.expect("sign up ok");
    assert_eq!(session.remote_session.token, "abc123");
}

#[tokio::test]
async fn server_error_maps_to_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let api = KooberCloudAuthRemoteApi::new(settings_for(&server)).unwrap();
    let err = api
        .sign_in("johnny@gmail.com", &Secret::new("password"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
        .mount(&server)
        .await;

    let api = KooberCloudAuthRemoteApi::new(settings_for(&server)).unwrap();
    let err = api
        .sign_in("johnny@gmail.com", &Secret::new("password"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidResponse);
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(session_body()),
        )
        .mount(&server)
        .await;

    let settings = RemoteSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let api = KooberCloudAuthRemoteApi::new(settings).unwrap();
    let err = api
        .sign_in("johnny@gmail.com", &Secret::new("password"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fake_api_accepts_only_known_account() {
    let api = FakeAuthRemoteApi::new();

    let session = api
        .sign_in(FakeAuthRemoteApi::EMAIL, &Secret::new(FakeAuthRemoteApi::PASSWORD))
        .await
        .expect("known account");
    assert_eq!(session.remote_session.token, FakeAuthRemoteApi::TOKEN);
    assert_eq!(session.profile.name, "Johnny Appleseed");

    let err = api
        .sign_in("someone@else.com", &Secret::new("password"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidCredentials);
}
