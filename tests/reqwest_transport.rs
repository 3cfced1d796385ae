use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xbox_identity::auth::{CodeExchanger, LiveCodeExchanger};
use xbox_identity::config::{
    ApplicationConfigEndpoints, ApplicationConfigHttp, ApplicationConfigLogger,
    ApplicationConfigOAuth,
};
use xbox_identity::request::build_client;
use xbox_identity::{
    ApplicationConfig, AuthError, HttpClient, ReqwestHttpClient, Stage, XboxAuthProvider,
};

fn config(server: &MockServer, timeout_secs: u64) -> ApplicationConfig {
    ApplicationConfig {
        oauth: ApplicationConfigOAuth {
            client_id: "client".to_string(),
            client_secret: Some("secret".to_string()),
            redirect_uri: "http://localhost/callback".to_string(),
        },
        endpoints: ApplicationConfigEndpoints::with_base(&server.uri()),
        http: ApplicationConfigHttp { timeout_secs },
        log: ApplicationConfigLogger::default(),
    }
}

async fn mount_xbox_live(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth20_token.srf"))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=the-code"))
        .and(body_string_contains("response_type=code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "bearer",
            "access_token": "AT1",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/user/authenticate"))
        .and(header("x-xbl-contract-version", "1"))
        .and(body_json(json!({
            "RelyingParty": "http://auth.xboxlive.com",
            "TokenType": "JWT",
            "Properties": {
                "AuthMethod": "RPS",
                "SiteName": "user.auth.xboxlive.com",
                "RpsTicket": "d=AT1"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Token": "UT1" })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/xsts/authorize"))
        .and(header("x-xbl-contract-version", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Token": "XT1",
            "DisplayClaims": { "xui": [{ "xid": "X123", "uhs": "H1" }] }
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/users/batch/profile/settings"))
        .and(header("x-xbl-contract-version", "2"))
        .and(header("authorization", "XBL3.0 x=H1;XT1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "profileUsers": [{
                "id": "X123",
                "settings": [
                    { "id": "GameDisplayName", "value": "Player1" },
                    { "id": "GameDisplayPicRaw", "value": "http://img" }
                ]
            }]
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn full_chain_over_http() {
    let server = MockServer::start().await;
    mount_xbox_live(&server).await;

    let provider = XboxAuthProvider::from_config(&config(&server, 5)).unwrap();
    let user = provider.authenticate("the-code").await.unwrap();

    assert_eq!(user.id, "X123");
    assert_eq!(user.nickname, "Player1");
    assert_eq!(user.avatar, "http://img");
}

#[tokio::test]
async fn reqwest_client_reports_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/xsts/authorize"))
        .and(header("accept", "application/json"))
        .and(header("x-xbl-contract-version", "1"))
        .respond_with(ResponseTemplate::new(401).set_body_string("{\"XErr\":2148916233}"))
        .mount(&server)
        .await;

    let client = ReqwestHttpClient::new(Duration::from_secs(5)).unwrap();
    let response = client
        .post_json(
            &format!("{}/xsts/authorize", server.uri()),
            &[("x-xbl-contract-version", "1".to_string())],
            &json!({}),
        )
        .await
        .unwrap();

    assert_eq!(response.status, 401);
    assert_eq!(response.body, "{\"XErr\":2148916233}");
}

#[tokio::test]
async fn rejected_code_is_an_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth20_token.srf"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant"
        })))
        .mount(&server)
        .await;

    let config = config(&server, 5);
    let exchanger = LiveCodeExchanger::new(
        build_client(config.http.timeout()).unwrap(),
        config.oauth.clone(),
        config.endpoints.token_url.clone(),
    );

    let err = exchanger.exchange("stale-code").await.unwrap_err();

    match err {
        AuthError::Upstream { stage, status, .. } => {
            assert_eq!(stage, Stage::CodeExchange);
            assert_eq!(status, 400);
        }
        other => panic!("Expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn token_response_without_access_token_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth20_token.srf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token_type": "bearer" })))
        .mount(&server)
        .await;

    let provider = XboxAuthProvider::from_config(&config(&server, 5)).unwrap();
    let err = provider.authenticate("the-code").await.unwrap_err();

    assert!(matches!(
        err,
        AuthError::MalformedResponse { stage: Stage::CodeExchange, ref field } if field == "access_token"
    ));
}

#[tokio::test]
async fn slow_upstream_times_out_as_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth20_token.srf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "AT1" })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/user/authenticate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "Token": "UT1" }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/xsts/authorize"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let provider = XboxAuthProvider::from_config(&config(&server, 1)).unwrap();
    let err = provider.authenticate("the-code").await.unwrap_err();

    assert!(matches!(
        err,
        AuthError::Transport {
            stage: Stage::UserToken,
            ..
        }
    ));
}
