#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs)]

mod common;

use std::sync::Arc;
use std::time::Duration;

use http::StatusCode;
use mercadopago::models::OAuthCredential;
use mercadopago::{
    Config, ConfigError, CustomerApi, Error, HttpClientError, MercadoPago, MercadoPagoClient,
    PaymentApi, UserApi,
};

use common::{
    StubHttpClient, TEST_TOKEN, client, closed_port, json_response, sent, silent_listener,
};

fn local_config(port: u16, timeout: Duration) -> Config {
    Config::builder(TEST_TOKEN)
        .base_url(format!("http://127.0.0.1:{port}"))
        .timeout(timeout)
        .build()
        .unwrap()
}

#[test]
fn empty_or_blank_token_is_rejected() {
    for token in ["", "   ", "\t\n"] {
        assert!(
            matches!(Config::new(token), Err(ConfigError::InvalidCredential(_))),
            "token {token:?} should be rejected"
        );
    }
}

#[tokio::test]
async fn every_request_is_authenticated() {
    let config = Config::builder(TEST_TOKEN)
        .platform_id("platform-1")
        .corporation_id("corp-1")
        .build()
        .unwrap();
    let mp = MercadoPagoClient::with_http_client(
        config,
        StubHttpClient::replying(200, r#"{"id":1}"#),
    );

    mp.users().get().await.unwrap();

    let req = sent(&mp);
    assert_eq!(
        req.headers["authorization"],
        format!("Bearer {TEST_TOKEN}").as_str()
    );
    assert_eq!(req.headers["accept"], "application/json");
    assert_eq!(req.headers["x-platform-id"], "platform-1");
    assert_eq!(req.headers["x-corporation-id"], "corp-1");
    assert!(req.headers.get("x-integrator-id").is_none());
    assert!(
        req.headers["x-tracking-id"]
            .to_str()
            .unwrap()
            .starts_with("platform:rust,type:SDK")
    );
}

#[tokio::test]
async fn base_url_override_is_honoured() {
    let config = Config::builder(TEST_TOKEN)
        .base_url("http://127.0.0.1:8089/mock")
        .build()
        .unwrap();
    let mp = MercadoPagoClient::with_http_client(
        config,
        StubHttpClient::replying(200, r#"{"id":"1-abc"}"#),
    );

    mp.customers().get("1-abc").await.unwrap();

    assert_eq!(sent(&mp).url, "http://127.0.0.1:8089/mock/v1/customers/1-abc");
}

#[tokio::test]
async fn api_error_envelope_is_surfaced_verbatim() {
    let mp = client(StubHttpClient::replying(
        400,
        r#"{
            "message": "invalid parameter transaction_amount",
            "error": "bad_request",
            "status": 400,
            "cause": [{"code": 4020, "description": "notification_url attribute must be url valid", "data": null}]
        }"#,
    ));

    let err = mp.payments().get(42).await.unwrap_err();

    assert!(err.is_api());
    assert!(!err.is_transport());
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    let api = err.api_error().unwrap();
    assert_eq!(api.envelope.message, "invalid parameter transaction_amount");
    assert_eq!(api.envelope.error, "bad_request");
    assert_eq!(api.envelope.status, 400);
    assert_eq!(api.causes()[0].code, "4020");
    assert_eq!(
        api.causes()[0].description,
        "notification_url attribute must be url valid"
    );
}

#[tokio::test]
async fn non_json_error_body_is_wrapped() {
    let mp = client(StubHttpClient::replying(502, "upstream connect error"));

    let err = mp.users().get().await.unwrap_err();

    let api = err.api_error().unwrap();
    assert_eq!(api.status, StatusCode::BAD_GATEWAY);
    assert_eq!(api.message(), "upstream connect error");
    assert_eq!(api.envelope.error, "bad_gateway");
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let mp = client(StubHttpClient::replying(200, r#"{"id": "not-a-number"}"#));

    let err = mp.payments().get(42).await.unwrap_err();

    assert!(matches!(err, Error::Decode { status, .. } if status == StatusCode::OK));
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    let mp = MercadoPago::new(local_config(closed_port(), Duration::from_secs(5)));

    let err = mp.users().get().await.unwrap_err();

    assert!(err.is_transport(), "unexpected error: {err:?}");
    assert!(err.status().is_none());
    assert!(matches!(
        err,
        Error::Transport(HttpClientError::Connection(_) | HttpClientError::Other(_))
    ));
}

#[tokio::test]
async fn configured_timeout_bounds_the_call() {
    let (_listener, port) = silent_listener();
    let mp = MercadoPago::new(local_config(port, Duration::from_millis(200)));

    let err = mp.users().get().await.unwrap_err();

    assert!(
        matches!(err, Error::Transport(HttpClientError::Timeout)),
        "unexpected error: {err:?}"
    );
}

#[cfg(feature = "ureq-client")]
mod ureq_backend {
    use mercadopago::backends::UreqClient;

    use super::*;
    use crate::common::serve_once;

    fn ureq_client(config: Config) -> MercadoPagoClient<UreqClient> {
        let http = UreqClient::new(config.timeout());
        MercadoPagoClient::with_http_client(config, http)
    }

    #[tokio::test]
    async fn connection_refused_is_a_transport_error() {
        let mp = ureq_client(local_config(closed_port(), Duration::from_secs(5)));

        let err = mp.users().get().await.unwrap_err();

        assert!(err.is_transport(), "unexpected error: {err:?}");
        assert!(err.status().is_none());
        assert!(matches!(
            err,
            Error::Transport(HttpClientError::Connection(_) | HttpClientError::Other(_))
        ));
    }

    #[tokio::test]
    async fn error_status_reaches_the_envelope_decoder() {
        let port = serve_once(
            404,
            r#"{"message":"Customer not found","error":"not_found","status":404,"cause":[]}"#,
        );
        let mp = ureq_client(local_config(port, Duration::from_secs(5)));

        let err = mp.customers().get("1-abc").await.unwrap_err();

        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        let api = err.api_error().unwrap();
        assert_eq!(api.message(), "Customer not found");
        assert_eq!(api.envelope.error, "not_found");
    }

    #[tokio::test]
    async fn success_body_is_decoded() {
        let port = serve_once(200, r#"{"id":1340175910,"nickname":"TESTUSER"}"#);
        let mp = ureq_client(local_config(port, Duration::from_secs(5)));

        let user = mp.users().get().await.unwrap();

        assert_eq!(user.id, 1_340_175_910);
        assert_eq!(user.nickname, "TESTUSER");
    }

    #[tokio::test]
    async fn configured_timeout_bounds_the_call() {
        let (_listener, port) = silent_listener();
        let mp = ureq_client(local_config(port, Duration::from_millis(200)));

        let err = mp.users().get().await.unwrap_err();

        assert!(
            matches!(err, Error::Transport(HttpClientError::Timeout)),
            "unexpected error: {err:?}"
        );
    }
}

#[tokio::test]
async fn repeated_get_returns_equal_values() {
    let mp = client(StubHttpClient::replying(
        200,
        r#"{"id":42,"status":"approved","transaction_amount":10.5,"date_created":"2024-01-10T11:12:13.000-04:00"}"#,
    ));
    let payments = mp.payments();

    let first = payments.get(42).await.unwrap();
    let second = payments.get(42).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(mp.transport().http_client().requests().len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_calls_do_not_cross_talk() {
    // Echo the id from the request path back as the payment id.
    let stub = StubHttpClient::new(|req| {
        let id = req.url.rsplit('/').next().unwrap().to_owned();
        json_response(200, format!(r#"{{"id":{id},"status":"approved"}}"#))
    });
    let mp = Arc::new(client(stub));

    let handles: Vec<_> = (1..=32_i64)
        .map(|id| {
            let payments = mp.payments();
            tokio::spawn(async move { (id, payments.get(id).await.unwrap()) })
        })
        .collect();

    for handle in handles {
        let (id, payment) = handle.await.unwrap();
        assert_eq!(payment.id, id);
    }
    assert_eq!(mp.transport().http_client().requests().len(), 32);
}

#[test]
fn oauth_credential_round_trips_through_json() {
    let raw = r#"{
        "access_token": "APP_USR-4849723703374061-053108",
        "token_type": "bearer",
        "expires_in": 15552000,
        "scope": "offline_access read write",
        "user_id": 1340175910,
        "refresh_token": "TG-65a0b1c2",
        "public_key": "APP_USR-pk",
        "live_mode": true
    }"#;

    let credential: OAuthCredential = serde_json::from_str(raw).unwrap();
    let again: OAuthCredential =
        serde_json::from_str(&serde_json::to_string(&credential).unwrap()).unwrap();

    assert_eq!(credential, again);
    assert_eq!(credential.user_id, 1_340_175_910);
    assert!(credential.live_mode);
}
