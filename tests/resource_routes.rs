#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs)]

mod common;

use http::Method;
use mercadopago::models::{
    CardTokenRequest, CustomerCardRequest, CustomerRequest, CustomerSearchRequest,
    CustomerUpdateRequest, MerchantOrderItem, MerchantOrderRequest, MerchantOrderSearchRequest,
    MerchantOrderUpdateRequest, PaymentIntentRequest, PaymentRequest, PaymentSearchRequest,
};
use mercadopago::{
    CardTokenApi, CustomerApi, CustomerCardApi, Error, IdentificationTypeApi, MerchantOrderApi,
    OAuthApi, PaymentApi, PaymentMethodApi, PointApi, RefundApi, UserApi,
};
use serde_json::json;

use common::{StubHttpClient, TEST_TOKEN, body_json, client, sent};

const API: &str = "https://api.mercadopago.com";

fn assert_route(req: &mercadopago::HttpRequest, method: Method, path: &str) {
    assert_eq!(req.method, method, "method for {path}");
    assert_eq!(req.url, format!("{API}{path}"));
}

#[tokio::test]
async fn customer_routes() {
    let mp = client(StubHttpClient::replying(200, r#"{"id":"1-abc","email":"a@b.c"}"#));
    let customers = mp.customers();

    let created = customers
        .create(&CustomerRequest {
            email: Some("a@b.c".to_owned()),
            ..CustomerRequest::default()
        })
        .await
        .unwrap();
    assert_eq!(created.id, "1-abc");
    let req = sent(&mp);
    assert_route(&req, Method::POST, "/v1/customers");
    assert_eq!(body_json(&req), json!({"email": "a@b.c"}));
    assert_eq!(req.headers["content-type"], "application/json");

    customers.get("1-abc").await.unwrap();
    let req = sent(&mp);
    assert_route(&req, Method::GET, "/v1/customers/1-abc");
    assert!(req.body.is_none());
    assert!(req.headers.get("content-type").is_none());

    customers
        .update(
            "1-abc",
            &CustomerUpdateRequest {
                description: Some("vip".to_owned()),
                ..CustomerUpdateRequest::default()
            },
        )
        .await
        .unwrap();
    let req = sent(&mp);
    assert_route(&req, Method::PUT, "/v1/customers/1-abc");
    assert_eq!(body_json(&req), json!({"description": "vip"}));
}

#[tokio::test]
async fn customer_search_encodes_filters() {
    let mp = client(StubHttpClient::replying(
        200,
        r#"{"paging":{"total":1,"limit":10,"offset":0},"results":[{"id":"1-abc"}]}"#,
    ));

    let search = CustomerSearchRequest {
        limit: Some(10),
        ..CustomerSearchRequest::default()
    }
    .filter("email", "jane@example.com");
    let found = mp.customers().search(&search).await.unwrap();

    assert_eq!(found.paging.total, 1);
    assert_eq!(found.results[0].id, "1-abc");
    assert_route(
        &sent(&mp),
        Method::GET,
        "/v1/customers/search?email=jane%40example.com&limit=10",
    );
}

#[tokio::test]
async fn customer_card_routes() {
    let mp = client(StubHttpClient::replying(200, r#"{"id":"9","customer_id":"1-abc"}"#));
    let cards = mp.customer_cards();
    let request = CustomerCardRequest {
        token: "tok_1".to_owned(),
        ..CustomerCardRequest::default()
    };

    cards.create("1-abc", &request).await.unwrap();
    let req = sent(&mp);
    assert_route(&req, Method::POST, "/v1/customers/1-abc/cards");
    assert_eq!(body_json(&req), json!({"token": "tok_1"}));

    cards.get("1-abc", "9").await.unwrap();
    assert_route(&sent(&mp), Method::GET, "/v1/customers/1-abc/cards/9");

    cards.update("1-abc", "9", &request).await.unwrap();
    assert_route(&sent(&mp), Method::PUT, "/v1/customers/1-abc/cards/9");

    cards.delete("1-abc", "9").await.unwrap();
    assert_route(&sent(&mp), Method::DELETE, "/v1/customers/1-abc/cards/9");
}

#[tokio::test]
async fn dot_segment_ids_never_reach_the_wire() {
    let mp = client(StubHttpClient::replying(200, r#"{"id":"9"}"#));
    let cards = mp.customer_cards();

    let err = cards.delete("1-abc", "..").await.unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)), "unexpected error: {err:?}");
    let err = cards.get(".", "9").await.unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)), "unexpected error: {err:?}");

    assert!(mp.transport().http_client().requests().is_empty());
}

#[tokio::test]
async fn customer_card_list_decodes_array() {
    let mp = client(StubHttpClient::replying(
        200,
        r#"[{"id":"9","last_four_digits":"4242"},{"id":"10"}]"#,
    ));

    let cards = mp.customer_cards().list("1-abc").await.unwrap();

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].last_four_digits, "4242");
    assert_route(&sent(&mp), Method::GET, "/v1/customers/1-abc/cards");
}

#[tokio::test]
async fn card_token_and_identification_types() {
    let mp = client(StubHttpClient::replying(200, r#"{"id":"ff8080814c11e237014c1ff593b57b4d"}"#));
    let token = mp
        .card_tokens()
        .create(&CardTokenRequest {
            card_id: Some("9".to_owned()),
            security_code: Some("123".to_owned()),
            ..CardTokenRequest::default()
        })
        .await
        .unwrap();
    assert_eq!(token.id, "ff8080814c11e237014c1ff593b57b4d");
    let req = sent(&mp);
    assert_route(&req, Method::POST, "/v1/card_tokens");
    assert_eq!(body_json(&req), json!({"card_id": "9", "security_code": "123"}));

    let mp = client(StubHttpClient::replying(
        200,
        r#"[{"id":"CPF","name":"CPF","type":"number","min_length":11,"max_length":11}]"#,
    ));
    let types = mp.identification_types().list().await.unwrap();
    assert_eq!(types[0].kind, "number");
    assert_route(&sent(&mp), Method::GET, "/v1/identification_types");
}

#[tokio::test]
async fn user_me() {
    let mp = client(StubHttpClient::replying(
        200,
        r#"{"id":1340175910,"nickname":"TESTUSER","site_id":"MLB"}"#,
    ));

    let user = mp.users().get().await.unwrap();

    assert_eq!(user.id, 1_340_175_910);
    assert_route(&sent(&mp), Method::GET, "/users/me");
}

#[tokio::test]
async fn point_routes() {
    let mp = client(StubHttpClient::replying(200, r#"{"id":"XYZ","device_id":"ABC123"}"#));
    let point = mp.point();

    let intent = point
        .create(
            "ABC123",
            &PaymentIntentRequest {
                amount: 1500,
                ..PaymentIntentRequest::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(intent.id, "XYZ");
    let req = sent(&mp);
    assert_route(
        &req,
        Method::POST,
        "/point/integration-api/devices/ABC123/payment-intents",
    );
    assert_eq!(body_json(&req)["amount"], 1500);

    point.get("XYZ").await.unwrap();
    assert_route(
        &sent(&mp),
        Method::GET,
        "/point/integration-api/payment-intents/XYZ",
    );

    let cancelled = point.cancel("ABC123", "XYZ").await.unwrap();
    assert_eq!(cancelled.id, "XYZ");
    assert_route(
        &sent(&mp),
        Method::DELETE,
        "/point/integration-api/devices/ABC123/payment-intents/XYZ",
    );
}

#[tokio::test]
async fn point_devices() {
    let mp = client(StubHttpClient::replying(
        200,
        r#"{"devices":[{"id":"ABC123","operating_mode":"PDV"}],"paging":{"total":1,"limit":50,"offset":0}}"#,
    ));
    let devices = mp.point().list_devices().await.unwrap();
    assert_eq!(devices.devices[0].operating_mode, "PDV");
    assert_route(&sent(&mp), Method::GET, "/point/integration-api/devices");

    let mp = client(StubHttpClient::replying(200, r#"{"operating_mode":"STANDALONE"}"#));
    let mode = mp
        .point()
        .update_operating_mode("ABC123", "STANDALONE")
        .await
        .unwrap();
    assert_eq!(mode.operating_mode, "STANDALONE");
    let req = sent(&mp);
    assert_route(&req, Method::PATCH, "/point/integration-api/devices/ABC123");
    assert_eq!(body_json(&req), json!({"operating_mode": "STANDALONE"}));
}

#[tokio::test]
async fn payment_routes_and_status_bodies() {
    let mp = client(StubHttpClient::replying(200, r#"{"id":42,"status":"approved"}"#));
    let payments = mp.payments();

    payments
        .create(&PaymentRequest {
            transaction_amount: 100.0,
            token: Some("tok_1".to_owned()),
            ..PaymentRequest::default()
        })
        .await
        .unwrap();
    let req = sent(&mp);
    assert_route(&req, Method::POST, "/v1/payments");
    assert_eq!(
        body_json(&req),
        json!({"transaction_amount": 100.0, "token": "tok_1"})
    );

    let payment = payments.get(42).await.unwrap();
    assert_eq!(payment.status, "approved");
    assert_route(&sent(&mp), Method::GET, "/v1/payments/42");

    payments.cancel(42).await.unwrap();
    let req = sent(&mp);
    assert_route(&req, Method::PUT, "/v1/payments/42");
    assert_eq!(body_json(&req), json!({"status": "cancelled"}));

    payments.capture(42).await.unwrap();
    let req = sent(&mp);
    assert_route(&req, Method::PUT, "/v1/payments/42");
    assert_eq!(body_json(&req), json!({"capture": true}));

    payments.capture_amount(42, 50.5).await.unwrap();
    let req = sent(&mp);
    assert_route(&req, Method::PUT, "/v1/payments/42");
    assert_eq!(
        body_json(&req),
        json!({"capture": true, "transaction_amount": 50.5})
    );
}

#[tokio::test]
async fn payment_search() {
    let mp = client(StubHttpClient::replying(
        200,
        r#"{"paging":{"total":2,"limit":2,"offset":4},"results":[{"id":1},{"id":2}]}"#,
    ));

    let search = PaymentSearchRequest {
        limit: Some(2),
        offset: Some(4),
        ..PaymentSearchRequest::default()
    }
    .filter("external_reference", "order-9")
    .filter("sort", "date_created");
    let found = mp.payments().search(&search).await.unwrap();

    assert_eq!(found.results.len(), 2);
    assert_route(
        &sent(&mp),
        Method::GET,
        "/v1/payments/search?external_reference=order-9&sort=date_created&limit=2&offset=4",
    );
}

#[tokio::test]
async fn refund_routes() {
    let mp = client(StubHttpClient::replying(
        201,
        r#"{"id":7,"payment_id":42,"amount":10.0,"status":"approved"}"#,
    ));
    let refunds = mp.refunds();

    let full = refunds.refund(42).await.unwrap();
    assert_eq!(full.payment_id, 42);
    let req = sent(&mp);
    assert_route(&req, Method::POST, "/v1/payments/42/refunds");
    assert!(req.body.is_none());

    refunds.partial_refund(10.0, 42).await.unwrap();
    let req = sent(&mp);
    assert_route(&req, Method::POST, "/v1/payments/42/refunds");
    assert_eq!(body_json(&req), json!({"amount": 10.0}));

    refunds.get(42, 7).await.unwrap();
    assert_route(&sent(&mp), Method::GET, "/v1/payments/42/refunds/7");
}

#[tokio::test]
async fn refund_list_decodes_array() {
    let mp = client(StubHttpClient::replying(
        200,
        r#"[{"id":7,"payment_id":42,"amount":10.0},{"id":8,"payment_id":42,"amount":2.5}]"#,
    ));

    let refunds = mp.refunds().list(42).await.unwrap();

    assert_eq!(refunds.iter().map(|r| r.id).collect::<Vec<_>>(), [7_i64, 8]);
    assert_route(&sent(&mp), Method::GET, "/v1/payments/42/refunds");
}

#[tokio::test]
async fn oauth_sends_access_token_as_client_secret() {
    let mp = client(StubHttpClient::replying(
        200,
        r#"{"access_token":"APP_USR-seller","token_type":"bearer","expires_in":15552000,"refresh_token":"TG-r","user_id":1,"live_mode":true}"#,
    ));
    let oauth = mp.oauth();

    let credential = oauth
        .create("TG-code", "https://example.com/cb")
        .await
        .unwrap();
    assert_eq!(credential.access_token, "APP_USR-seller");
    let req = sent(&mp);
    assert_route(&req, Method::POST, "/oauth/token");
    assert_eq!(
        body_json(&req),
        json!({
            "grant_type": "authorization_code",
            "client_secret": TEST_TOKEN,
            "code": "TG-code",
            "redirect_uri": "https://example.com/cb"
        })
    );

    oauth.refresh(&credential.refresh_token).await.unwrap();
    assert_eq!(
        body_json(&sent(&mp)),
        json!({
            "grant_type": "refresh_token",
            "client_secret": TEST_TOKEN,
            "refresh_token": "TG-r"
        })
    );
}

#[tokio::test]
async fn oauth_authorization_url_makes_no_request() {
    let mp = client(StubHttpClient::replying(500, ""));

    let url = mp
        .oauth()
        .authorization_url("1234", "https://example.com/cb", "s1")
        .unwrap();

    assert_eq!(
        url.as_str(),
        "https://auth.mercadopago.com/authorization?client_id=1234&response_type=code&platform_id=mp&redirect_uri=https%3A%2F%2Fexample.com%2Fcb&state=s1"
    );
    assert!(mp.transport().http_client().requests().is_empty());
}

#[tokio::test]
async fn payment_methods_list() {
    let mp = client(StubHttpClient::replying(
        200,
        r#"[{"id":"pix","name":"PIX","payment_type_id":"bank_transfer","status":"active"}]"#,
    ));

    let methods = mp.payment_methods().list().await.unwrap();

    assert_eq!(methods[0].payment_type_id, "bank_transfer");
    assert_route(&sent(&mp), Method::GET, "/v1/payment_methods");
}

#[tokio::test]
async fn merchant_order_routes() {
    let mp = client(StubHttpClient::replying(200, r#"{"id":8416510703,"status":"opened"}"#));
    let orders = mp.merchant_orders();

    orders
        .create(&MerchantOrderRequest {
            external_reference: Some("order-9".to_owned()),
            items: vec![MerchantOrderItem {
                title: Some("Mug".to_owned()),
                quantity: Some(1),
                unit_price: Some(9.5),
                ..MerchantOrderItem::default()
            }],
            ..MerchantOrderRequest::default()
        })
        .await
        .unwrap();
    let req = sent(&mp);
    assert_route(&req, Method::POST, "/merchant_orders");
    assert_eq!(
        body_json(&req),
        json!({
            "items": [{"title": "Mug", "quantity": 1, "unit_price": 9.5}],
            "external_reference": "order-9"
        })
    );

    let order = orders.get(8_416_510_703).await.unwrap();
    assert_eq!(order.status, "opened");
    assert_route(&sent(&mp), Method::GET, "/merchant_orders/8416510703");

    orders
        .update(
            8_416_510_703,
            &MerchantOrderUpdateRequest {
                additional_info: Some("gift".to_owned()),
                ..MerchantOrderUpdateRequest::default()
            },
        )
        .await
        .unwrap();
    let req = sent(&mp);
    assert_route(&req, Method::PUT, "/merchant_orders/8416510703");
    assert_eq!(body_json(&req), json!({"additional_info": "gift"}));
}

#[tokio::test]
async fn merchant_order_search() {
    let mp = client(StubHttpClient::replying(
        200,
        r#"{"elements":[{"id":1}],"next_offset":1,"total":1}"#,
    ));

    let found = mp
        .merchant_orders()
        .search(&MerchantOrderSearchRequest::default().filter("status", "opened"))
        .await
        .unwrap();

    assert_eq!(found.elements[0].id, 1);
    assert_route(&sent(&mp), Method::GET, "/merchant_orders/search?status=opened");
}
