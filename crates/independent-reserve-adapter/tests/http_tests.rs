/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use std::time::Duration;

use chrono::{TimeZone, Utc};
use common::{
    TEST_API_SECRET, authed_client, received_json, received_payload, setup_mock_server,
};
use independent_reserve_adapter::{
    API_BASE_URL, ClientConfig, DigitalWithdrawalRequest, FiatWithdrawalRequest, IrClient,
    IrError, LimitOrderRequest, OrderListQuery, OrderType, TransactionType, TransactionsQuery,
    sign,
};
use rust_decimal::Decimal;
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let client = assert_ok!(IrClient::new());
    assert_eq!(client.base_url(), API_BASE_URL);
    assert!(client.credentials().is_none());
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig::default()
        .with_base_url("http://localhost:8080/")
        .with_timeout(Duration::from_secs(5));
    let client = assert_ok!(IrClient::with_config(config));
    assert_eq!(client.base_url(), "http://localhost:8080");
    assert_eq!(
        client.endpoint_url("/Public/GetFxRates"),
        "http://localhost:8080/Public/GetFxRates"
    );
}

#[test]
fn test_client_rejects_bad_base_url() {
    let err = IrClient::with_config(ClientConfig::default().with_base_url("not a url")).unwrap_err();
    assert!(err.is_configuration());

    let err = IrClient::with_config(ClientConfig::default().with_base_url("ftp://host")).unwrap_err();
    assert!(err.is_configuration());
}

#[tokio::test]
async fn test_public_market_summary() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/Public/GetMarketSummary"))
        .and(query_param("primaryCurrencyCode", "Xbt"))
        .and(query_param("secondaryCurrencyCode", "Aud"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "LastPrice": 485.76,
            "PrimaryCurrencyCode": "Xbt",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = assert_ok!(IrClient::with_config(
        ClientConfig::default().with_base_url(server.uri())
    ));
    let summary = assert_ok!(client.get_market_summary("Xbt", "Aud").await);
    assert_eq!(summary["PrimaryCurrencyCode"], "Xbt");
}

#[tokio::test]
async fn test_limit_order_body_order_and_signature() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/Private/PlaceLimitOrder"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "OrderGuid": "c7347e4c-b865-4c94-8f74-d934d4b0b177",
            "Status": "Open",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client(&server);
    let order = LimitOrderRequest::new(Decimal::new(48576, 2), Decimal::new(5, 1))
        .with_order_type(OrderType::LimitOffer);
    let response = assert_ok!(client.place_limit_order(&order).await);
    assert_eq!(response["Status"], "Open");

    let payload = received_payload(&server, 0).await;
    assert_eq!(
        payload.keys().collect::<Vec<_>>(),
        [
            "apiKey",
            "nonce",
            "signature",
            "primaryCurrencyCode",
            "secondaryCurrencyCode",
            "orderType",
            "price",
            "volume",
        ]
    );

    let url = format!("{}/Private/PlaceLimitOrder", server.uri());
    let parts = payload.canonical_parts(&url);
    assert_eq!(parts[5], "orderType=LimitOffer");
    assert_eq!(parts[6], "price=485.76");
    assert_eq!(parts[7], "volume=0.5");

    let expected = assert_ok!(sign(TEST_API_SECRET, &parts));
    assert_eq!(
        payload.get("signature").map(|v| v.signing_form()),
        Some(expected)
    );

    // Price and volume travel as JSON numbers.
    let body = received_json(&server, 0).await;
    assert!(body["price"].is_number());
    assert!(body["volume"].is_number());
    assert!(body["nonce"].is_u64());
}

#[tokio::test]
async fn test_transactions_types_sent_as_list() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/Private/GetTransactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Data": [] })))
        .mount(&server)
        .await;

    let client = authed_client(&server);
    let query = TransactionsQuery::new("49994921-60ec-411e-8a78-d0eba078d5e9")
        .between(
            Utc.with_ymd_and_hms(2014, 8, 1, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2014, 8, 1, 16, 0, 0).unwrap(),
        )
        .with_types([TransactionType::Trade, TransactionType::Brokerage]);
    assert_ok!(client.get_transactions(&query).await);

    let body = received_json(&server, 0).await;
    assert_eq!(body["txTypes"], json!(["Trade", "Brokerage"]));
    assert_eq!(body["fromTimestampUtc"], "2014-08-01T08:00:00Z");
    assert_eq!(body["pageIndex"], 1);
    assert_eq!(body["pageSize"], 50);

    let payload = received_payload(&server, 0).await;
    let url = format!("{}/Private/GetTransactions", server.uri());
    let parts = payload.canonical_parts(&url);
    assert!(parts.contains(&"txTypes=Trade,Brokerage".to_string()));
    assert_eq!(
        payload.get("signature").map(|v| v.signing_form()),
        Some(assert_ok!(sign(TEST_API_SECRET, &parts)))
    );
}

#[tokio::test]
async fn test_order_listing_default_page_sizes() {
    let server = setup_mock_server().await;
    for endpoint in ["/Private/GetOpenOrders", "/Private/GetClosedOrders"] {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Data": [] })))
            .mount(&server)
            .await;
    }

    let client = authed_client(&server);
    let query = OrderListQuery::default();
    assert_ok!(client.get_open_orders(&query).await);
    assert_ok!(client.get_closed_orders(&query).await);

    let open = received_json(&server, 0).await;
    assert_eq!(open["pageIndex"], 1);
    assert_eq!(open["pageSize"], 10);

    let closed = received_json(&server, 1).await;
    assert_eq!(closed["pageSize"], 50);
}

#[tokio::test]
async fn test_nonce_never_decreases_between_requests() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/Private/GetAccounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = authed_client(&server);
    assert_ok!(client.get_accounts().await);
    assert_ok!(client.get_accounts().await);

    let first = received_json(&server, 0).await["nonce"].as_u64();
    let second = received_json(&server, 1).await["nonce"].as_u64();
    assert!(first.is_some());
    assert!(second >= first);
}

#[tokio::test]
async fn test_withdrawal_amounts_sent_as_strings() {
    let server = setup_mock_server().await;
    for endpoint in ["/Private/WithdrawDigitalCurrency", "/Private/RequestFiatWithdrawal"] {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Status": "Pending" })))
            .mount(&server)
            .await;
    }

    let client = authed_client(&server);
    let digital = DigitalWithdrawalRequest::new(Decimal::new(123, 3), "12a7FbBzSGvJd36wNesAxAksLXMWm4oLUJ");
    assert_ok!(client.withdraw_digital_currency(&digital).await);
    let fiat = FiatWithdrawalRequest::new(Decimal::new(20000, 2), "Savings");
    assert_ok!(client.request_fiat_withdrawal(&fiat).await);

    let digital_body = received_json(&server, 0).await;
    assert_eq!(digital_body["amount"], "0.123");
    assert_eq!(digital_body["comment"], "");

    let fiat_body = received_json(&server, 1).await;
    assert_eq!(fiat_body["secondaryCurrencyCode"], "USD");
    assert_eq!(fiat_body["withdrawalAmount"], "200.00");
}

#[tokio::test]
async fn test_status_error_is_typed() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/Private/CancelOrder"))
        .respond_with(ResponseTemplate::new(400).set_body_string("{\"Message\":\"Invalid order\"}"))
        .mount(&server)
        .await;

    let client = authed_client(&server);
    let err = client.cancel_order("missing").await.unwrap_err();
    match err {
        IrError::HttpStatus { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("Invalid order"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_retryable() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/Public/GetFxRates"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = assert_ok!(IrClient::with_config(
        ClientConfig::default().with_base_url(server.uri())
    ));
    let err = client.get_fx_rates().await.unwrap_err();
    assert_eq!(err.status_code(), Some(503));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_invalid_json_body_is_serialization_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/Public/GetValidOrderTypes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let client = assert_ok!(IrClient::with_config(
        ClientConfig::default().with_base_url(server.uri())
    ));
    let err = client.get_valid_order_types().await.unwrap_err();
    assert!(matches!(err, IrError::Serialization(_)));
}

#[tokio::test]
async fn test_private_call_without_credentials() {
    let server = setup_mock_server().await;
    let client = assert_ok!(IrClient::with_config(
        ClientConfig::default().with_base_url(server.uri())
    ));

    let err = client.get_accounts().await.unwrap_err();
    assert!(err.is_configuration());

    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty());
}
