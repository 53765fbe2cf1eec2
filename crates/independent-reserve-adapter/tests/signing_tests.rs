/*
[INPUT]:  Fixed credentials, nonces and endpoint requests
[OUTPUT]: Test results for HMAC signing and request building
[POS]:    Integration tests - authentication
[UPDATE]: When signing rules or payload layout change
*/

mod common;

use chrono::{TimeZone, Utc};
use common::{TEST_API_KEY, TEST_API_SECRET, test_credentials};
use independent_reserve_adapter::{
    AccountsRequest, BrokerageFeesRequest, CancelOrderRequest, ClientConfig,
    DepositAddressRequest, DepositAddressesQuery, DigitalWithdrawalRequest,
    FiatWithdrawalRequest, IrClient, LimitOrderRequest, MarketOrderRequest, OrderDetailsRequest,
    OrderListQuery, OrderListing, OrderedPayload, OrdersRequest, PrivateEndpoint,
    SyncDepositAddressRequest, TradesQuery, TransactionType, TransactionsQuery,
    canonical_message, sign,
};
use rstest::rstest;
use rust_decimal::Decimal;
use tokio_test::assert_ok;

const NONCE: u64 = 1_700_000_000;
const BASE: &str = "https://api.example.com";

fn client() -> IrClient {
    assert_ok!(IrClient::with_credentials(
        ClientConfig::default().with_base_url(BASE),
        test_credentials(),
    ))
}

#[test]
fn test_known_signature_vector() {
    let parts = [
        "https://api.example.com/Private/GetAccounts",
        "apiKey=ABC",
        "nonce=1700000000",
    ];
    assert_eq!(
        canonical_message(&parts),
        "https://api.example.com/Private/GetAccounts,apiKey=ABC,nonce=1700000000"
    );
    assert_eq!(
        assert_ok!(sign("SECRET", &parts)),
        "2200E400D6FAC345C771BD6E14627EDD534EEE287BE076803A6C70F88A819F98"
    );
}

#[test]
fn test_signature_is_deterministic() {
    let parts = ["hello"];
    let first = assert_ok!(sign("secret", &parts));
    let second = assert_ok!(sign("secret", &parts));
    assert_eq!(first, second);
    assert_eq!(
        first,
        "88AAB3EDE8D3ADF94D26AB90D3BAFD4A2083070C3BCCE9C014EE04A443847C0B"
    );
}

#[test]
fn test_single_character_change_alters_signature() {
    let base = [
        "https://api.example.com/Private/GetAccounts",
        "apiKey=ABC",
        "nonce=1700000000",
    ];
    let bumped = [
        "https://api.example.com/Private/GetAccounts",
        "apiKey=ABC",
        "nonce=1700000001",
    ];
    assert_eq!(
        assert_ok!(sign("SECRET", &bumped)),
        "76479C43B45994423592B341C077E942DD59A14779F6B2277406E70E9E26F80B"
    );
    assert_ne!(assert_ok!(sign("SECRET", &base)), assert_ok!(sign("SECRET", &bumped)));
}

#[test]
fn test_empty_secret_rejected() {
    let err = sign("", &["anything"]).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_signed_request_layout() {
    let signed = assert_ok!(client().signed_request(&AccountsRequest, NONCE));

    assert_eq!(signed.url, "https://api.example.com/Private/GetAccounts");
    assert_eq!(
        signed.ordered_parts,
        [
            "https://api.example.com/Private/GetAccounts".to_string(),
            format!("apiKey={TEST_API_KEY}"),
            format!("nonce={NONCE}"),
        ]
    );
    assert_eq!(
        signed.signature,
        assert_ok!(sign(TEST_API_SECRET, &signed.ordered_parts))
    );
    assert_eq!(
        signed.payload.keys().collect::<Vec<_>>(),
        ["apiKey", "nonce", "signature"]
    );
}

#[test]
fn test_empty_transaction_types_signed_as_empty() {
    let query = TransactionsQuery::new("guid");
    let signed = assert_ok!(client().signed_request(&query, NONCE));
    assert!(signed.ordered_parts.contains(&"txTypes=".to_string()));
    assert!(signed.ordered_parts.contains(&"fromTimestampUtc=".to_string()));
}

fn all_endpoints() -> Vec<Box<dyn PrivateEndpoint>> {
    vec![
        Box::new(AccountsRequest),
        Box::new(BrokerageFeesRequest),
        Box::new(LimitOrderRequest::new(Decimal::new(48576, 2), Decimal::new(5, 1))),
        Box::new(MarketOrderRequest::new(Decimal::new(125, 2))),
        Box::new(CancelOrderRequest {
            order_guid: "719c495c-a39e-4884-93ac-280b37245037".to_string(),
        }),
        Box::new(OrderDetailsRequest {
            order_guid: "719c495c-a39e-4884-93ac-280b37245037".to_string(),
        }),
        Box::new(OrdersRequest::new(OrderListing::Open, OrderListQuery::default())),
        Box::new(OrdersRequest::new(OrderListing::ClosedFilled, OrderListQuery::default())),
        Box::new(
            TransactionsQuery::new("guid")
                .between(
                    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                    Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
                )
                .with_types([TransactionType::Deposit, TransactionType::Withdrawal]),
        ),
        Box::new(TradesQuery::default()),
        Box::new(DepositAddressRequest::default()),
        Box::new(DepositAddressesQuery::default()),
        Box::new(SyncDepositAddressRequest {
            deposit_address: "12a7FbBzSGvJd36wNesAxAksLXMWm4oLUJ".to_string(),
        }),
        Box::new(DigitalWithdrawalRequest::new(Decimal::new(5, 3), "addr").with_comment("cold")),
        Box::new(FiatWithdrawalRequest::new(Decimal::new(10000, 2), "Savings")),
    ]
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
#[case(5)]
#[case(6)]
#[case(7)]
#[case(8)]
#[case(9)]
#[case(10)]
#[case(11)]
#[case(12)]
#[case(13)]
#[case(14)]
fn test_payload_aligns_with_signed_parts(#[case] index: usize) {
    let endpoints = all_endpoints();
    let endpoint = &endpoints[index];
    let signed = assert_ok!(client().signed_request(endpoint.as_ref(), NONCE));

    assert!(signed.verify_alignment(), "misaligned payload for {}", endpoint.path());

    let keys: Vec<_> = signed.payload.keys().collect();
    assert_eq!(&keys[..3], ["apiKey", "nonce", "signature"]);
    assert_eq!(keys.len(), signed.ordered_parts.len());
    assert_eq!(
        signed.signature,
        assert_ok!(sign(TEST_API_SECRET, &signed.ordered_parts))
    );
}

#[rstest]
#[case(2)]
#[case(8)]
#[case(11)]
#[case(13)]
fn test_wire_body_reproduces_signature(#[case] index: usize) {
    let endpoints = all_endpoints();
    let signed = assert_ok!(client().signed_request(endpoints[index].as_ref(), NONCE));

    let body = assert_ok!(signed.payload.to_json());
    let decoded = assert_ok!(OrderedPayload::from_json(&body));

    let parts = decoded.canonical_parts(&signed.url);
    assert_eq!(parts, signed.ordered_parts);
    assert_eq!(assert_ok!(sign(TEST_API_SECRET, &parts)), signed.signature);
}
