/*
[INPUT]:  Call arguments for private endpoints
[OUTPUT]: Endpoint paths and ordered field lists with defaults applied
[POS]:    Data layer - per-endpoint request construction
[UPDATE]: When an endpoint's fields, order, or defaults change
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::enums::{OrderType, TransactionType};
use super::payload::ParamValue;

pub const DEFAULT_PRIMARY_CURRENCY: &str = "Xbt";
pub const DEFAULT_SECONDARY_CURRENCY: &str = "Aud";
pub const DEFAULT_FIAT_WITHDRAWAL_CURRENCY: &str = "USD";
pub const DEFAULT_PAGE_INDEX: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const OPEN_ORDERS_PAGE_SIZE: u32 = 10;
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Endpoint-specific fields in wire order, after `apiKey`/`nonce`.
pub type Fields = Vec<(&'static str, ParamValue)>;

/// A private (signed) endpoint.
///
/// `fields()` order is the order the server hashes; it is neither
/// alphabetical nor free to change.
pub trait PrivateEndpoint {
    fn path(&self) -> &'static str;
    fn fields(&self) -> Fields;
}

fn format_timestamp(timestamp: Option<&DateTime<Utc>>) -> String {
    timestamp
        .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}

fn page_fields(index: Option<u32>, size: Option<u32>, default_size: u32) -> [(&'static str, ParamValue); 2] {
    [
        (
            "pageIndex",
            ParamValue::Integer(index.unwrap_or(DEFAULT_PAGE_INDEX).into()),
        ),
        ("pageSize", ParamValue::Integer(size.unwrap_or(default_size).into())),
    ]
}

// ### Orders

#[derive(Debug, Clone, PartialEq)]
pub struct LimitOrderRequest {
    pub primary_currency_code: String,
    pub secondary_currency_code: String,
    pub order_type: OrderType,
    /// Secondary currency price, already within exchange precision.
    /// Signed and sent with the scale it carries: `0.3580` stays `0.3580`.
    pub price: Decimal,
    /// Primary currency volume, already within exchange precision.
    /// Signed and sent with the scale it carries; call `normalize()` to drop
    /// trailing zeros.
    pub volume: Decimal,
}

impl LimitOrderRequest {
    /// Limit bid on the default pair (Xbt/Aud)
    pub fn new(price: Decimal, volume: Decimal) -> Self {
        Self {
            primary_currency_code: DEFAULT_PRIMARY_CURRENCY.to_string(),
            secondary_currency_code: DEFAULT_SECONDARY_CURRENCY.to_string(),
            order_type: OrderType::LimitBid,
            price,
            volume,
        }
    }

    pub fn with_pair(mut self, primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        self.primary_currency_code = primary.into();
        self.secondary_currency_code = secondary.into();
        self
    }

    pub fn with_order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }
}

impl PrivateEndpoint for LimitOrderRequest {
    fn path(&self) -> &'static str {
        "/Private/PlaceLimitOrder"
    }

    fn fields(&self) -> Fields {
        vec![
            ("primaryCurrencyCode", ParamValue::text(&self.primary_currency_code)),
            ("secondaryCurrencyCode", ParamValue::text(&self.secondary_currency_code)),
            ("orderType", ParamValue::text(self.order_type.as_str())),
            ("price", ParamValue::Number(self.price)),
            ("volume", ParamValue::Number(self.volume)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketOrderRequest {
    pub primary_currency_code: String,
    pub secondary_currency_code: String,
    pub order_type: OrderType,
    /// Primary currency volume, signed with the scale it carries
    pub volume: Decimal,
}

impl MarketOrderRequest {
    /// Market bid on the default pair (Xbt/Aud)
    pub fn new(volume: Decimal) -> Self {
        Self {
            primary_currency_code: DEFAULT_PRIMARY_CURRENCY.to_string(),
            secondary_currency_code: DEFAULT_SECONDARY_CURRENCY.to_string(),
            order_type: OrderType::MarketBid,
            volume,
        }
    }

    pub fn with_pair(mut self, primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        self.primary_currency_code = primary.into();
        self.secondary_currency_code = secondary.into();
        self
    }

    pub fn with_order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }
}

impl PrivateEndpoint for MarketOrderRequest {
    fn path(&self) -> &'static str {
        "/Private/PlaceMarketOrder"
    }

    fn fields(&self) -> Fields {
        vec![
            ("primaryCurrencyCode", ParamValue::text(&self.primary_currency_code)),
            ("secondaryCurrencyCode", ParamValue::text(&self.secondary_currency_code)),
            ("orderType", ParamValue::text(self.order_type.as_str())),
            ("volume", ParamValue::Number(self.volume)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelOrderRequest {
    pub order_guid: String,
}

impl PrivateEndpoint for CancelOrderRequest {
    fn path(&self) -> &'static str {
        "/Private/CancelOrder"
    }

    fn fields(&self) -> Fields {
        vec![("orderGuid", ParamValue::text(&self.order_guid))]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetailsRequest {
    pub order_guid: String,
}

impl PrivateEndpoint for OrderDetailsRequest {
    fn path(&self) -> &'static str {
        "/Private/GetOrderDetails"
    }

    fn fields(&self) -> Fields {
        vec![("orderGuid", ParamValue::text(&self.order_guid))]
    }
}

/// Which order list to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderListing {
    Open,
    Closed,
    ClosedFilled,
}

impl OrderListing {
    pub fn path(&self) -> &'static str {
        match self {
            OrderListing::Open => "/Private/GetOpenOrders",
            OrderListing::Closed => "/Private/GetClosedOrders",
            OrderListing::ClosedFilled => "/Private/GetClosedFilledOrders",
        }
    }

    pub fn default_page_size(&self) -> u32 {
        match self {
            OrderListing::Open => OPEN_ORDERS_PAGE_SIZE,
            OrderListing::Closed | OrderListing::ClosedFilled => DEFAULT_PAGE_SIZE,
        }
    }
}

/// Pair and paging filter for order listings.
///
/// `None` paging values take the listing's defaults. `page_size` is passed
/// through unclamped; the server enforces its own ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderListQuery {
    pub primary_currency_code: String,
    pub secondary_currency_code: String,
    pub page_index: Option<u32>,
    pub page_size: Option<u32>,
}

impl Default for OrderListQuery {
    fn default() -> Self {
        Self {
            primary_currency_code: DEFAULT_PRIMARY_CURRENCY.to_string(),
            secondary_currency_code: DEFAULT_SECONDARY_CURRENCY.to_string(),
            page_index: None,
            page_size: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdersRequest {
    pub listing: OrderListing,
    pub query: OrderListQuery,
}

impl OrdersRequest {
    pub fn new(listing: OrderListing, query: OrderListQuery) -> Self {
        Self { listing, query }
    }
}

impl PrivateEndpoint for OrdersRequest {
    fn path(&self) -> &'static str {
        self.listing.path()
    }

    fn fields(&self) -> Fields {
        let mut fields = vec![
            ("primaryCurrencyCode", ParamValue::text(&self.query.primary_currency_code)),
            ("secondaryCurrencyCode", ParamValue::text(&self.query.secondary_currency_code)),
        ];
        fields.extend(page_fields(
            self.query.page_index,
            self.query.page_size,
            self.listing.default_page_size(),
        ));
        fields
    }
}

// ### Account

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountsRequest;

impl PrivateEndpoint for AccountsRequest {
    fn path(&self) -> &'static str {
        "/Private/GetAccounts"
    }

    fn fields(&self) -> Fields {
        Vec::new()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrokerageFeesRequest;

impl PrivateEndpoint for BrokerageFeesRequest {
    fn path(&self) -> &'static str {
        "/Private/GetBrokerageFees"
    }

    fn fields(&self) -> Fields {
        Vec::new()
    }
}

/// Transaction history filter for one account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionsQuery {
    pub account_guid: String,
    pub from_timestamp_utc: Option<DateTime<Utc>>,
    pub to_timestamp_utc: Option<DateTime<Utc>>,
    pub tx_types: Option<Vec<TransactionType>>,
    pub page_index: Option<u32>,
    pub page_size: Option<u32>,
}

impl TransactionsQuery {
    pub fn new(account_guid: impl Into<String>) -> Self {
        Self {
            account_guid: account_guid.into(),
            from_timestamp_utc: None,
            to_timestamp_utc: None,
            tx_types: None,
            page_index: None,
            page_size: None,
        }
    }

    pub fn between(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.from_timestamp_utc = Some(from);
        self.to_timestamp_utc = Some(to);
        self
    }

    pub fn with_types(mut self, tx_types: impl IntoIterator<Item = TransactionType>) -> Self {
        self.tx_types = Some(tx_types.into_iter().collect());
        self
    }
}

impl PrivateEndpoint for TransactionsQuery {
    fn path(&self) -> &'static str {
        "/Private/GetTransactions"
    }

    fn fields(&self) -> Fields {
        // Signed as "Trade,Deposit", sent as ["Trade","Deposit"].
        let tx_types = match &self.tx_types {
            Some(types) => {
                ParamValue::List(types.iter().map(|t| t.as_str().to_string()).collect())
            }
            None => ParamValue::text(""),
        };

        let mut fields = vec![
            ("accountGuid", ParamValue::text(&self.account_guid)),
            (
                "fromTimestampUtc",
                ParamValue::Text(format_timestamp(self.from_timestamp_utc.as_ref())),
            ),
            (
                "toTimestampUtc",
                ParamValue::Text(format_timestamp(self.to_timestamp_utc.as_ref())),
            ),
            ("txTypes", tx_types),
        ];
        fields.extend(page_fields(self.page_index, self.page_size, DEFAULT_PAGE_SIZE));
        fields
    }
}

/// A private-trade listing page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TradesQuery {
    pub page_index: Option<u32>,
    pub page_size: Option<u32>,
}

impl PrivateEndpoint for TradesQuery {
    fn path(&self) -> &'static str {
        "/Private/GetTrades"
    }

    fn fields(&self) -> Fields {
        page_fields(self.page_index, self.page_size, DEFAULT_PAGE_SIZE).into()
    }
}

// ### Deposits and withdrawals

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositAddressRequest {
    pub primary_currency_code: String,
}

impl Default for DepositAddressRequest {
    fn default() -> Self {
        Self {
            primary_currency_code: DEFAULT_PRIMARY_CURRENCY.to_string(),
        }
    }
}

impl PrivateEndpoint for DepositAddressRequest {
    fn path(&self) -> &'static str {
        "/Private/GetDigitalCurrencyDepositAddress"
    }

    fn fields(&self) -> Fields {
        vec![("primaryCurrencyCode", ParamValue::text(&self.primary_currency_code))]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositAddressesQuery {
    pub primary_currency_code: String,
    pub page_index: Option<u32>,
    pub page_size: Option<u32>,
}

impl Default for DepositAddressesQuery {
    fn default() -> Self {
        Self {
            primary_currency_code: DEFAULT_PRIMARY_CURRENCY.to_string(),
            page_index: None,
            page_size: None,
        }
    }
}

impl PrivateEndpoint for DepositAddressesQuery {
    fn path(&self) -> &'static str {
        "/Private/GetDigitalCurrencyDepositAddresses"
    }

    fn fields(&self) -> Fields {
        // This endpoint takes its paging values as JSON strings.
        vec![
            ("primaryCurrencyCode", ParamValue::text(&self.primary_currency_code)),
            (
                "pageIndex",
                ParamValue::Text(self.page_index.unwrap_or(DEFAULT_PAGE_INDEX).to_string()),
            ),
            (
                "pageSize",
                ParamValue::Text(self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).to_string()),
            ),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncDepositAddressRequest {
    pub deposit_address: String,
}

impl PrivateEndpoint for SyncDepositAddressRequest {
    fn path(&self) -> &'static str {
        "/Private/SynchDigitalCurrencyDepositAddressWithBlockchain"
    }

    fn fields(&self) -> Fields {
        vec![("depositAddress", ParamValue::text(&self.deposit_address))]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DigitalWithdrawalRequest {
    pub amount: Decimal,
    pub withdrawal_address: String,
    pub comment: String,
}

impl DigitalWithdrawalRequest {
    pub fn new(amount: Decimal, withdrawal_address: impl Into<String>) -> Self {
        Self {
            amount,
            withdrawal_address: withdrawal_address.into(),
            comment: String::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

impl PrivateEndpoint for DigitalWithdrawalRequest {
    fn path(&self) -> &'static str {
        "/Private/WithdrawDigitalCurrency"
    }

    fn fields(&self) -> Fields {
        vec![
            ("amount", ParamValue::Text(self.amount.to_string())),
            ("withdrawalAddress", ParamValue::text(&self.withdrawal_address)),
            ("comment", ParamValue::text(&self.comment)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FiatWithdrawalRequest {
    pub secondary_currency_code: String,
    pub withdrawal_amount: Decimal,
    pub withdrawal_bank_account_name: String,
    pub comment: String,
}

impl FiatWithdrawalRequest {
    pub fn new(withdrawal_amount: Decimal, withdrawal_bank_account_name: impl Into<String>) -> Self {
        Self {
            secondary_currency_code: DEFAULT_FIAT_WITHDRAWAL_CURRENCY.to_string(),
            withdrawal_amount,
            withdrawal_bank_account_name: withdrawal_bank_account_name.into(),
            comment: String::new(),
        }
    }

    pub fn with_currency(mut self, secondary_currency_code: impl Into<String>) -> Self {
        self.secondary_currency_code = secondary_currency_code.into();
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

impl PrivateEndpoint for FiatWithdrawalRequest {
    fn path(&self) -> &'static str {
        "/Private/RequestFiatWithdrawal"
    }

    fn fields(&self) -> Fields {
        vec![
            ("secondaryCurrencyCode", ParamValue::text(&self.secondary_currency_code)),
            ("withdrawalAmount", ParamValue::Text(self.withdrawal_amount.to_string())),
            (
                "withdrawalBankAccountName",
                ParamValue::text(&self.withdrawal_bank_account_name),
            ),
            ("comment", ParamValue::text(&self.comment)),
        ]
    }
}
