/*
[INPUT]:  Currency pair codes and query parameters
[OUTPUT]: Market data (code lists, summaries, order book, trades, FX rates)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing query parameters
*/

use serde_json::Value;

use crate::http::{IrClient, Result};

/// Default look-back window for trade history summaries, in hours
pub const DEFAULT_HISTORY_HOURS: u32 = 240;
/// Default (and server maximum) number of recent trades
pub const DEFAULT_RECENT_TRADES: u32 = 50;

// The server caches several of these responses (1s for market data, 30m
// for trade history summaries). No client-side caching happens here.
impl IrClient {
    /// Digital currencies that can be traded
    ///
    /// GET /Public/GetValidPrimaryCurrencyCodes
    pub async fn get_valid_primary_currency_codes(&self) -> Result<Value> {
        self.get_public("/Public/GetValidPrimaryCurrencyCodes").await
    }

    /// Fiat currencies supported for trading
    ///
    /// GET /Public/GetValidSecondaryCurrencyCodes
    pub async fn get_valid_secondary_currency_codes(&self) -> Result<Value> {
        self.get_public("/Public/GetValidSecondaryCurrencyCodes").await
    }

    /// GET /Public/GetValidLimitOrderTypes
    pub async fn get_valid_limit_order_types(&self) -> Result<Value> {
        self.get_public("/Public/GetValidLimitOrderTypes").await
    }

    /// GET /Public/GetValidMarketOrderTypes
    pub async fn get_valid_market_order_types(&self) -> Result<Value> {
        self.get_public("/Public/GetValidMarketOrderTypes").await
    }

    /// GET /Public/GetValidOrderTypes
    pub async fn get_valid_order_types(&self) -> Result<Value> {
        self.get_public("/Public/GetValidOrderTypes").await
    }

    /// GET /Public/GetValidTransactionTypes
    pub async fn get_valid_transaction_types(&self) -> Result<Value> {
        self.get_public("/Public/GetValidTransactionTypes").await
    }

    /// Current market snapshot for a currency pair
    ///
    /// GET /Public/GetMarketSummary?primaryCurrencyCode={primary}&secondaryCurrencyCode={secondary}
    pub async fn get_market_summary(&self, primary: &str, secondary: &str) -> Result<Value> {
        let endpoint = format!(
            "/Public/GetMarketSummary?primaryCurrencyCode={}&secondaryCurrencyCode={}",
            primary, secondary
        );
        self.get_public(&endpoint).await
    }

    /// Order book for a currency pair
    ///
    /// GET /Public/GetOrderBook?primaryCurrencyCode={primary}&secondaryCurrencyCode={secondary}
    pub async fn get_order_book(&self, primary: &str, secondary: &str) -> Result<Value> {
        let endpoint = format!(
            "/Public/GetOrderBook?primaryCurrencyCode={}&secondaryCurrencyCode={}",
            primary, secondary
        );
        self.get_public(&endpoint).await
    }

    /// Hourly trade summaries over the last `hours`
    ///
    /// GET /Public/GetTradeHistorySummary?primaryCurrencyCode=..&secondaryCurrencyCode=..&numberOfHoursInThePastToRetrieve={hours}
    pub async fn get_trade_history_summary(
        &self,
        primary: &str,
        secondary: &str,
        hours: u32,
    ) -> Result<Value> {
        let endpoint = format!(
            "/Public/GetTradeHistorySummary?primaryCurrencyCode={}&secondaryCurrencyCode={}&numberOfHoursInThePastToRetrieve={}",
            primary, secondary, hours
        );
        self.get_public(&endpoint).await
    }

    /// Most recent trades (the server caps `count` at 50)
    ///
    /// GET /Public/GetRecentTrades?primaryCurrencyCode=..&secondaryCurrencyCode=..&numberOfRecentTradesToRetrieve={count}
    pub async fn get_recent_trades(
        &self,
        primary: &str,
        secondary: &str,
        count: u32,
    ) -> Result<Value> {
        let endpoint = format!(
            "/Public/GetRecentTrades?primaryCurrencyCode={}&secondaryCurrencyCode={}&numberOfRecentTradesToRetrieve={}",
            primary, secondary, count
        );
        self.get_public(&endpoint).await
    }

    /// Exchange rates used for fiat deposits and withdrawals
    ///
    /// GET /Public/GetFxRates
    pub async fn get_fx_rates(&self) -> Result<Value> {
        self.get_public("/Public/GetFxRates").await
    }
}
