/*
[INPUT]:  Public client and a currency pair
[OUTPUT]: Market summary, order book and recent trades
[POS]:    Examples - public market data
[UPDATE]: When public API changes
*/

use independent_reserve_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: public market data (no credentials needed)
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Independent Reserve Market Data Example ===\n");

    let client = IrClient::new()?;

    let primaries = client.get_valid_primary_currency_codes().await?;
    println!("Primary currencies: {primaries}");

    let summary = client
        .get_market_summary(DEFAULT_PRIMARY_CURRENCY, DEFAULT_SECONDARY_CURRENCY)
        .await?;
    println!("\nMarket summary: {summary:#}");

    let book = client
        .get_order_book(DEFAULT_PRIMARY_CURRENCY, DEFAULT_SECONDARY_CURRENCY)
        .await?;
    let bids = book["BuyOrders"].as_array().map_or(0, Vec::len);
    let asks = book["SellOrders"].as_array().map_or(0, Vec::len);
    println!("\nOrder book: {bids} bids, {asks} asks");

    let trades = client
        .get_recent_trades(DEFAULT_PRIMARY_CURRENCY, DEFAULT_SECONDARY_CURRENCY, DEFAULT_RECENT_TRADES)
        .await?;
    let count = trades["Trades"].as_array().map_or(0, Vec::len);
    println!("\nRecent trades: {count}");

    let history = client
        .get_trade_history_summary(
            DEFAULT_PRIMARY_CURRENCY,
            DEFAULT_SECONDARY_CURRENCY,
            DEFAULT_HISTORY_HOURS,
        )
        .await?;
    let hours = history["HistorySummaryItems"].as_array().map_or(0, Vec::len);
    println!("Hourly summaries: {hours}");

    Ok(())
}
