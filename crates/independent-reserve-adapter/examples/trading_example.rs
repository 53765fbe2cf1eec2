/*
[INPUT]:  API key/secret from the environment and order parameters
[OUTPUT]: Signed request preview, accounts and open orders
[POS]:    Examples - private (signed) operations
[UPDATE]: When private API changes
*/

use std::env;

use independent_reserve_adapter::*;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

/// Example: private endpoints (HMAC signed POST)
///
/// Reads IR_API_KEY and IR_API_SECRET. Without them, only the offline
/// signing preview runs.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Independent Reserve Trading Example ===\n");

    let (api_key, api_secret) = match (env::var("IR_API_KEY"), env::var("IR_API_SECRET")) {
        (Ok(key), Ok(secret)) => (key, secret),
        _ => {
            println!("IR_API_KEY / IR_API_SECRET not set, using placeholder credentials");
            ("demo-key".to_string(), "demo-secret".to_string())
        }
    };
    let live = api_key != "demo-key";

    let client = IrClient::with_credentials(
        ClientConfig::default(),
        Credentials::new(api_key, api_secret)?,
    )?;

    // Preview what would be sent for a limit bid, without touching the network.
    let order = LimitOrderRequest::new(Decimal::new(4_850_000, 2), Decimal::new(1, 3));
    let signed = client.signed_request(&order, 1_700_000_000)?;
    println!("Signed parts:");
    for part in &signed.ordered_parts {
        println!("  {part}");
    }
    println!("Body: {}", signed.payload.to_json()?);
    println!("Aligned: {}\n", signed.verify_alignment());

    if !live {
        return Ok(());
    }

    let accounts = client.get_accounts().await?;
    println!("Accounts: {accounts:#}");

    let open = client.get_open_orders(&OrderListQuery::default()).await?;
    println!("\nOpen orders: {open:#}");

    Ok(())
}
