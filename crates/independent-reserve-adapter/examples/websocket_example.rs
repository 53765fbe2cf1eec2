/*
[INPUT]:  Channel names for the public stream
[OUTPUT]: Raw ticker frames printed as they arrive
[POS]:    Examples - WebSocket stream handling
[UPDATE]: When WebSocket API changes
*/

use independent_reserve_adapter::*;
use tokio::time::{Duration, sleep};
use tracing_subscriber::EnvFilter;

/// Example: subscribe to ticker channels for ten seconds, then cancel
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Independent Reserve WebSocket Example ===\n");

    let mut ws = IrWebSocket::new(StreamConfig::default().with_reconnect(ReconnectConfig::default()));
    let Some(mut receiver) = ws.take_receiver() else {
        return Ok(());
    };
    let shutdown = ws.shutdown_token();

    let channels = vec![Channel::ticker("Xbt", "Aud"), Channel::ticker("Eth", "Aud")];
    println!("Subscribing: {}", ws.subscription_url(&channels)?);
    let handle = ws.spawn(channels);

    tokio::spawn(async move {
        sleep(Duration::from_secs(10)).await;
        shutdown.cancel();
    });

    while let Some(frame) = receiver.recv().await {
        println!("{}", String::from_utf8_lossy(&frame));
    }

    match handle.await {
        Ok(exit) => println!("\nStream ended: {:?}", exit?),
        Err(join_err) => eprintln!("\nStream task failed: {join_err}"),
    }

    Ok(())
}
