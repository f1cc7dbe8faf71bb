/*
[INPUT]:  TOKEN / SECRET from `.env` or the environment
[OUTPUT]: Device list printed to stdout
[POS]:    Examples - read-only API query
[UPDATE]: When client construction or GET signature changes
*/

use switchbot_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: List devices
///
/// Reads credentials from `.env` or the environment, then calls
/// `GET /v1.1/devices`. Set `RUST_LOG=switchbot_adapter=debug` to see the
/// signed request being sent.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== SwitchBot Device List Example ===\n");

    let client = match SwitchBotClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}", client.url(""));

    match client.call_as::<ApiResponse>(Method::GET, "devices", None).await {
        Ok(response) if response.is_success() => {
            println!("✓ Devices: {:#?}", response.body);
        }
        Ok(response) => {
            println!("✗ API reported status {}: {}", response.status_code, response.message);
        }
        Err(e) => println!("✗ Error: {}", e),
    }
}
