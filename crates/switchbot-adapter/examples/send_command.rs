/*
[INPUT]:  Device id and command from the command line, credentials from env
[OUTPUT]: Command result printed to stdout
[POS]:    Examples - signed POST with JSON body
[UPDATE]: When POST signature or body handling changes
*/

use serde_json::json;
use switchbot_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: Send a device command
///
/// Usage: `cargo run --example send_command -- <device-id> [command]`
/// The command defaults to `turnOn`.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(device_id) = args.next() else {
        eprintln!("usage: send_command <device-id> [command]");
        return;
    };
    let command = args.next().unwrap_or_else(|| "turnOn".to_string());

    let client = match SwitchBotClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let body = json!({
        "command": command,
        "parameter": "default",
        "commandType": "command",
    });
    let path = format!("devices/{device_id}/commands");

    match client.post(&path, Some(&body)).await {
        Ok(Some(response)) => println!("✓ {}", response),
        Ok(None) => println!("✓ No content"),
        Err(SwitchBotError::Api(e)) if e.is_auth_error() => {
            println!("✗ Credentials rejected: {}", e)
        }
        Err(e) => println!("✗ Error: {}", e),
    }
}
