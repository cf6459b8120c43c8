//! Simple usage example - one call, one JSON payload

use hubstaff_tools::{call, init, Args};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Settings, logging, credentials from HUBSTAFF_API_API_KEY
    let (_settings, client) = init()?;

    match call(&client, "retrieve_organizations", &Args::new()).await {
        Ok(payload) => println!("{}", serde_json::to_string_pretty(&payload)?),
        Err(e) => eprintln!("Error: {}", e.to_json()),
    }

    Ok(())
}
