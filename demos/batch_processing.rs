//! Batch processing example - projects for every organization

use hubstaff_tools::{batch, call, init, Args};
use serde_json::{json, Value};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let (settings, client) = init()?;

    let organizations = call(&client, "retrieve_organizations", &Args::new()).await?;
    let ids: Vec<Value> = organizations["organizations"]
        .as_array()
        .map(|orgs| orgs.iter().map(|org| org["id"].clone()).collect())
        .unwrap_or_default();

    let arg_sets: Vec<Args> = ids
        .iter()
        .filter_map(|id| json!({ "organization_id": id }).as_object().cloned())
        .collect();

    let concurrency = settings.batch.concurrency;
    println!("Fetching projects for {} organizations with concurrency {}...\n", ids.len(), concurrency);

    let start = std::time::Instant::now();
    let results = batch::fan_out(&client, "retrieve_projects", arg_sets, concurrency).await;
    let elapsed = start.elapsed();

    for (id, result) in ids.iter().zip(&results) {
        match result {
            Ok(payload) => {
                let count = payload["projects"].as_array().map(Vec::len).unwrap_or(0);
                println!("Organization {}: {} projects", id, count);
            }
            Err(e) => println!("Organization {}: {}", id, e),
        }
    }

    println!("\nTotal time: {:?}", elapsed);

    Ok(())
}
