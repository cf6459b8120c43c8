//! Simple async API facade
//!
//! Thin helpers over `HubstaffClient` for callers that think in tool names
//! rather than descriptors.

use crate::core::{Args, CallRequest, CallResult, HubstaffClient};

/// Call one catalog tool by name
///
/// # Example
/// ```no_run
/// use hubstaff_tools::{call, Credentials, HubstaffClient};
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let client = HubstaffClient::new("https://api.hubstaff.com", Credentials::from_env())?;
///     let args = json!({"organization_id": "7"}).as_object().cloned().unwrap_or_default();
///     match call(&client, "retrieve_projects", &args).await {
///         Ok(projects) => println!("{}", projects),
///         Err(e) => eprintln!("{}", e.to_json()),
///     }
///     Ok(())
/// }
/// ```
pub async fn call(client: &HubstaffClient, tool: &str, args: &Args) -> CallResult {
    client.call(tool, args).await
}

/// Batch processing utilities
pub mod batch {
    use super::*;
    use futures::stream::{self, StreamExt};

    /// Run independent calls with at most `concurrency` in flight.
    ///
    /// Results come back in request order; a failed call only affects its
    /// own slot.
    pub async fn execute_all(
        client: &HubstaffClient,
        requests: Vec<CallRequest>,
        concurrency: usize,
    ) -> Vec<CallResult> {
        tracing::info!(
            "Executing {} calls with concurrency {}",
            requests.len(),
            concurrency
        );

        stream::iter(requests)
            .map(|request| async move { client.call(&request.tool, &request.args).await })
            .buffered(concurrency.max(1))
            .collect()
            .await
    }

    /// Same tool, many argument sets (e.g. one call per organization)
    pub async fn fan_out(
        client: &HubstaffClient,
        tool: &str,
        arg_sets: Vec<Args>,
        concurrency: usize,
    ) -> Vec<CallResult> {
        let requests = arg_sets
            .into_iter()
            .map(|args| CallRequest::new(tool, args))
            .collect();

        execute_all(client, requests, concurrency).await
    }
}
