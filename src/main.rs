use anyhow::Result;
use clap::Parser;
use hubstaff_tools::cli::{parse_call_args, Cli, Commands};
use hubstaff_tools::{batch, catalog, utils, CallRequest, HubstaffClient, Settings, ToolRegistry};
use std::time::Duration;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let (settings, client) = hubstaff_tools::init()?;

    match cli.command {
        Commands::List { verbose } => handle_list(client, verbose),
        Commands::Schema { tool, all } => handle_schema(client, tool, all),
        Commands::Call {
            tool,
            args,
            params,
            dry_run,
            timeout,
        } => handle_call(client, tool, args, params, dry_run, timeout).await,
        Commands::Batch { file, concurrency } => {
            handle_batch(client, file, concurrency.unwrap_or(settings.batch.concurrency)).await
        }
    }
}

fn handle_list(client: HubstaffClient, verbose: bool) -> Result<()> {
    let registry = ToolRegistry::hubstaff(client);

    if verbose {
        println!("{}", registry.tools_description());
        return Ok(());
    }
    let width = registry.tool_names().iter().map(String::len).max().unwrap_or(0);

    utils::print_header(&format!("{} Hubstaff tools", registry.len()));
    for metadata in registry.list_tools() {
        utils::print_tool_line(&metadata.name, &metadata.description, width);
    }

    Ok(())
}

fn handle_schema(client: HubstaffClient, tool: Option<String>, all: bool) -> Result<()> {
    let registry = ToolRegistry::hubstaff(client);

    if all {
        println!("{}", serde_json::to_string_pretty(&registry.definitions())?);
        return Ok(());
    }

    let name = tool.ok_or_else(|| anyhow::anyhow!("Give a tool name or --all"))?;
    let tool = registry
        .get(&name)
        .ok_or_else(|| anyhow::anyhow!("Unknown tool '{}'. Run `list` to see available tools", name))?;

    println!("{}", serde_json::to_string_pretty(&tool.input_schema())?);
    Ok(())
}

async fn handle_call(
    client: HubstaffClient,
    tool: String,
    args: Option<String>,
    params: Vec<String>,
    dry_run: bool,
    timeout: Option<u64>,
) -> Result<()> {
    let descriptor = catalog::find(&tool)
        .ok_or_else(|| anyhow::anyhow!("Unknown tool '{}'. Run `list` to see available tools", tool))?;
    let args = parse_call_args(args.as_deref(), &params)?;

    if dry_run {
        let url = client.build_url(descriptor, &args)?;
        println!("{} {}", descriptor.method(), url);
        return Ok(());
    }

    if !client.has_credentials() {
        utils::print_info("No API token configured; sending unauthenticated request");
    }

    let deadline = timeout.map(Duration::from_secs).unwrap_or_else(|| client.timeout());
    match client.execute_with_timeout(descriptor, &args, deadline).await {
        Ok(payload) => {
            println!("{}", serde_json::to_string_pretty(&payload)?);
            Ok(())
        }
        Err(e) => {
            println!("{}", serde_json::to_string_pretty(&e.to_json())?);
            utils::print_error(&format!("{} failed: {}", tool, e));
            std::process::exit(1);
        }
    }
}

async fn handle_batch(client: HubstaffClient, file: String, concurrency: usize) -> Result<()> {
    let file = File::open(file).await?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    let mut requests = vec![];
    let mut line_no = 0;
    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }
        let request: CallRequest = serde_json::from_str(&line)
            .map_err(|e| anyhow::anyhow!("Line {}: invalid request: {}", line_no, e))?;
        requests.push(request);
    }

    utils::print_info(&format!(
        "Running {} calls with concurrency {}",
        requests.len(),
        concurrency
    ));

    let tools: Vec<String> = requests.iter().map(|r| r.tool.clone()).collect();
    let results = batch::execute_all(&client, requests, concurrency).await;

    let mut failures = 0;
    for (tool, result) in tools.iter().zip(results) {
        let line = match result {
            Ok(payload) => serde_json::json!({ "tool": tool, "ok": true, "result": payload }),
            Err(e) => {
                failures += 1;
                serde_json::json!({ "tool": tool, "ok": false, "result": e.to_json() })
            }
        };
        println!("{}", serde_json::to_string(&line)?);
    }

    if failures == 0 {
        utils::print_success(&format!("All {} calls succeeded", tools.len()));
    } else {
        utils::print_error(&format!("{} of {} calls failed", failures, tools.len()));
    }

    Ok(())
}
