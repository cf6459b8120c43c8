use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hubstaff-tools")]
#[command(author, version, about = "Call Hubstaff API v2 endpoints as tools", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every available tool
    List {
        /// Include each tool's parameters
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the JSON schema of a tool's arguments
    Schema {
        /// Tool name, e.g. retrieve_activities
        tool: Option<String>,

        /// Print tool definitions for all tools
        #[arg(long, conflicts_with = "tool")]
        all: bool,
    },

    /// Call a single tool and print the JSON result
    Call {
        tool: String,

        /// Arguments as a JSON object
        #[arg(short = 'a', long)]
        args: Option<String>,

        /// Individual arguments as key=value (repeatable; later wins)
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// Only print the request URL
        #[arg(long)]
        dry_run: bool,

        /// Request timeout in seconds (overrides configuration)
        #[arg(short, long)]
        timeout: Option<u64>,
    },

    /// Run calls from a JSON-lines file ({"tool": ..., "args": {...}} per line)
    Batch {
        file: String,

        #[arg(short, long)]
        concurrency: Option<usize>,
    },
}
