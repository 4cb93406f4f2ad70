use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::Value;
use tabled::{Table, Tabled};

use text_utils::mcp::tools::{TextTool, ToolRegistry};
use text_utils::transport::HttpServer;
use text_utils::{Config, McpServer, logging};

#[derive(Parser)]
#[command(name = "text-utils")]
#[command(about = "Text manipulation toolkit served over MCP")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.text-utils/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP JSON-RPC server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// List available tools
    Tools,

    /// Invoke a tool locally and print its result
    Call {
        /// Tool name, e.g. slugify
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },

    /// Write a default config file
    Init,
}

#[derive(Tabled)]
struct ToolRow {
    name: String,
    required: String,
    description: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };
    let mut config = Config::load_from(&config_path)?;

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            logging::init(&config.logging.filter);

            let server = Arc::new(McpServer::new(config.protocol.clone()));
            HttpServer::new(server, &config.server)?.run().await?;
        }

        Commands::Tools => list_tools(),

        Commands::Call { tool, args } => call_tool(&tool, &args)?,

        Commands::Init => init_config(&config_path)?,
    }

    Ok(())
}

fn list_tools() {
    let registry = ToolRegistry::new();

    println!("{}", "🧰 Tools".bold());
    println!();

    let rows: Vec<ToolRow> = registry
        .descriptors()
        .iter()
        .map(|tool| ToolRow {
            name: tool.name.clone(),
            required: tool.input_schema["required"]
                .as_array()
                .map(|fields| {
                    fields
                        .iter()
                        .filter_map(|f| f.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default(),
            description: tool.description.clone(),
        })
        .collect();

    println!("{}", Table::new(rows));
}

fn call_tool(name: &str, raw_args: &str) -> Result<()> {
    let registry = ToolRegistry::new();
    let tool: TextTool = registry.get(name).with_context(|| {
        let known: Vec<_> = TextTool::ALL.iter().map(|t| t.name()).collect();
        format!("Unknown tool '{}'. Available: {}", name, known.join(", "))
    })?;

    let args: Value = serde_json::from_str(raw_args).context("--args must be a JSON object")?;
    let output = tool.call(&args)?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn init_config(path: &std::path::Path) -> Result<()> {
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    Config::default().save_to(path)?;
    println!("{} Created {}", "✓".green(), path.display());
    println!("\nNext steps:");
    println!("  text-utils serve --port 8000");
    println!("  text-utils call slugify --args '{{\"text\": \"Hello World\"}}'");

    Ok(())
}
