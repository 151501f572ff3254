pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pos-retail-api")]
#[command(about = "Point-of-sale REST API server and maintenance commands")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve {
        #[arg(long, help = "Port to listen on (overrides API_PORT)")]
        port: Option<u16>,
        #[arg(long, help = "Address to bind (overrides API_BIND)")]
        bind: Option<String>,
    },

    #[command(about = "Print the stored digest for a plain-text password")]
    HashPassword {
        #[arg(help = "Plain-text password")]
        password: String,
    },

    #[command(about = "Print a bearer token valid until the next UTC midnight")]
    IssueToken {
        #[arg(help = "Username to put in the token")]
        username: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command.unwrap_or(Commands::Serve { port: None, bind: None }) {
        Commands::Serve { port, bind } => commands::serve::handle(port, bind).await,
        Commands::HashPassword { password } => commands::auth::hash_password(&password, output_format),
        Commands::IssueToken { username } => commands::auth::issue_token(&username, output_format),
    }
}
