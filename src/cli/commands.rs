//! CLI commands and argument parsing

use clap::{ArgGroup, Parser, Subcommand};

/// Command-line client for the Spark REST API
#[derive(Parser, Debug)]
#[command(name = "spark")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API token
    #[arg(long, global = true, env = "SPARK_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// API root URL
    #[arg(long, global = true, env = "SPARK_BASE_URL")]
    pub base_url: Option<String>,

    /// Items requested per page
    #[arg(long, global = true, env = "SPARK_MAX_PER_PAGE")]
    pub max_per_page: Option<u32>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the person the token belongs to
    Me,

    /// List people
    People {
        /// Only people with this email
        #[arg(long)]
        email: Option<String>,

        /// Maximum number of people (0 = all)
        #[arg(long, default_value = "0")]
        max: usize,
    },

    /// List rooms
    Rooms {
        /// Room type: direct or group
        #[arg(long = "type")]
        room_type: Option<String>,

        /// Maximum number of rooms (0 = all)
        #[arg(long, default_value = "0")]
        max: usize,
    },

    /// List messages in a room
    Messages {
        /// Room ID
        #[arg(long)]
        room: String,

        /// Maximum number of messages (0 = all)
        #[arg(long, default_value = "50")]
        max: usize,
    },

    /// Send a message
    #[command(group(
        ArgGroup::new("recipient")
            .required(true)
            .args(["room", "to_person", "to_email"])
    ))]
    #[command(group(
        ArgGroup::new("content")
            .required(true)
            .args(["text", "markdown"])
    ))]
    Send {
        /// Room ID
        #[arg(long)]
        room: Option<String>,

        /// Recipient person ID
        #[arg(long)]
        to_person: Option<String>,

        /// Recipient email
        #[arg(long)]
        to_email: Option<String>,

        /// Plain text body
        #[arg(long)]
        text: Option<String>,

        /// Markdown body
        #[arg(long)]
        markdown: Option<String>,
    },

    /// List webhooks
    Webhooks {
        /// Maximum number of webhooks (0 = all)
        #[arg(long, default_value = "0")]
        max: usize,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON, one document
    Json,
    /// Indented JSON
    Pretty,
}
