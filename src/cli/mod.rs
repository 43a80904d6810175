//! CLI module
//!
//! Command-line interface over the resource accessors.
//!
//! # Commands
//!
//! - `me` - Show the token's owner
//! - `people` / `rooms` / `webhooks` - List resources
//! - `messages` - List a room's messages
//! - `send` - Send a message

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{Runner, SparkApi};
