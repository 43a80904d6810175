//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{ClientConfig, TOKEN_ENV};
use crate::error::{Error, Result};
use crate::http::Client;
use crate::resources::{
    MessagesApi, NewMessage, PeopleApi, PeopleListParams, RoomListParams, RoomsApi, WebhooksApi,
};
use crate::types::Listing;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

/// Everything the runner needs from an API client
pub trait SparkApi: PeopleApi + RoomsApi + MessagesApi + WebhooksApi {}

impl<T: PeopleApi + RoomsApi + MessagesApi + WebhooksApi> SparkApi for T {}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Client configuration from the flags and environment
    pub fn config(&self) -> Result<ClientConfig> {
        let token = self
            .cli
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::config(format!("no token given (use --token or {TOKEN_ENV})")))?;

        let mut builder = ClientConfig::builder(token);
        if let Some(base_url) = &self.cli.base_url {
            builder = builder.base_url(base_url.as_str());
        }
        if let Some(max) = self.cli.max_per_page {
            builder = builder.max_per_page(max);
        }
        Ok(builder.build())
    }

    /// Run the CLI command against the live API
    pub async fn run(&self) -> Result<()> {
        let client = Client::with_config(self.config()?)?;
        let (output, error) = self.execute(&client).await?;

        println!("{}", self.render(&output)?);

        match error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Execute the command and return the document to print.
    ///
    /// List commands that stop early still return the items fetched, together
    /// with the error that stopped them.
    pub async fn execute<A: SparkApi>(&self, api: &A) -> Result<(Value, Option<Error>)> {
        match &self.cli.command {
            Commands::Me => Ok((to_value(&api.get_myself().await?)?, None)),
            Commands::People { email, max } => {
                let params = PeopleListParams {
                    email: email.clone(),
                    ..PeopleListParams::default()
                };
                listing(api.list_people(*max, Some(&params)).await?)
            }
            Commands::Rooms { room_type, max } => {
                let params = RoomListParams {
                    room_type: room_type.clone(),
                    ..RoomListParams::default()
                };
                listing(api.list_rooms(*max, Some(&params)).await?)
            }
            Commands::Messages { room, max } => {
                listing(api.list_messages(*max, room, None).await?)
            }
            Commands::Send {
                room,
                to_person,
                to_email,
                text,
                markdown,
            } => {
                let message = NewMessage {
                    room_id: room.clone(),
                    to_person_id: to_person.clone(),
                    to_person_email: to_email.clone(),
                    text: text.clone(),
                    markdown: markdown.clone(),
                    ..NewMessage::default()
                };
                let sent = api.create_message(&message).await?;
                info!("Sent message {}", sent.id);
                Ok((to_value(&sent)?, None))
            }
            Commands::Webhooks { max } => listing(api.list_webhooks(*max).await?),
        }
    }

    /// Render a document in the selected format
    pub fn render(&self, value: &Value) -> Result<String> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value),
            OutputFormat::Pretty => serde_json::to_string_pretty(value),
        };
        rendered.map_err(Error::Encode)
    }
}

fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(Error::Encode)
}

fn listing<T: Serialize>(listing: Listing<T>) -> Result<(Value, Option<Error>)> {
    let (items, error) = listing.into_parts();
    if let Some(err) = &error {
        warn!("Listing stopped after {} items: {}", items.len(), err);
    }
    Ok((to_value(&items)?, error))
}
