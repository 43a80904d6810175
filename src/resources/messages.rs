//! Messages

use super::{add_filter, require};
use crate::error::{Error, Result};
use crate::http::{Client, QueryParams};
use crate::types::{collect_items, decode, Listing};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

const MESSAGES: &str = "messages";

/// A message posted to a room
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Message {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub room_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mentioned_people: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

/// A message to send.
///
/// Exactly one of `room_id`, `to_person_id` or `to_person_email` should be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_person_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
}

impl NewMessage {
    /// Plain-text message to a room
    pub fn to_room(room_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            room_id: Some(room_id.into()),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    fn has_recipient(&self) -> bool {
        [&self.room_id, &self.to_person_id, &self.to_person_email]
            .into_iter()
            .any(|r| r.as_deref().is_some_and(|r| !r.is_empty()))
    }
}

/// New content for an existing message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageUpdate {
    pub room_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
}

/// Filters for [`MessagesApi::list_messages`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageListParams {
    /// `me` or a person ID
    pub mentioned_people: Option<String>,
    /// Only messages sent before this instant
    pub before: Option<DateTime<Utc>>,
    /// Only messages sent before this message ID
    pub before_message: Option<String>,
}

impl MessageListParams {
    /// Query parameters for a room's messages with the set filters
    pub fn to_query(&self, room_id: &str) -> QueryParams {
        let mut query = QueryParams::new().with("roomId", room_id);
        add_filter(&mut query, "mentionedPeople", self.mentioned_people.as_deref());
        if let Some(before) = self.before {
            query.add("before", before.to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        add_filter(&mut query, "beforeMessage", self.before_message.as_deref());
        query
    }
}

/// Message endpoints
#[async_trait]
pub trait MessagesApi: Send + Sync {
    /// Fetch one message by ID
    async fn get_message(&self, id: &str) -> Result<Message>;

    /// List a room's messages, up to `max` (0 = all)
    async fn list_messages(
        &self,
        max: usize,
        room_id: &str,
        params: Option<&MessageListParams>,
    ) -> Result<Listing<Message>>;

    /// Send a message
    async fn create_message(&self, message: &NewMessage) -> Result<Message>;

    /// Edit a message's content
    async fn update_message(&self, id: &str, update: &MessageUpdate) -> Result<Message>;

    /// Delete a message by ID
    async fn delete_message(&self, id: &str) -> Result<()>;
}

#[async_trait]
impl MessagesApi for Client {
    async fn get_message(&self, id: &str) -> Result<Message> {
        require(id, "message ID")?;
        let body = self.get(&self.item_url(MESSAGES, id), None).await?;
        decode(&body)
    }

    async fn list_messages(
        &self,
        max: usize,
        room_id: &str,
        params: Option<&MessageListParams>,
    ) -> Result<Listing<Message>> {
        require(room_id, "room ID")?;
        let query = params.cloned().unwrap_or_default().to_query(room_id);
        let pages = self
            .get_with_paging(&self.collection_url(MESSAGES), Some(&query), max)
            .await;
        collect_items(pages)
    }

    async fn create_message(&self, message: &NewMessage) -> Result<Message> {
        if !message.has_recipient() {
            return Err(Error::validation(
                "message requires a room ID, person ID, or email to send to",
            ));
        }
        let body = self
            .post_json(&self.collection_url(MESSAGES), message)
            .await?;
        decode(&body)
    }

    async fn update_message(&self, id: &str, update: &MessageUpdate) -> Result<Message> {
        require(id, "message ID")?;
        require(&update.room_id, "room ID")?;
        let body = self.put_json(&self.item_url(MESSAGES, id), update).await?;
        decode(&body)
    }

    async fn delete_message(&self, id: &str) -> Result<()> {
        require(id, "message ID")?;
        self.delete(&self.item_url(MESSAGES, id)).await?;
        Ok(())
    }
}
