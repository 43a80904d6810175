//! Webhooks

use super::require;
use crate::error::Result;
use crate::http::Client;
use crate::types::{collect_items, decode, Listing};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const WEBHOOKS: &str = "webhooks";

/// A registered webhook
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Webhook {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

/// A webhook to register
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewWebhook {
    pub name: String,
    pub target_url: String,
    /// e.g. `messages`, `rooms`, `memberships`
    pub resource: String,
    /// e.g. `created`, `updated`, `deleted`, `all`
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// Fields a webhook update may change
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WebhookUpdate<'a> {
    name: &'a str,
    target_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    secret: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'a str>,
}

/// Webhook endpoints
#[async_trait]
pub trait WebhooksApi: Send + Sync {
    async fn get_webhook(&self, id: &str) -> Result<Webhook>;

    async fn list_webhooks(&self, max: usize) -> Result<Listing<Webhook>>;

    async fn create_webhook(&self, webhook: &NewWebhook) -> Result<Webhook>;

    /// Update name, target URL, secret and status of an existing webhook
    async fn update_webhook(&self, webhook: &Webhook) -> Result<Webhook>;

    async fn delete_webhook(&self, id: &str) -> Result<()>;
}

#[async_trait]
impl WebhooksApi for Client {
    async fn get_webhook(&self, id: &str) -> Result<Webhook> {
        require(id, "webhook ID")?;
        let body = self.get(&self.item_url(WEBHOOKS, id), None).await?;
        decode(&body)
    }

    async fn list_webhooks(&self, max: usize) -> Result<Listing<Webhook>> {
        let pages = self
            .get_with_paging(&self.collection_url(WEBHOOKS), None, max)
            .await;
        collect_items(pages)
    }

    async fn create_webhook(&self, webhook: &NewWebhook) -> Result<Webhook> {
        require(&webhook.name, "webhook name")?;
        require(&webhook.target_url, "webhook target URL")?;
        require(&webhook.resource, "webhook resource")?;
        require(&webhook.event, "webhook event")?;
        let body = self
            .post_json(&self.collection_url(WEBHOOKS), webhook)
            .await?;
        decode(&body)
    }

    async fn update_webhook(&self, webhook: &Webhook) -> Result<Webhook> {
        require(&webhook.id, "webhook ID")?;
        require(&webhook.name, "webhook name")?;
        require(&webhook.target_url, "webhook target URL")?;
        let update = WebhookUpdate {
            name: &webhook.name,
            target_url: &webhook.target_url,
            secret: webhook.secret.as_deref(),
            status: webhook.status.as_deref(),
        };
        let body = self
            .put_json(&self.item_url(WEBHOOKS, &webhook.id), &update)
            .await?;
        decode(&body)
    }

    async fn delete_webhook(&self, id: &str) -> Result<()> {
        require(id, "webhook ID")?;
        self.delete(&self.item_url(WEBHOOKS, id)).await?;
        Ok(())
    }
}
