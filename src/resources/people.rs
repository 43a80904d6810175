//! People

use super::{add_filter, require};
use crate::error::{Error, Result};
use crate::http::{Client, QueryParams};
use crate::types::{collect_items, decode, Listing};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const PEOPLE: &str = "people";

/// A person known to the platform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_pending: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_enabled: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub person_type: Option<String>,
}

/// Filters for [`PeopleApi::list_people`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeopleListParams {
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub id: Option<String>,
    pub org_id: Option<String>,
}

impl PeopleListParams {
    /// Query parameters for the set filters
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        add_filter(&mut query, "email", self.email.as_deref());
        add_filter(&mut query, "displayName", self.display_name.as_deref());
        add_filter(&mut query, "id", self.id.as_deref());
        add_filter(&mut query, "orgId", self.org_id.as_deref());
        query
    }
}

/// People endpoints
#[async_trait]
pub trait PeopleApi: Send + Sync {
    /// Fetch one person by ID
    async fn get_person(&self, id: &str) -> Result<Person>;

    /// Fetch the person the token belongs to
    async fn get_myself(&self) -> Result<Person> {
        self.get_person("me").await
    }

    /// List people, up to `max` (0 = all)
    async fn list_people(
        &self,
        max: usize,
        params: Option<&PeopleListParams>,
    ) -> Result<Listing<Person>>;

    /// Create a person; at least one email is required
    async fn create_person(&self, person: &Person) -> Result<Person>;

    /// Update a person; the ID is required
    async fn update_person(&self, person: &Person) -> Result<Person>;

    /// Delete a person by ID
    async fn delete_person(&self, id: &str) -> Result<()>;
}

#[async_trait]
impl PeopleApi for Client {
    async fn get_person(&self, id: &str) -> Result<Person> {
        require(id, "person ID")?;
        let body = self.get(&self.item_url(PEOPLE, id), None).await?;
        decode(&body)
    }

    async fn list_people(
        &self,
        max: usize,
        params: Option<&PeopleListParams>,
    ) -> Result<Listing<Person>> {
        let query = params.map(PeopleListParams::to_query).unwrap_or_default();
        let pages = self
            .get_with_paging(&self.collection_url(PEOPLE), Some(&query), max)
            .await;
        collect_items(pages)
    }

    async fn create_person(&self, person: &Person) -> Result<Person> {
        if person.emails.is_empty() {
            return Err(Error::missing_field("email"));
        }
        let body = self.post_json(&self.collection_url(PEOPLE), person).await?;
        decode(&body)
    }

    async fn update_person(&self, person: &Person) -> Result<Person> {
        require(&person.id, "person ID")?;
        let body = self
            .put_json(&self.item_url(PEOPLE, &person.id), person)
            .await?;
        decode(&body)
    }

    async fn delete_person(&self, id: &str) -> Result<()> {
        require(id, "person ID")?;
        self.delete(&self.item_url(PEOPLE, id)).await?;
        Ok(())
    }
}
