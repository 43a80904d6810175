//! Rooms

use super::{add_filter, require};
use crate::error::{Error, Result};
use crate::http::{Client, QueryParams};
use crate::types::{collect_items, decode, Listing};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

const ROOMS: &str = "rooms";

/// A room (space) the token's owner belongs to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Room {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

/// Filters for [`RoomsApi::list_rooms`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomListParams {
    pub team_id: Option<String>,
    /// `direct` or `group`
    pub room_type: Option<String>,
    /// `id`, `lastactivity` or `created`
    pub sort_by: Option<String>,
}

impl RoomListParams {
    /// Query parameters for the set filters
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        add_filter(&mut query, "teamId", self.team_id.as_deref());
        add_filter(&mut query, "type", self.room_type.as_deref());
        add_filter(&mut query, "sortBy", self.sort_by.as_deref());
        query
    }
}

/// Body of a room create or rename
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RoomRequest<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    team_id: Option<&'a str>,
}

/// Room endpoints
#[async_trait]
pub trait RoomsApi: Send + Sync {
    /// Fetch one room by ID
    async fn get_room(&self, id: &str) -> Result<Room>;

    /// List rooms, up to `max` (0 = all)
    async fn list_rooms(&self, max: usize, params: Option<&RoomListParams>)
        -> Result<Listing<Room>>;

    /// Create a room, optionally inside a team
    async fn create_room(&self, name: &str, team_id: Option<&str>) -> Result<Room>;

    /// Rename a room
    async fn update_room_name(&self, id: &str, name: &str) -> Result<Room>;

    /// Delete a room by ID
    async fn delete_room(&self, id: &str) -> Result<()>;

    /// Find the first room whose title is exactly `name`.
    ///
    /// Lists every room. If the listing stopped early and no match was found
    /// among the rooms fetched, the listing's error is returned.
    async fn get_room_by_name(&self, name: &str) -> Result<Room> {
        require(name, "room name")?;

        let (rooms, error) = self.list_rooms(0, None).await?.into_parts();
        if let Some(room) = rooms.into_iter().find(|r| r.title == name) {
            return Ok(room);
        }

        match error {
            Some(err) => Err(err),
            None => Err(Error::RoomNotFound {
                name: name.to_string(),
            }),
        }
    }
}

#[async_trait]
impl RoomsApi for Client {
    async fn get_room(&self, id: &str) -> Result<Room> {
        require(id, "room ID")?;
        let body = self.get(&self.item_url(ROOMS, id), None).await?;
        decode(&body)
    }

    async fn list_rooms(
        &self,
        max: usize,
        params: Option<&RoomListParams>,
    ) -> Result<Listing<Room>> {
        let query = params.map(RoomListParams::to_query).unwrap_or_default();
        let pages = self
            .get_with_paging(&self.collection_url(ROOMS), Some(&query), max)
            .await;
        collect_items(pages)
    }

    async fn create_room(&self, name: &str, team_id: Option<&str>) -> Result<Room> {
        require(name, "room name")?;
        let request = RoomRequest {
            title: name,
            team_id: team_id.filter(|t| !t.is_empty()),
        };
        debug!("Creating room {:?}", name);
        let body = self.post_json(&self.collection_url(ROOMS), &request).await?;
        decode(&body)
    }

    async fn update_room_name(&self, id: &str, name: &str) -> Result<Room> {
        require(id, "room ID")?;
        require(name, "room name")?;
        let request = RoomRequest {
            title: name,
            team_id: None,
        };
        let body = self.put_json(&self.item_url(ROOMS, id), &request).await?;
        decode(&body)
    }

    async fn delete_room(&self, id: &str) -> Result<()> {
        require(id, "room ID")?;
        self.delete(&self.item_url(ROOMS, id)).await?;
        Ok(())
    }
}
