use super::ids::deserialize_optional_id;
use crate::error::{self, AppError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Playlist {
    pub playlist_id: i32,
    pub owner_id: i32,
    pub name: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistOwnerQuery {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub user_id: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlaylistRequest {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub owner_id: Option<i32>,
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,
    pub is_public: Option<bool>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePlaylistRequest {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddPlaylistSongRequest {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub song_id: Option<i32>,
}

/// Validated input for a new playlist.
#[derive(Debug, Clone)]
pub struct NewPlaylist {
    pub owner_id: i32,
    pub name: String,
    pub is_public: bool,
}

/// Result of appending a song to a playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Added { position: i32 },
    AlreadyPresent,
}

fn non_blank(name: Option<String>) -> Option<String> {
    name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

impl CreatePlaylistRequest {
    pub fn into_new_playlist(self) -> error::Result<NewPlaylist> {
        self.validate()?;

        let (Some(owner_id), Some(name)) = (self.owner_id, non_blank(self.name)) else {
            return Err(AppError::Validation("Missing required fields".to_string()));
        };

        Ok(NewPlaylist {
            owner_id,
            name,
            is_public: self.is_public.unwrap_or(true),
        })
    }
}

impl UpdatePlaylistRequest {
    pub fn into_name(self) -> error::Result<String> {
        self.validate()?;
        non_blank(self.name).ok_or_else(|| AppError::Validation("Name required".to_string()))
    }
}
