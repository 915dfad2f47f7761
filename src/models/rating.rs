use super::ids::deserialize_optional_id;
use crate::error::{self, AppError};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRatingRequest {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub user_id: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub song_id: Option<i32>,
    #[validate(range(min = 1, max = 5, message = "Stars must be between 1 and 5"))]
    pub stars: Option<i32>,
    pub comment: Option<String>,
}

/// A rating ready to be written. Stars are already known to be in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRating {
    pub user_id: i32,
    pub song_id: i32,
    pub stars: i32,
    pub comment: String,
}

impl CreateRatingRequest {
    /// Checks presence first, then ranges, so a missing field is never reported as out of range.
    pub fn into_rating(self) -> error::Result<NewRating> {
        let (Some(user_id), Some(song_id), Some(stars)) = (self.user_id, self.song_id, self.stars)
        else {
            return Err(AppError::Validation("Missing required fields".to_string()));
        };

        self.validate()?;

        Ok(NewRating {
            user_id,
            song_id,
            stars,
            comment: self.comment.unwrap_or_default(),
        })
    }
}
