use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// How a search query matched a song. Lower tiers sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, sqlx::Type)]
#[serde(into = "i32")]
#[repr(i32)]
pub enum RelevanceTier {
    ExactTitle = 1,
    TitlePrefix = 2,
    ExactArtist = 3,
    ArtistSubstring = 4,
    Other = 5,
}

impl From<RelevanceTier> for i32 {
    fn from(tier: RelevanceTier) -> Self {
        tier as i32
    }
}

impl TryFrom<i32> for RelevanceTier {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::ExactTitle),
            2 => Ok(Self::TitlePrefix),
            3 => Ok(Self::ExactArtist),
            4 => Ok(Self::ArtistSubstring),
            5 => Ok(Self::Other),
            other => Err(other),
        }
    }
}

/// One row of a song search.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SongSummary {
    pub song_id: i32,
    pub title: String,
    pub release_year: Option<i32>,
    /// Distinct artist names, alphabetical, joined with ", ". "Unknown" when the song has none.
    pub artist_name: String,
    pub relevance: RelevanceTier,
}

/// A song as it appears inside a playlist.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PlaylistSong {
    pub song_id: i32,
    pub title: String,
    pub release_year: Option<i32>,
    pub artist_name: String,
    pub position: i32,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}
