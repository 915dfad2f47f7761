pub mod ids;
pub mod playlist;
pub mod rating;
pub mod song;
pub mod user;

pub use playlist::{
    AddPlaylistSongRequest, AppendOutcome, CreatePlaylistRequest, NewPlaylist, Playlist,
    PlaylistOwnerQuery, UpdatePlaylistRequest,
};
pub use rating::{CreateRatingRequest, NewRating};
pub use song::{PlaylistSong, RelevanceTier, SearchQuery, SongSummary};
pub use user::{LoginRequest, User};
