pub mod accounts;
pub mod catalog;
pub mod playlists;
pub mod ratings;

pub use accounts::AccountService;
pub use catalog::CatalogService;
pub use playlists::PlaylistService;
pub use ratings::RatingService;
