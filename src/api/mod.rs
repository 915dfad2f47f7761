pub mod auth;
pub mod extract;
pub mod playlists;
pub mod songs;

pub use auth::auth_routes;
pub use playlists::playlist_routes;
pub use songs::song_routes;

use crate::services::{AccountService, CatalogService, PlaylistService, RatingService};
use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;

pub struct AppState {
    pub accounts: AccountService,
    pub catalog: CatalogService,
    pub ratings: RatingService,
    pub playlists: PlaylistService,
}

impl AppState {
    pub fn new(db: PgPool) -> Self {
        Self {
            accounts: AccountService::new(db.clone()),
            catalog: CatalogService::new(db.clone()),
            ratings: RatingService::new(db.clone()),
            playlists: PlaylistService::new(db),
        }
    }
}

/// Every JSON endpoint, relative to `/api`.
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(auth_routes())
        .merge(song_routes())
        .merge(playlist_routes())
}
