use super::extract::{JsonBody, QueryParams};
use super::AppState;
use crate::error::Result;
use crate::models::{CreateRatingRequest, SearchQuery, SongSummary};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

pub fn song_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/songs", get(search_songs))
        .route("/ratings", post(create_rating))
}

async fn search_songs(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<SearchQuery>,
) -> Result<Json<Vec<SongSummary>>> {
    let songs = state.catalog.search_songs(&params.q).await?;
    Ok(Json(songs))
}

async fn create_rating(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateRatingRequest>,
) -> Result<(StatusCode, Json<Value>)> {
    let rating = req.into_rating()?;
    state.ratings.upsert(&rating).await?;

    Ok((StatusCode::CREATED, Json(json!({ "success": true }))))
}
