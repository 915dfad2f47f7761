use super::extract::JsonBody;
use super::AppState;
use crate::error::Result;
use crate::models::{LoginRequest, User};
use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;

pub fn auth_routes() -> Router<Arc<AppState>> {
    Router::new().route("/login", post(login))
}

async fn login(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<User>> {
    let user = state
        .accounts
        .login(req.username.as_deref().unwrap_or_default())
        .await?;

    Ok(Json(user))
}
