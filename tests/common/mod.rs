//! Shared helpers for the integration tests.
//!
//! Tests that never reach the store build the app on a lazily connected pool
//! pointing at a closed port. Store-backed tests use [`TestDb`], which needs
//! `DATABASE_URL` and creates a throwaway schema per test.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use music_catalog::api::AppState;
use serde_json::Value;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Executor, PgPool};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

/// A pool that never connects successfully. Any query fails fast.
pub fn unreachable_pool() -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy("postgres://nobody@127.0.0.1:1/none")
        .unwrap()
}

pub fn app_with_pool(pool: PgPool) -> Router {
    music_catalog::router(Arc::new(AppState::new(pool)))
}

/// Sends a request and returns the status with the body parsed as JSON (`Null` if empty).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, method, uri, body.map(|b| b.to_string())).await;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!("response is not JSON: {}", String::from_utf8_lossy(&bytes))
        })
    };
    (status, json)
}

/// Sends a request with an optional raw JSON body and returns status and body bytes.
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

/// A scratch schema in the database named by `DATABASE_URL`.
pub struct TestDb {
    pub pool: PgPool,
    admin: PgPool,
    schema: String,
}

impl TestDb {
    pub async fn create() -> Self {
        let url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must point at a Postgres database for store-backed tests");

        let admin = PgPool::connect(&url).await.unwrap();
        let schema = format!("music_test_{}", uuid::Uuid::new_v4().simple());
        admin
            .execute(format!("CREATE SCHEMA {}", schema).as_str())
            .await
            .unwrap();

        let options = url
            .parse::<PgConnectOptions>()
            .unwrap()
            .options([("search_path", schema.as_str())]);
        let pool = PgPoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await
            .unwrap();

        pool.execute(include_str!("../fixtures/schema.sql"))
            .await
            .unwrap();

        Self {
            pool,
            admin,
            schema,
        }
    }

    pub fn app(&self) -> Router {
        app_with_pool(self.pool.clone())
    }

    pub async fn add_user(&self, username: &str) -> i32 {
        sqlx::query_scalar("INSERT INTO users (username) VALUES ($1) RETURNING user_id")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }

    pub async fn add_artist(&self, name: &str) -> i32 {
        sqlx::query_scalar("INSERT INTO artists (artist_name) VALUES ($1) RETURNING artist_id")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }

    pub async fn add_song(&self, title: &str, year: Option<i32>, artist_ids: &[i32]) -> i32 {
        let song_id: i32 = sqlx::query_scalar(
            "INSERT INTO songs (title, release_year) VALUES ($1, $2) RETURNING song_id",
        )
        .bind(title)
        .bind(year)
        .fetch_one(&self.pool)
        .await
        .unwrap();

        for artist_id in artist_ids {
            sqlx::query("INSERT INTO song_artists (song_id, artist_id) VALUES ($1, $2)")
                .bind(song_id)
                .bind(artist_id)
                .execute(&self.pool)
                .await
                .unwrap();
        }
        song_id
    }

    pub async fn cleanup(self) {
        self.pool.close().await;
        self.admin
            .execute(format!("DROP SCHEMA {} CASCADE", self.schema).as_str())
            .await
            .unwrap();
        self.admin.close().await;
    }
}
