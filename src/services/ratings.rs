use crate::error::{AppError, Result};
use crate::models::NewRating;
use sqlx::PgPool;

pub struct RatingService {
    db: PgPool,
}

impl RatingService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Inserts the rating, or overwrites stars, comment and timestamp of the
    /// user's existing rating for the same song.
    pub async fn upsert(&self, rating: &NewRating) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO ratings (user_id, song_id, stars, comment)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, song_id)
            DO UPDATE SET stars = EXCLUDED.stars, comment = EXCLUDED.comment, created_at = NOW()
            "#,
        )
        .bind(rating.user_id)
        .bind(rating.song_id)
        .bind(rating.stars)
        .bind(&rating.comment)
        .execute(&self.db)
        .await
        .map_err(|e| AppError::on_foreign_key(e, "Invalid user_id or song_id"))?;

        tracing::debug!(
            "User {} rated song {} with {} stars",
            rating.user_id,
            rating.song_id,
            rating.stars
        );
        Ok(())
    }
}
