use crate::error::{AppError, Result};
use crate::models::User;
use sqlx::PgPool;

/// Username lookup. There are no credentials: a known username is a successful login.
pub struct AccountService {
    db: PgPool,
}

impl AccountService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn login(&self, username: &str) -> Result<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::Validation("Username required".to_string()));
        }

        let user = sqlx::query_as::<_, User>(
            "SELECT user_id, username FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await?;

        match user {
            Some(user) => {
                tracing::info!("User {} logged in", user.user_id);
                Ok(user)
            }
            None => {
                tracing::warn!("Login attempt failed for username: '{}'", username);
                Err(AppError::NotFound("User not found".to_string()))
            }
        }
    }
}
