use super::catalog::ARTIST_NAMES_SQL;
use crate::error::{AppError, Result};
use crate::models::{AppendOutcome, NewPlaylist, Playlist, PlaylistSong};
use sqlx::PgPool;

const PLAYLIST_COLUMNS: &str = "playlist_id, owner_id, name, is_public, created_at";

pub struct PlaylistService {
    db: PgPool,
}

impl PlaylistService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Playlists owned by `owner_id`, newest first.
    pub async fn list_for_owner(&self, owner_id: i32) -> Result<Vec<Playlist>> {
        let sql = format!(
            "SELECT {} FROM playlists WHERE owner_id = $1 ORDER BY created_at DESC, playlist_id DESC",
            PLAYLIST_COLUMNS
        );
        let playlists = sqlx::query_as::<_, Playlist>(&sql)
            .bind(owner_id)
            .fetch_all(&self.db)
            .await?;

        Ok(playlists)
    }

    pub async fn create(&self, new: &NewPlaylist) -> Result<Playlist> {
        let sql = format!(
            "INSERT INTO playlists (owner_id, name, is_public) VALUES ($1, $2, $3) RETURNING {}",
            PLAYLIST_COLUMNS
        );
        let playlist = sqlx::query_as::<_, Playlist>(&sql)
            .bind(new.owner_id)
            .bind(&new.name)
            .bind(new.is_public)
            .fetch_one(&self.db)
            .await
            .map_err(|e| AppError::on_foreign_key(e, "Invalid owner_id"))?;

        tracing::info!(
            "Created playlist {} '{}' for user {}",
            playlist.playlist_id,
            playlist.name,
            playlist.owner_id
        );
        Ok(playlist)
    }

    pub async fn rename(&self, playlist_id: i32, name: &str) -> Result<()> {
        let result = sqlx::query("UPDATE playlists SET name = $1 WHERE playlist_id = $2")
            .bind(name)
            .bind(playlist_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Playlist not found".to_string()));
        }
        Ok(())
    }

    /// Deletes the playlist. Its entries go with it through the `ON DELETE CASCADE` foreign key.
    pub async fn delete(&self, playlist_id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM playlists WHERE playlist_id = $1")
            .bind(playlist_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Playlist not found".to_string()));
        }

        tracing::info!("Deleted playlist {}", playlist_id);
        Ok(())
    }

    /// Songs of a playlist in position order. An unknown playlist yields an empty list.
    pub async fn songs(&self, playlist_id: i32) -> Result<Vec<PlaylistSong>> {
        let sql = format!(
            r#"
            SELECT
                s.song_id,
                s.title,
                s.release_year,
                {artists} AS artist_name,
                ps.position
            FROM playlist_songs ps
            JOIN songs s ON ps.song_id = s.song_id
            LEFT JOIN song_artists sa ON s.song_id = sa.song_id
            LEFT JOIN artists a ON sa.artist_id = a.artist_id
            WHERE ps.playlist_id = $1
            GROUP BY s.song_id, s.title, s.release_year, ps.position
            ORDER BY ps.position, s.title
            "#,
            artists = ARTIST_NAMES_SQL
        );

        let songs = sqlx::query_as::<_, PlaylistSong>(&sql)
            .bind(playlist_id)
            .fetch_all(&self.db)
            .await?;

        Ok(songs)
    }

    /// Appends a song after the current last position (1 for an empty playlist).
    ///
    /// Positions are never compacted: removals leave gaps, and a new song
    /// lands after the highest remaining position.
    pub async fn append_song(&self, playlist_id: i32, song_id: i32) -> Result<AppendOutcome> {
        let position: Option<i32> = sqlx::query_scalar(
            r#"
            INSERT INTO playlist_songs (playlist_id, song_id, position)
            SELECT $1::int, $2::int, COALESCE(MAX(position), 0) + 1
            FROM playlist_songs
            WHERE playlist_id = $1
            ON CONFLICT (playlist_id, song_id) DO NOTHING
            RETURNING position
            "#,
        )
        .bind(playlist_id)
        .bind(song_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| AppError::on_foreign_key(e, "Invalid playlist_id or song_id"))?;

        match position {
            Some(position) => {
                tracing::debug!(
                    "Added song {} to playlist {} at position {}",
                    song_id,
                    playlist_id,
                    position
                );
                Ok(AppendOutcome::Added { position })
            }
            None => Ok(AppendOutcome::AlreadyPresent),
        }
    }

    pub async fn remove_song(&self, playlist_id: i32, song_id: i32) -> Result<()> {
        let result =
            sqlx::query("DELETE FROM playlist_songs WHERE playlist_id = $1 AND song_id = $2")
                .bind(playlist_id)
                .bind(song_id)
                .execute(&self.db)
                .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Song not found in playlist".to_string()));
        }
        Ok(())
    }
}
