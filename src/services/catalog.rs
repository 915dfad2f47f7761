use crate::error::Result;
use crate::models::SongSummary;
use sqlx::PgPool;

/// Upper bound on rows returned by a single search.
pub const SEARCH_LIMIT: i64 = 100;

/// Distinct artist names of a song, alphabetical and comma-joined, or `Unknown`.
/// Expects `songs s` left-joined to `song_artists sa` and `artists a`, grouped by song.
pub(crate) const ARTIST_NAMES_SQL: &str =
    "COALESCE(STRING_AGG(DISTINCT a.artist_name, ', ' ORDER BY a.artist_name), 'Unknown')";

pub struct CatalogService {
    db: PgPool,
}

impl CatalogService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Case-insensitive search over song titles and artist names.
    ///
    /// Each song is ranked by the first rule it satisfies:
    /// 1. title equals the query
    /// 2. title starts with the query
    /// 3. an artist name equals the query
    /// 4. an artist name contains the query
    /// 5. anything else that matched (title contains the query)
    ///
    /// Ties are broken by title. A blank query returns no rows without a round trip.
    pub async fn search_songs(&self, query: &str) -> Result<Vec<SongSummary>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            r#"
            SELECT
                s.song_id,
                s.title,
                s.release_year,
                {artists} AS artist_name,
                CASE
                    WHEN LOWER(s.title) = LOWER($1) THEN 1
                    WHEN LOWER(s.title) LIKE LOWER($2) || '%' THEN 2
                    WHEN BOOL_OR(LOWER(a.artist_name) = LOWER($1)) THEN 3
                    WHEN BOOL_OR(LOWER(a.artist_name) LIKE '%' || LOWER($2) || '%') THEN 4
                    ELSE 5
                END AS relevance
            FROM songs s
            LEFT JOIN song_artists sa ON s.song_id = sa.song_id
            LEFT JOIN artists a ON sa.artist_id = a.artist_id
            GROUP BY s.song_id, s.title, s.release_year
            HAVING LOWER(s.title) LIKE '%' || LOWER($2) || '%'
                OR BOOL_OR(LOWER(a.artist_name) LIKE '%' || LOWER($2) || '%')
            ORDER BY relevance, s.title, s.song_id
            LIMIT $3
            "#,
            artists = ARTIST_NAMES_SQL
        );

        let songs = sqlx::query_as::<_, SongSummary>(&sql)
            .bind(query)
            .bind(escape_like(query))
            .bind(SEARCH_LIMIT)
            .fetch_all(&self.db)
            .await?;

        tracing::debug!("Search '{}' matched {} songs", query, songs.len());
        Ok(songs)
    }
}

/// Escape LIKE metacharacters so user input matches literally.
///
/// Postgres uses `\` as the default LIKE escape character.
pub fn escape_like(pattern: &str) -> String {
    pattern
        .replace('\\', r"\\")
        .replace('%', r"\%")
        .replace('_', r"\_")
}
