use sqlx::postgres::PgConnectOptions;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Full connection URL. When set it takes precedence over the individual `db_*` parts.
    pub database_url: Option<String>,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_password: Option<String>,
    /// Schema placed on the `search_path` of every connection.
    pub db_schema: String,
    pub db_max_connections: u32,
    pub server_host: String,
    pub server_port: u16,
    /// Allowed CORS origins (comma-separated). "*" allows any origin.
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Local development setups usually have a role and database named after the login user
        let login_user = lookup("USER").unwrap_or_else(|| "postgres".to_string());

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            db_host: lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            db_port: parse_var(&lookup, "DB_PORT", 5432)?,
            db_name: lookup("DB_NAME").unwrap_or_else(|| login_user.clone()),
            db_user: lookup("DB_USER").unwrap_or(login_user),
            db_password: lookup("DB_PASSWORD"),
            db_schema: lookup("DB_SCHEMA").unwrap_or_else(|| "music".to_string()),
            db_max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: parse_var(&lookup, "PORT", 5001)?,
            cors_origins,
        })
    }

    /// Connection options for the catalog database, with the configured schema on the search path.
    pub fn connect_options(&self) -> Result<PgConnectOptions, anyhow::Error> {
        let options = match &self.database_url {
            Some(url) => url
                .parse::<PgConnectOptions>()
                .map_err(|e| anyhow::anyhow!("DATABASE_URL is not a valid Postgres URL: {}", e))?,
            None => {
                let options = PgConnectOptions::new()
                    .host(&self.db_host)
                    .port(self.db_port)
                    .database(&self.db_name)
                    .username(&self.db_user);
                match &self.db_password {
                    Some(password) => options.password(password),
                    None => options,
                }
            }
        };

        Ok(options.options([("search_path", self.db_schema.as_str())]))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, anyhow::Error>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{} has an invalid value '{}': {}", key, raw, e)),
        None => Ok(default),
    }
}
