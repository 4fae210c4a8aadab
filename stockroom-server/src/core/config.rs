/// Server configuration
///
/// Every setting can be overridden through an environment variable:
///
/// | Environment variable | Default | Description |
/// |----------------------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP API port |
/// | DATABASE_PATH | stockroom.db | SQLite database file |
/// | SERVICE_USER_ID | (unset) | identity stamped onto created records |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | LOG_LEVEL | info | tracing level filter |
/// | LOG_DIR | (unset) | directory for daily-rolling log files |
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// SQLite database file path
    pub database_path: String,
    /// Authenticated identity the Create operation stamps as `created_by`
    pub service_user_id: Option<String>,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Log level filter
    pub log_level: String,
    /// Optional log file directory
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "stockroom.db".into()),
            service_user_id: std::env::var("SERVICE_USER_ID").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Override the database path and port, commonly used in tests
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_path_and_port() {
        let config = Config::with_overrides("scratch.db", 0);
        assert_eq!(config.database_path, "scratch.db");
        assert_eq!(config.http_port, 0);
    }
}
