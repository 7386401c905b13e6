use std::env;

pub const DB_PATH_VAR: &str = "BOOKREVIEW_DB_PATH";
pub const DEFAULT_DB_PATH: &str = "bookreview.db";

/// Server settings that are not part of the Leptos options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub db_path: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let db_path = lookup(DB_PATH_VAR)
            .filter(|path| !path.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());
        ServerConfig { db_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset_or_blank() {
        assert_eq!(ServerConfig::from_lookup(|_| None).db_path, DEFAULT_DB_PATH);
        assert_eq!(
            ServerConfig::from_lookup(|_| Some("  ".into())).db_path,
            DEFAULT_DB_PATH
        );
    }

    #[test]
    fn reads_the_database_path() {
        let config = ServerConfig::from_lookup(|key| {
            (key == DB_PATH_VAR).then(|| "/var/lib/reviews.db".to_string())
        });
        assert_eq!(config.db_path, "/var/lib/reviews.db");
    }
}
