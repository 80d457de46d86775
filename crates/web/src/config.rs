use anyhow::{Context, Result, ensure};
use storage::DEFAULT_MAX_CONNECTIONS;
use storage::services::standings_computation::DEFAULT_WRITE_CONCURRENCY;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub api_keys: String,
    pub scoring_write_concurrency: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let scoring_write_concurrency = match lookup("SCORING_WRITE_CONCURRENCY") {
            Some(value) => value
                .parse()
                .context("SCORING_WRITE_CONCURRENCY must be a number")?,
            None => DEFAULT_WRITE_CONCURRENCY,
        };
        ensure!(
            scoring_write_concurrency >= 1,
            "SCORING_WRITE_CONCURRENCY must be at least 1"
        );

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a number")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            host: lookup("HOST").context("Cannot load HOST env variable")?,
            port: lookup("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: lookup("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            database_max_connections,
            api_keys: lookup("API_KEYS").unwrap_or_default(),
            scoring_write_concurrency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("HOST", "127.0.0.1"),
        ("PORT", "8080"),
        ("DATABASE_URL", "postgres://pickem@localhost/pickem"),
    ];

    #[test]
    fn defaults_apply_when_optional_vars_are_missing() {
        let config = load(&REQUIRED).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.api_keys, "");
        assert_eq!(config.scoring_write_concurrency, DEFAULT_WRITE_CONCURRENCY);
        assert_eq!(config.database_max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn optional_vars_override_defaults() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("API_KEYS", "a,b"));
        vars.push(("SCORING_WRITE_CONCURRENCY", "3"));
        vars.push(("DATABASE_MAX_CONNECTIONS", "20"));

        let config = load(&vars).unwrap();

        assert_eq!(config.api_keys, "a,b");
        assert_eq!(config.scoring_write_concurrency, 3);
        assert_eq!(config.database_max_connections, 20);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(load(&REQUIRED[..2]).is_err());

        let mut bad_port = REQUIRED.to_vec();
        bad_port[1] = ("PORT", "http");
        assert!(load(&bad_port).is_err());

        let mut zero = REQUIRED.to_vec();
        zero.push(("SCORING_WRITE_CONCURRENCY", "0"));
        assert!(load(&zero).is_err());
    }
}
