use std::env;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Database,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
    #[error("DATABASE_URL must be set when STORAGE_BACKEND=database")]
    MissingDatabaseUrl,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub storage_backend: StorageBackend,
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub random_seed: Option<u64>,
}

fn parse_var<T>(name: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        reason: e.to_string(),
        value,
    })
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(value) => match value.to_lowercase().as_str() {
                "memory" => StorageBackend::Memory,
                "database" => StorageBackend::Database,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "STORAGE_BACKEND",
                        value,
                        reason: "expected 'memory' or 'database'".to_string(),
                    })
                }
            },
            None if database_url.is_some() => StorageBackend::Database,
            None => StorageBackend::Memory,
        };

        if storage_backend == StorageBackend::Database && database_url.is_none() {
            return Err(ConfigError::MissingDatabaseUrl);
        }

        Ok(Config {
            storage_backend,
            database_url,
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_var("PORT", lookup("PORT").unwrap_or_else(|| "8080".to_string()))?,
            frontend_url: lookup("FRONTEND_URL")
                .unwrap_or_else(|| "http://localhost:5173".to_string()),
            random_seed: lookup("RANDOM_SEED")
                .map(|seed| parse_var("RANDOM_SEED", seed))
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_to_memory_storage() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.random_seed, None);
    }

    #[test]
    fn test_database_url_selects_database_storage() {
        let config = config_from(&[("DATABASE_URL", "sqlite://runai.db?mode=rwc")]).unwrap();
        assert_eq!(config.storage_backend, StorageBackend::Database);
    }

    #[test]
    fn test_database_storage_requires_url() {
        let result = config_from(&[("STORAGE_BACKEND", "database")]);
        assert!(matches!(result, Err(ConfigError::MissingDatabaseUrl)));
    }

    #[test]
    fn test_invalid_values_are_reported() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("RANDOM_SEED", "-1")]).is_err());
        assert!(config_from(&[("STORAGE_BACKEND", "redis")]).is_err());

        let config = config_from(&[("RANDOM_SEED", "42"), ("STORAGE_BACKEND", "memory")]).unwrap();
        assert_eq!(config.random_seed, Some(42));
    }
}
