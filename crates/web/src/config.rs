use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub api_keys: String,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            api_keys: std::env::var("API_KEYS").unwrap_or_default(),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(value) => value
                    .parse()
                    .context("MAX_UPLOAD_BYTES must be a number of bytes")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }

    /// Database URL with the credentials part removed, for logging
    pub fn database_host(&self) -> &str {
        self.database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_host_hides_credentials() {
        let config = Config {
            host: "0.0.0.0".into(),
            port: 8080,
            database_url: "postgres://escola:segredo@db:5432/atletas".into(),
            api_keys: String::new(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        };

        assert_eq!(config.database_host(), "db:5432/atletas");
    }
}
