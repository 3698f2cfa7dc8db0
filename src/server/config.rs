use std::path::PathBuf;

use axum::http::HeaderValue;

use crate::server::error::config::ConfigError;

static DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Origins allowed to call the API from a browser
#[derive(Clone, Debug, PartialEq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

pub struct Config {
    pub database_url: String,
    /// Directory logos are written to and served from under `/uploads`
    pub upload_dir: PathBuf,
    /// Insert demo data at startup when the café table is empty
    pub seed_database: bool,
    pub cors_origins: CorsOrigins,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source, `from_env` passes the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL"))?;

        let upload_dir = lookup("UPLOAD_DIR")
            .filter(|dir| !dir.is_empty())
            .unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string());

        let seed_database = match lookup("SEED_DATABASE") {
            None => false,
            Some(value) => parse_bool("SEED_DATABASE", &value)?,
        };

        let cors_origins = match lookup("CORS_ORIGINS") {
            None => CorsOrigins::Any,
            Some(value) => parse_origins("CORS_ORIGINS", &value)?,
        };

        Ok(Self {
            database_url,
            upload_dir: PathBuf::from(upload_dir),
            seed_database,
            cors_origins,
        })
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "" | "0" | "false" | "no" => Ok(false),
        other => Err(ConfigError::InvalidFlag {
            var,
            value: other.to_string(),
        }),
    }
}

fn parse_origins(var: &'static str, value: &str) -> Result<CorsOrigins, ConfigError> {
    let value = value.trim();
    if value.is_empty() || value == "*" {
        return Ok(CorsOrigins::Any);
    }

    let origins = value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidOrigin {
                var,
                origin: origin.to_string(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsOrigins::List(origins))
}
