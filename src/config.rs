use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,

    // Graph store
    pub neo4j_uri: String,
    pub neo4j_user: String,
    pub neo4j_password: String,
    pub neo4j_database: String,
    pub neo4j_max_connections: usize,

    // 0 disables the limiter
    pub rate_limit_per_min: u32,

    pub api_prefix: String,

    pub log_dir: String,
    pub log_level: tracing::Level,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = parse_or("PORT", 3000)?;

        Ok(Self {
            server_addr: format!("{}:{}", host, port),

            neo4j_uri: required("NEO4J_URI")?,
            neo4j_user: required("NEO4J_USER")?,
            neo4j_password: required("NEO4J_PASSWORD")?,
            neo4j_database: env::var("NEO4J_DATABASE").unwrap_or_else(|_| "neo4j".to_string()),
            neo4j_max_connections: parse_or("NEO4J_MAX_CONNECTIONS", 16)?,

            rate_limit_per_min: parse_or("RATE_LIMIT_PER_MIN", 0)?,

            api_prefix: env::var("API_PREFIX").unwrap_or_default(),

            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            log_level: parse_or("LOG_LEVEL", tracing::Level::DEBUG)?,
        })
    }
}

fn required(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("{} must be set", key))
}

fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {:?}", key, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Settings for route tests: no limiter, no prefix, no real graph.
    pub fn for_tests() -> Self {
        Self {
            server_addr: "127.0.0.1:0".to_string(),
            neo4j_uri: "bolt://localhost:7687".to_string(),
            neo4j_user: "neo4j".to_string(),
            neo4j_password: "neo4j".to_string(),
            neo4j_database: "neo4j".to_string(),
            neo4j_max_connections: 1,
            rate_limit_per_min: 0,
            api_prefix: String::new(),
            log_dir: "logs".to_string(),
            log_level: tracing::Level::DEBUG,
        }
    }
}
