use std::env;

pub const DEFAULT_SECRET_KEY: &str = "supersecretkey";

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_name: String,
    pub port: u16,
    pub secret_key: String,
    pub access_token_ttl_minutes: i64,
    pub refresh_token_ttl_days: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            database_name: env::var("DB_NAME").unwrap_or_else(|_| "synergysphere".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "8000".to_string()).parse().expect("PORT must be a number"),
            secret_key: env::var("SECRET_KEY").unwrap_or_else(|_| DEFAULT_SECRET_KEY.to_string()),
            access_token_ttl_minutes: env::var("ACCESS_TOKEN_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            refresh_token_ttl_days: env::var("REFRESH_TOKEN_TTL_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(7),
        }
    }
}
