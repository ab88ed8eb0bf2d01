use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_NAME: &str = "garment-tracker";
const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
const DEFAULT_SERVER_PORT: u16 = 8001;
const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;
const DEFAULT_CORS_ORIGINS: [&str; 3] = [
    "https://management.phungnguyengarment.vn",
    "https://www.management.phungnguyengarment.vn",
    "http://localhost:5173",
];

pub struct Config {
    pub database_url: String,
    pub secret_key: String,

    pub app_name: String,
    pub company_name: String,

    pub server_host: String,
    pub server_port: u16,
    pub cors_origins: Vec<String>,

    pub token_ttl_days: i64,

    pub mail_admin: Option<String>,
    pub mail_api_url: Option<String>,
    pub mail_password: Option<String>,

    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let app_name = optional("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            secret_key: required("SECRET_KEY")?,
            company_name: optional("COMPANY_NAME").unwrap_or_else(|| app_name.clone()),
            app_name,
            server_host: optional("SERVER_HOST")
                .unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port: parsed("SERVER_PORT")?.unwrap_or(DEFAULT_SERVER_PORT),
            cors_origins: optional("CORS_ORIGINS")
                .map(|origins| split_list(&origins))
                .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect()),
            token_ttl_days: parsed("TOKEN_TTL_DAYS")?.unwrap_or(DEFAULT_TOKEN_TTL_DAYS),
            mail_admin: optional("MAIL_ADMIN"),
            mail_api_url: optional("MAIL_API_URL"),
            mail_password: optional("MAIL_PASSWORD"),
            admin_email: optional("ADMIN_EMAIL"),
            admin_password: optional("ADMIN_PASSWORD"),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty value as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parsed<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    optional(name)
        .map(|value| {
            value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            })
        })
        .transpose()
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
