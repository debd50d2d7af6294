use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct CommonConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl CommonConfig {
    fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[derive(Debug, Clone)]
pub struct WelcomeConfig {
    pub common: CommonConfig,
    pub mongodb: MongoConfig,
    pub message: MessageConfig,
    pub parking: ParkingConfig,
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    /// Name of the store-internal key field excluded by projection. Older
    /// deployments used a custom field instead of `_id`.
    pub id_field: String,
}

#[derive(Debug, Clone)]
pub struct MessageConfig {
    /// Welcome message file, resolved against the process working directory.
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct ParkingConfig {
    /// Whether `parkType`/`valid` are emitted when a document carries them.
    /// Pre-extension schema revisions never stored these fields.
    pub extended_fields: bool,
}

impl WelcomeConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = CommonConfig::load()?;

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        // Only the store URI is deployment-specific enough to demand in prod;
        // the remaining keys keep their defaults when unset.
        Ok(WelcomeConfig {
            common,
            mongodb: MongoConfig {
                uri: get_env("MONGODB_URI", Some("mongodb://localhost:27017"), is_prod)?,
                database: get_env("MONGODB_DATABASE", Some("announcement_db"), false)?,
                id_field: get_env("MONGODB_ID_FIELD", Some("_id"), false)?,
            },
            message: MessageConfig {
                path: get_env("WELCOME_FILE_PATH", Some("welcome.txt"), false)?,
            },
            parking: ParkingConfig {
                extended_fields: get_env("PARKING_EXTENDED_FIELDS", Some("true"), false)?
                    .parse()
                    .map_err(|e: std::str::ParseBoolError| {
                        AppError::Config(anyhow::anyhow!(
                            "PARKING_EXTENDED_FIELDS must be true or false: {}",
                            e
                        ))
                    })?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, required: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if required {
                Err(AppError::Config(anyhow::anyhow!(format!(
                    "{} is required but not set",
                    key
                ))))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::Config(anyhow::anyhow!(format!(
                    "{} is required but not set",
                    key
                ))))
            }
        }
    }
}
