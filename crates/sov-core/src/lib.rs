//! Shared types and configuration for the share-of-voice workspace.
//!
//! Holds the [`ResultRecord`] input model, the tracked-brand YAML config and
//! the env-driven [`AppConfig`].

pub mod app_config;
pub mod brands;
pub mod config;
pub mod records;

use thiserror::Error;

pub use app_config::AppConfig;
pub use brands::{load_brands, BrandConfig, BrandsFile, Relationship};
pub use config::{load_app_config, load_app_config_from_env};
pub use records::{load_records, save_records, ResultRecord, Source};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read brands file {path}: {source}")]
    BrandsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse brands file: {0}")]
    BrandsFileParse(#[from] serde_yaml::Error),

    #[error("brands validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("failed to access records file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid records JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
