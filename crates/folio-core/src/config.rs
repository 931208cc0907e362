//! Configuration module
//!
//! Environment-driven configuration for the API service: server, database,
//! auth, storage backend selection, and attachment size caps.

use std::env;

use crate::constants::{
    MAX_COVER_SIZE_BYTES, MAX_DATASET_FILE_SIZE_BYTES, MAX_THUMBNAIL_SIZE_BYTES,
};
use crate::storage_types::StorageBackend;

const DEFAULT_PORT: u16 = 3000;
const MAX_CONNECTIONS: u32 = 20;
const CONNECTION_TIMEOUT_SECS: u64 = 30;

/// Base configuration shared by server and middleware setup
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    pub jwt_secret: String,
    pub environment: String,
}

/// Full service configuration
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub base: BaseConfig,
    pub database_url: String,
    // Storage configuration
    pub storage_backend: StorageBackend,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    pub hosted_storage_url: Option<String>,
    pub hosted_storage_service_key: Option<String>,
    // Attachment size caps
    pub max_cover_size_bytes: usize,
    pub max_thumbnail_size_bytes: usize,
    pub max_dataset_file_size_bytes: usize,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<ServiceConfig>);

fn size_from_env(var: &str, default_bytes: usize) -> usize {
    env::var(var)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .map(|mb| mb * 1024 * 1024)
        .unwrap_or(default_bytes)
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let base = BaseConfig {
            server_port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            cors_origins,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(MAX_CONNECTIONS),
            db_timeout_seconds: env::var("DB_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(CONNECTION_TIMEOUT_SECS),
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET must be set"))?,
            environment,
        };

        let storage_backend = env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "local".to_string())
            .parse::<StorageBackend>()
            .map_err(|e| anyhow::anyhow!(e))?;

        Ok(ServiceConfig {
            base,
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?,
            storage_backend,
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            local_storage_base_url: env::var("LOCAL_STORAGE_BASE_URL").ok(),
            hosted_storage_url: env::var("HOSTED_STORAGE_URL").ok(),
            hosted_storage_service_key: env::var("HOSTED_STORAGE_SERVICE_KEY").ok(),
            max_cover_size_bytes: size_from_env("MAX_COVER_SIZE_MB", MAX_COVER_SIZE_BYTES),
            max_thumbnail_size_bytes: size_from_env(
                "MAX_THUMBNAIL_SIZE_MB",
                MAX_THUMBNAIL_SIZE_BYTES,
            ),
            max_dataset_file_size_bytes: size_from_env(
                "MAX_DATASET_FILE_SIZE_MB",
                MAX_DATASET_FILE_SIZE_BYTES,
            ),
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        match self.storage_backend {
            StorageBackend::Local => {
                if self.local_storage_path.is_none() || self.local_storage_base_url.is_none() {
                    anyhow::bail!(
                        "LOCAL_STORAGE_PATH and LOCAL_STORAGE_BASE_URL are required for the local storage backend"
                    );
                }
            }
            StorageBackend::Hosted => {
                if self.hosted_storage_url.is_none() || self.hosted_storage_service_key.is_none() {
                    anyhow::bail!(
                        "HOSTED_STORAGE_URL and HOSTED_STORAGE_SERVICE_KEY are required for the hosted storage backend"
                    );
                }
            }
        }

        if self.base.jwt_secret.len() < 32 {
            anyhow::bail!("JWT_SECRET must be at least 32 bytes");
        }

        Ok(())
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Ok(Config(Box::new(ServiceConfig::from_env()?)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.0.validate()
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.0.base.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    // Convenience getters for common fields
    pub fn server_port(&self) -> u16 {
        self.0.base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.0.base.cors_origins
    }

    pub fn db_max_connections(&self) -> u32 {
        self.0.base.db_max_connections
    }

    pub fn db_timeout_seconds(&self) -> u64 {
        self.0.base.db_timeout_seconds
    }

    pub fn jwt_secret(&self) -> &str {
        &self.0.base.jwt_secret
    }

    pub fn environment(&self) -> &str {
        &self.0.base.environment
    }

    pub fn database_url(&self) -> &str {
        &self.0.database_url
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.0.storage_backend
    }

    pub fn local_storage_path(&self) -> Option<&str> {
        self.0.local_storage_path.as_deref()
    }

    pub fn local_storage_base_url(&self) -> Option<&str> {
        self.0.local_storage_base_url.as_deref()
    }

    pub fn hosted_storage_url(&self) -> Option<&str> {
        self.0.hosted_storage_url.as_deref()
    }

    pub fn hosted_storage_service_key(&self) -> Option<&str> {
        self.0.hosted_storage_service_key.as_deref()
    }

    pub fn max_cover_size_bytes(&self) -> usize {
        self.0.max_cover_size_bytes
    }

    pub fn max_thumbnail_size_bytes(&self) -> usize {
        self.0.max_thumbnail_size_bytes
    }

    pub fn max_dataset_file_size_bytes(&self) -> usize {
        self.0.max_dataset_file_size_bytes
    }
}
