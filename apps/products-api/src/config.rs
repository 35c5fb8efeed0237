//! Configuration for Products API

use core_config::{app_info, env_parse_or, server::ServerConfig, AppInfo, ConfigError, FromEnv};
use database::postgres::PostgresConfig;
use domain_products::NotFoundPolicy;

pub use core_config::Environment;

/// Application configuration, built once at startup and read-only afterwards
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Apply pending migrations before serving (`RUN_MIGRATIONS`, default true)
    pub run_migrations: bool,
    /// `PRODUCTS_NOT_FOUND_POLICY`: `compat` (default) or `uniform`
    pub not_found_policy: NotFoundPolicy,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            app: app_info!(),
            database: PostgresConfig::from_env()?,
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
            run_migrations: env_parse_or("RUN_MIGRATIONS", true)?,
            not_found_policy: env_parse_or("PRODUCTS_NOT_FOUND_POLICY", NotFoundPolicy::default())?,
        })
    }
}
