use core_config::{AppInfo, FromEnv, app_info, env_or_default, server::ServerConfig};
use database::mongodb::MongoConfig;

pub use core_config::Environment;

/// Collection holding the items unless `ITEMS_COLLECTION` says otherwise
pub const DEFAULT_ITEMS_COLLECTION: &str = "items";

/// Application configuration composed from the shared config blocks
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    pub items_collection: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let items_collection = env_or_default("ITEMS_COLLECTION", DEFAULT_ITEMS_COLLECTION);

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
            items_collection,
        })
    }
}
