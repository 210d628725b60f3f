use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;
use wordswap_config::Config;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// Where `config` is written back on shutdown
    pub config_path: PathBuf,
}

impl AppState {
    pub fn new(config: Config, config_path: PathBuf) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            config_path,
        }
    }

    pub async fn save_config(&self) -> anyhow::Result<()> {
        let config = self.config.read().await;
        config.save(&self.config_path)?;
        tracing::info!("Saved config to {}", self.config_path.display());
        Ok(())
    }
}
