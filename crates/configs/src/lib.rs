use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 5000, worker_threads: None }
    }
}

/// Where the JSON record files and uploaded images live.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_users_file")]
    pub users_file: String,
    #[serde(default = "default_products_file")]
    pub products_file: String,
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            users_file: default_users_file(),
            products_file: default_products_file(),
            public_dir: default_public_dir(),
        }
    }
}

fn default_data_dir() -> String { "data".into() }
fn default_users_file() -> String { "users.json".into() }
fn default_products_file() -> String { "products.json".into() }
fn default_public_dir() -> String { "public".into() }

impl StorageConfig {
    /// Full path of the users record file.
    pub fn users_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.users_file)
    }

    /// Full path of the products record file.
    pub fn products_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.products_file)
    }

    /// Directory uploaded images are written to (served under `/images`).
    pub fn images_dir(&self) -> PathBuf {
        PathBuf::from(&self.public_dir).join("images")
    }
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.normalize_from_env();
        self.storage.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if let Some(0) = self.worker_threads {
            self.worker_threads = None;
        }
        Ok(())
    }
}

impl StorageConfig {
    pub fn normalize_from_env(&mut self) {
        // env vars win over TOML so deployments can relocate state without editing the file
        if let Ok(dir) = std::env::var("DATA_DIR") {
            if !dir.trim().is_empty() {
                self.data_dir = dir;
            }
        }
        if let Ok(dir) = std::env::var("PUBLIC_DIR") {
            if !dir.trim().is_empty() {
                self.public_dir = dir;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.data_dir.trim().is_empty() {
            return Err(anyhow!("storage.data_dir must not be empty"));
        }
        if self.users_file.trim().is_empty() || self.products_file.trim().is_empty() {
            return Err(anyhow!("storage record file names must not be empty"));
        }
        if self.users_file == self.products_file {
            return Err(anyhow!("storage.users_file and storage.products_file must differ"));
        }
        if self.public_dir.trim().is_empty() {
            return Err(anyhow!("storage.public_dir must not be empty"));
        }
        Ok(())
    }
}
