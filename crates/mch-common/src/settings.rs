use std::{env, path::PathBuf, sync::OnceLock};

use anyhow::Context;
use config::File;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs::canonicalize;

use crate::error::{MchError, MchResult};

pub static CONFIG_INSTANCE: OnceLock<Settings> = OnceLock::new();

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_log_level")]
    pub log_level: LevelFilter,

    /// Directory holding `<version>.json` image manifests.
    #[serde(default = "default_manifest_directory")]
    pub manifest_directory: PathBuf,

    #[serde(default)]
    pub ingress_domain: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            manifest_directory: default_manifest_directory(),
            ingress_domain: String::new(),
        }
    }
}

pub fn get_config() -> MchResult<&'static Settings> {
    CONFIG_INSTANCE.get().ok_or(MchError::ConfigNotInitialized)
}

pub fn init_config(root: Option<PathBuf>) -> MchResult<&'static Settings> {
    let settings = Settings::from_root(root)?;
    // A second init keeps the first settings.
    Ok(CONFIG_INSTANCE.get_or_init(|| settings))
}

impl Settings {
    pub fn from_root(root: Option<PathBuf>) -> MchResult<Self> {
        let curr_dir = std::env::current_dir().context("unable to get working directory")?;
        let root = root.unwrap_or(curr_dir);
        let root = canonicalize(root).context("unable to canonicalize root directory")?;

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut s = config::Config::builder();
        if root.is_file() {
            s = s.add_source(File::from(root.as_path()));
        }
        let s = s
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config.{}", run_mode)).required(false))
            .add_source(
                File::with_name(&root.join("config").to_string_lossy()).required(false),
            )
            .build()?;

        let cfg = s.try_deserialize()?;
        Ok(cfg)
    }
}

fn default_log_level() -> LevelFilter {
    LevelFilter::Info
}

fn default_manifest_directory() -> PathBuf {
    PathBuf::from("image-manifests")
}
