use crate::error::OctoscoutError;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
const MAX_PAGE_SIZE: u32 = 100;
const MIN_DEBOUNCE_MS: u64 = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url: String,
    pub page_size: u32,
    pub debounce_ms: u64,
    pub favourites_path: PathBuf,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        let data = data_dir().join("octoscout");
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: 30,
            debounce_ms: 400,
            favourites_path: data.join("favourites.json"),
            log_file: data.join("octoscout.log"),
            log_level: "info".to_string(),
        }
    }
}

/// Values passed on the command line; they win over every other layer.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub favourites_path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn load(overrides: Overrides) -> Self {
        let config_file = config_dir().join("octoscout").join("config.toml");

        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if config_file.exists() {
            figment = figment.merge(Toml::file(&config_file));
        }

        figment = figment.merge(Env::prefixed("OCTOSCOUT_"));

        if let Some(path) = overrides.favourites_path {
            figment = figment.merge(Serialized::default("favourites_path", path));
        }
        if let Some(path) = overrides.log_file {
            figment = figment.merge(Serialized::default("log_file", path));
        }

        let config: Config = match figment.extract() {
            Ok(config) => config,
            Err(e) => {
                let err = OctoscoutError::Config(e.to_string());
                eprintln!("warning: {err}; using defaults");
                Config::default()
            }
        };
        config.normalized()
    }

    fn normalized(mut self) -> Self {
        self.page_size = self.page_size.clamp(1, MAX_PAGE_SIZE);
        self.debounce_ms = self.debounce_ms.max(MIN_DEBOUNCE_MS);
        self.api_base_url = self.api_base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

pub fn config_dir() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", ".config")
}

pub fn data_dir() -> PathBuf {
    xdg_dir("XDG_DATA_HOME", ".local/share")
}

fn xdg_dir(var: &str, home_fallback: &str) -> PathBuf {
    std::env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(home_fallback))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}
