use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog::CafeCatalog;
use crate::query::SearchOptions;

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingSection,
    pub search: SearchSection,
    pub catalog: CatalogSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    pub fn load() -> Result<Self> {
        let config_path = env::var("CAFES_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from(Path::new(&config_path))
    }

    /// Load configuration from `path` (skipped when missing) overlaid with
    /// `CAFES_*` environment variables, e.g. `CAFES_SERVER__PORT=9000`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut builder = config::Config::builder();

        if path.exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("CAFES")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;
        let mut config: Self = settings.try_deserialize()?;

        // The config crate lowercases map keys, but city names are matched
        // case-sensitively, so the catalog is read from the file as written.
        if path.exists() && path.extension().is_some_and(|ext| ext == "toml") {
            config.catalog = read_catalog(path)?;
        }

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        Ok(config)
    }

    /// Build the café catalog: the configured cities, or the built-in dataset.
    pub fn catalog(&self) -> Result<CafeCatalog> {
        match &self.catalog.cities {
            Some(cities) => CafeCatalog::new(cities.clone()).context("invalid catalog.cities"),
            None => Ok(CafeCatalog::default()),
        }
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            case_sensitive: self.search.case_sensitive,
        }
    }
}

fn read_catalog(path: &Path) -> Result<CatalogSection> {
    #[derive(Deserialize, Default)]
    #[serde(default)]
    struct CatalogFile {
        catalog: CatalogSection,
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let file: CatalogFile = toml::from_str(&contents)
        .with_context(|| format!("invalid catalog section in {}", path.display()))?;

    Ok(file.catalog)
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    pub case_sensitive: bool,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct CatalogSection {
    /// Replaces the built-in dataset when set.
    pub cities: Option<HashMap<String, Vec<String>>>,
}
