//! Runtime configuration
//!
//! Command-line flags, with environment fallbacks, resolved into a `Config`.

use crate::session::{FileStore, KeyValueStore, MemoryStore};
use crate::wordlists::Catalog;
use clap::Args;
use std::path::PathBuf;
use thiserror::Error;

/// Base of share links when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5173/";

/// Errors resolving the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog '{path}': {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog '{path}' has no valid five-letter words")]
    EmptyCatalog { path: PathBuf },
}

/// Flags shared by every subcommand
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Restore a shared session: a bare token or a full share link
    #[arg(long = "id", global = true, value_name = "TOKEN|URL")]
    pub share_token: Option<String>,

    /// Directory holding the saved session
    #[arg(long, global = true, env = "ADOBLE_STATE_DIR", value_name = "DIR")]
    pub state_dir: Option<PathBuf>,

    /// Word-per-line catalog file instead of the built-in list
    #[arg(long, global = true, env = "ADOBLE_CATALOG", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Base URL of share links
    #[arg(long, global = true, env = "ADOBLE_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,

    /// Keep the session in memory only
    #[arg(long, global = true)]
    pub no_save: bool,
}

/// Resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub state_dir: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub base_url: String,
    pub share_token: Option<String>,
    pub save: bool,
}

impl Config {
    /// Fill unset flags with defaults
    #[must_use]
    pub fn from_args(args: GlobalArgs) -> Self {
        Self {
            state_dir: args.state_dir.unwrap_or_else(Self::default_state_dir),
            catalog_path: args.catalog,
            base_url: args
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            share_token: args.share_token.filter(|t| !t.trim().is_empty()),
            save: !args.no_save,
        }
    }

    /// `<data dir>/adoble`, or `./adoble` when the platform has no data dir
    #[must_use]
    pub fn default_state_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("adoble")
    }

    /// The configured catalog, or the built-in one
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the catalog file cannot be read or holds no
    /// usable words.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        let Some(path) = &self.catalog_path else {
            return Ok(Catalog::embedded());
        };

        let catalog = Catalog::from_file(path).map_err(|source| ConfigError::CatalogRead {
            path: path.clone(),
            source,
        })?;
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog { path: path.clone() });
        }
        Ok(catalog)
    }

    /// Store backing the session
    #[must_use]
    pub fn open_store(&self) -> Box<dyn KeyValueStore> {
        if self.save {
            Box::new(FileStore::new(&self.state_dir))
        } else {
            Box::new(MemoryStore::new())
        }
    }
}
