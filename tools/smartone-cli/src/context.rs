//! Shell execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use smartone_core::catalog::{Catalog, CatalogFormat};
use smartone_core::{SessionId, Storefront};
use smartone_observability::{CartEventLogger, LogLevel, StructuredLogger};

use crate::config::{ShellConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for shell commands.
pub struct Context {
    /// Shell configuration.
    pub config: ShellConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::find_config(&cwd),
        };
        let config = match &config_path {
            Some(path) => ShellConfig::load(&path.to_string_lossy())?,
            None => ShellConfig::default(),
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Directory relative paths in the config resolve against.
    fn config_dir(&self) -> PathBuf {
        self.config_path
            .as_ref()
            .and_then(|p| p.parent())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.cwd.clone())
    }

    /// Resolved catalog file path, if one is configured.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        let path = PathBuf::from(self.config.catalog.path.as_ref()?);
        if path.is_absolute() {
            Some(path)
        } else {
            Some(self.config_dir().join(path))
        }
    }

    /// Load the configured catalog, or the demo catalog when none is set.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let Some(path) = self.catalog_path() else {
            self.output.debug("Using built-in demo catalog");
            return Ok(Catalog::demo());
        };

        self.output
            .debug(&format!("Loading catalog from {}", path.display()));
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        let format = CatalogFormat::from_file_name(&path.to_string_lossy());
        Catalog::parse(&content, format)
            .with_context(|| format!("Invalid catalog file: {}", path.display()))
    }

    /// Logger for a fresh shopping session.
    pub fn logger(&self, session_id: SessionId) -> StructuredLogger {
        let level = if self.output.is_verbose() {
            self.config.logging.level.min(LogLevel::Debug)
        } else {
            self.config.logging.level
        };

        StructuredLogger::new(session_id)
            .with_min_level(level)
            .with_format(self.config.logging.format)
    }

    /// Start a shopping session over the configured catalog.
    pub fn open_storefront(&self) -> Result<(Storefront, StructuredLogger)> {
        let catalog = self.load_catalog()?;
        let logger = self.logger(SessionId::generate());
        logger.debug(&format!("catalog ready with {} products", catalog.len()));

        let mut store = Storefront::new(catalog);
        if self.config.logging.cart_events {
            store.subscribe(CartEventLogger::new(logger.clone().with_component("cart")));
        }
        Ok((store, logger))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(config: ShellConfig, config_path: Option<&str>) -> Context {
        Context {
            config,
            config_path: config_path.map(PathBuf::from),
            output: Output::new(false, true),
            cwd: PathBuf::from("/work"),
        }
    }

    #[test]
    fn test_catalog_path_relative_to_config_file() {
        let mut config = ShellConfig::default();
        config.catalog.path = Some("catalog.toml".to_string());

        let ctx = context(config.clone(), Some("/etc/smartone/smartone.toml"));
        assert_eq!(
            ctx.catalog_path(),
            Some(PathBuf::from("/etc/smartone/catalog.toml"))
        );

        let ctx = context(config, None);
        assert_eq!(ctx.catalog_path(), Some(PathBuf::from("/work/catalog.toml")));
    }

    #[test]
    fn test_demo_catalog_without_path() {
        let ctx = context(ShellConfig::default(), None);
        assert!(ctx.catalog_path().is_none());
        assert!(!ctx.load_catalog().unwrap().is_empty());
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let mut config = ShellConfig::default();
        config.catalog.path = Some("/definitely/not/here.toml".to_string());
        let err = context(config, None).load_catalog().unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read catalog file"));
    }
}
