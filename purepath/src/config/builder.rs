//! Layered configuration building.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::error::Result;

/// Builds a [`Config`] from defaults, files, the environment and explicit
/// overrides.
///
/// Precedence, lowest to highest:
/// 1. Built-in defaults
/// 2. `purepath.yaml` discovered from the working directory
/// 3. An explicitly named configuration file
/// 4. `PUREPATH_*` environment variables
/// 5. Programmatic overrides
///
/// # Examples
///
/// ```
/// use purepath::config::{Config, ConfigBuilder};
/// use purepath::RelativeMode;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         relative_mode: Some(RelativeMode::StringPrefix),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.relative_mode(), RelativeMode::StringPrefix);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    overrides: Option<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Create a builder with every source enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover `purepath.yaml` starting from `dir` instead of the current
    /// directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Load this file on top of any discovered configuration.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Apply these values last.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Do not discover or load configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `PUREPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Merge all enabled sources.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, or
    /// an environment variable holds an invalid value.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            if let Some(source) = ConfigLoader::discover(&working_dir)? {
                ConfigMerger::merge_into(&mut config, &source.config);
            }
            if let Some(path) = &self.config_file {
                let explicit = ConfigLoader::load_file(path)?;
                ConfigMerger::merge_into(&mut config, &explicit);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        Ok(config)
    }
}
