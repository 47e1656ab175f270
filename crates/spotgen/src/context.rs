//! Global context for CLI commands

use anyhow::{Context as _, Result};
use spotgen_core::config::{Config, consts::CONFIG_FILE_NAME};
use spotgen_core::{SpotRegistry, Template, TemplateEngine};
use std::env;
use std::path::PathBuf;

/// Loaded configuration plus command-line overrides
pub struct Context {
    pub config: Config,
    /// Config file in use; `None` when running on defaults
    pub config_path: Option<PathBuf>,
    pub verbose: bool,
}

impl Context {
    /// Load the config from `config_path`, or `./spotgen.toml` if present
    ///
    /// Without either, the defaults apply: `./conditions.html` and the
    /// builtin spots.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub fn load(config_path: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => Some(path),
            None => {
                let candidate = env::current_dir()?.join(CONFIG_FILE_NAME);
                candidate.exists().then_some(candidate)
            }
        };

        let config = match &config_path {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("Failed to load config '{}'", path.display()))?,
            None => Config::default(),
        };

        Ok(Self {
            config,
            config_path,
            verbose,
        })
    }

    /// Apply a `--template` override
    pub fn with_template(mut self, template: Option<PathBuf>) -> Self {
        if let Some(path) = template {
            self.config.template.path = path;
        }
        self
    }

    /// Apply an `--out-dir` override
    pub fn with_out_dir(mut self, out_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = out_dir {
            self.config.output.dir = Some(dir);
        }
        self
    }

    pub fn engine(&self) -> TemplateEngine {
        TemplateEngine::with_signatures(self.config.signatures().clone())
    }

    pub fn registry(&self) -> Result<SpotRegistry> {
        Ok(self.config.registry()?)
    }

    pub fn load_template(&self) -> Result<Template> {
        Ok(Template::from_file(&self.config.template.path)?)
    }
}
