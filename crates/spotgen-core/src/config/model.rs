use crate::config::consts::{DEFAULT_OUTPUT_EXTENSION, DEFAULT_TEMPLATE_FILE};
use crate::error::{Result, SpotgenError};
use crate::registry::{SpotRecord, SpotRegistry};
use crate::template::Signatures;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// spotgen.toml schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub template: TemplateConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub generate: GenerateConfig,
    #[serde(default)]
    pub signatures: Signatures,
    /// Registry; the builtin spots are used when empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spots: Vec<SpotRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    #[serde(default = "default_template_path")]
    pub path: PathBuf,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            path: default_template_path(),
        }
    }
}

fn default_template_path() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATE_FILE)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory; the template's directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: None,
            extension: default_extension(),
        }
    }
}

fn default_extension() -> String {
    DEFAULT_OUTPUT_EXTENSION.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Stop at the first failed spot instead of continuing
    #[serde(default)]
    pub fail_fast: bool,
}

impl Config {
    /// Read spotgen.toml
    ///
    /// Relative template and output paths are resolved against the directory
    /// containing the config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SpotgenError::ConfigParseError(format!("{}: {}", path.display(), e)))?;

        let mut config = Self::from_toml(&content)?;
        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        Ok(config)
    }

    /// Parse and validate config text without touching paths
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write spotgen.toml
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SpotgenError::ConfigParseError(e.to_string()))?;

        std::fs::write(path.as_ref(), content).map_err(SpotgenError::IoError)?;

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        self.signatures.validate()?;

        let extension = &self.output.extension;
        if extension.is_empty() || extension.starts_with('.') || extension.contains(['/', '\\'])
        {
            return Err(SpotgenError::ConfigInvalidValue {
                field: "output.extension".to_string(),
                reason: format!("'{}' is not a bare file extension", extension),
            });
        }
        Ok(())
    }

    /// Make relative paths relative to `base`
    pub fn rebase(&mut self, base: &Path) {
        if self.template.path.is_relative() {
            self.template.path = base.join(&self.template.path);
        }
        if let Some(dir) = &self.output.dir {
            if dir.is_relative() {
                self.output.dir = Some(base.join(dir));
            }
        }
    }

    /// Registry described by this config
    ///
    /// # Errors
    ///
    /// Returns a registry error if the configured spots are invalid.
    pub fn registry(&self) -> Result<SpotRegistry> {
        if self.spots.is_empty() {
            return Ok(SpotRegistry::builtin());
        }
        SpotRegistry::new(self.spots.clone())
    }

    /// Signatures the engine should locate regions with
    pub fn signatures(&self) -> &Signatures {
        &self.signatures
    }

    /// Directory pages are written to
    pub fn output_dir(&self) -> PathBuf {
        match &self.output.dir {
            Some(dir) => dir.clone(),
            None => self
                .template
                .path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}
