//! Generator configuration

use crate::error::{GeneratorError, GeneratorResult};
use crate::naming::is_java_identifier;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings shared by every generation run
///
/// Usually loaded from a `wiregen.toml`:
///
/// ```toml
/// base_package = "com.example.protocol"
/// output_dir = "src/main/java"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Package that generated family packages are nested under
    #[serde(default = "default_base_package")]
    pub base_package: String,

    /// Package holding the runtime base classes and `ProtocolField`
    ///
    /// Defaults to `base_package` when unset.
    #[serde(default)]
    pub runtime_package: Option<String>,

    /// Extension of generated files
    #[serde(default = "default_file_extension")]
    pub file_extension: String,

    /// Root directory generated files are written under
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_base_package() -> String {
    "org.wiregen.protocol".to_string()
}

fn default_file_extension() -> String {
    "java".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated")
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_package: default_base_package(),
            runtime_package: None,
            file_extension: default_file_extension(),
            output_dir: default_output_dir(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> GeneratorResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| GeneratorError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&content)?;
        debug!(
            path = %path.display(),
            base_package = %config.base_package,
            "loaded generator config"
        );
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn parse(content: &str) -> GeneratorResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| GeneratorError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Use a different base package
    pub fn with_base_package(mut self, package: impl Into<String>) -> Self {
        self.base_package = package.into();
        self
    }

    /// Use a different output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Package the runtime base classes live in
    pub fn runtime_package(&self) -> &str {
        self.runtime_package.as_deref().unwrap_or(&self.base_package)
    }

    /// Validate the configuration
    pub fn validate(&self) -> GeneratorResult<()> {
        validate_package("base_package", &self.base_package)?;
        if let Some(runtime) = &self.runtime_package {
            validate_package("runtime_package", runtime)?;
        }

        if self.file_extension.is_empty() || self.file_extension.contains(['.', '/', '\\']) {
            return Err(GeneratorError::Config(format!(
                "file_extension '{}' must be a bare extension such as 'java'",
                self.file_extension
            )));
        }

        Ok(())
    }
}

fn validate_package(key: &str, package: &str) -> GeneratorResult<()> {
    if package.is_empty() {
        return Err(GeneratorError::Config(format!("{key} cannot be empty")));
    }
    if let Some(bad) = package.split('.').find(|s| !is_java_identifier(s)) {
        return Err(GeneratorError::Config(format!(
            "{key} '{package}' has invalid segment '{bad}'"
        )));
    }
    Ok(())
}
