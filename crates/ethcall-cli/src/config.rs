//! CLI configuration management

use ethcall_abi::{parse_type_list, Function};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::CliError;

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Print JSON by default
    #[serde(default)]
    pub json: bool,
    /// Known functions and their return types
    #[serde(default)]
    pub functions: Vec<FunctionEntry>,
}

/// A known function: canonical signature plus return types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FunctionEntry {
    /// Canonical signature, e.g. `balanceOf(address)`
    pub signature: String,
    /// Return type names, e.g. `["uint256"]`
    #[serde(default)]
    pub outputs: Vec<String>,
}

impl FunctionEntry {
    fn from_function(function: &Function) -> Self {
        Self {
            signature: function.signature(),
            outputs: function.outputs().iter().map(ToString::to_string).collect(),
        }
    }

    /// Rebuild the function descriptor
    pub fn to_function(&self) -> Result<Function, CliError> {
        let function = Function::parse(&self.signature)?;
        let outputs = parse_type_list(&self.outputs.join(","))?;
        Ok(Function::new(function.name(), function.inputs().to_vec(), outputs))
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
            functions: Vec::new(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".ethcall"))
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Load config from file or return default
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| std::fs::read_to_string(path).ok())
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save config to file
    pub fn save(&self) -> Result<(), CliError> {
        let path = Self::config_path()
            .ok_or_else(|| CliError::Config("Cannot determine config path".to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Register a function, replacing any entry with the same name
    ///
    /// `outputs` is a comma-separated type list and takes precedence over a
    /// `returns (...)` clause in `signature`.
    pub fn add_function(
        &mut self,
        signature: &str,
        outputs: Option<&str>,
    ) -> Result<Function, CliError> {
        let mut function = Function::parse(signature)?;
        if let Some(outputs) = outputs {
            function = Function::new(
                function.name(),
                function.inputs().to_vec(),
                parse_type_list(outputs)?,
            );
        }

        self.functions.retain(|existing| {
            Function::parse(&existing.signature)
                .map(|f| f.name() != function.name())
                .unwrap_or(true)
        });
        self.functions.push(FunctionEntry::from_function(&function));
        Ok(function)
    }

    /// Look up a known function by name, skipping entries that fail to parse
    pub fn function(&self, name: &str) -> Result<Function, CliError> {
        for entry in &self.functions {
            match entry.to_function() {
                Ok(function) if function.name() == name => return Ok(function),
                Ok(_) => {}
                Err(e) => tracing::warn!(
                    signature = %entry.signature,
                    error = %e,
                    "skipping bad config entry"
                ),
            }
        }
        Err(CliError::Config(format!("Unknown function: {}", name)))
    }
}
