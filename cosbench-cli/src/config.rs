//! Configuration loading from cosbench.toml
//!
//! Run parameters can be specified in a `cosbench.toml` file discovered by
//! walking up from the current directory. CLI flags override the file; with
//! neither present the built-in defaults apply.

use cosbench_backends::DEFAULT_LIBRARY_PATH;
use cosbench_core::DEFAULT_ITEMS;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Cosbench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CosConfig {
    /// Input generation configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Native-library backend configuration
    #[serde(default)]
    pub native: NativeConfig,
}

/// Input generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Number of sequential floats to generate
    #[serde(default = "default_items")]
    pub items: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            items: default_items(),
        }
    }
}

fn default_items() -> u64 {
    DEFAULT_ITEMS
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Print the input/output pair table in addition to the summary line
    #[serde(default)]
    pub verbose: bool,
}

/// Native-library backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NativeConfig {
    /// Path to the pre-built shared library
    #[serde(default = "default_library")]
    pub library: String,
}

impl Default for NativeConfig {
    fn default() -> Self {
        Self {
            library: default_library(),
        }
    }
}

fn default_library() -> String {
    DEFAULT_LIBRARY_PATH.to_string()
}

impl CosConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("cosbench.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# Cosbench Configuration

[input]
# Number of sequential floats to generate
items = 1000000000

[output]
# Print the input/output pair table in addition to the summary line
verbose = false

[native]
# Path to the pre-built shared library (native backend only)
library = ".build/debug/libWrapper.dylib"
"#
        .to_string()
    }
}
