//! Configuration for wrapper generation.
//!
//! This module defines the `GenerationConfig` struct describing one
//! generation request. The configuration can be loaded from a YAML file,
//! created programmatically, or assembled from command-line arguments.
//!
//! # Examples
//!
//! ```no_run
//! use animgen_core::config::{GenerationConfig, Visibility};
//!
//! // Create a new config programmatically
//! let mut config = GenerationConfig::new();
//! config.namespace = Some("Game.Characters".to_string());
//! config.visibility = Visibility::Internal;
//! config.partial = true;
//!
//! // Or load from a config file
//! # async fn load() -> animgen_core::Result<()> {
//! let config = GenerationConfig::from_file("animgen.yaml").await?;
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::path::Path;
use std::str::FromStr;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Access modifier applied to the generated accessor members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
}

impl Visibility {
    /// Keyword as written in generated code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "internal" => Ok(Self::Internal),
            "protected" => Ok(Self::Protected),
            "private" => Ok(Self::Private),
            other => Err(crate::Error::config(format!("unknown visibility '{other}'"))),
        }
    }
}

/// One generation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Namespace wrapping the class; blank means none
    #[serde(default)]
    pub namespace: Option<String>,

    /// Class name; defaults to the controller asset name
    #[serde(default)]
    pub class_name: Option<String>,

    /// Access modifier of accessor members and the backing accessor
    #[serde(default)]
    pub visibility: Visibility,

    /// Emit a partial class with no base type instead of a MonoBehaviour
    #[serde(default)]
    pub partial: bool,

    /// Fail instead of warning when two parameters map to one identifier
    #[serde(default)]
    pub strict_names: bool,
}

impl GenerationConfig {
    /// Create a new GenerationConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Namespace to emit, if any. Blank names count as absent.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace
            .as_deref()
            .map(str::trim)
            .filter(|ns| !ns.is_empty())
    }

    /// Load configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content).await?;
        Ok(())
    }
}
