//! Controller parameter extraction.
//!
//! The generator never inspects an engine asset itself. Callers hand it a
//! [`ControllerSnapshot`] obtained from some [`ParameterSource`]. The
//! bundled source, [`ControllerManifest`], reads a controller description
//! exported from the editor as JSON or YAML:
//!
//! ```yaml
//! name: PlayerController
//! parameters:
//!   - { name: speed, type: float, hash: 123 }
//!   - { name: Jump, type: 9, hash: 456 }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use animgen_core::controller::{snapshot, ControllerManifest};
//!
//! # #[tokio::main]
//! # async fn main() -> animgen_core::Result<()> {
//! let manifest = ControllerManifest::from_file("PlayerController.yaml").await?;
//! let snapshot = snapshot(&manifest)?;
//! println!("{} parameters", snapshot.parameters.len());
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::Path;

use crate::model::{ControllerSnapshot, ParameterDescriptor};
use crate::Error;

// External imports (alphabetized)
use tokio::fs;

/// Anything that can list the parameters of a controller asset.
pub trait ParameterSource {
    /// Name of the asset the parameters belong to
    fn asset_name(&self) -> &str;

    /// Parameters in controller order
    fn extract_parameters(&self) -> crate::Result<Vec<ParameterDescriptor>>;
}

/// Take an ordered snapshot of a source's parameters.
pub fn snapshot<S: ParameterSource + ?Sized>(source: &S) -> crate::Result<ControllerSnapshot> {
    let parameters = source.extract_parameters()?;
    log::debug!(
        "extracted {} parameters from '{}'",
        parameters.len(),
        source.asset_name()
    );
    Ok(ControllerSnapshot::new(source.asset_name(), parameters))
}

impl ParameterSource for ControllerSnapshot {
    fn asset_name(&self) -> &str {
        &self.asset_name
    }

    fn extract_parameters(&self) -> crate::Result<Vec<ParameterDescriptor>> {
        Ok(self.parameters.clone())
    }
}

/// Controller description exported from the editor.
#[derive(Debug, Clone)]
pub struct ControllerManifest {
    snapshot: ControllerSnapshot,
}

impl ControllerManifest {
    /// Load a controller description from a file (supports both YAML and JSON)
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        Self::parse_content(&content).map_err(|e| {
            Error::controller(format!(
                "Failed to parse controller at {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Parse content as either JSON or YAML
    pub fn parse_content(content: &str) -> Result<Self, String> {
        let snapshot: ControllerSnapshot = match serde_json::from_str(content) {
            Ok(snapshot) => snapshot,
            Err(_) => serde_yaml::from_str(content)
                .map_err(|e| format!("content is neither valid JSON nor YAML ({e})"))?,
        };

        if snapshot.asset_name.trim().is_empty() {
            return Err("controller name is empty".to_string());
        }
        if let Some(index) = snapshot.parameters.iter().position(|p| p.name.is_empty()) {
            return Err(format!("parameter at index {index} has an empty name"));
        }

        Ok(Self { snapshot })
    }

    pub fn snapshot(&self) -> &ControllerSnapshot {
        &self.snapshot
    }
}

impl ParameterSource for ControllerManifest {
    fn asset_name(&self) -> &str {
        &self.snapshot.asset_name
    }

    fn extract_parameters(&self) -> crate::Result<Vec<ParameterDescriptor>> {
        Ok(self.snapshot.parameters.clone())
    }
}
