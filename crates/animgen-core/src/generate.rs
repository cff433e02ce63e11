//! Code generation entry points for animgen

use std::path::Path;

use crate::{
    codegen::WrapperGenerator,
    config::GenerationConfig,
    controller::{snapshot, ControllerManifest},
    diagnostics::{DiagnosticSink, LogSink},
    error::Result,
    model::ControllerSnapshot,
};

/// Generate the wrapper source for `snapshot`, logging diagnostics.
pub fn generate(snapshot: &ControllerSnapshot, config: &GenerationConfig) -> Result<String> {
    generate_with_sink(snapshot, config, &mut LogSink)
}

/// Generate the wrapper source for `snapshot`, reporting diagnostics to `sink`.
pub fn generate_with_sink(
    snapshot: &ControllerSnapshot,
    config: &GenerationConfig,
    sink: &mut dyn DiagnosticSink,
) -> Result<String> {
    WrapperGenerator::new(snapshot, config).generate(sink)
}

/// File name the wrapper for `snapshot` should be saved under.
pub fn output_file_name(snapshot: &ControllerSnapshot, config: &GenerationConfig) -> Result<String> {
    let class_name = WrapperGenerator::new(snapshot, config).class_name()?;
    Ok(format!("{class_name}.cs"))
}

/// Load a controller description and generate its wrapper
pub async fn generate_from_file<P: AsRef<Path>>(
    controller_path: P,
    config: &GenerationConfig,
) -> Result<String> {
    // 1. Load the controller description
    let manifest = ControllerManifest::from_file(controller_path).await?;

    // 2. Snapshot its parameters in controller order
    let snapshot = snapshot(&manifest)?;

    // 3. Render
    generate(&snapshot, config)
}
