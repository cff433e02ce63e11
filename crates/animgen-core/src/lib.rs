//! animgen Core Library
//!
//! This library generates C# wrapper classes that expose the parameters of
//! an Animator controller as typed properties and trigger methods, together
//! with a positional check that detects drift between the wrapper and the
//! controller at runtime.

pub mod codegen;
pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod error;
pub mod generate;
pub mod model;
pub mod utils;

pub use crate::{
    codegen::WrapperGenerator,
    config::{GenerationConfig, Visibility},
    controller::{ControllerManifest, ParameterSource},
    diagnostics::{Diagnostic, DiagnosticSink, LogSink},
    error::{Error, Result},
    generate::{generate, generate_from_file, generate_with_sink, output_file_name},
    model::{ControllerSnapshot, ParameterDescriptor, ParameterKind},
};
