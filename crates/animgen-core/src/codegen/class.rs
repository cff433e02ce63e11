//! Assembles a complete wrapper source file.

// Internal imports (std, crate)
use std::collections::HashMap;

use super::compat::{emit_compatibility_check, type_code};
use super::members::{constant_name, emit_constants, emit_members, member_name};
use super::writer::CodeWriter;
use super::{
    AUTO_WIRING_HOOK, BACKING_FIELD, BACKING_PROPERTY, BASE_TYPE, COMPATIBILITY_METHOD, HOST_TYPE,
    STARTUP_HOOK,
};
use crate::config::GenerationConfig;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::model::{ControllerSnapshot, ParameterDescriptor, ParameterKind};
use crate::utils::{escape_string_literal, is_identifier, pascal_case};
use crate::{Error, Result};

/// Header of every generated file
pub const BANNER: &[&str] = &[
    "// <auto-generated>",
    "//     This file was generated by animgen.",
    "//     Do not edit it by hand: changes are lost when the wrapper is regenerated.",
    "// </auto-generated>",
];

/// Namespace imports of every generated file
pub const USINGS: &[&str] = &[
    "using System;",
    "using UnityEngine;",
    "using Object = UnityEngine.Object;",
];

/// Symbol guarding the startup compatibility check
pub const EDITOR_SYMBOL: &str = "UNITY_EDITOR";

/// Owner reported when a parameter reuses a fixed member of the wrapper
pub const GENERATED_MEMBER: &str = "generated member";

/// Owner reported when a parameter reuses the class name
pub const CLASS_NAME: &str = "class name";

/// Members every wrapper declares regardless of its parameters
const FIXED_MEMBERS: &[&str] = &[
    BACKING_FIELD,
    BACKING_PROPERTY,
    STARTUP_HOOK,
    COMPATIBILITY_METHOD,
    AUTO_WIRING_HOOK,
];

/// Generates the wrapper class for one controller snapshot.
#[derive(Debug, Clone, Copy)]
pub struct WrapperGenerator<'a> {
    snapshot: &'a ControllerSnapshot,
    config: &'a GenerationConfig,
}

impl<'a> WrapperGenerator<'a> {
    pub fn new(snapshot: &'a ControllerSnapshot, config: &'a GenerationConfig) -> Self {
        Self { snapshot, config }
    }

    /// Class name: the configured one, or the asset name in PascalCase.
    ///
    /// # Errors
    /// Returns `Error::Generation` when neither yields a valid identifier.
    pub fn class_name(&self) -> Result<String> {
        match self.config.class_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => {
                if is_identifier(name) {
                    Ok(name.to_string())
                } else {
                    Err(Error::generation(format!(
                        "class name '{name}' is not a valid identifier"
                    )))
                }
            }
            _ if self.snapshot.asset_name.trim().is_empty() => Err(Error::generation(
                "no class name configured and the controller has no name",
            )),
            _ => Ok(pascal_case(&self.snapshot.asset_name)),
        }
    }

    /// Render the wrapper, reporting non-fatal problems to `sink`.
    ///
    /// # Errors
    /// Returns an error if a precondition fails: an empty parameter name, a
    /// trigger whose name is not a valid method name, a numeric type code
    /// outside the 32-bit range, an unusable class or namespace name, or a
    /// name collision while `strict_names` is set.
    /// Nothing is emitted in that case.
    pub fn generate(&self, sink: &mut dyn DiagnosticSink) -> Result<String> {
        let class_name = self.class_name()?;
        let namespace = self.namespace()?;
        self.check_parameters(&class_name, sink)?;

        let mut w = CodeWriter::new();
        for line in BANNER {
            w.line(line);
        }
        w.blank_line();
        for line in USINGS {
            w.line(line);
        }
        w.blank_line();

        match namespace {
            Some(ns) => w.block(&format!("namespace {ns}"), |w| {
                self.emit_class(w, &class_name, sink)
            }),
            None => self.emit_class(&mut w, &class_name, sink),
        }

        log::debug!(
            "generated wrapper '{}' for '{}' ({} parameters)",
            class_name,
            self.snapshot.asset_name,
            self.snapshot.parameters.len()
        );
        Ok(w.finish())
    }

    fn namespace(&self) -> Result<Option<&'a str>> {
        let Some(ns) = self.config.namespace() else {
            return Ok(None);
        };
        if ns.split('.').all(is_identifier) {
            Ok(Some(ns))
        } else {
            Err(Error::generation(format!(
                "namespace '{ns}' is not a valid dotted identifier"
            )))
        }
    }

    /// Validate parameter names and find identifier collisions.
    ///
    /// Every member and constant a parameter produces is checked against the
    /// fixed members, the class name and the identifiers of earlier
    /// parameters. At most one collision is reported per parameter.
    fn check_parameters(&self, class_name: &str, sink: &mut dyn DiagnosticSink) -> Result<()> {
        let mut seen: HashMap<String, String> = FIXED_MEMBERS
            .iter()
            .map(|member| (member.to_string(), GENERATED_MEMBER.to_string()))
            .collect();
        seen.insert(class_name.to_string(), CLASS_NAME.to_string());

        for (index, param) in self.snapshot.parameters.iter().enumerate() {
            if param.name.is_empty() {
                return Err(Error::generation(format!(
                    "parameter at index {index} has an empty name"
                )));
            }
            match &param.kind {
                ParameterKind::Trigger if !is_identifier(&param.name) => {
                    return Err(Error::generation(format!(
                        "trigger '{}' is not a valid method name",
                        param.name
                    )));
                }
                ParameterKind::Unsupported(raw) => {
                    if let Some(Err(e)) = type_code(raw) {
                        return Err(Error::generation(format!(
                            "parameter '{}' has type code '{}' outside the engine range: {e}",
                            param.name,
                            raw.trim()
                        )));
                    }
                }
                _ => {}
            }

            let identifiers = declared_identifiers(param);
            let collision = identifiers
                .iter()
                .find_map(|id| seen.get(id).map(|first| (first.clone(), id.clone())));

            match collision {
                Some((first, identifier)) if self.config.strict_names => {
                    return Err(Error::NameCollision {
                        first,
                        second: param.name.clone(),
                        identifier,
                    });
                }
                Some((first, identifier)) => sink.report(Diagnostic::NameCollision {
                    first,
                    second: param.name.clone(),
                    identifier,
                }),
                None => {
                    for id in identifiers {
                        seen.insert(id, param.name.clone());
                    }
                }
            }
        }
        Ok(())
    }

    fn emit_class(&self, w: &mut CodeWriter, class_name: &str, sink: &mut dyn DiagnosticSink) {
        let header = if self.config.partial {
            format!("public partial class {class_name}")
        } else {
            format!("public class {class_name} : {BASE_TYPE}")
        };

        w.block(&header, |w| {
            let params = &self.snapshot.parameters;
            if !params.is_empty() {
                emit_constants(w, params);
                w.blank_line();
            }

            self.emit_backing_accessor(w);
            w.blank_line();
            self.emit_startup_check(w);
            w.blank_line();

            if emit_members(w, params, self.config.visibility, sink) > 0 {
                w.blank_line();
            }

            emit_compatibility_check(w, params);
            w.blank_line();
            self.emit_auto_wiring(w);
        });
    }

    fn emit_backing_accessor(&self, w: &mut CodeWriter) {
        let asset = escape_string_literal(&self.snapshot.asset_name);
        w.line(&format!("[Header(\"{HOST_TYPE}\")]"));
        w.line(&format!(
            "[Tooltip(\"{HOST_TYPE} running controller '{asset}'\")]"
        ));
        w.line("[SerializeField]");
        w.line(&format!("private {HOST_TYPE} {BACKING_FIELD};"));
        w.blank_line();

        let header = format!(
            "{} {HOST_TYPE} {BACKING_PROPERTY}",
            self.config.visibility
        );
        w.block(&header, |w| {
            w.line(&format!("get => {BACKING_FIELD};"));
            w.line(&format!("set => {BACKING_FIELD} = value;"));
        });
    }

    fn emit_startup_check(&self, w: &mut CodeWriter) {
        let asset = escape_string_literal(&self.snapshot.asset_name);
        w.block(&format!("private void {STARTUP_HOOK}()"), |w| {
            w.line(&format!("#if {EDITOR_SYMBOL}"));
            let condition = format!(
                "if ({BACKING_FIELD} != null && !{COMPATIBILITY_METHOD}({BACKING_FIELD}))"
            );
            w.block(&condition, |w| {
                w.line(&format!(
                    "throw new InvalidOperationException(\"{HOST_TYPE} is not compatible with controller '{asset}'. Regenerate this wrapper.\");"
                ));
            });
            w.line("#endif");
        });
    }

    fn emit_auto_wiring(&self, w: &mut CodeWriter) {
        let asset = escape_string_literal(&self.snapshot.asset_name);
        w.block(&format!("private void {AUTO_WIRING_HOOK}()"), |w| {
            w.block(
                &format!("foreach (var candidate in GetComponents<{HOST_TYPE}>())"),
                |w| {
                    w.block(&format!("if ({COMPATIBILITY_METHOD}(candidate))"), |w| {
                        w.line(&format!("{BACKING_FIELD} = candidate;"));
                        w.line("return;");
                    });
                },
            );
            w.blank_line();
            w.line(&format!(
                "Debug.LogWarning(\"No {HOST_TYPE} compatible with controller '{asset}' found on \" + name, this);"
            ));
        });
    }
}

/// Identifiers a parameter declares in the class, member first.
fn declared_identifiers(param: &ParameterDescriptor) -> Vec<String> {
    let member = match param.kind {
        ParameterKind::Bool | ParameterKind::Float | ParameterKind::Int => Some(member_name(param)),
        ParameterKind::Trigger => Some(param.name.clone()),
        ParameterKind::Unsupported(_) => None,
    };
    member.into_iter().chain([constant_name(param)]).collect()
}
