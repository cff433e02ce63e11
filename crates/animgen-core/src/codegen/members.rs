//! Per-parameter constants, properties and trigger methods.

use super::writer::CodeWriter;
use super::{BACKING_PROPERTY, CONSTANT_SUFFIX};
use crate::config::Visibility;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::model::{ParameterDescriptor, ParameterKind};
use crate::utils::pascal_case;

/// Value type and Animator get/set suffix for a property-backed kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accessor {
    pub value_type: &'static str,
    pub operation: &'static str,
}

/// Accessor for kinds that become properties. `None` for triggers and
/// unsupported kinds.
pub fn accessor(kind: &ParameterKind) -> Option<Accessor> {
    let (value_type, operation) = match kind {
        ParameterKind::Bool => ("bool", "Bool"),
        ParameterKind::Float => ("float", "Float"),
        ParameterKind::Int => ("int", "Integer"),
        ParameterKind::Trigger | ParameterKind::Unsupported(_) => return None,
    };
    Some(Accessor {
        value_type,
        operation,
    })
}

/// Member identifier of a parameter.
pub fn member_name(param: &ParameterDescriptor) -> String {
    pascal_case(&param.name)
}

/// Name of the hash constant of a parameter.
pub fn constant_name(param: &ParameterDescriptor) -> String {
    format!("{}{CONSTANT_SUFFIX}", member_name(param))
}

/// One `const int` per parameter, in order, whatever its kind.
pub fn emit_constants(w: &mut CodeWriter, params: &[ParameterDescriptor]) {
    for param in params {
        w.line(&format!(
            "public const int {} = {};",
            constant_name(param),
            param.stable_hash
        ));
    }
}

/// Emit the member of every supported parameter, separated by blank lines.
///
/// Unsupported kinds are skipped and reported to `sink`. Returns the number
/// of members written.
pub fn emit_members(
    w: &mut CodeWriter,
    params: &[ParameterDescriptor],
    visibility: Visibility,
    sink: &mut dyn DiagnosticSink,
) -> usize {
    let mut written = 0;
    for param in params {
        if let ParameterKind::Unsupported(kind) = &param.kind {
            sink.report(Diagnostic::UnsupportedParameter {
                name: param.name.clone(),
                kind: kind.clone(),
            });
            continue;
        }

        if written > 0 {
            w.blank_line();
        }
        emit_member(w, param, visibility);
        written += 1;
    }
    written
}

fn emit_member(w: &mut CodeWriter, param: &ParameterDescriptor, visibility: Visibility) {
    let constant = constant_name(param);

    if let Some(Accessor {
        value_type,
        operation,
    }) = accessor(&param.kind)
    {
        let header = format!("{visibility} {value_type} {}", member_name(param));
        w.block(&header, |w| {
            w.line(&format!("get => {BACKING_PROPERTY}.Get{operation}({constant});"));
            w.line(&format!(
                "set => {BACKING_PROPERTY}.Set{operation}({constant}, value);"
            ));
        });
    } else if param.kind == ParameterKind::Trigger {
        // Triggers keep their authored name.
        let header = format!("{visibility} void {}()", param.name);
        w.block(&header, |w| {
            w.line(&format!("{BACKING_PROPERTY}.SetTrigger({constant});"));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str, kind: ParameterKind, hash: i32) -> ParameterDescriptor {
        ParameterDescriptor::new(name, kind, hash)
    }

    #[test]
    fn test_constants_cover_every_kind() {
        let params = [
            param("speed", ParameterKind::Float, 123),
            param("blend", ParameterKind::Unsupported("7".into()), -9),
        ];
        let mut w = CodeWriter::new();
        emit_constants(&mut w, &params);
        assert_eq!(
            w.finish(),
            "public const int SpeedProperty = 123;\npublic const int BlendProperty = -9;\n"
        );
    }

    #[test]
    fn test_property_members() {
        let params = [
            param("isGrounded", ParameterKind::Bool, 1),
            param("combo_count", ParameterKind::Int, 2),
        ];
        let mut w = CodeWriter::new();
        let mut sink = Vec::<Diagnostic>::new();
        let written = emit_members(&mut w, &params, Visibility::Internal, &mut sink);

        assert_eq!(written, 2);
        assert!(sink.is_empty());
        assert_eq!(
            w.finish(),
            "internal bool IsGrounded\n\
             {\n    get => Animator.GetBool(IsGroundedProperty);\n    \
             set => Animator.SetBool(IsGroundedProperty, value);\n}\n\
             \n\
             internal int ComboCount\n\
             {\n    get => Animator.GetInteger(ComboCountProperty);\n    \
             set => Animator.SetInteger(ComboCountProperty, value);\n}\n"
        );
    }

    #[test]
    fn test_trigger_keeps_authored_name() {
        let mut w = CodeWriter::new();
        let mut sink = Vec::<Diagnostic>::new();
        emit_members(
            &mut w,
            &[param("jump_start", ParameterKind::Trigger, 5)],
            Visibility::Public,
            &mut sink,
        );
        assert_eq!(
            w.finish(),
            "public void jump_start()\n{\n    Animator.SetTrigger(JumpStartProperty);\n}\n"
        );
    }

    #[test]
    fn test_unsupported_is_reported_not_emitted() {
        let params = [
            param("a", ParameterKind::Unsupported("vector".into()), 1),
            param("b", ParameterKind::Float, 2),
        ];
        let mut w = CodeWriter::new();
        let mut sink = Vec::<Diagnostic>::new();
        let written = emit_members(&mut w, &params, Visibility::Public, &mut sink);

        assert_eq!(written, 1);
        assert_eq!(
            sink,
            vec![Diagnostic::UnsupportedParameter {
                name: "a".into(),
                kind: "vector".into()
            }]
        );
        let out = w.finish();
        assert!(out.starts_with("public float B\n"));
        assert!(!out.contains("AProperty"));
    }

    #[test]
    fn test_accessor_mapping() {
        assert_eq!(accessor(&ParameterKind::Int).map(|a| a.operation), Some("Integer"));
        assert_eq!(accessor(&ParameterKind::Float).map(|a| a.value_type), Some("float"));
        assert_eq!(accessor(&ParameterKind::Trigger), None);
    }
}
