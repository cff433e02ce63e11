//! Positional compatibility check between a live Animator and the
//! parameter snapshot the wrapper was generated from.
//!
//! Parameters are compared by index, not looked up by name, so the check
//! only holds while the controller keeps its parameter order. Reordering
//! parameters in the controller is treated as drift.

use super::writer::CodeWriter;
use super::{COMPATIBILITY_METHOD, HOST_TYPE};
use crate::model::{ParameterDescriptor, ParameterKind};
use crate::utils::{is_identifier, pascal_case};

const CANDIDATE: &str = "animator";
const TYPE_ENUM: &str = "AnimatorControllerParameterType";

/// Numeric type code of a raw kind, if it is written as an integer.
///
/// `Some(Err(_))` means the text is an integer that does not fit the
/// engine's 32-bit enum.
pub fn type_code(raw: &str) -> Option<Result<i32, std::num::ParseIntError>> {
    let raw = raw.trim();
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(raw.parse())
}

/// Engine enum expression for a parameter kind.
pub fn kind_expression(kind: &ParameterKind) -> String {
    match kind {
        ParameterKind::Bool => format!("{TYPE_ENUM}.Bool"),
        ParameterKind::Float => format!("{TYPE_ENUM}.Float"),
        ParameterKind::Int => format!("{TYPE_ENUM}.Int"),
        ParameterKind::Trigger => format!("{TYPE_ENUM}.Trigger"),
        ParameterKind::Unsupported(raw) => match type_code(raw) {
            Some(Ok(code)) if code < 0 => format!("({TYPE_ENUM})({code})"),
            Some(Ok(code)) => format!("({TYPE_ENUM}){code}"),
            // Rejected before emission; kept parenthesized all the same.
            Some(Err(_)) => format!("({TYPE_ENUM})({})", raw.trim()),
            None if is_identifier(raw) => format!("{TYPE_ENUM}.{raw}"),
            None => format!("{TYPE_ENUM}.{}", pascal_case(raw)),
        },
    }
}

/// Clauses of the compatibility check, in evaluation order.
///
/// Non-null handle, then the parameter count, then a (kind, hash) pair per
/// snapshot index.
pub fn clauses(params: &[ParameterDescriptor]) -> Vec<String> {
    let mut clauses = Vec::with_capacity(2 + params.len() * 2);
    clauses.push(format!("{CANDIDATE}.runtimeAnimatorController != null"));
    clauses.push(format!("{CANDIDATE}.parameterCount == {}", params.len()));
    for (index, param) in params.iter().enumerate() {
        clauses.push(format!(
            "{CANDIDATE}.GetParameter({index}).type == {}",
            kind_expression(&param.kind)
        ));
        clauses.push(format!(
            "{CANDIDATE}.GetParameter({index}).nameHash == {}",
            param.stable_hash
        ));
    }
    clauses
}

/// Emit `public static bool IsCompatible(Animator animator)`.
pub fn emit_compatibility_check(w: &mut CodeWriter, params: &[ParameterDescriptor]) {
    let header = format!("public static bool {COMPATIBILITY_METHOD}({HOST_TYPE} {CANDIDATE})");
    let clauses = clauses(params);
    w.block(&header, |w| {
        let last = clauses.len() - 1;
        for (i, clause) in clauses.iter().enumerate() {
            let end = if i == last { ";" } else { "" };
            if i == 0 {
                w.line(&format!("return {clause}{end}"));
            } else {
                w.indented(|w| w.line(&format!("&& {clause}{end}")));
            }
        }
    });
}
