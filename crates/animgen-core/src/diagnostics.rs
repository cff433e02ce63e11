//! Non-fatal diagnostics raised while generating a wrapper.
//!
//! Generation never fails on data-quality problems. They are handed to a
//! [`DiagnosticSink`] instead, which by default forwards them to the `log`
//! facade.

use std::fmt;

/// A non-fatal problem found during generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The parameter's kind has no member mapping; only its constant and
    /// compatibility clauses were emitted.
    UnsupportedParameter { name: String, kind: String },

    /// A parameter's member or constant reuses an identifier already taken
    /// by another parameter or by the wrapper itself.
    NameCollision {
        first: String,
        second: String,
        identifier: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedParameter { name, kind } => {
                write!(f, "parameter '{name}' has unsupported type '{kind}', no member generated")
            }
            Self::NameCollision {
                first,
                second,
                identifier,
            } => write!(
                f,
                "'{first}' and '{second}' both map to identifier '{identifier}'"
            ),
        }
    }
}

/// Receiver for generation diagnostics.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Forwards every diagnostic to `log::warn!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
