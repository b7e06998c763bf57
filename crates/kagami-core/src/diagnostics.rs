//! Diagnostic sink interface.
//!
//! The parsing engine reports recoverable problems (dropped properties,
//! missing required fields) through a caller-supplied sink instead of
//! failing the whole parse. Fatal errors never travel through the sink;
//! they propagate as `Err` from the parse call itself.

use crate::messages::{MessageCatalog, MessageId};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic event.
///
/// Carries a stable message identifier and positional arguments rather
/// than rendered text, so sinks can localize or filter on identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: MessageId,
    pub args: Vec<String>,
    /// Source line number (1-based), or 0 when not tied to input text.
    pub line: usize,
}

impl Diagnostic {
    /// Creates a warning diagnostic.
    #[must_use]
    pub fn warning(message: MessageId, line: usize) -> Self {
        Self {
            severity: Severity::Warning,
            message,
            args: Vec::new(),
            line,
        }
    }

    /// Appends a positional argument.
    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Renders this diagnostic through a catalog.
    #[must_use]
    pub fn render(&self, catalog: &MessageCatalog) -> String {
        catalog.render(self.message, &self.args)
    }
}

/// Receives non-fatal diagnostics from the parsing engine.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Default sink: forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink {
    catalog: MessageCatalog,
}

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        let rendered = diagnostic.render(&self.catalog);
        match diagnostic.severity {
            Severity::Warning => {
                tracing::warn!(
                    message_id = %diagnostic.message,
                    line = diagnostic.line,
                    "{rendered}"
                );
            }
            Severity::Error => {
                tracing::error!(
                    message_id = %diagnostic.message,
                    line = diagnostic.line,
                    "{rendered}"
                );
            }
        }
    }
}

/// Test sink: retains every diagnostic for later assertion.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether any diagnostic carries the given message identifier.
    #[must_use]
    pub fn contains(&self, message: MessageId) -> bool {
        self.diagnostics.iter().any(|d| d.message == message)
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
