//! Parse error types.

use std::fmt;

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error raised while parsing a document.
///
/// Carries the source line number and the offending text so callers can
/// point at the exact input that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Line number where the error occurred (1-based, 0 when synthetic).
    pub line: usize,
    /// The offending text.
    pub text: String,
    /// Additional context or message.
    pub context: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, text: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            text: text.into(),
            context: String::new(),
        }
    }

    /// Attaches context to the error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Returns whether this kind aborts the whole parse call.
    ///
    /// Property-local errors are recovered by dropping the property and
    /// warning; desync and unknown versions mean block bookkeeping can no
    /// longer be trusted.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self.kind,
            ParseErrorKind::UnknownVersion | ParseErrorKind::StructuralDesync
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)?;
        if !self.context.is_empty() {
            write!(f, ": {}", self.context)?;
        }
        if !self.text.is_empty() {
            write!(f, " ({})", self.text)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The tokenizer could not locate a required delimiter.
    MalformedPropertyLine,
    /// VERSION value outside the supported set for the declared format.
    UnknownVersion,
    /// Too many (or at close, too few) occurrences of a role.
    CardinalityViolation,
    /// A value codec rejected its raw input.
    InvalidValueEncoding,
    /// BEGIN/END mismatch or premature stream end.
    StructuralDesync,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedPropertyLine => write!(f, "malformed property line"),
            Self::UnknownVersion => write!(f, "unknown version"),
            Self::CardinalityViolation => write!(f, "cardinality violation"),
            Self::InvalidValueEncoding => write!(f, "invalid value encoding"),
            Self::StructuralDesync => write!(f, "structural desync"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line_and_text() {
        let err = ParseError::new(ParseErrorKind::StructuralDesync, 12, "END:VCARD")
            .with_context("END without matching BEGIN");
        let rendered = err.to_string();
        assert!(rendered.contains("line 12"));
        assert!(rendered.contains("END without matching BEGIN"));
        assert!(rendered.contains("END:VCARD"));
    }

    #[test]
    fn fatal_classification() {
        assert!(ParseError::new(ParseErrorKind::UnknownVersion, 2, "VERSION:9.9").is_fatal());
        assert!(!ParseError::new(ParseErrorKind::InvalidValueEncoding, 2, "P1X").is_fatal());
    }
}
