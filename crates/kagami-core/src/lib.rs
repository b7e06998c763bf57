//! Shared infrastructure for the kagami workspace.
//!
//! This crate carries the pieces the parsing engine consumes but does not
//! own: the diagnostic sink interface that collaborators supply to receive
//! non-fatal warnings, the stable message catalog used to render diagnostics
//! into human-readable text, and the core error type.

pub mod diagnostics;
pub mod error;
pub mod messages;

pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, Severity, TracingSink};
pub use error::{CoreError, CoreResult};
pub use messages::{MessageCatalog, MessageId};
