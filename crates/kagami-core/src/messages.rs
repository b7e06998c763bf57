//! Stable message identifiers and the catalog that renders them.
//!
//! Diagnostics carry a [`MessageId`] plus positional arguments; the engine
//! never branches on rendered text. Consumers that want localized output
//! substitute their own catalog keyed by the same stable identifiers.

/// Stable identifier for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    /// A property line could not be tokenized and was dropped.
    DroppedMalformedLine,
    /// A property value failed its codec and the property was dropped.
    DroppedInvalidValue,
    /// A property exceeded its cardinality and was dropped.
    DroppedCardinalityViolation,
    /// A block closed without a property its version requires.
    MissingRequiredProperty,
    /// A property line outside any block was skipped.
    SkippedStrayLine,
}

impl MessageId {
    /// Returns the stable string key for this message.
    ///
    /// Keys are part of the public contract; localized catalogs index on
    /// them and they never change meaning between releases.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DroppedMalformedLine => "parse.dropped-malformed-line",
            Self::DroppedInvalidValue => "parse.dropped-invalid-value",
            Self::DroppedCardinalityViolation => "parse.dropped-cardinality-violation",
            Self::MissingRequiredProperty => "parse.missing-required-property",
            Self::SkippedStrayLine => "parse.skipped-stray-line",
        }
    }

    /// Returns the default English template for this message.
    ///
    /// Placeholders are positional: `{0}`, `{1}`, ...
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::DroppedMalformedLine => "dropped malformed property line: {0}",
            Self::DroppedInvalidValue => "dropped property {0}: invalid value: {1}",
            Self::DroppedCardinalityViolation => {
                "dropped property {0}: cardinality exceeded for this version"
            }
            Self::MissingRequiredProperty => "block is missing required property {0}",
            Self::SkippedStrayLine => "skipped line outside any block: {0}",
        }
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Renders message identifiers into human-readable text.
///
/// The default catalog holds the English templates. A consumer-supplied
/// catalog overrides [`MessageCatalog::template`] to localize.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageCatalog;

impl MessageCatalog {
    /// Returns the template for a message identifier.
    #[must_use]
    pub fn template(&self, id: MessageId) -> &'static str {
        id.template()
    }

    /// Renders a message by substituting positional arguments.
    ///
    /// Unmatched placeholders are left in place rather than erroring; a
    /// diagnostic with a missing argument is still more useful rendered
    /// than swallowed.
    #[must_use]
    pub fn render(&self, id: MessageId, args: &[String]) -> String {
        let mut text = self.template(id).to_string();
        for (i, arg) in args.iter().enumerate() {
            text = text.replace(&format!("{{{i}}}"), arg);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_stable() {
        assert_eq!(
            MessageId::DroppedMalformedLine.as_str(),
            "parse.dropped-malformed-line"
        );
    }

    #[test]
    fn render_substitutes_positional_args() {
        let catalog = MessageCatalog;
        let text = catalog.render(
            MessageId::DroppedInvalidValue,
            &["BDAY".to_string(), "bad digits".to_string()],
        );
        assert_eq!(text, "dropped property BDAY: invalid value: bad digits");
    }

    #[test]
    fn render_keeps_unmatched_placeholders() {
        let catalog = MessageCatalog;
        let text = catalog.render(MessageId::DroppedInvalidValue, &["X-FOO".to_string()]);
        assert!(text.contains("{1}"));
    }
}
