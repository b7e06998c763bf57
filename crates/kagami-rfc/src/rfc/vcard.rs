//! Contact format front end.
//!
//! ## Parsing
//!
//! ```rust
//! use kagami_rfc::rfc::vcard;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let cards = vcard::parse(input).unwrap();
//! assert_eq!(cards[0].formatted_name(), Some("John Doe"));
//! ```
//!
//! ## Serializing
//!
//! ```rust
//! use kagami_rfc::rfc::model::{ComponentKind, Container, ValueInfo};
//! use kagami_rfc::rfc::registry::{FormatVersion, Role};
//! use kagami_rfc::rfc::vcard;
//!
//! let mut card = Container::new(ComponentKind::Card, FormatVersion::VCard40);
//! card.add_string(Role::FormattedName, ValueInfo::new("FN", "Jane Doe".to_string()))
//!     .unwrap();
//!
//! let output = vcard::serialize(&[card]);
//! assert!(output.contains("FN:Jane Doe"));
//! ```

use crate::rfc::build;
use crate::rfc::model::{ComponentKind, Container};
use crate::rfc::parse;
use crate::rfc::syntax::{ParseError, ParseErrorKind, ParseResult};

/// Parses the input and returns its card blocks.
///
/// Blocks of other formats in the same stream are parsed (their errors
/// still abort) but not returned.
///
/// ## Errors
/// Propagates the stream parser's fatal errors.
pub fn parse(input: &str) -> ParseResult<Vec<Container>> {
    Ok(parse::parse_all(input)?
        .into_iter()
        .filter(|c| c.kind == ComponentKind::Card)
        .collect())
}

/// Parses the input and returns its first card block.
///
/// ## Errors
/// Fails with `StructuralDesync` when the input contains no card, plus
/// the stream parser's fatal errors.
pub fn parse_single(input: &str) -> ParseResult<Container> {
    parse(input)?.into_iter().next().ok_or_else(|| {
        ParseError::new(ParseErrorKind::StructuralDesync, 1, input.lines().next().unwrap_or(""))
            .with_context("no VCARD block in input")
    })
}

/// Serializes cards back to text.
#[must_use]
pub fn serialize(cards: &[Container]) -> String {
    build::serialize_all(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_filters_to_cards() {
        let input = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Kagami//EN\r\n\
END:VCALENDAR\r\n\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Jane Doe\r\n\
N:Doe;Jane\r\n\
END:VCARD\r\n";

        let cards = parse(input).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].kind, ComponentKind::Card);
    }

    #[test]
    fn parse_single_requires_a_card() {
        let err = parse_single("BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::StructuralDesync);
    }
}
