//! Calendar format front end.
//!
//! ## Parsing
//!
//! ```rust
//! use kagami_rfc::rfc::ical;
//!
//! let input = "\
//! BEGIN:VCALENDAR\r\n\
//! VERSION:2.0\r\n\
//! PRODID:-//Example//Example//EN\r\n\
//! BEGIN:VEVENT\r\n\
//! UID:test-uid-123@example.com\r\n\
//! DTSTAMP:20260123T120000Z\r\n\
//! SUMMARY:Team Meeting\r\n\
//! END:VEVENT\r\n\
//! END:VCALENDAR\r\n";
//!
//! let calendars = ical::parse(input).unwrap();
//! assert_eq!(calendars[0].events()[0].summary(), Some("Team Meeting"));
//! ```

use crate::rfc::build;
use crate::rfc::model::{ComponentKind, Container};
use crate::rfc::parse;
use crate::rfc::syntax::{ParseError, ParseErrorKind, ParseResult};

/// Parses the input and returns its calendar blocks.
///
/// ## Errors
/// Propagates the stream parser's fatal errors.
pub fn parse(input: &str) -> ParseResult<Vec<Container>> {
    Ok(parse::parse_all(input)?
        .into_iter()
        .filter(|c| c.kind == ComponentKind::Calendar)
        .collect())
}

/// Parses the input and returns its first calendar block.
///
/// ## Errors
/// Fails with `StructuralDesync` when the input contains no calendar,
/// plus the stream parser's fatal errors.
pub fn parse_single(input: &str) -> ParseResult<Container> {
    parse(input)?.into_iter().next().ok_or_else(|| {
        ParseError::new(ParseErrorKind::StructuralDesync, 1, input.lines().next().unwrap_or(""))
            .with_context("no VCALENDAR block in input")
    })
}

/// Serializes calendars back to text.
#[must_use]
pub fn serialize(calendars: &[Container]) -> String {
    build::serialize_all(calendars)
}
