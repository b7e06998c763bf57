//! Content line tokenizer.
//!
//! Splits a logical line into group, name, parameter list, and raw value.
//! Escaping inside values is not resolved here; that is deferred to the
//! codec that understands the target value type.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::params::{Parameter, parse_chunk, split_outside_quotes};
use super::unfold::LogicalLine;

/// A tokenized property line before value interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Optional property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Raw value string (after unfolding, before unescaping).
    pub raw_value: String,
}

impl ContentLine {
    /// Creates a bare content line.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            group: None,
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            raw_value: value.into(),
        }
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the first value of a parameter.
    #[must_use]
    pub fn param_value(&self, name: &str) -> Option<&str> {
        self.param(name)?.value()
    }

    /// Returns the VALUE parameter if present.
    #[must_use]
    pub fn value_type(&self) -> Option<&str> {
        self.param_value("VALUE")
    }

    /// Returns the ENCODING parameter if present.
    #[must_use]
    pub fn encoding(&self) -> Option<&str> {
        self.param_value("ENCODING")
    }

    /// Returns the ALTID parameter if present.
    #[must_use]
    pub fn alt_id(&self) -> Option<&str> {
        self.param_value("ALTID")
    }

    /// Returns whether the declared transfer encoding is quoted-printable.
    #[must_use]
    pub fn is_quoted_printable(&self) -> bool {
        self.encoding()
            .is_some_and(|e| e.eq_ignore_ascii_case("QUOTED-PRINTABLE"))
    }

    /// Returns whether the declared transfer encoding is Base64.
    ///
    /// vCard 4.0 dropped ENCODING; binary values there use a data: URI or
    /// `VALUE=BINARY` instead, which is also honored here.
    #[must_use]
    pub fn is_base64(&self) -> bool {
        self.encoding()
            .is_some_and(|e| e.eq_ignore_ascii_case("BASE64") || e.eq_ignore_ascii_case("B"))
            || self
                .value_type()
                .is_some_and(|v| v.eq_ignore_ascii_case("BINARY"))
    }
}

/// Tokenizes a logical line.
///
/// `legacy` enables the bare-shorthand parameter table of the older
/// grammars.
///
/// ## Errors
/// Fails with `MalformedPropertyLine` when the value separator is missing,
/// the name is empty or carries invalid characters, or a parameter chunk
/// cannot be parsed.
pub fn parse_content_line(line: &LogicalLine, legacy: bool) -> ParseResult<ContentLine> {
    let text = line.text.as_str();
    let colon_pos = find_value_separator(text).ok_or_else(|| {
        ParseError::new(ParseErrorKind::MalformedPropertyLine, line.number, text)
            .with_context("missing colon separator")
    })?;

    let prefix = &text[..colon_pos];
    let raw_value = &text[colon_pos + 1..];

    let mut chunks = split_outside_quotes(prefix, ';').into_iter();
    // First chunk is [group.]NAME; the split always yields at least one.
    let name_chunk = chunks.next().unwrap_or_default();
    let (group, name) = parse_group_and_name(name_chunk, line.number, text)?;

    let mut params = Vec::new();
    for chunk in chunks {
        params.push(parse_chunk(chunk, legacy, line.number)?);
    }

    Ok(ContentLine {
        group: group.map(String::from),
        name: name.to_ascii_uppercase(),
        params,
        raw_value: raw_value.to_string(),
    })
}

/// Finds the colon separating the prefix from the value.
///
/// Quoted parameter values may contain colons; backslash-escaped colons
/// are literal.
fn find_value_separator(text: &str) -> Option<usize> {
    let mut in_quotes = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

/// Splits the optional group label off the property name.
///
/// At most one dot is permitted, before the name.
fn parse_group_and_name<'a>(
    chunk: &'a str,
    line_num: usize,
    text: &str,
) -> ParseResult<(Option<&'a str>, &'a str)> {
    let (group, name) = match chunk.find('.') {
        Some(dot_pos) => {
            let group = &chunk[..dot_pos];
            let name = &chunk[dot_pos + 1..];
            if group.is_empty()
                || !group.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
                || name.contains('.')
            {
                return Err(
                    ParseError::new(ParseErrorKind::MalformedPropertyLine, line_num, text)
                        .with_context(format!("invalid group label: {chunk}")),
                );
            }
            (Some(group), name)
        }
        None => (None, chunk),
    };

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(
            ParseError::new(ParseErrorKind::MalformedPropertyLine, line_num, text)
                .with_context(format!("invalid property name: {name}")),
        );
    }

    Ok((group, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(text: &str) -> ParseResult<ContentLine> {
        parse_content_line(
            &LogicalLine {
                number: 1,
                text: text.to_string(),
            },
            false,
        )
    }

    fn lex_legacy(text: &str) -> ParseResult<ContentLine> {
        parse_content_line(
            &LogicalLine {
                number: 1,
                text: text.to_string(),
            },
            true,
        )
    }

    #[test]
    fn simple_line() {
        let cl = lex("SUMMARY:Team Meeting").unwrap();
        assert!(cl.group.is_none());
        assert_eq!(cl.name, "SUMMARY");
        assert!(cl.params.is_empty());
        assert_eq!(cl.raw_value, "Team Meeting");
    }

    #[test]
    fn name_is_uppercased() {
        let cl = lex("fn:John Doe").unwrap();
        assert_eq!(cl.name, "FN");
    }

    #[test]
    fn grouped_line() {
        let cl = lex("item1.TEL:+1-555-555-5555").unwrap();
        assert_eq!(cl.group.as_deref(), Some("item1"));
        assert_eq!(cl.name, "TEL");
    }

    #[test]
    fn two_dots_rejected() {
        let err = lex("a.b.TEL:x").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MalformedPropertyLine);
    }

    #[test]
    fn line_with_params() {
        let cl = lex("DTSTART;TZID=America/New_York:20260123T120000").unwrap();
        assert_eq!(cl.name, "DTSTART");
        assert_eq!(cl.param_value("TZID"), Some("America/New_York"));
        assert_eq!(cl.raw_value, "20260123T120000");
    }

    #[test]
    fn quoted_param_with_colon() {
        let cl = lex("ATTENDEE;CN=\"chair: Jane\":mailto:jane@example.com").unwrap();
        assert_eq!(cl.param_value("CN"), Some("chair: Jane"));
        assert_eq!(cl.raw_value, "mailto:jane@example.com");
    }

    #[test]
    fn colon_in_value_untouched() {
        let cl = lex("URL:https://example.com:8080/path").unwrap();
        assert_eq!(cl.raw_value, "https://example.com:8080/path");
    }

    #[test]
    fn escaped_colon_in_prefix_is_literal() {
        // A backslash-escaped colon must not terminate the prefix.
        let err = lex("BAD\\:NAME").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MalformedPropertyLine);
    }

    #[test]
    fn legacy_bare_type_shorthand() {
        let cl = lex_legacy("TEL;HOME;VOICE:+1-555-555-5555").unwrap();
        assert_eq!(cl.params.len(), 2);
        assert_eq!(cl.params[0].name, "TYPE");
        assert_eq!(cl.params[0].value(), Some("HOME"));
        assert_eq!(cl.params[1].value(), Some("VOICE"));
    }

    #[test]
    fn missing_colon_is_malformed() {
        let err = lex("INVALID").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MalformedPropertyLine);
        assert_eq!(err.line, 1);
        assert_eq!(err.text, "INVALID");
    }

    #[test]
    fn empty_name_is_malformed() {
        assert!(lex(":value").is_err());
        assert!(lex(";TYPE=home:value").is_err());
    }
}
