//! Property parameters.
//!
//! Parameters can have multiple values (e.g., TYPE=home,work). Values may
//! be quoted to protect `:` `;` `,` and use RFC 6868 caret escapes. The
//! legacy grammars additionally allow bare tokens with no `=`, resolved
//! through a shorthand table.

use super::error::{ParseError, ParseErrorKind, ParseResult};

/// A property parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter values.
    pub values: Vec<String>,
}

impl Parameter {
    /// Creates a new parameter with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values: vec![value.into()],
        }
    }

    /// Creates a parameter with multiple values.
    #[must_use]
    pub fn multi(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values,
        }
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Returns whether the parameter has the specified value (case-insensitive).
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }

    // --- Convenience constructors ---

    /// Creates a TYPE parameter.
    #[must_use]
    pub fn type_param(value: impl Into<String>) -> Self {
        Self::new("TYPE", value)
    }

    /// Creates a VALUE parameter specifying the value type.
    #[must_use]
    pub fn value_type(type_name: impl Into<String>) -> Self {
        Self::new("VALUE", type_name)
    }

    /// Creates an ALTID parameter for grouping alternate representations.
    #[must_use]
    pub fn altid(id: impl Into<String>) -> Self {
        Self::new("ALTID", id)
    }

    /// Creates an ENCODING parameter.
    #[must_use]
    pub fn encoding(value: impl Into<String>) -> Self {
        Self::new("ENCODING", value)
    }

    /// Creates a LANGUAGE parameter.
    #[must_use]
    pub fn language(tag: impl Into<String>) -> Self {
        Self::new("LANGUAGE", tag)
    }

    /// Creates a PID parameter (property ID for synchronization).
    #[must_use]
    pub fn pid(id: impl Into<String>) -> Self {
        Self::new("PID", id)
    }

    /// Creates a SORT-AS parameter for collation.
    #[must_use]
    pub fn sort_as(value: impl Into<String>) -> Self {
        Self::new("SORT-AS", value)
    }

    /// Creates a CALSCALE parameter.
    #[must_use]
    pub fn calscale(value: impl Into<String>) -> Self {
        Self::new("CALSCALE", value)
    }

    /// Creates a TZID parameter.
    #[must_use]
    pub fn tzid(zone: impl Into<String>) -> Self {
        Self::new("TZID", zone)
    }

    /// Creates a CHARSET parameter (legacy grammar only).
    #[must_use]
    pub fn charset(value: impl Into<String>) -> Self {
        Self::new("CHARSET", value)
    }
}

/// Resolves a legacy bare parameter token to its implied key.
///
/// The transfer encodings imply `ENCODING=`; every other bare token is an
/// implied `TYPE=` assignment. Consulted only for the legacy grammars.
#[must_use]
pub fn resolve_bare_shorthand(token: &str) -> &'static str {
    if token.eq_ignore_ascii_case("QUOTED-PRINTABLE")
        || token.eq_ignore_ascii_case("BASE64")
        || token.eq_ignore_ascii_case("8BIT")
        || token.eq_ignore_ascii_case("7BIT")
    {
        "ENCODING"
    } else {
        "TYPE"
    }
}

/// Splits a string on `sep` outside of double quotes.
pub(crate) fn split_outside_quotes(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;

    for (i, c) in s.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            c if c == sep && !in_quotes => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Parses one parameter chunk (`KEY=V1,V2` or a legacy bare token).
pub(crate) fn parse_chunk(chunk: &str, legacy: bool, line_num: usize) -> ParseResult<Parameter> {
    let Some(eq_pos) = find_unquoted(chunk, '=') else {
        if legacy {
            let key = resolve_bare_shorthand(chunk);
            return Ok(Parameter::new(key, chunk.to_ascii_uppercase()));
        }
        return Err(
            ParseError::new(ParseErrorKind::MalformedPropertyLine, line_num, chunk)
                .with_context("bare parameter token outside legacy grammar"),
        );
    };

    let name = &chunk[..eq_pos];
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(
            ParseError::new(ParseErrorKind::MalformedPropertyLine, line_num, chunk)
                .with_context(format!("invalid parameter name: {name}")),
        );
    }

    let values = parse_values(&chunk[eq_pos + 1..], line_num)?;
    Ok(Parameter::multi(name, values))
}

/// Finds `needle` outside of double quotes.
fn find_unquoted(s: &str, needle: char) -> Option<usize> {
    let mut in_quotes = false;
    for (i, c) in s.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            c if c == needle && !in_quotes => return Some(i),
            _ => {}
        }
    }
    None
}

/// Parses comma-separated parameter values, removing quotes and decoding
/// RFC 6868 caret escapes.
fn parse_values(s: &str, line_num: usize) -> ParseResult<Vec<String>> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => values.push(std::mem::take(&mut current)),
            '^' => match chars.peek() {
                Some('n') => {
                    chars.next();
                    current.push('\n');
                }
                Some('\'') => {
                    chars.next();
                    current.push('"');
                }
                Some('^') => {
                    chars.next();
                    current.push('^');
                }
                // Invalid caret escape, preserve as-is
                _ => current.push('^'),
            },
            _ => current.push(c),
        }
    }

    if in_quotes {
        return Err(ParseError::new(ParseErrorKind::MalformedPropertyLine, line_num, s)
            .with_context("unclosed quote in parameter value"));
    }

    values.push(current);
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_value() {
        let param = parse_chunk("TZID=America/New_York", false, 1).unwrap();
        assert_eq!(param.name, "TZID");
        assert_eq!(param.value(), Some("America/New_York"));
    }

    #[test]
    fn parse_multiple_values() {
        let param = parse_chunk("TYPE=home,voice", false, 1).unwrap();
        assert_eq!(param.values, vec!["home", "voice"]);
    }

    #[test]
    fn parse_quoted_value_keeps_delimiters() {
        let param = parse_chunk("CN=\"Doe, Jane\"", false, 1).unwrap();
        assert_eq!(param.value(), Some("Doe, Jane"));
    }

    #[test]
    fn parse_caret_escapes() {
        let param = parse_chunk("CN=\"Test^nName^'s^^\"", false, 1).unwrap();
        assert_eq!(param.value(), Some("Test\nName\"s^"));
    }

    #[test]
    fn bare_token_resolves_in_legacy_grammar() {
        let param = parse_chunk("HOME", true, 1).unwrap();
        assert_eq!(param.name, "TYPE");
        assert_eq!(param.value(), Some("HOME"));

        let param = parse_chunk("QUOTED-PRINTABLE", true, 1).unwrap();
        assert_eq!(param.name, "ENCODING");
        assert_eq!(param.value(), Some("QUOTED-PRINTABLE"));
    }

    #[test]
    fn bare_token_rejected_in_modern_grammar() {
        let err = parse_chunk("HOME", false, 4).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MalformedPropertyLine);
        assert_eq!(err.line, 4);
    }

    #[test]
    fn unclosed_quote_is_malformed() {
        let err = parse_chunk("CN=\"Unclosed", false, 2).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MalformedPropertyLine);
    }

    #[test]
    fn split_respects_quotes() {
        let parts = split_outside_quotes("A=\"x;y\";B=z", ';');
        assert_eq!(parts, vec!["A=\"x;y\"", "B=z"]);
    }
}
