//! Text value escaping and transfer decoding.
//!
//! Escape sequences shared by both formats: `\\` `\,` `\;` `\n` `\N`.
//! Structured values split on unescaped `;`, list values on unescaped `,`.
//! Quoted-printable decoding covers the legacy transfer encoding.

/// Unescapes a text value.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n' | 'N') => result.push('\n'),
                Some(',') => result.push(','),
                Some(';') => result.push(';'),
                Some('\\') | None => result.push('\\'),
                Some(other) => {
                    // Invalid escape, preserve as-is
                    result.push('\\');
                    result.push(other);
                }
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Escapes a text value for emission.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\n' => result.push_str("\\n"),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Splits a structured value on unescaped semicolons.
///
/// Escapes are NOT resolved; each field is unescaped separately by the
/// caller so commas inside fields survive a later list split.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            ';' => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Splits a list value on unescaped commas, unescaping each element.
#[must_use]
pub fn split_component(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n' | 'N') => current.push('\n'),
                Some(',') => current.push(','),
                Some(';') => current.push(';'),
                Some('\\') | None => current.push('\\'),
                Some(other) => {
                    current.push('\\');
                    current.push(other);
                }
            }
        } else if c == ',' {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}

/// Decodes a quoted-printable value.
///
/// `=XX` hex pairs become bytes; anything malformed is preserved as-is
/// rather than erroring, since legacy producers are sloppy here. The byte
/// run is reassembled as UTF-8 with lossy replacement.
#[must_use]
pub fn decode_quoted_printable(s: &str) -> String {
    let mut bytes = Vec::with_capacity(s.len());
    let mut chars = s.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c == '=' && i + 3 <= s.len() && s.is_char_boundary(i + 3) {
            let hex = &s[i + 1..i + 3];
            if let Ok(byte) = u8::from_str_radix(hex, 16) {
                bytes.push(byte);
                chars.next();
                chars.next();
                continue;
            }
        }
        let mut buf = [0u8; 4];
        bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }

    String::from_utf8_lossy(&bytes).into_owned()
}
