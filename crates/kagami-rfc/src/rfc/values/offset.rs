//! UTC offset values.
//!
//! Format: `[+-]hh[mm[ss]]`, sign mandatory.

use crate::rfc::syntax::{ParseError, ParseErrorKind, ParseResult};

/// A fixed offset from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcOffset {
    seconds: i32,
}

impl UtcOffset {
    /// Creates an offset from a signed second count.
    #[must_use]
    pub const fn from_seconds(seconds: i32) -> Self {
        Self { seconds }
    }

    /// Total signed seconds east of UTC.
    #[must_use]
    pub const fn seconds(self) -> i32 {
        self.seconds
    }

    /// Signed hour component.
    #[must_use]
    pub const fn hours(self) -> i32 {
        self.seconds / 3600
    }

    /// Minute component (always non-negative).
    #[must_use]
    pub const fn minutes(self) -> i32 {
        (self.seconds.abs() % 3600) / 60
    }

    /// Parses an offset string.
    ///
    /// ## Errors
    /// Fails with `InvalidValueEncoding` when the sign is missing or a
    /// digit pair is malformed.
    pub fn parse(s: &str, line: usize) -> ParseResult<Self> {
        let invalid = |context: &str| {
            ParseError::new(ParseErrorKind::InvalidValueEncoding, line, s).with_context(context)
        };

        let sign = match s.chars().next() {
            Some('+') => 1,
            Some('-') => -1,
            _ => return Err(invalid("missing mandatory sign")),
        };

        let digits = &s[1..];
        if !matches!(digits.len(), 2 | 4 | 6) || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected hh, hhmm, or hhmmss digits"));
        }

        let hours: i32 = digits[0..2].parse().map_err(|_| invalid("bad hours"))?;
        let minutes: i32 = if digits.len() >= 4 {
            digits[2..4].parse().map_err(|_| invalid("bad minutes"))?
        } else {
            0
        };
        let seconds: i32 = if digits.len() == 6 {
            digits[4..6].parse().map_err(|_| invalid("bad seconds"))?
        } else {
            0
        };

        if minutes > 59 || seconds > 59 {
            return Err(invalid("offset component out of range"));
        }

        Ok(Self::from_seconds(sign * (hours * 3600 + minutes * 60 + seconds)))
    }
}

impl std::fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.seconds < 0 { '-' } else { '+' };
        let abs = self.seconds.abs();
        write!(f, "{sign}{:02}{:02}", abs / 3600, (abs % 3600) / 60)?;
        if abs % 60 != 0 {
            write!(f, "{:02}", abs % 60)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_positive() {
        let offset = UtcOffset::parse("+0530", 1).unwrap();
        assert_eq!(offset.hours(), 5);
        assert_eq!(offset.minutes(), 30);
    }

    #[test]
    fn parse_negative() {
        let offset = UtcOffset::parse("-0800", 1).unwrap();
        assert_eq!(offset.hours(), -8);
        assert_eq!(offset.minutes(), 0);
    }

    #[test]
    fn parse_hours_only_and_with_seconds() {
        assert_eq!(UtcOffset::parse("+05", 1).unwrap().seconds(), 5 * 3600);
        assert_eq!(
            UtcOffset::parse("-013015", 1).unwrap().seconds(),
            -(3600 + 30 * 60 + 15)
        );
    }

    #[test]
    fn sign_is_mandatory() {
        assert!(UtcOffset::parse("0530", 1).is_err());
        assert!(UtcOffset::parse("", 1).is_err());
    }

    #[test]
    fn encode_round_trips() {
        for text in ["+0530", "-0800", "+0000", "-013015"] {
            let offset = UtcOffset::parse(text, 1).unwrap();
            assert_eq!(offset.to_string(), *text);
        }
    }
}
