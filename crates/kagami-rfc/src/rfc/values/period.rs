//! Period values.
//!
//! Format: `start/end` where `end` is a second date-time or a duration.
//! The decoded form always carries start, end, and the span between them,
//! regardless of which textual form was given.

use chrono::TimeDelta;

use super::datetime::DateTime;
use super::duration::Duration;
use crate::rfc::syntax::{ParseError, ParseErrorKind, ParseResult};

/// Which textual form the source used, kept for faithful re-encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodForm {
    /// `start/end` with an explicit end date-time.
    Explicit,
    /// `start/duration`.
    Duration(Duration),
}

/// A decoded period of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: DateTime,
    pub end: DateTime,
    /// Always populated: `end - start`.
    pub duration: TimeDelta,
    pub form: PeriodForm,
}

impl Period {
    /// Parses a period string.
    ///
    /// `allow_year_month` gates the duration grammar exactly as for a
    /// standalone duration value.
    ///
    /// ## Errors
    /// Fails with `InvalidValueEncoding` when the `/` separator is missing
    /// or either half is malformed.
    pub fn parse(s: &str, allow_year_month: bool, line: usize) -> ParseResult<Self> {
        let slash_pos = s.find('/').ok_or_else(|| {
            ParseError::new(ParseErrorKind::InvalidValueEncoding, line, s)
                .with_context("missing / separator")
        })?;

        let start = DateTime::parse(&s[..slash_pos], line)?;
        let start_naive = start.to_naive().ok_or_else(|| {
            ParseError::new(ParseErrorKind::InvalidValueEncoding, line, s)
                .with_context("start out of range")
        })?;
        let end_str = &s[slash_pos + 1..];

        if end_str.starts_with(['P', '+', '-']) {
            let dur = Duration::parse(end_str, allow_year_month, line)?;
            let end_naive = dur.apply_to(start_naive);
            Ok(Self {
                start,
                end: DateTime::from_naive(end_naive, start.is_utc()),
                duration: end_naive - start_naive,
                form: PeriodForm::Duration(dur),
            })
        } else {
            let end = DateTime::parse(end_str, line)?;
            let end_naive = end.to_naive().ok_or_else(|| {
                ParseError::new(ParseErrorKind::InvalidValueEncoding, line, s)
                    .with_context("end out of range")
            })?;
            Ok(Self {
                start,
                end,
                duration: end_naive - start_naive,
                form: PeriodForm::Explicit,
            })
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.form {
            PeriodForm::Explicit => write!(f, "{}/{}", self.start, self.end),
            PeriodForm::Duration(dur) => write!(f, "{}/{}", self.start, dur),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_period_has_duration() {
        let period = Period::parse("19970101T180000Z/19970102T070000Z", false, 1).unwrap();
        assert_eq!(period.duration, TimeDelta::hours(13));
        assert_eq!(period.form, PeriodForm::Explicit);
    }

    #[test]
    fn duration_period_computes_end() {
        let period = Period::parse("19970101T180000Z/PT5H30M", false, 1).unwrap();
        assert_eq!(period.duration, TimeDelta::minutes(5 * 60 + 30));
        assert_eq!(period.end.to_string(), "19970101T233000Z");
    }

    #[test]
    fn end_inherits_utc_marker_from_start() {
        let period = Period::parse("19970101T180000/PT1H", false, 1).unwrap();
        assert!(!period.end.is_utc());
    }

    #[test]
    fn missing_slash_is_invalid() {
        let err = Period::parse("19970101T180000Z", false, 1).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidValueEncoding);
    }

    #[test]
    fn encode_reproduces_source_form() {
        let explicit = Period::parse("19970101T180000Z/19970102T070000Z", false, 1).unwrap();
        assert_eq!(explicit.to_string(), "19970101T180000Z/19970102T070000Z");

        let duration = Period::parse("19970101T180000Z/PT5H30M", false, 1).unwrap();
        assert_eq!(duration.to_string(), "19970101T180000Z/PT5H30M");
    }
}
