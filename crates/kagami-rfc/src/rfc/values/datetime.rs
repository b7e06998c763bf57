//! Date and date-time values.
//!
//! Compact numeric forms only: `YYYYMMDD` and `YYYYMMDD"T"hhmmss[Z]`.
//! A trailing `Z` denotes UTC; its absence denotes a floating local time.
//! Re-encoding reproduces the `Z` suffix iff the decoded instant is UTC.

use chrono::{NaiveDate, NaiveDateTime};

use crate::rfc::syntax::{ParseError, ParseErrorKind, ParseResult};

/// A calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl Date {
    /// Parses the compact `YYYYMMDD` form.
    ///
    /// ## Errors
    /// Fails with `InvalidValueEncoding` on bad length, bad digits, or an
    /// impossible calendar date.
    pub fn parse(s: &str, line: usize) -> ParseResult<Self> {
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(line, s, "expected YYYYMMDD"));
        }

        let year: u16 = s[0..4].parse().map_err(|_| invalid(line, s, "bad year"))?;
        let month: u8 = s[4..6].parse().map_err(|_| invalid(line, s, "bad month"))?;
        let day: u8 = s[6..8].parse().map_err(|_| invalid(line, s, "bad day"))?;

        let date = Self { year, month, day };
        if date.to_naive().is_none() {
            return Err(invalid(line, s, "no such calendar date"));
        }
        Ok(date)
    }

    /// Returns the chrono equivalent, if representable.
    #[must_use]
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(i32::from(self.year), u32::from(self.month), u32::from(self.day))
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

/// A wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Whether the source carried a trailing `Z`.
    pub utc: bool,
}

impl Time {
    /// Parses the compact `hhmmss[Z]` form.
    ///
    /// ## Errors
    /// Fails with `InvalidValueEncoding` on bad length or digits.
    pub fn parse(s: &str, line: usize) -> ParseResult<Self> {
        let (digits, utc) = match s.strip_suffix('Z') {
            Some(stripped) => (stripped, true),
            None => (s, false),
        };

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(line, s, "expected hhmmss"));
        }

        let hour: u8 = digits[0..2].parse().map_err(|_| invalid(line, s, "bad hour"))?;
        let minute: u8 = digits[2..4].parse().map_err(|_| invalid(line, s, "bad minute"))?;
        let second: u8 = digits[4..6].parse().map_err(|_| invalid(line, s, "bad second"))?;

        // Allow 60 for leap seconds.
        if hour > 23 || minute > 59 || second > 60 {
            return Err(invalid(line, s, "time component out of range"));
        }

        Ok(Self {
            hour,
            minute,
            second,
            utc,
        })
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}{:02}{:02}", self.hour, self.minute, self.second)?;
        if self.utc {
            write!(f, "Z")?;
        }
        Ok(())
    }
}

/// A combined date and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTime {
    pub date: Date,
    pub time: Time,
}

impl DateTime {
    /// Parses the compact `YYYYMMDD"T"hhmmss[Z]` form.
    ///
    /// ## Errors
    /// Fails with `InvalidValueEncoding` when the `T` separator is missing
    /// or either half is malformed.
    pub fn parse(s: &str, line: usize) -> ParseResult<Self> {
        let t_pos = s
            .find('T')
            .ok_or_else(|| invalid(line, s, "missing T separator"))?;

        let date = Date::parse(&s[..t_pos], line)?;
        let time = Time::parse(&s[t_pos + 1..], line)?;

        Ok(Self { date, time })
    }

    /// Returns whether the instant is UTC (vs floating local time).
    #[must_use]
    pub const fn is_utc(&self) -> bool {
        self.time.utc
    }

    /// Returns the chrono equivalent, if representable.
    #[must_use]
    pub fn to_naive(self) -> Option<NaiveDateTime> {
        self.date.to_naive()?.and_hms_opt(
            u32::from(self.time.hour),
            u32::from(self.time.minute),
            u32::from(self.time.second.min(59)),
        )
    }

    /// Rebuilds a value from chrono, keeping the given UTC marker.
    #[must_use]
    pub fn from_naive(naive: NaiveDateTime, utc: bool) -> Self {
        use chrono::{Datelike, Timelike};
        Self {
            date: Date {
                year: u16::try_from(naive.year()).unwrap_or(0),
                month: u8::try_from(naive.month()).unwrap_or(1),
                day: u8::try_from(naive.day()).unwrap_or(1),
            },
            time: Time {
                hour: u8::try_from(naive.hour()).unwrap_or(0),
                minute: u8::try_from(naive.minute()).unwrap_or(0),
                second: u8::try_from(naive.second()).unwrap_or(0),
                utc,
            },
        }
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

fn invalid(line: usize, text: &str, context: &str) -> ParseError {
    ParseError::new(ParseErrorKind::InvalidValueEncoding, line, text).with_context(context)
}
