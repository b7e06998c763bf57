//! Duration values.
//!
//! Format: `[+-]?P` followed by an ordered run of `<digits><designator>`
//! pairs, with a `T` marker switching into the time section. `M` means
//! months before the `T` and minutes after it. The legacy calendar grammar
//! accepts year/month components; the modern one rejects them.

use chrono::{Days, Months, NaiveDateTime, TimeDelta, Utc};

use crate::rfc::syntax::{ParseError, ParseErrorKind, ParseResult};

/// A decoded duration, kept as its textual components.
///
/// Components are unsigned; a leading `-` negates every one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Duration {
    pub negative: bool,
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

/// A duration resolved against an anchor instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchoredDuration {
    /// The anchor with the duration applied.
    pub instant: chrono::DateTime<Utc>,
    /// Signed span between anchor and instant. Year/month components
    /// contribute through calendar arithmetic at the anchor.
    pub span: TimeDelta,
}

impl Duration {
    /// The zero duration.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Parses a duration string.
    ///
    /// `allow_year_month` reflects the active format generation; when
    /// false, `Y` and date-section `M` designators are rejected.
    ///
    /// ## Errors
    /// Fails with `InvalidValueEncoding`, carrying the remaining unparsed
    /// suffix, on malformed digit runs or unrecognized designators.
    pub fn parse(s: &str, allow_year_month: bool, line: usize) -> ParseResult<Self> {
        let mut dur = Self::zero();
        let mut rest = s;

        if let Some(stripped) = rest.strip_prefix('-') {
            dur.negative = true;
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix('+') {
            rest = stripped;
        } else {
            // No sign present, duration is positive
        }

        rest = rest
            .strip_prefix('P')
            .ok_or_else(|| invalid(line, s, format!("expected P, unparsed suffix: {rest}")))?;

        let mut in_time = false;
        let mut seen_component = false;

        while !rest.is_empty() {
            if let Some(stripped) = rest.strip_prefix('T') {
                if in_time {
                    return Err(invalid(line, s, format!("second T marker: {rest}")));
                }
                in_time = true;
                rest = stripped;
                continue;
            }

            let digits_end = rest
                .find(|c: char| !c.is_ascii_digit())
                .ok_or_else(|| invalid(line, s, format!("missing designator: {rest}")))?;
            if digits_end == 0 {
                return Err(invalid(line, s, format!("expected digits: {rest}")));
            }

            let num: u32 = rest[..digits_end]
                .parse()
                .map_err(|_| invalid(line, s, format!("bad digit run: {rest}")))?;
            let designator = rest.as_bytes()[digits_end].to_ascii_uppercase();

            match (designator, in_time) {
                (b'Y', false) | (b'M', false) if !allow_year_month => {
                    return Err(invalid(
                        line,
                        s,
                        format!("year/month durations not supported by this version: {rest}"),
                    ));
                }
                (b'Y', false) => dur.years = num,
                (b'M', false) => dur.months = num,
                (b'W', false) => dur.weeks = num,
                (b'D', false) => dur.days = num,
                (b'H', true) => dur.hours = num,
                (b'M', true) => dur.minutes = num,
                (b'S', true) => dur.seconds = num,
                _ => {
                    return Err(invalid(
                        line,
                        s,
                        format!("unrecognized designator: {}", &rest[digits_end..]),
                    ));
                }
            }

            seen_component = true;
            rest = &rest[digits_end + 1..];
        }

        if !seen_component {
            return Err(invalid(line, s, "empty duration"));
        }

        Ok(dur)
    }

    fn sign(&self) -> i64 {
        if self.negative { -1 } else { 1 }
    }

    /// Signed hour component.
    #[must_use]
    pub fn signed_hours(&self) -> i64 {
        self.sign() * i64::from(self.hours)
    }

    /// Signed minute component.
    #[must_use]
    pub fn signed_minutes(&self) -> i64 {
        self.sign() * i64::from(self.minutes)
    }

    /// Signed second component.
    #[must_use]
    pub fn signed_seconds(&self) -> i64 {
        self.sign() * i64::from(self.seconds)
    }

    /// Applies this duration to a point in time.
    ///
    /// Year and month components use calendar arithmetic; the rest are
    /// fixed-length.
    #[must_use]
    pub fn apply_to(&self, start: NaiveDateTime) -> NaiveDateTime {
        let months = Months::new(self.years * 12 + self.months);
        let days = Days::new(u64::from(self.weeks) * 7 + u64::from(self.days));
        let clock = TimeDelta::hours(i64::from(self.hours))
            + TimeDelta::minutes(i64::from(self.minutes))
            + TimeDelta::seconds(i64::from(self.seconds));

        if self.negative {
            start - months - days - clock
        } else {
            start + months + days + clock
        }
    }

    /// Resolves the duration against the current wall clock.
    ///
    /// Samples `Utc::now()` exactly once per call; nothing is cached
    /// across calls.
    #[must_use]
    pub fn anchor(&self) -> AnchoredDuration {
        self.anchor_at(Utc::now())
    }

    /// Resolves the duration against a caller-supplied anchor.
    #[must_use]
    pub fn anchor_at(&self, now: chrono::DateTime<Utc>) -> AnchoredDuration {
        let start = now.naive_utc();
        let end = self.apply_to(start);
        AnchoredDuration {
            instant: chrono::DateTime::from_naive_utc_and_offset(end, Utc),
            span: end - start,
        }
    }
}

fn invalid(line: usize, text: &str, context: impl Into<String>) -> ParseError {
    ParseError::new(ParseErrorKind::InvalidValueEncoding, line, text).with_context(context)
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "P")?;

        if self.years > 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months > 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.weeks > 0 {
            write!(f, "{}W", self.weeks)?;
        }
        if self.days > 0 {
            write!(f, "{}D", self.days)?;
        }
        if self.hours > 0 || self.minutes > 0 || self.seconds > 0 {
            write!(f, "T")?;
            if self.hours > 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes > 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds > 0 {
                write!(f, "{}S", self.seconds)?;
            }
        } else if self.years == 0 && self.months == 0 && self.weeks == 0 && self.days == 0 {
            write!(f, "T0S")?;
        } else {
            // Date components only, nothing further to emit
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(1997, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn parse_full_legacy_duration() {
        let dur = Duration::parse("P2Y10M15DT10H30M20S", true, 1).unwrap();
        assert_eq!(dur.years, 2);
        assert_eq!(dur.months, 10);
        assert_eq!(dur.days, 15);
        assert_eq!(dur.signed_hours(), 10);
        assert_eq!(dur.signed_minutes(), 30);
        assert_eq!(dur.signed_seconds(), 20);
    }

    #[test]
    fn negative_sign_negates_every_component() {
        let dur = Duration::parse("-P2Y10M15DT10H30M20S", true, 1).unwrap();
        assert_eq!(dur.signed_hours(), -10);
        assert_eq!(dur.signed_minutes(), -30);
        assert_eq!(dur.signed_seconds(), -20);
    }

    #[test]
    fn year_month_rejected_by_modern_grammar() {
        let err = Duration::parse("P2Y10M15DT10H30M20S", false, 3).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidValueEncoding);
        assert_eq!(err.line, 3);

        // Time-section M is minutes and stays legal.
        let dur = Duration::parse("PT30M", false, 1).unwrap();
        assert_eq!(dur.minutes, 30);
    }

    #[test]
    fn weeks_and_days() {
        let dur = Duration::parse("P2W", false, 1).unwrap();
        assert_eq!(dur.weeks, 2);

        let dur = Duration::parse("P1DT2H30M", false, 1).unwrap();
        assert_eq!(dur.days, 1);
        assert_eq!(dur.hours, 2);
        assert_eq!(dur.minutes, 30);
    }

    #[test]
    fn malformed_carries_unparsed_suffix() {
        let err = Duration::parse("P1D2X", false, 1).unwrap_err();
        assert!(err.context.contains("2X") || err.context.contains("X"));

        let err = Duration::parse("PT5Q", false, 1).unwrap_err();
        assert!(err.context.contains("Q"));
    }

    #[test]
    fn missing_p_is_invalid() {
        assert!(Duration::parse("2DT1H", false, 1).is_err());
        assert!(Duration::parse("P", false, 1).is_err());
    }

    #[test]
    fn anchored_span_matches_components() {
        let dur = Duration::parse("PT10H30M20S", false, 1).unwrap();
        let anchored = dur.anchor_at(anchor());
        assert_eq!(anchored.span, TimeDelta::seconds(10 * 3600 + 30 * 60 + 20));
        assert_eq!(anchored.instant, anchor() + anchored.span);
    }

    #[test]
    fn anchored_year_month_uses_calendar_arithmetic() {
        let dur = Duration::parse("P1Y1M", true, 1).unwrap();
        let anchored = dur.anchor_at(anchor());
        assert_eq!(
            anchored.instant,
            Utc.with_ymd_and_hms(1998, 2, 1, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn negative_anchor_moves_backwards() {
        let dur = Duration::parse("-PT15M", false, 1).unwrap();
        let anchored = dur.anchor_at(anchor());
        assert_eq!(anchored.span, TimeDelta::minutes(-15));
    }

    #[test]
    fn encode_round_trips() {
        for text in ["P2Y10M15DT10H30M20S", "-PT15M", "P2W", "P1DT2H30M", "PT0S"] {
            let dur = Duration::parse(text, true, 1).unwrap();
            assert_eq!(dur.to_string(), *text);
        }
    }
}
