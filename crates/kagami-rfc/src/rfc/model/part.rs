//! The closed set of structured part payloads.
//!
//! One variant per semantic value shape, each implementing the shared
//! decode/encode/equality contract. A closed enum keeps dispatch
//! exhaustiveness checkable instead of relying on open subtyping.

use base64::{Engine, engine::general_purpose::STANDARD};

use super::structured::{
    Gender, GeoPosition, Media, Organization, StructuredAddress, StructuredName,
};
use crate::rfc::registry::{FormatVersion, ValueKind};
use crate::rfc::syntax::{
    ContentLine, ParseError, ParseErrorKind, ParseResult, decode_quoted_printable, escape_text,
    split_component, split_structured, unescape_text,
};
use crate::rfc::values::{Date, DateTime, Duration, Period, UtcOffset};

/// A decoded structured value.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    /// Plain text stored in a part slot (VALUE=TEXT overrides).
    Text(String),
    /// Comma-separated text list (NICKNAME, CATEGORIES, RESOURCES).
    TextList(Vec<String>),
    Date(Date),
    DateTime(DateTime),
    Duration(Duration),
    Period(Period),
    UtcOffset(UtcOffset),
    Geo(GeoPosition),
    Media(Media),
    Name(StructuredName),
    Address(StructuredAddress),
    Org(Organization),
    Gender(Gender),
}

impl Part {
    /// Decodes a raw value into one or more parts.
    ///
    /// List-shaped kinds (dates, periods) yield one part per comma item;
    /// everything else yields exactly one.
    ///
    /// ## Errors
    /// Fails with `InvalidValueEncoding` when the codec rejects the raw
    /// input.
    pub fn decode(
        kind: ValueKind,
        token: &ContentLine,
        version: FormatVersion,
        line: usize,
    ) -> ParseResult<Vec<Self>> {
        let raw = token.raw_value.as_str();
        match kind {
            ValueKind::Text => {
                let text = if token.is_quoted_printable() {
                    decode_quoted_printable(raw)
                } else {
                    unescape_text(raw)
                };
                Ok(vec![Self::Text(text)])
            }
            ValueKind::TextList => Ok(vec![Self::TextList(split_component(raw))]),
            ValueKind::Date => raw
                .split(',')
                .map(|item| Date::parse(item.trim(), line).map(Self::Date))
                .collect(),
            ValueKind::DateTime | ValueKind::DateAndOrTime => raw
                .split(',')
                .map(|item| Self::decode_date_or_datetime(item.trim(), line))
                .collect(),
            ValueKind::Duration => Ok(vec![Self::Duration(Duration::parse(
                raw,
                version.allows_year_month_duration(),
                line,
            )?)]),
            ValueKind::Period => raw
                .split(',')
                .map(|item| {
                    Period::parse(item.trim(), version.allows_year_month_duration(), line)
                        .map(Self::Period)
                })
                .collect(),
            ValueKind::UtcOffset => Ok(vec![Self::UtcOffset(UtcOffset::parse(raw, line)?)]),
            ValueKind::Geo => Ok(vec![Self::Geo(decode_geo(raw, line)?)]),
            ValueKind::Media => Ok(vec![Self::Media(decode_media(token, line)?)]),
            ValueKind::StructuredName => Ok(vec![Self::Name(decode_name(raw))]),
            ValueKind::Address => Ok(vec![Self::Address(decode_address(raw))]),
            ValueKind::Organization => Ok(vec![Self::Org(decode_org(raw))]),
            ValueKind::Gender => Ok(vec![Self::Gender(decode_gender(raw))]),
            ValueKind::Uri | ValueKind::Number => Err(ParseError::new(
                ParseErrorKind::InvalidValueEncoding,
                line,
                raw,
            )
            .with_context("scalar kind routed to part slot")),
        }
    }

    fn decode_date_or_datetime(item: &str, line: usize) -> ParseResult<Self> {
        if item.contains('T') {
            DateTime::parse(item, line).map(Self::DateTime)
        } else {
            Date::parse(item, line).map(Self::Date)
        }
    }

    /// Re-encodes the part into its raw textual form.
    #[must_use]
    pub fn encode(&self, version: FormatVersion) -> String {
        match self {
            Self::Text(text) => escape_text(text),
            Self::TextList(items) => join_escaped(items, ','),
            Self::Date(date) => date.to_string(),
            Self::DateTime(dt) => dt.to_string(),
            Self::Duration(dur) => dur.to_string(),
            Self::Period(period) => period.to_string(),
            Self::UtcOffset(offset) => offset.to_string(),
            Self::Geo(geo) => {
                if version == FormatVersion::VCard40 {
                    format!("geo:{},{}", geo.latitude, geo.longitude)
                } else {
                    format!("{};{}", geo.latitude, geo.longitude)
                }
            }
            Self::Media(Media::Uri(uri)) => uri.clone(),
            Self::Media(Media::Binary(bytes)) => STANDARD.encode(bytes),
            Self::Name(name) => [
                &name.family,
                &name.given,
                &name.additional,
                &name.prefixes,
                &name.suffixes,
            ]
            .map(|field| join_escaped(field, ','))
            .join(";"),
            Self::Address(addr) => [
                &addr.po_box,
                &addr.extended,
                &addr.street,
                &addr.locality,
                &addr.region,
                &addr.postal_code,
                &addr.country,
            ]
            .map(|field| join_escaped(field, ','))
            .join(";"),
            Self::Org(org) => {
                let mut out = escape_text(&org.name);
                for unit in &org.units {
                    out.push(';');
                    out.push_str(&escape_text(unit));
                }
                out
            }
            Self::Gender(gender) => match &gender.identity {
                Some(identity) => format!("{};{}", gender.sex, escape_text(identity)),
                None => gender.sex.clone(),
            },
        }
    }
}

fn join_escaped(items: &[String], sep: char) -> String {
    items
        .iter()
        .map(|item| escape_text(item))
        .collect::<Vec<_>>()
        .join(&sep.to_string())
}

fn decode_geo(raw: &str, line: usize) -> ParseResult<GeoPosition> {
    let invalid = |context: &str| {
        ParseError::new(ParseErrorKind::InvalidValueEncoding, line, raw).with_context(context)
    };

    let body = raw.strip_prefix("geo:").unwrap_or(raw);
    let (lat, lon) = body
        .split_once(';')
        .or_else(|| body.split_once(','))
        .ok_or_else(|| invalid("expected two coordinates"))?;

    Ok(GeoPosition {
        latitude: lat.trim().parse().map_err(|_| invalid("bad latitude"))?,
        longitude: lon.trim().parse().map_err(|_| invalid("bad longitude"))?,
    })
}

fn decode_media(token: &ContentLine, line: usize) -> ParseResult<Media> {
    let raw = token.raw_value.as_str();
    if token.is_base64() {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = STANDARD.decode(compact.as_bytes()).map_err(|e| {
            ParseError::new(ParseErrorKind::InvalidValueEncoding, line, raw)
                .with_context(format!("invalid Base64 encoding: {e}"))
        })?;
        Ok(Media::Binary(bytes))
    } else {
        Ok(Media::Uri(raw.to_string()))
    }
}

fn decode_name(raw: &str) -> StructuredName {
    let mut fields = split_structured(raw)
        .into_iter()
        .map(split_component)
        .collect::<Vec<_>>()
        .into_iter();
    StructuredName {
        family: fields.next().unwrap_or_default(),
        given: fields.next().unwrap_or_default(),
        additional: fields.next().unwrap_or_default(),
        prefixes: fields.next().unwrap_or_default(),
        suffixes: fields.next().unwrap_or_default(),
    }
}

fn decode_address(raw: &str) -> StructuredAddress {
    let mut fields = split_structured(raw)
        .into_iter()
        .map(split_component)
        .collect::<Vec<_>>()
        .into_iter();
    StructuredAddress {
        po_box: fields.next().unwrap_or_default(),
        extended: fields.next().unwrap_or_default(),
        street: fields.next().unwrap_or_default(),
        locality: fields.next().unwrap_or_default(),
        region: fields.next().unwrap_or_default(),
        postal_code: fields.next().unwrap_or_default(),
        country: fields.next().unwrap_or_default(),
    }
}

fn decode_org(raw: &str) -> Organization {
    let mut fields = split_structured(raw).into_iter();
    Organization {
        name: fields.next().map(unescape_text).unwrap_or_default(),
        units: fields.map(unescape_text).collect(),
    }
}

fn decode_gender(raw: &str) -> Gender {
    match raw.split_once(';') {
        Some((sex, identity)) => Gender {
            sex: sex.to_string(),
            identity: Some(unescape_text(identity)),
        },
        None => Gender {
            sex: raw.to_string(),
            identity: None,
        },
    }
}
