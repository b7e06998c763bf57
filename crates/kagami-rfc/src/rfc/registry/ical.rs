//! Per-version property table for the calendar format.

use super::{FormatVersion, PropertySpec, Role};
use crate::rfc::model::ComponentKind;

use super::Cardinality::{Any, ExactlyOne, MayBeOne};
use super::SlotKind::{Number, Part, String as StringSlot};
use super::ValueKind as V;

/// Resolves a calendar property name under a calendar version.
///
/// vCalendar 1.0 spells a few names differently (DCREATED) and carries
/// properties iCalendar dropped (calendar-level TZ); both map here rather
/// than in parser control flow.
#[must_use]
pub fn lookup(version: FormatVersion, name: &str) -> PropertySpec {
    let legacy = version == FormatVersion::Calendar10;
    let name = name.to_ascii_uppercase();

    match name.as_str() {
        // Calendar-level
        "PRODID" => {
            let cardinality = if legacy { MayBeOne } else { ExactlyOne };
            PropertySpec::new(Role::ProdId, StringSlot, V::Text, cardinality, false)
        }
        "CALSCALE" => PropertySpec::new(Role::CalScale, StringSlot, V::Text, MayBeOne, false),
        "METHOD" => PropertySpec::new(Role::Method, StringSlot, V::Text, MayBeOne, false),
        // vCalendar 1.0 carries the calendar's offset as a property.
        "TZ" if legacy => PropertySpec::new(Role::TimeZone, Part, V::UtcOffset, MayBeOne, false),

        // Dates
        "UID" => {
            let cardinality = if legacy { MayBeOne } else { ExactlyOne };
            PropertySpec::new(Role::Uid, StringSlot, V::Text, cardinality, false)
        }
        "DTSTAMP" if !legacy => {
            PropertySpec::new(Role::DateStamp, Part, V::DateTime, ExactlyOne, false)
        }
        "DTSTART" => PropertySpec::new(Role::DateStart, Part, V::DateTime, MayBeOne, false),
        "DTEND" => PropertySpec::new(Role::DateEnd, Part, V::DateTime, MayBeOne, false),
        "DUE" => PropertySpec::new(Role::Due, Part, V::DateTime, MayBeOne, false),
        "COMPLETED" => PropertySpec::new(Role::Completed, Part, V::DateTime, MayBeOne, false),
        "DURATION" => PropertySpec::new(Role::Duration, Part, V::Duration, MayBeOne, false),
        "FREEBUSY" => PropertySpec::new(Role::FreeBusy, Part, V::Period, Any, false),

        // Descriptive
        "SUMMARY" => PropertySpec::new(Role::Summary, StringSlot, V::Text, MayBeOne, false),
        "DESCRIPTION" => PropertySpec::new(Role::Description, StringSlot, V::Text, MayBeOne, false),
        "LOCATION" => PropertySpec::new(Role::Location, StringSlot, V::Text, MayBeOne, false),
        "STATUS" => PropertySpec::new(Role::Status, StringSlot, V::Text, MayBeOne, false),
        "TRANSP" => PropertySpec::new(Role::Transparency, StringSlot, V::Text, MayBeOne, false),
        "CLASS" => PropertySpec::new(Role::Class, StringSlot, V::Text, MayBeOne, false),
        "RESOURCES" => PropertySpec::new(Role::Resources, Part, V::TextList, Any, false),
        "CATEGORIES" => PropertySpec::new(Role::Categories, Part, V::TextList, Any, false),
        "GEO" => PropertySpec::new(Role::Geo, Part, V::Geo, MayBeOne, false),
        "PRIORITY" => PropertySpec::new(Role::Priority, Number, V::Number, MayBeOne, false),
        "SEQUENCE" => PropertySpec::new(Role::Sequence, Number, V::Number, MayBeOne, false),
        "PERCENT-COMPLETE" => {
            PropertySpec::new(Role::PercentComplete, Number, V::Number, MayBeOne, false)
        }

        // Recurrence: rule grammar differs per generation and is preserved
        // verbatim rather than interpreted.
        "RRULE" => PropertySpec::new(Role::RecurrenceRule, StringSlot, V::Text, Any, false),
        "EXDATE" => PropertySpec::new(Role::ExceptionDates, Part, V::DateTime, Any, false),
        "RDATE" => PropertySpec::new(Role::RecurrenceDates, Part, V::DateTime, Any, false),
        "RECURRENCE-ID" if !legacy => {
            PropertySpec::new(Role::RecurrenceId, Part, V::DateTime, MayBeOne, false)
        }

        // Relationships
        "ORGANIZER" if !legacy => {
            PropertySpec::new(Role::Organizer, StringSlot, V::Uri, MayBeOne, false)
        }
        "ATTENDEE" => PropertySpec::new(Role::Attendee, StringSlot, V::Uri, Any, false),
        "CONTACT" => PropertySpec::new(Role::Contact, StringSlot, V::Text, Any, false),
        "COMMENT" => PropertySpec::new(Role::Comment, StringSlot, V::Text, Any, false),
        "URL" => PropertySpec::new(Role::Url, StringSlot, V::Uri, MayBeOne, false),
        "RELATED-TO" => PropertySpec::new(Role::Related, StringSlot, V::Text, Any, false),

        // Alarms
        "ACTION" if !legacy => PropertySpec::new(Role::Action, StringSlot, V::Text, MayBeOne, false),
        "TRIGGER" if !legacy => PropertySpec::new(Role::Trigger, Part, V::Duration, MayBeOne, false),
        "REPEAT" if !legacy => PropertySpec::new(Role::Repeat, Number, V::Number, MayBeOne, false),

        // Change management; the legacy grammar spells CREATED as DCREATED.
        "CREATED" if !legacy => PropertySpec::new(Role::Created, Part, V::DateTime, MayBeOne, false),
        "DCREATED" if legacy => {
            PropertySpec::new(Role::Created, Part, V::DateTime, MayBeOne, false)
        }
        "LAST-MODIFIED" => PropertySpec::new(Role::LastModified, Part, V::DateTime, MayBeOne, false),

        // Timezone components
        "TZID" if !legacy => PropertySpec::new(Role::TzId, StringSlot, V::Text, MayBeOne, false),
        "TZNAME" if !legacy => PropertySpec::new(Role::TzName, StringSlot, V::Text, Any, false),
        "TZOFFSETFROM" if !legacy => {
            PropertySpec::new(Role::TzOffsetFrom, Part, V::UtcOffset, MayBeOne, false)
        }
        "TZOFFSETTO" if !legacy => {
            PropertySpec::new(Role::TzOffsetTo, Part, V::UtcOffset, MayBeOne, false)
        }
        "TZURL" if !legacy => PropertySpec::new(Role::TzUrl, StringSlot, V::Uri, MayBeOne, false),

        _ => PropertySpec::extension(&name),
    }
}

/// Roles a block of the given kind must carry under each generation.
#[must_use]
pub fn required_roles(version: FormatVersion, kind: ComponentKind) -> &'static [Role] {
    if version == FormatVersion::Calendar10 {
        return &[];
    }
    match kind {
        ComponentKind::Calendar => &[Role::ProdId],
        ComponentKind::Event | ComponentKind::Todo | ComponentKind::Journal => {
            &[Role::Uid, Role::DateStamp]
        }
        _ => &[],
    }
}
