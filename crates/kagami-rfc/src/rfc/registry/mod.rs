//! Version registry.
//!
//! Single source of truth for version-conditional grammar: given a format
//! version and property name, resolves the cardinality rule, value codec,
//! container slot, and semantic role. Version logic lives in these tables,
//! not in parser control flow. Unknown names (IANA X- and vendor prefixes
//! included) fall back to a catch-all extension slot and are never
//! discarded.

mod ical;
mod vcard;

/// The two record families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Card,
    Calendar,
}

/// A supported (format, version) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatVersion {
    VCard21,
    VCard30,
    VCard40,
    Calendar10,
    Calendar20,
}

impl FormatVersion {
    /// Resolves a VERSION property value for a format, if supported.
    #[must_use]
    pub fn resolve(format: Format, value: &str) -> Option<Self> {
        match (format, value.trim()) {
            (Format::Card, "2.1") => Some(Self::VCard21),
            (Format::Card, "3.0") => Some(Self::VCard30),
            (Format::Card, "4.0") => Some(Self::VCard40),
            (Format::Calendar, "1.0") => Some(Self::Calendar10),
            (Format::Calendar, "2.0") => Some(Self::Calendar20),
            _ => None,
        }
    }

    /// The format family this version belongs to.
    #[must_use]
    pub const fn format(self) -> Format {
        match self {
            Self::VCard21 | Self::VCard30 | Self::VCard40 => Format::Card,
            Self::Calendar10 | Self::Calendar20 => Format::Calendar,
        }
    }

    /// The VERSION property value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VCard21 => "2.1",
            Self::VCard30 => "3.0",
            Self::VCard40 => "4.0",
            Self::Calendar10 => "1.0",
            Self::Calendar20 => "2.0",
        }
    }

    /// Whether this is a legacy grammar (bare parameter shorthand,
    /// quoted-printable soft breaks).
    #[must_use]
    pub const fn is_legacy(self) -> bool {
        matches!(self, Self::VCard21 | Self::Calendar10)
    }

    /// Whether duration values may carry year/month components.
    #[must_use]
    pub const fn allows_year_month_duration(self) -> bool {
        self.is_legacy()
    }
}

impl std::fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Allowed occurrence count of a role within a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Any,
    AtLeastOne,
    MayBeOne,
    ExactlyOne,
}

impl Cardinality {
    /// Whether a second (non-ALTID-grouped) occurrence violates the rule.
    #[must_use]
    pub const fn at_most_one(self) -> bool {
        matches!(self, Self::MayBeOne | Self::ExactlyOne)
    }

    /// Whether at least one occurrence is required.
    #[must_use]
    pub const fn required(self) -> bool {
        matches!(self, Self::AtLeastOne | Self::ExactlyOne)
    }
}

/// Which container map a decoded value is filed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    String,
    Part,
    Number,
}

/// Value codec selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Escaped text; unescaped on decode, escaped on encode.
    Text,
    /// Verbatim text (URIs, cal-addresses); never escaped.
    Uri,
    /// Numeric scalar.
    Number,
    /// Comma-separated text list.
    TextList,
    Date,
    DateTime,
    /// Date or date-time, whichever the raw value carries.
    DateAndOrTime,
    Duration,
    Period,
    UtcOffset,
    Geo,
    /// URI or transfer-encoded binary.
    Media,
    StructuredName,
    Address,
    Organization,
    Gender,
}

/// Semantic key a decoded property files under, independent of its
/// literal name. Declaration order is the stable serialization order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    // Descriptive metadata
    ProdId,
    CalScale,
    Method,
    Kind,
    Source,
    // Contact identification
    FormattedName,
    Name,
    Nickname,
    Photo,
    Birthday,
    Anniversary,
    Gender,
    // Addressing and communications
    Address,
    Label,
    Telephone,
    Email,
    Mailer,
    Impp,
    Language,
    // Geographic
    TimeZone,
    Geo,
    // Organizational
    Title,
    OrgRole,
    Logo,
    Organization,
    Member,
    Related,
    // Explanatory
    Categories,
    Note,
    Sound,
    Uid,
    Url,
    Revision,
    Key,
    // Calendar dates
    DateStamp,
    DateStart,
    DateEnd,
    Due,
    Completed,
    Duration,
    FreeBusy,
    // Calendar descriptive
    Summary,
    Description,
    Location,
    Status,
    Transparency,
    Class,
    Resources,
    Priority,
    Sequence,
    PercentComplete,
    // Recurrence
    RecurrenceRule,
    ExceptionDates,
    RecurrenceDates,
    RecurrenceId,
    // Calendar relationships
    Organizer,
    Attendee,
    Contact,
    Comment,
    // Alarms
    Action,
    Trigger,
    Repeat,
    // Change management
    Created,
    LastModified,
    // Timezone components
    TzId,
    TzName,
    TzOffsetFrom,
    TzOffsetTo,
    TzUrl,
    // Catch-all for unknown and vendor-prefixed names
    Extended(String),
}

impl Role {
    /// The canonical property name used when a value is added
    /// programmatically. Parsed values keep their source name.
    #[must_use]
    pub fn canonical_name(&self) -> &str {
        match self {
            Self::ProdId => "PRODID",
            Self::CalScale => "CALSCALE",
            Self::Method => "METHOD",
            Self::Kind => "KIND",
            Self::Source => "SOURCE",
            Self::FormattedName => "FN",
            Self::Name => "N",
            Self::Nickname => "NICKNAME",
            Self::Photo => "PHOTO",
            Self::Birthday => "BDAY",
            Self::Anniversary => "ANNIVERSARY",
            Self::Gender => "GENDER",
            Self::Address => "ADR",
            Self::Label => "LABEL",
            Self::Telephone => "TEL",
            Self::Email => "EMAIL",
            Self::Mailer => "MAILER",
            Self::Impp => "IMPP",
            Self::Language => "LANG",
            Self::TimeZone => "TZ",
            Self::Geo => "GEO",
            Self::Title => "TITLE",
            Self::OrgRole => "ROLE",
            Self::Logo => "LOGO",
            Self::Organization => "ORG",
            Self::Member => "MEMBER",
            Self::Related => "RELATED",
            Self::Categories => "CATEGORIES",
            Self::Note => "NOTE",
            Self::Sound => "SOUND",
            Self::Uid => "UID",
            Self::Url => "URL",
            Self::Revision => "REV",
            Self::Key => "KEY",
            Self::DateStamp => "DTSTAMP",
            Self::DateStart => "DTSTART",
            Self::DateEnd => "DTEND",
            Self::Due => "DUE",
            Self::Completed => "COMPLETED",
            Self::Duration => "DURATION",
            Self::FreeBusy => "FREEBUSY",
            Self::Summary => "SUMMARY",
            Self::Description => "DESCRIPTION",
            Self::Location => "LOCATION",
            Self::Status => "STATUS",
            Self::Transparency => "TRANSP",
            Self::Class => "CLASS",
            Self::Resources => "RESOURCES",
            Self::Priority => "PRIORITY",
            Self::Sequence => "SEQUENCE",
            Self::PercentComplete => "PERCENT-COMPLETE",
            Self::RecurrenceRule => "RRULE",
            Self::ExceptionDates => "EXDATE",
            Self::RecurrenceDates => "RDATE",
            Self::RecurrenceId => "RECURRENCE-ID",
            Self::Organizer => "ORGANIZER",
            Self::Attendee => "ATTENDEE",
            Self::Contact => "CONTACT",
            Self::Comment => "COMMENT",
            Self::Action => "ACTION",
            Self::Trigger => "TRIGGER",
            Self::Repeat => "REPEAT",
            Self::Created => "CREATED",
            Self::LastModified => "LAST-MODIFIED",
            Self::TzId => "TZID",
            Self::TzName => "TZNAME",
            Self::TzOffsetFrom => "TZOFFSETFROM",
            Self::TzOffsetTo => "TZOFFSETTO",
            Self::TzUrl => "TZURL",
            Self::Extended(name) => name,
        }
    }
}

/// Resolved behavior for one property under one version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySpec {
    pub role: Role,
    pub slot: SlotKind,
    pub value: ValueKind,
    pub cardinality: Cardinality,
    /// Whether ALTID grouping counts occurrences as one logical value.
    pub alt_id: bool,
}

impl PropertySpec {
    pub(crate) const fn new(
        role: Role,
        slot: SlotKind,
        value: ValueKind,
        cardinality: Cardinality,
        alt_id: bool,
    ) -> Self {
        Self {
            role,
            slot,
            value,
            cardinality,
            alt_id,
        }
    }

    /// Catch-all spec for unrecognized property names.
    pub(crate) fn extension(name: &str) -> Self {
        Self::new(
            Role::Extended(name.to_ascii_uppercase()),
            SlotKind::String,
            ValueKind::Text,
            Cardinality::Any,
            false,
        )
    }
}

/// Resolves the behavior of `name` under `version`.
#[must_use]
pub fn lookup(version: FormatVersion, name: &str) -> PropertySpec {
    match version.format() {
        Format::Card => vcard::lookup(version, name),
        Format::Calendar => ical::lookup(version, name),
    }
}

/// Roles a well-formed block of the given kind must carry.
#[must_use]
pub fn required_roles(
    version: FormatVersion,
    kind: crate::rfc::model::ComponentKind,
) -> &'static [Role] {
    match version.format() {
        Format::Card => vcard::required_roles(version),
        Format::Calendar => ical::required_roles(version, kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_versions() {
        assert_eq!(
            FormatVersion::resolve(Format::Card, "4.0"),
            Some(FormatVersion::VCard40)
        );
        assert_eq!(
            FormatVersion::resolve(Format::Calendar, "1.0"),
            Some(FormatVersion::Calendar10)
        );
        assert_eq!(FormatVersion::resolve(Format::Card, "5.0"), None);
        assert_eq!(FormatVersion::resolve(Format::Calendar, "4.0"), None);
    }

    #[test]
    fn unknown_name_falls_back_to_extension() {
        let spec = lookup(FormatVersion::VCard40, "X-SOCIALPROFILE");
        assert_eq!(spec.role, Role::Extended("X-SOCIALPROFILE".to_string()));
        assert_eq!(spec.cardinality, Cardinality::Any);
        assert_eq!(spec.slot, SlotKind::String);
    }

    #[test]
    fn role_order_is_stable() {
        assert!(Role::ProdId < Role::FormattedName);
        assert!(Role::FormattedName < Role::Name);
        assert!(Role::TzUrl < Role::Extended("X-A".to_string()));
        assert!(Role::Extended("X-A".to_string()) < Role::Extended("X-B".to_string()));
    }
}
