//! Block containers.

use std::collections::BTreeMap;

use kagami_core::diagnostics::{Diagnostic, DiagnosticSink};
use kagami_core::messages::MessageId;

use super::part::Part;
use super::value_info::ValueInfo;
use crate::rfc::registry::{self, Format, FormatVersion, Role};
use crate::rfc::syntax::{ParseError, ParseErrorKind, ParseResult};

/// Kind of a BEGIN/END block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// VCARD block.
    Card,
    /// VCALENDAR wrapper block.
    Calendar,
    /// VEVENT component.
    Event,
    /// VTODO component.
    Todo,
    /// VJOURNAL component.
    Journal,
    /// VFREEBUSY component.
    FreeBusy,
    /// VTIMEZONE component.
    Timezone,
    /// STANDARD sub-component of VTIMEZONE.
    Standard,
    /// DAYLIGHT sub-component of VTIMEZONE.
    Daylight,
    /// VALARM component.
    Alarm,
    /// Unknown/X-component.
    Unknown,
}

impl ComponentKind {
    /// Returns the block name for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "VCARD",
            Self::Calendar => "VCALENDAR",
            Self::Event => "VEVENT",
            Self::Todo => "VTODO",
            Self::Journal => "VJOURNAL",
            Self::FreeBusy => "VFREEBUSY",
            Self::Timezone => "VTIMEZONE",
            Self::Standard => "STANDARD",
            Self::Daylight => "DAYLIGHT",
            Self::Alarm => "VALARM",
            Self::Unknown => "X-UNKNOWN",
        }
    }

    /// Parses a block name (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "VCARD" => Self::Card,
            "VCALENDAR" => Self::Calendar,
            "VEVENT" => Self::Event,
            "VTODO" => Self::Todo,
            "VJOURNAL" => Self::Journal,
            "VFREEBUSY" => Self::FreeBusy,
            "VTIMEZONE" => Self::Timezone,
            "STANDARD" => Self::Standard,
            "DAYLIGHT" => Self::Daylight,
            "VALARM" => Self::Alarm,
            _ => Self::Unknown,
        }
    }

    /// Whether this kind opens a top-level block (carries its own VERSION).
    #[must_use]
    pub const fn is_top_level(self) -> bool {
        matches!(self, Self::Card | Self::Calendar)
    }

    /// The format family a top-level block of this kind belongs to.
    #[must_use]
    pub const fn format(self) -> Format {
        match self {
            Self::Card => Format::Card,
            _ => Format::Calendar,
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One decoded BEGIN/END block.
///
/// Holds decoded values in three role-keyed slot maps (plain strings,
/// structured parts, numbers) plus nested components. A role's occurrence
/// count obeys the cardinality resolved from the registry for the stamped
/// version; violations surface at insertion time.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    /// Block kind.
    pub kind: ComponentKind,
    /// Original block name (preserved for X-components).
    pub name: String,
    /// The stamped version. Nested components inherit their parent's.
    pub version: FormatVersion,
    pub(crate) strings: BTreeMap<Role, Vec<ValueInfo<String>>>,
    pub(crate) parts: BTreeMap<Role, Vec<ValueInfo<Part>>>,
    pub(crate) numbers: BTreeMap<Role, Vec<ValueInfo<f64>>>,
    /// Nested components, owned exclusively by this block.
    pub components: Vec<Container>,
}

impl Container {
    /// Creates an empty container of a known kind.
    #[must_use]
    pub fn new(kind: ComponentKind, version: FormatVersion) -> Self {
        Self {
            kind,
            name: kind.as_str().to_string(),
            version,
            strings: BTreeMap::new(),
            parts: BTreeMap::new(),
            numbers: BTreeMap::new(),
            components: Vec::new(),
        }
    }

    /// Creates an empty container with a custom block name.
    #[must_use]
    pub fn custom(name: impl Into<String>, version: FormatVersion) -> Self {
        let name = name.into().to_ascii_uppercase();
        let kind = ComponentKind::parse(&name);
        Self {
            name,
            ..Self::new(kind, version)
        }
    }

    // --- Slot access ---

    /// String occurrences filed under a role.
    #[must_use]
    pub fn strings(&self, role: &Role) -> &[ValueInfo<String>] {
        self.strings.get(role).map_or(&[], Vec::as_slice)
    }

    /// Structured part occurrences filed under a role.
    #[must_use]
    pub fn parts(&self, role: &Role) -> &[ValueInfo<Part>] {
        self.parts.get(role).map_or(&[], Vec::as_slice)
    }

    /// Number occurrences filed under a role.
    #[must_use]
    pub fn numbers(&self, role: &Role) -> &[ValueInfo<f64>] {
        self.numbers.get(role).map_or(&[], Vec::as_slice)
    }

    /// Returns occurrence count and the first occurrence's ALTID for a role,
    /// whichever slot map it lives in.
    pub(crate) fn slot_state(&self, role: &Role) -> (usize, Option<&str>) {
        if let Some(list) = self.strings.get(role) {
            (list.len(), list.first().and_then(|v| v.alt_id.as_deref()))
        } else if let Some(list) = self.parts.get(role) {
            (list.len(), list.first().and_then(|v| v.alt_id.as_deref()))
        } else if let Some(list) = self.numbers.get(role) {
            (list.len(), list.first().and_then(|v| v.alt_id.as_deref()))
        } else {
            (0, None)
        }
    }

    // --- Insertion ---

    /// Adds a string value under a role, enforcing cardinality.
    ///
    /// ## Errors
    /// Fails with `CardinalityViolation` when the role is single-occurrence
    /// and already occupied by a different ALTID group.
    pub fn add_string(&mut self, role: Role, info: ValueInfo<String>) -> ParseResult<()> {
        self.insert_string(role, info, 0)
    }

    /// Adds a structured part under a role, enforcing cardinality.
    ///
    /// ## Errors
    /// Fails with `CardinalityViolation` as for [`Self::add_string`].
    pub fn add_part(&mut self, role: Role, info: ValueInfo<Part>) -> ParseResult<()> {
        self.insert_part(role, info, 0)
    }

    /// Adds a number under a role, enforcing cardinality.
    ///
    /// ## Errors
    /// Fails with `CardinalityViolation` as for [`Self::add_string`].
    pub fn add_number(&mut self, role: Role, info: ValueInfo<f64>) -> ParseResult<()> {
        self.insert_number(role, info, 0)
    }

    pub(crate) fn insert_string(
        &mut self,
        role: Role,
        info: ValueInfo<String>,
        line: usize,
    ) -> ParseResult<()> {
        self.check_cardinality(&role, info.alt_id.as_deref(), &info.name, line)?;
        self.strings.entry(role).or_default().push(info);
        Ok(())
    }

    pub(crate) fn insert_part(
        &mut self,
        role: Role,
        info: ValueInfo<Part>,
        line: usize,
    ) -> ParseResult<()> {
        self.check_cardinality(&role, info.alt_id.as_deref(), &info.name, line)?;
        self.parts.entry(role).or_default().push(info);
        Ok(())
    }

    pub(crate) fn insert_number(
        &mut self,
        role: Role,
        info: ValueInfo<f64>,
        line: usize,
    ) -> ParseResult<()> {
        self.check_cardinality(&role, info.alt_id.as_deref(), &info.name, line)?;
        self.numbers.entry(role).or_default().push(info);
        Ok(())
    }

    /// Rejects an insertion that would overfill a single-occurrence slot.
    ///
    /// Occurrences sharing the slot's ALTID group count as one logical
    /// value; the first occupant wins otherwise.
    fn check_cardinality(
        &self,
        role: &Role,
        alt_id: Option<&str>,
        name: &str,
        line: usize,
    ) -> ParseResult<()> {
        let spec = registry::lookup(self.version, role.canonical_name());
        if !spec.cardinality.at_most_one() {
            return Ok(());
        }

        let (count, existing_alt) = self.slot_state(role);
        if count == 0 {
            return Ok(());
        }

        let same_alt_group = spec.alt_id && alt_id.is_some() && alt_id == existing_alt;
        if same_alt_group {
            return Ok(());
        }

        Err(
            ParseError::new(ParseErrorKind::CardinalityViolation, line, name).with_context(
                format!(
                    "at most one {} occurrence allowed for version {}",
                    role.canonical_name(),
                    self.version
                ),
            ),
        )
    }

    /// Warns through the sink for each required role this block lacks.
    pub(crate) fn report_missing_required(&self, sink: &mut dyn DiagnosticSink, line: usize) {
        for role in registry::required_roles(self.version, self.kind) {
            if self.slot_state(role).0 == 0 {
                sink.report(
                    Diagnostic::warning(MessageId::MissingRequiredProperty, line)
                        .with_arg(role.canonical_name()),
                );
            }
        }
    }

    // --- Nested components ---

    /// Adds a nested component.
    pub fn add_component(&mut self, component: Container) {
        self.components.push(component);
    }

    /// Returns nested components of a specific kind.
    #[must_use]
    pub fn components_of_kind(&self, kind: ComponentKind) -> Vec<&Container> {
        self.components.iter().filter(|c| c.kind == kind).collect()
    }

    /// Returns all VEVENT children.
    #[must_use]
    pub fn events(&self) -> Vec<&Container> {
        self.components_of_kind(ComponentKind::Event)
    }

    /// Returns all VTODO children.
    #[must_use]
    pub fn todos(&self) -> Vec<&Container> {
        self.components_of_kind(ComponentKind::Todo)
    }

    /// Returns all VALARM children.
    #[must_use]
    pub fn alarms(&self) -> Vec<&Container> {
        self.components_of_kind(ComponentKind::Alarm)
    }

    /// Returns all VTIMEZONE children.
    #[must_use]
    pub fn timezones(&self) -> Vec<&Container> {
        self.components_of_kind(ComponentKind::Timezone)
    }

    // --- Convenience accessors ---

    fn first_string(&self, role: &Role) -> Option<&str> {
        self.strings(role).first().map(|v| v.value.as_str())
    }

    /// The FN value, if present.
    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.first_string(&Role::FormattedName)
    }

    /// The UID value, if present.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.first_string(&Role::Uid)
    }

    /// The SUMMARY value, if present.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.first_string(&Role::Summary)
    }

    /// The DESCRIPTION value, if present.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.first_string(&Role::Description)
    }

    /// Serializes this container back to its textual form.
    #[must_use]
    pub fn encode(&self) -> String {
        crate::rfc::build::serialize(self)
    }

    /// Structural deep-equality.
    ///
    /// Identical role sets, identical slot lengths per role, and
    /// pairwise-equal values at matching indices, recursively through
    /// nested components. Returns false on any mismatch rather than
    /// panicking.
    #[must_use]
    pub fn structurally_equals(&self, other: &Self) -> bool {
        super::compare::containers_equal(self, other)
    }
}
