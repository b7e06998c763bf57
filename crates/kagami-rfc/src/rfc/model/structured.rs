//! Structured value payloads.
//!
//! These are the typed bodies of multi-field properties (N, ADR, ORG,
//! GENDER, GEO) and transfer-encoded media values.

/// Structured name (the N property).
///
/// All components are optional; each may carry multiple comma-separated
/// values in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    /// Family names (surnames).
    pub family: Vec<String>,
    /// Given names.
    pub given: Vec<String>,
    /// Additional names (middle names).
    pub additional: Vec<String>,
    /// Honorific prefixes (e.g., "Dr.").
    pub prefixes: Vec<String>,
    /// Honorific suffixes (e.g., "Jr.").
    pub suffixes: Vec<String>,
}

impl StructuredName {
    /// Creates a name with family and given components.
    #[must_use]
    pub fn simple(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family: vec![family.into()],
            given: vec![given.into()],
            ..Self::default()
        }
    }

    /// Formats as a display name (given + family).
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut parts = Vec::new();
        if !self.given.is_empty() {
            parts.push(self.given.join(" "));
        }
        if !self.family.is_empty() {
            parts.push(self.family.join(" "));
        }
        parts.join(" ")
    }
}

/// Delivery address (the ADR property).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredAddress {
    /// Post office box.
    pub po_box: Vec<String>,
    /// Extended address (apartment or suite number).
    pub extended: Vec<String>,
    /// Street address.
    pub street: Vec<String>,
    /// Locality (city).
    pub locality: Vec<String>,
    /// Region (state or province).
    pub region: Vec<String>,
    /// Postal code.
    pub postal_code: Vec<String>,
    /// Country name.
    pub country: Vec<String>,
}

impl StructuredAddress {
    /// Returns whether every component is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.po_box.is_empty()
            && self.extended.is_empty()
            && self.street.is_empty()
            && self.locality.is_empty()
            && self.region.is_empty()
            && self.postal_code.is_empty()
            && self.country.is_empty()
    }
}

/// Organization (the ORG property).
///
/// First field is the organizational name, subsequent fields are units in
/// decreasing specificity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organization {
    pub name: String,
    pub units: Vec<String>,
}

/// Gender (the GENDER property): a sex component and optional free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gender {
    /// The sex component (M, F, O, N, U, or empty).
    pub sex: String,
    /// Free-form identity text after the semicolon.
    pub identity: Option<String>,
}

/// Geographic position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

/// A media value: either a reference or inline transfer-encoded bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    /// A URI reference (including data: URIs, kept verbatim).
    Uri(String),
    /// Decoded Base64 bytes.
    Binary(Vec<u8>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_joins_components() {
        let name = StructuredName::simple("Doe", "Jane");
        assert_eq!(name.display_name(), "Jane Doe");
    }

    #[test]
    fn empty_address() {
        assert!(StructuredAddress::default().is_empty());
        let addr = StructuredAddress {
            locality: vec!["Anytown".to_string()],
            ..StructuredAddress::default()
        };
        assert!(!addr.is_empty());
    }
}
