//! One decoded property occurrence.

use crate::rfc::syntax::{ContentLine, Parameter};

/// A decoded occurrence of a property, as filed into a container slot.
///
/// Keeps the source name, group label, ALTID, and parameter list so
/// serialization can reproduce the original line around the re-encoded
/// value. Owned exclusively by the slot list it is inserted into.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueInfo<T> {
    /// The decoded value.
    pub value: T,
    /// Property name as it appeared in the source (or the canonical name
    /// for programmatic values). Uppercase.
    pub name: String,
    /// Group label for cross-referencing related properties.
    pub group: Option<String>,
    /// ALTID value when this occurrence is one of several alternative
    /// representations of the same logical value.
    pub alt_id: Option<String>,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
}

impl<T> ValueInfo<T> {
    /// Creates a bare occurrence with no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            value,
            name: name.into().to_ascii_uppercase(),
            group: None,
            alt_id: None,
            params: Vec::new(),
        }
    }

    /// Creates an occurrence carrying the source token's surroundings.
    #[must_use]
    pub fn from_token(token: &ContentLine, value: T) -> Self {
        Self {
            value,
            name: token.name.clone(),
            group: token.group.clone(),
            alt_id: token.alt_id().map(str::to_string),
            params: token.params.clone(),
        }
    }

    /// Adds a parameter.
    #[must_use]
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    /// Returns the first value of a parameter.
    #[must_use]
    pub fn param_value(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))?
            .value()
    }
}
