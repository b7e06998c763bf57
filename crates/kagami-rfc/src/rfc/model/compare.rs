//! Structural equality over containers.
//!
//! Safe for hot test loops: any size, role-set, or value mismatch returns
//! false, nothing panics. Order within a slot is insertion order and is
//! compared as such.

use std::collections::BTreeMap;

use super::container::Container;
use super::value_info::ValueInfo;
use crate::rfc::registry::Role;

/// Deep structural equality of two containers.
#[must_use]
pub fn containers_equal(a: &Container, b: &Container) -> bool {
    if a.kind != b.kind || a.version != b.version || !a.name.eq_ignore_ascii_case(&b.name) {
        return false;
    }

    if !slots_equal(&a.strings, &b.strings)
        || !slots_equal(&a.parts, &b.parts)
        || !slots_equal(&a.numbers, &b.numbers)
    {
        return false;
    }

    a.components.len() == b.components.len()
        && a.components
            .iter()
            .zip(&b.components)
            .all(|(ca, cb)| containers_equal(ca, cb))
}

/// Compares one slot map: identical role sets, identical lengths per
/// role, pairwise-equal occurrences at matching indices.
fn slots_equal<T: PartialEq>(
    a: &BTreeMap<Role, Vec<ValueInfo<T>>>,
    b: &BTreeMap<Role, Vec<ValueInfo<T>>>,
) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().all(|(role, list_a)| {
        b.get(role)
            .is_some_and(|list_b| list_a.len() == list_b.len() && list_a == list_b)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::model::ComponentKind;
    use crate::rfc::registry::FormatVersion;

    fn card() -> Container {
        let mut c = Container::new(ComponentKind::Card, FormatVersion::VCard40);
        c.add_string(Role::FormattedName, ValueInfo::new("FN", "Jane".to_string()))
            .unwrap();
        c
    }

    #[test]
    fn equal_containers() {
        assert!(containers_equal(&card(), &card()));
    }

    #[test]
    fn value_mismatch() {
        let a = card();
        let mut b = Container::new(ComponentKind::Card, FormatVersion::VCard40);
        b.add_string(Role::FormattedName, ValueInfo::new("FN", "John".to_string()))
            .unwrap();
        assert!(!containers_equal(&a, &b));
    }

    #[test]
    fn role_set_mismatch() {
        let a = card();
        let mut b = card();
        b.add_string(Role::Note, ValueInfo::new("NOTE", "hi".to_string()))
            .unwrap();
        assert!(!containers_equal(&a, &b));
    }

    #[test]
    fn slot_length_mismatch() {
        let mut a = card();
        let mut b = card();
        a.add_string(Role::Email, ValueInfo::new("EMAIL", "x@y.z".to_string()))
            .unwrap();
        b.add_string(Role::Email, ValueInfo::new("EMAIL", "x@y.z".to_string()))
            .unwrap();
        b.add_string(Role::Email, ValueInfo::new("EMAIL", "q@y.z".to_string()))
            .unwrap();
        assert!(!containers_equal(&a, &b));
    }

    #[test]
    fn occurrence_order_is_significant() {
        let mut a = card();
        let mut b = card();
        a.add_string(Role::Email, ValueInfo::new("EMAIL", "1@y.z".to_string()))
            .unwrap();
        a.add_string(Role::Email, ValueInfo::new("EMAIL", "2@y.z".to_string()))
            .unwrap();
        b.add_string(Role::Email, ValueInfo::new("EMAIL", "2@y.z".to_string()))
            .unwrap();
        b.add_string(Role::Email, ValueInfo::new("EMAIL", "1@y.z".to_string()))
            .unwrap();
        assert!(!containers_equal(&a, &b));
    }

    #[test]
    fn version_mismatch() {
        let a = card();
        let mut b = Container::new(ComponentKind::Card, FormatVersion::VCard30);
        b.add_string(Role::FormattedName, ValueInfo::new("FN", "Jane".to_string()))
            .unwrap();
        assert!(!containers_equal(&a, &b));
    }
}
