//! Serialization.
//!
//! Regenerates text from a container: BEGIN, the VERSION stamp for
//! top-level blocks, every slot walked in stable role declaration order
//! (not insertion order), nested components, END. Values re-encode
//! through the same codecs that decoded them; long lines fold at the
//! recommended width and lines end with CRLF.

use std::collections::BTreeSet;

use crate::rfc::model::Container;
use crate::rfc::registry::{self, Role, SlotKind, ValueKind};
use crate::rfc::syntax::{Parameter, escape_text, fold_line};

/// Serializes a container (and its nested components) to text.
#[must_use]
pub fn serialize(container: &Container) -> String {
    let mut out = String::new();
    write_container(&mut out, container);
    out
}

/// Serializes a sequence of sibling containers.
#[must_use]
pub fn serialize_all(containers: &[Container]) -> String {
    let mut out = String::new();
    for container in containers {
        write_container(&mut out, container);
    }
    out
}

fn write_container(out: &mut String, container: &Container) {
    push_line(out, &format!("BEGIN:{}", container.name));
    if container.kind.is_top_level() {
        push_line(out, &format!("VERSION:{}", container.version));
    }

    let mut roles: BTreeSet<&Role> = BTreeSet::new();
    roles.extend(container.strings.keys());
    roles.extend(container.parts.keys());
    roles.extend(container.numbers.keys());

    for role in roles {
        for info in container.strings(role) {
            let value = encode_string_value(container, &info.name, &info.value);
            push_property(out, &info.group, &info.name, &info.params, &value);
        }
        for info in container.parts(role) {
            let value = info.value.encode(container.version);
            push_property(out, &info.group, &info.name, &info.params, &value);
        }
        for info in container.numbers(role) {
            let value = encode_number(info.value);
            push_property(out, &info.group, &info.name, &info.params, &value);
        }
    }

    for component in &container.components {
        write_container(out, component);
    }

    push_line(out, &format!("END:{}", container.name));
}

/// Escapes a string-slot value unless its codec is verbatim (URIs).
fn encode_string_value(container: &Container, name: &str, value: &str) -> String {
    let spec = registry::lookup(container.version, name);
    match (spec.slot, spec.value) {
        (SlotKind::String, ValueKind::Uri) => value.to_string(),
        _ => escape_text(value),
    }
}

fn encode_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        #[expect(clippy::cast_possible_truncation, reason = "fract checked above")]
        let int = value as i64;
        int.to_string()
    } else {
        value.to_string()
    }
}

fn push_property(
    out: &mut String,
    group: &Option<String>,
    name: &str,
    params: &[Parameter],
    value: &str,
) {
    let mut line = String::new();
    if let Some(group) = group {
        line.push_str(group);
        line.push('.');
    }
    line.push_str(name);
    for param in params {
        line.push(';');
        line.push_str(&param.name);
        line.push('=');
        let encoded: Vec<String> = param.values.iter().map(|v| encode_param_value(v)).collect();
        line.push_str(&encoded.join(","));
    }
    line.push(':');
    line.push_str(value);
    push_line(out, &line);
}

/// Encodes one parameter value: RFC 6868 caret escapes, then quotes when
/// the value carries structural delimiters.
fn encode_param_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '^' => encoded.push_str("^^"),
            '"' => encoded.push_str("^'"),
            '\n' => encoded.push_str("^n"),
            '\r' => {}
            _ => encoded.push(c),
        }
    }

    if encoded.contains([':', ';', ',']) {
        format!("\"{encoded}\"")
    } else {
        encoded
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(&fold_line(line));
    out.push_str("\r\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::model::{ComponentKind, Part, ValueInfo};
    use crate::rfc::registry::FormatVersion;
    use crate::rfc::syntax::Parameter;
    use crate::rfc::values::{Date, DateTime, Time};

    fn card() -> Container {
        Container::new(ComponentKind::Card, FormatVersion::VCard40)
    }

    #[test]
    fn emits_begin_version_end() {
        let output = serialize(&card());
        assert_eq!(output, "BEGIN:VCARD\r\nVERSION:4.0\r\nEND:VCARD\r\n");
    }

    #[test]
    fn walks_roles_in_declaration_order_not_insertion_order() {
        let mut c = card();
        c.add_string(Role::Note, ValueInfo::new("NOTE", "last".to_string()))
            .unwrap();
        c.add_string(Role::FormattedName, ValueInfo::new("FN", "Jane".to_string()))
            .unwrap();

        let output = serialize(&c);
        let fn_pos = output.find("FN:").unwrap();
        let note_pos = output.find("NOTE:").unwrap();
        assert!(fn_pos < note_pos);
    }

    #[test]
    fn escapes_text_but_not_uris() {
        let mut c = card();
        c.add_string(Role::FormattedName, ValueInfo::new("FN", "Jane".to_string()))
            .unwrap();
        c.add_string(
            Role::Note,
            ValueInfo::new("NOTE", "one, two; three\nfour".to_string()),
        )
        .unwrap();
        c.add_string(
            Role::Url,
            ValueInfo::new("URL", "https://example.com/a,b".to_string()),
        )
        .unwrap();

        let output = serialize(&c);
        assert!(output.contains("NOTE:one\\, two\\; three\\nfour"));
        assert!(output.contains("URL:https://example.com/a,b"));
    }

    #[test]
    fn quotes_param_values_with_delimiters() {
        let mut c = card();
        let info = ValueInfo::new("FN", "Jane".to_string())
            .with_param(Parameter::new("CN", "Doe, Jane"))
            .with_param(Parameter::new("X-QUOTE", "say \"hi\""));
        c.add_string(Role::FormattedName, info).unwrap();

        let output = serialize(&c);
        assert!(output.contains(";CN=\"Doe, Jane\""));
        assert!(output.contains(";X-QUOTE=say ^'hi^'"));
    }

    #[test]
    fn emits_group_prefix() {
        let mut c = card();
        c.add_string(Role::FormattedName, ValueInfo::new("FN", "Jane".to_string()))
            .unwrap();
        let info = ValueInfo {
            group: Some("item1".to_string()),
            ..ValueInfo::new("TEL", "+1-555-0100".to_string())
        };
        c.add_string(Role::Telephone, info).unwrap();

        let output = serialize(&c);
        assert!(output.contains("item1.TEL:+1-555-0100"));
    }

    #[test]
    fn folds_long_lines() {
        let mut c = card();
        c.add_string(Role::FormattedName, ValueInfo::new("FN", "Jane".to_string()))
            .unwrap();
        c.add_string(Role::Note, ValueInfo::new("NOTE", "x".repeat(200)))
            .unwrap();

        let output = serialize(&c);
        let long = output.lines().find(|l| l.starts_with("NOTE")).unwrap();
        assert!(long.len() <= 75);
        assert!(output.contains("\r\n x"));
    }

    #[test]
    fn nested_components_emit_without_version() {
        let mut calendar = Container::new(ComponentKind::Calendar, FormatVersion::Calendar20);
        let mut event = Container::new(ComponentKind::Event, FormatVersion::Calendar20);
        event
            .add_string(Role::Uid, ValueInfo::new("UID", "e1".to_string()))
            .unwrap();
        event
            .add_part(
                Role::DateStamp,
                ValueInfo::new(
                    "DTSTAMP",
                    Part::DateTime(DateTime {
                        date: Date {
                            year: 2026,
                            month: 1,
                            day: 23,
                        },
                        time: Time {
                            hour: 12,
                            minute: 0,
                            second: 0,
                            utc: true,
                        },
                    }),
                ),
            )
            .unwrap();
        calendar.add_component(event);

        let output = serialize(&calendar);
        assert_eq!(output.matches("VERSION:").count(), 1);
        assert!(output.contains("BEGIN:VEVENT\r\nUID:e1\r\nDTSTAMP:20260123T120000Z\r\nEND:VEVENT"));
    }

    #[test]
    fn numbers_emit_without_trailing_fraction() {
        let mut event = Container::new(ComponentKind::Event, FormatVersion::Calendar20);
        event
            .add_number(Role::Sequence, ValueInfo::new("SEQUENCE", 3.0))
            .unwrap();
        let output = serialize(&event);
        assert!(output.contains("SEQUENCE:3\r\n"));
    }
}
