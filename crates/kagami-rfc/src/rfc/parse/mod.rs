//! Stream parsing.
//!
//! Drives the block state machine over a logical-line stream: BEGIN, a
//! VERSION stamp immediately after (top-level blocks only), properties and
//! nested blocks, END. Property-local problems drop the property and warn
//! through the diagnostic sink; desync and unknown versions abort the
//! whole parse, since block bookkeeping can no longer be trusted.

use kagami_core::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use kagami_core::messages::MessageId;

use crate::rfc::model::{ComponentKind, Container, Part, ValueInfo};
use crate::rfc::registry::{self, FormatVersion, PropertySpec, SlotKind, ValueKind};
use crate::rfc::syntax::{
    ContentLine, LogicalLine, LogicalLines, ParseError, ParseErrorKind, ParseResult,
    decode_quoted_printable, logical_lines, parse_content_line, unescape_text,
};

/// Parses every block in the input, reporting recoverable problems to the
/// default tracing sink.
///
/// ## Errors
/// Fails with `StructuralDesync` or `UnknownVersion`; see
/// [`parse_all_with`].
pub fn parse_all(input: &str) -> ParseResult<Vec<Container>> {
    let mut sink = TracingSink::default();
    parse_all_with(input, &mut sink)
}

/// Parses every block in the input with a caller-supplied diagnostic sink.
///
/// Returns either the complete sequence of valid containers or a single
/// terminating error; every dropped property is reported through the sink
/// first.
///
/// ## Errors
/// Fails with `StructuralDesync` on an END without a matching BEGIN, a
/// misplaced or repeated VERSION, or a stream ending mid-block, and with
/// `UnknownVersion` when a VERSION value is outside the supported set for
/// its format.
#[tracing::instrument(skip(input, sink), fields(input_len = input.len()))]
pub fn parse_all_with(
    input: &str,
    sink: &mut dyn DiagnosticSink,
) -> ParseResult<Vec<Container>> {
    tracing::debug!("Parsing document stream");

    let mut lines = logical_lines(input);
    let mut containers = Vec::new();

    while let Some(line) = lines.next() {
        let Ok(token) = parse_content_line(&line, false) else {
            sink.report(
                Diagnostic::warning(MessageId::SkippedStrayLine, line.number)
                    .with_arg(line.text.as_str()),
            );
            continue;
        };

        match token.name.as_str() {
            "BEGIN" => {
                let container = parse_top_level_block(&mut lines, &token, &line, sink)?;
                containers.push(container);
            }
            "END" => {
                return Err(
                    ParseError::new(ParseErrorKind::StructuralDesync, line.number, line.text.as_str())
                        .with_context("END without matching BEGIN"),
                );
            }
            "VERSION" => {
                return Err(
                    ParseError::new(ParseErrorKind::StructuralDesync, line.number, line.text.as_str())
                        .with_context("VERSION before BEGIN"),
                );
            }
            _ => {
                sink.report(
                    Diagnostic::warning(MessageId::SkippedStrayLine, line.number)
                        .with_arg(line.text.as_str()),
                );
            }
        }
    }

    tracing::debug!(count = containers.len(), "Parsed stream");
    Ok(containers)
}

/// Parses one top-level block: resolves the VERSION stamp, then the body.
fn parse_top_level_block(
    lines: &mut LogicalLines<'_>,
    begin: &ContentLine,
    begin_line: &LogicalLine,
    sink: &mut dyn DiagnosticSink,
) -> ParseResult<Container> {
    let block_name = begin.raw_value.trim().to_ascii_uppercase();
    let kind = ComponentKind::parse(&block_name);
    if !kind.is_top_level() {
        return Err(ParseError::new(
            ParseErrorKind::StructuralDesync,
            begin_line.number,
            begin_line.text.as_str(),
        )
        .with_context(format!("{block_name} cannot open a top-level block")));
    }

    let desync = |line: &LogicalLine, context: &str| {
        ParseError::new(ParseErrorKind::StructuralDesync, line.number, line.text.as_str())
            .with_context(context.to_string())
    };

    // The version stamp must immediately follow BEGIN.
    let version_line = lines
        .next()
        .ok_or_else(|| desync(begin_line, "stream ended before VERSION"))?;
    let version_token = parse_content_line(&version_line, false)
        .map_err(|_| desync(&version_line, "VERSION must immediately follow BEGIN"))?;
    if version_token.name != "VERSION" {
        return Err(desync(&version_line, "VERSION must immediately follow BEGIN"));
    }

    let version = FormatVersion::resolve(kind.format(), &version_token.raw_value).ok_or_else(
        || {
            ParseError::new(
                ParseErrorKind::UnknownVersion,
                version_line.number,
                version_line.text.as_str(),
            )
            .with_context(format!(
                "unsupported {} version: {}",
                block_name, version_token.raw_value
            ))
        },
    )?;

    tracing::debug!(block = %block_name, version = %version, "Opened block");

    let mut container = Container::custom(block_name.as_str(), version);
    parse_block_body(lines, &mut container, &block_name, begin_line.number, sink)?;
    Ok(container)
}

/// Accumulates properties and nested blocks until the matching END.
fn parse_block_body(
    lines: &mut LogicalLines<'_>,
    container: &mut Container,
    block_name: &str,
    begin_line_num: usize,
    sink: &mut dyn DiagnosticSink,
) -> ParseResult<()> {
    let legacy = container.version.is_legacy();
    let mut last_line = begin_line_num;

    loop {
        let Some(line) = lines.next() else {
            return Err(
                ParseError::new(ParseErrorKind::StructuralDesync, last_line, "").with_context(
                    format!("stream ended before END:{block_name}"),
                ),
            );
        };
        last_line = line.number;

        let token = match parse_content_line(&line, legacy) {
            Ok(token) => token,
            Err(err) => {
                tracing::warn!(error = %err, "Dropped malformed property line");
                sink.report(
                    Diagnostic::warning(MessageId::DroppedMalformedLine, line.number)
                        .with_arg(line.text.as_str()),
                );
                continue;
            }
        };

        match token.name.as_str() {
            "BEGIN" => {
                // Nested blocks inherit the parent's version stamp.
                let nested_name = token.raw_value.trim().to_ascii_uppercase();
                let mut nested = Container::custom(nested_name.as_str(), container.version);
                parse_block_body(lines, &mut nested, &nested_name, line.number, sink)?;
                container.add_component(nested);
            }
            "END" => {
                let end_name = token.raw_value.trim().to_ascii_uppercase();
                if end_name != block_name {
                    return Err(ParseError::new(
                        ParseErrorKind::StructuralDesync,
                        line.number,
                        line.text.as_str(),
                    )
                    .with_context(format!(
                        "expected END:{block_name}, got END:{end_name}"
                    )));
                }
                container.report_missing_required(sink, line.number);
                return Ok(());
            }
            "VERSION" => {
                return Err(ParseError::new(
                    ParseErrorKind::StructuralDesync,
                    line.number,
                    line.text.as_str(),
                )
                .with_context("VERSION must appear exactly once, immediately after BEGIN"));
            }
            _ => decode_property(container, &token, line.number, sink),
        }
    }
}

/// Decodes one property into the container, recovering locally on failure.
fn decode_property(
    container: &mut Container,
    token: &ContentLine,
    line: usize,
    sink: &mut dyn DiagnosticSink,
) {
    let spec = registry::lookup(container.version, &token.name);

    if let Err(err) = insert_decoded(container, token, &spec, line) {
        tracing::warn!(error = %err, property = %token.name, "Dropped property");
        let diagnostic = if err.kind == ParseErrorKind::CardinalityViolation {
            Diagnostic::warning(MessageId::DroppedCardinalityViolation, line)
                .with_arg(token.name.as_str())
        } else {
            Diagnostic::warning(MessageId::DroppedInvalidValue, line)
                .with_arg(token.name.as_str())
                .with_arg(err.context.as_str())
        };
        sink.report(diagnostic);
    }
}

/// Decodes the value through the resolved codec and files it into the
/// matching slot map.
fn insert_decoded(
    container: &mut Container,
    token: &ContentLine,
    spec: &PropertySpec,
    line: usize,
) -> ParseResult<()> {
    match spec.slot {
        SlotKind::String => {
            let value = match spec.value {
                ValueKind::Uri => token.raw_value.clone(),
                _ if token.is_quoted_printable() => decode_quoted_printable(&token.raw_value),
                _ => unescape_text(&token.raw_value),
            };
            let info = consume_transfer_encoding(ValueInfo::from_token(token, value), token);
            container.insert_string(spec.role.clone(), info, line)
        }
        SlotKind::Number => {
            let value: f64 = token.raw_value.trim().parse().map_err(|_| {
                ParseError::new(ParseErrorKind::InvalidValueEncoding, line, token.raw_value.as_str())
                    .with_context("expected numeric value")
            })?;
            container.insert_number(spec.role.clone(), ValueInfo::from_token(token, value), line)
        }
        SlotKind::Part => {
            let kind = effective_value_kind(spec.value, token);
            let parts = Part::decode(kind, token, container.version, line)?;
            for part in parts {
                let info = consume_transfer_encoding(ValueInfo::from_token(token, part), token);
                container.insert_part(spec.role.clone(), info, line)?;
            }
            Ok(())
        }
    }
}

/// Drops a quoted-printable ENCODING parameter once the value is decoded.
///
/// The transfer encoding is consumed at decode time; re-emission writes
/// plain escaped text, so the parameter must not survive into the model.
/// Base64 is different: binary parts re-encode to Base64 and keep it.
fn consume_transfer_encoding<T>(mut info: ValueInfo<T>, token: &ContentLine) -> ValueInfo<T> {
    if token.is_quoted_printable() {
        info.params
            .retain(|p| !p.name.eq_ignore_ascii_case("ENCODING"));
    }
    info
}

/// Applies an explicit VALUE= override to the registry's default codec.
fn effective_value_kind(default: ValueKind, token: &ContentLine) -> ValueKind {
    match token
        .value_type()
        .map(str::to_ascii_uppercase)
        .as_deref()
    {
        Some("DATE") => ValueKind::Date,
        Some("DATE-TIME") => ValueKind::DateTime,
        Some("PERIOD") => ValueKind::Period,
        Some("DURATION") => ValueKind::Duration,
        Some("UTC-OFFSET") => ValueKind::UtcOffset,
        Some("TEXT") => ValueKind::Text,
        Some("BINARY") => ValueKind::Media,
        _ => default,
    }
}
