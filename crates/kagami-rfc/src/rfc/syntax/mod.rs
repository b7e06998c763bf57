//! Shared line-level syntax: unfolding, tokenization, parameters, folding.
//!
//! Both formats use the same content-line shape
//! (`[group.]NAME[;param]*:value`), so this layer is format-agnostic; the
//! only per-generation switches are the legacy quoted-printable soft break
//! in the unfolder and the bare-shorthand parameter table.

mod error;
mod escape;
mod fold;
mod lexer;
mod params;
mod unfold;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use escape::{
    decode_quoted_printable, escape_text, split_component, split_structured, unescape_text,
};
pub use fold::fold_line;
pub use lexer::{ContentLine, parse_content_line};
pub use params::{Parameter, resolve_bare_shorthand};
pub use unfold::{LogicalLine, LogicalLines, logical_lines};
