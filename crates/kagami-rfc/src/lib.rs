//! Parsing and serialization for contact and calendar interchange formats.
//!
//! This crate implements a shared property-line engine for the vCard
//! family (2.1, 3.0, 4.0) and the calendar family (vCalendar 1.0,
//! iCalendar 2.0): unfolding, tokenization, parameter parsing, versioned
//! value codecs, and a typed role-keyed container model that round-trips
//! back to text.

pub mod error;
pub mod rfc;

pub use error::{RfcError, RfcResult};
