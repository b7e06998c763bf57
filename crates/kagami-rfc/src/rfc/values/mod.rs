//! Typed value codecs.
//!
//! Each codec decodes a raw value string into a typed representation and
//! re-encodes it losslessly. Version-conditional behavior (the legacy
//! year/month duration gate) is passed in by the registry layer; codecs
//! never consult global state.

mod datetime;
mod duration;
mod offset;
mod period;

pub use datetime::{Date, DateTime, Time};
pub use duration::{AnchoredDuration, Duration};
pub use offset::UtcOffset;
pub use period::{Period, PeriodForm};
