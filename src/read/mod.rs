//! MPIF text decoder.
//!
//! Layered design:
//! - `line` classifies one raw line and maps scalar values through the
//!   quoting and placeholder conventions.
//! - `scan` holds the line cursor plus the shared readers for text blocks
//!   and record loops.
//! - `parse` drives per-section extraction into the typed
//!   [`Document`](crate::model::Document).
//!
//! Decoding is lenient by design: a missing `data_` header is the only
//! fatal error, everything else degrades to an absent field or a skipped
//! record. Callers that want strictness run a validation pass over the
//! decoded document afterwards.

mod line;
mod parse;
mod scan;

pub use parse::{parse, ParseError};
