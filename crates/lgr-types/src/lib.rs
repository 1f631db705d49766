//! Stable DTOs and IDs used across the lgr-action workspace.
//!
//! This crate is intentionally boring:
//! - disposition strings and immutable disposition sets
//! - code point labels and their canonical rendering
//! - the serializable shape of an action definition
//! - stable string IDs and the explain registry for error codes

#![forbid(unsafe_code)]

pub mod disposition;
pub mod explain;
pub mod ids;
pub mod label;
pub mod spec;

pub use disposition::{Disposition, DispositionSet};
pub use explain::{ExamplePair, Explanation, all_codes, lookup_explanation};
pub use label::{CodePoint, format_cp};
pub use spec::ActionSpec;
