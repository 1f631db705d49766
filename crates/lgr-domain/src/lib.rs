//! Pure action evaluation (no IO).
//!
//! Input: a validated [`Action`] and an [`EvalContext`] describing one label.
//! Output: the action's disposition when it fires, `None` when it does not.
//!
//! Rule matching, classes and Unicode properties are external collaborators reached through
//! the traits in [`registry`]. Scanning an ordered list of actions for the first one that
//! fires is left to the caller.

#![forbid(unsafe_code)]

pub mod action;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod policy;
pub mod registry;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use action::{Action, Quantifier};
pub use context::EvalContext;
pub use diagnostics::{
    DiagnosticSink, NoopSink, TraceEvent, TraceLog, TraceRecord, TracingSink, Verbosity,
};
pub use error::{ConfigurationError, EvaluationError, RuleError};
pub use policy::{DiagnosticsPolicy, SinkKind};
pub use registry::{ClassRegistry, RuleMatcher, RuleRegistry, UnicodeOracle};
