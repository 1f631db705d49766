//! Injectable diagnostics for action evaluation.
//!
//! Evaluation reports what it decided to a [`DiagnosticSink`] passed in through the
//! evaluation context. The default sink does nothing. Sinks observe only: nothing they do
//! can change the disposition that evaluation returns.

use crate::action::Action;
use lgr_types::{CodePoint, Disposition, DispositionSet, format_cp, ids};
use serde::Serialize;
use std::sync::{Mutex, PoisonError};

/// `tracing` target used by [`TracingSink`].
pub const TRACE_TARGET: &str = "lgr::rule";

/// One step of applying an action to a label.
#[derive(Clone, Copy, Debug)]
pub enum TraceEvent<'a> {
    Applying {
        action: &'a Action,
        label: &'a [CodePoint],
        disp_set: &'a DispositionSet,
    },
    RuleCondition {
        action: &'a Action,
        /// `match` or `not-match`.
        condition: &'static str,
        rule: &'a str,
        matched: bool,
    },
    VariantCondition {
        action: &'a Action,
        /// `any-variant`, `all-variants` or `only-variants`.
        condition: &'static str,
        matched: bool,
    },
    Triggered {
        action: &'a Action,
        disposition: &'a Disposition,
    },
    NotTriggered {
        action: &'a Action,
    },
}

impl<'a> TraceEvent<'a> {
    pub fn action(&self) -> &'a Action {
        match *self {
            TraceEvent::Applying { action, .. }
            | TraceEvent::RuleCondition { action, .. }
            | TraceEvent::VariantCondition { action, .. }
            | TraceEvent::Triggered { action, .. }
            | TraceEvent::NotTriggered { action } => action,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TraceEvent::Applying { .. } => ids::EVENT_APPLYING,
            TraceEvent::RuleCondition { .. } => ids::EVENT_RULE_CONDITION,
            TraceEvent::VariantCondition { .. } => ids::EVENT_VARIANT_CONDITION,
            TraceEvent::Triggered { .. } => ids::EVENT_TRIGGERED,
            TraceEvent::NotTriggered { .. } => ids::EVENT_NOT_TRIGGERED,
        }
    }

    /// Final events: the action fired, or did not.
    pub fn is_outcome(&self) -> bool {
        matches!(
            self,
            TraceEvent::Triggered { .. } | TraceEvent::NotTriggered { .. }
        )
    }
}

/// How much of an evaluation a sink keeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    Off,
    /// Only whether each action fired.
    #[default]
    Outcome,
    /// Every condition as it is evaluated.
    Conditions,
}

impl Verbosity {
    pub fn admits(self, event: &TraceEvent<'_>) -> bool {
        match self {
            Verbosity::Off => false,
            Verbosity::Outcome => event.is_outcome(),
            Verbosity::Conditions => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verbosity::Off => "off",
            Verbosity::Outcome => "outcome",
            Verbosity::Conditions => "conditions",
        }
    }
}

/// Receiver for evaluation traces.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, event: &TraceEvent<'_>);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&self, _event: &TraceEvent<'_>) {}
}

/// Routes events to `tracing` under [`TRACE_TARGET`].
///
/// `Applying` is emitted at debug level, everything else at info.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink {
    verbosity: Verbosity,
}

impl TracingSink {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }
}

impl DiagnosticSink for TracingSink {
    fn record(&self, event: &TraceEvent<'_>) {
        if !self.verbosity.admits(event) {
            return;
        }
        match *event {
            TraceEvent::Applying {
                action,
                label,
                disp_set,
            } => tracing::debug!(
                target: TRACE_TARGET,
                action = %action,
                label = %format_cp(label),
                disp_set = %disp_set,
                "applying action"
            ),
            TraceEvent::RuleCondition {
                action,
                condition,
                rule,
                matched,
            } => tracing::info!(
                target: TRACE_TARGET,
                action = %action,
                condition,
                rule,
                matched,
                "rule condition evaluated"
            ),
            TraceEvent::VariantCondition {
                action,
                condition,
                matched,
            } => tracing::info!(
                target: TRACE_TARGET,
                action = %action,
                condition,
                matched,
                "variant condition evaluated"
            ),
            TraceEvent::Triggered {
                action,
                disposition,
            } => tracing::info!(
                target: TRACE_TARGET,
                action = %action,
                disposition = %disposition,
                "action triggered"
            ),
            TraceEvent::NotTriggered { action } => tracing::info!(
                target: TRACE_TARGET,
                action = %action,
                "action not triggered"
            ),
        }
    }
}

/// Owned copy of a [`TraceEvent`], suitable for JSON export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TraceRecord {
    pub event: &'static str,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disp_set: Option<DispositionSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition: Option<Disposition>,
}

impl From<&TraceEvent<'_>> for TraceRecord {
    fn from(event: &TraceEvent<'_>) -> Self {
        let mut record = TraceRecord {
            event: event.name(),
            action: event.action().identity().to_string(),
            label: None,
            disp_set: None,
            condition: None,
            rule: None,
            matched: None,
            disposition: None,
        };
        match *event {
            TraceEvent::Applying {
                label, disp_set, ..
            } => {
                record.label = Some(format_cp(label));
                record.disp_set = Some(disp_set.clone());
            }
            TraceEvent::RuleCondition {
                condition,
                rule,
                matched,
                ..
            } => {
                record.condition = Some(condition);
                record.rule = Some(rule.to_string());
                record.matched = Some(matched);
            }
            TraceEvent::VariantCondition {
                condition, matched, ..
            } => {
                record.condition = Some(condition);
                record.matched = Some(matched);
            }
            TraceEvent::Triggered { disposition, .. } => {
                record.disposition = Some(disposition.clone());
            }
            TraceEvent::NotTriggered { .. } => {}
        }
        record
    }
}

/// Keeps every admitted event in memory.
///
/// Safe to share between threads evaluating in parallel; records from concurrent
/// evaluations interleave in arrival order.
#[derive(Debug)]
pub struct TraceLog {
    verbosity: Verbosity,
    records: Mutex<Vec<TraceRecord>>,
}

impl Default for TraceLog {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceLog {
    /// A log that keeps every event.
    pub fn new() -> Self {
        Self::with_verbosity(Verbosity::Conditions)
    }

    pub fn with_verbosity(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn records(&self) -> Vec<TraceRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn into_records(self) -> Vec<TraceRecord> {
        self.records
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self.records()).unwrap_or(serde_json::Value::Null)
    }
}

impl DiagnosticSink for TraceLog {
    fn record(&self, event: &TraceEvent<'_>) {
        if !self.verbosity.admits(event) {
            return;
        }
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(TraceRecord::from(event));
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Box<T> {
    fn record(&self, event: &TraceEvent<'_>) {
        (**self).record(event)
    }
}
