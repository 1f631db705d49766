use crate::action::Action;
use crate::context::EvalContext;
use crate::diagnostics::{TraceLog, TraceRecord};
use crate::error::{EvaluationError, RuleError};
use crate::registry::{ClassRegistry, RuleMatcher, RuleRegistry, UnicodeOracle};
use lgr_types::{ActionSpec, CodePoint, Disposition, DispositionSet};
use std::collections::BTreeMap;

/// Small stand-in for the external rule matcher.
#[derive(Clone, Debug)]
pub enum TestRule {
    Always,
    Never,
    StartsWith(CodePoint),
    Contains(CodePoint),
    /// Delegates to another rule through the registry it is handed.
    Ref(&'static str),
    Fails,
}

impl RuleMatcher for TestRule {
    fn matches(
        &self,
        label: &[CodePoint],
        rules: &dyn RuleRegistry,
        classes: &dyn ClassRegistry,
        unicode: &dyn UnicodeOracle,
    ) -> Result<bool, RuleError> {
        match self {
            TestRule::Always => Ok(true),
            TestRule::Never => Ok(false),
            TestRule::StartsWith(cp) => Ok(label.first() == Some(cp)),
            TestRule::Contains(cp) => Ok(label.contains(cp)),
            TestRule::Ref(name) => rules.lookup(name)?.matches(label, rules, classes, unicode),
            TestRule::Fails => Err(RuleError::matcher("fails", "undefined class 'x'")),
        }
    }
}

pub fn rules() -> BTreeMap<String, TestRule> {
    [
        ("always", TestRule::Always),
        ("never", TestRule::Never),
        ("starts-with-a", TestRule::StartsWith(0x61)),
        ("has-hyphen", TestRule::Contains(0x2D)),
        ("ref-always", TestRule::Ref("always")),
        ("ref-missing", TestRule::Ref("missing")),
        ("fails", TestRule::Fails),
    ]
    .into_iter()
    .map(|(name, rule)| (name.to_string(), rule))
    .collect()
}

pub fn disp(items: &[&str]) -> DispositionSet {
    items.iter().copied().collect()
}

pub fn dispositions(items: &[&str]) -> Vec<Disposition> {
    items.iter().map(|s| Disposition::from(*s)).collect()
}

pub fn action(spec: ActionSpec) -> Action {
    Action::new(spec).expect("test action must be valid")
}

/// Evaluate against the fixture registry with the no-op sink.
pub fn apply(
    action: &Action,
    label: &[CodePoint],
    disp_set: &DispositionSet,
    only_variants_flag: bool,
) -> Result<Option<Disposition>, EvaluationError> {
    let rules = rules();
    let ctx = EvalContext::new(label, disp_set, only_variants_flag, &rules, &(), &());
    action.evaluate(&ctx).map(|d| d.cloned())
}

/// Evaluate against the fixture registry, recording every trace event.
pub fn apply_traced(
    action: &Action,
    label: &[CodePoint],
    disp_set: &DispositionSet,
    only_variants_flag: bool,
) -> (
    Result<Option<Disposition>, EvaluationError>,
    Vec<TraceRecord>,
) {
    let rules = rules();
    let log = TraceLog::new();
    let ctx =
        EvalContext::new(label, disp_set, only_variants_flag, &rules, &(), &()).with_sink(&log);
    let result = action.evaluate(&ctx).map(|d| d.cloned());
    (result, log.into_records())
}
