//! Collaborator interfaces consumed by action evaluation.
//!
//! Rules, classes and the Unicode database live outside this crate. Actions only ever see
//! them through these traits, read-only, and pass the class registry and the oracle
//! straight through to the rule matcher.

use crate::error::RuleError;
use lgr_types::CodePoint;
use std::collections::{BTreeMap, HashMap};

/// Read-only class lookup, opaque to action evaluation.
pub trait ClassRegistry {}

/// Read-only Unicode code point property source, opaque to action evaluation.
pub trait UnicodeOracle {}

impl ClassRegistry for () {}
impl UnicodeOracle for () {}

/// A named rule that can be evaluated against a label.
pub trait RuleMatcher {
    fn matches(
        &self,
        label: &[CodePoint],
        rules: &dyn RuleRegistry,
        classes: &dyn ClassRegistry,
        unicode: &dyn UnicodeOracle,
    ) -> Result<bool, RuleError>;
}

/// Name-keyed rule lookup.
pub trait RuleRegistry {
    /// Resolve `name`, failing with [`RuleError::UnknownRuleReference`] when it is not defined.
    fn lookup(&self, name: &str) -> Result<&dyn RuleMatcher, RuleError>;
}

impl<R: RuleMatcher> RuleRegistry for BTreeMap<String, R> {
    fn lookup(&self, name: &str) -> Result<&dyn RuleMatcher, RuleError> {
        self.get(name)
            .map(|r| r as &dyn RuleMatcher)
            .ok_or_else(|| RuleError::unknown(name))
    }
}

impl<R: RuleMatcher, S: std::hash::BuildHasher> RuleRegistry for HashMap<String, R, S> {
    fn lookup(&self, name: &str) -> Result<&dyn RuleMatcher, RuleError> {
        self.get(name)
            .map(|r| r as &dyn RuleMatcher)
            .ok_or_else(|| RuleError::unknown(name))
    }
}

impl<T: RuleMatcher + ?Sized> RuleMatcher for Box<T> {
    fn matches(
        &self,
        label: &[CodePoint],
        rules: &dyn RuleRegistry,
        classes: &dyn ClassRegistry,
        unicode: &dyn UnicodeOracle,
    ) -> Result<bool, RuleError> {
        (**self).matches(label, rules, classes, unicode)
    }
}
