use lgr_types::{Disposition, ids};
use thiserror::Error;

/// An action definition that can never be evaluated.
///
/// Raised once, at construction; the ruleset load should reject the definition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error(
        "action '{action}' (disposition '{disposition}') sets both match='{match_rule}' \
         and not-match='{not_match_rule}'"
    )]
    MatchAndNotMatchBothSet {
        action: String,
        disposition: Disposition,
        match_rule: String,
        not_match_rule: String,
    },
}

impl ConfigurationError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigurationError::MatchAndNotMatchBothSet { .. } => {
                ids::CODE_MATCH_AND_NOT_MATCH_BOTH_SET
            }
        }
    }
}

/// Failure reported by the rule collaborators (registry lookup or matcher).
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("unknown rule reference '{rule}'")]
    UnknownRuleReference { rule: String },

    #[error("rule '{rule}' failed to match: {source}")]
    Matcher {
        rule: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl RuleError {
    pub fn unknown<S: Into<String>>(rule: S) -> Self {
        RuleError::UnknownRuleReference { rule: rule.into() }
    }

    pub fn matcher<S, E>(rule: S, source: E) -> Self
    where
        S: Into<String>,
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        RuleError::Matcher {
            rule: rule.into(),
            source: source.into(),
        }
    }

    pub fn rule(&self) -> &str {
        match self {
            RuleError::UnknownRuleReference { rule } | RuleError::Matcher { rule, .. } => rule,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            RuleError::UnknownRuleReference { .. } => ids::CODE_UNKNOWN_RULE_REFERENCE,
            RuleError::Matcher { .. } => ids::CODE_RULE_MATCHER_FAILED,
        }
    }
}

/// Evaluation of one action against one label failed.
///
/// Carries the action identity; the collaborator's error is kept as-is in `source`.
#[derive(Debug, Error)]
#[error("action '{action}' (disposition '{disposition}') on label '{label}': {source}")]
pub struct EvaluationError {
    pub action: String,
    pub disposition: Disposition,
    /// The evaluated label, rendered with `format_cp`.
    pub label: String,
    #[source]
    pub source: RuleError,
}

impl EvaluationError {
    pub fn rule_error(&self) -> &RuleError {
        &self.source
    }

    pub fn is_unknown_rule_reference(&self) -> bool {
        matches!(self.source, RuleError::UnknownRuleReference { .. })
    }

    pub fn code(&self) -> &'static str {
        self.source.code()
    }
}
