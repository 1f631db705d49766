//! Stable identifiers for error codes and action conditions.
//!
//! `code` is a short snake_case discriminator. Condition names use the kebab-case attribute
//! names of the action element.

// Codes: action construction
pub const CODE_MATCH_AND_NOT_MATCH_BOTH_SET: &str = "match_and_not_match_both_set";

// Codes: action evaluation
pub const CODE_UNKNOWN_RULE_REFERENCE: &str = "unknown_rule_reference";
pub const CODE_RULE_MATCHER_FAILED: &str = "rule_matcher_failed";

// Conditions: rule
pub const COND_MATCH: &str = "match";
pub const COND_NOT_MATCH: &str = "not-match";

// Conditions: variant quantifiers, in evaluation priority order
pub const COND_ANY_VARIANT: &str = "any-variant";
pub const COND_ALL_VARIANTS: &str = "all-variants";
pub const COND_ONLY_VARIANTS: &str = "only-variants";

/// Identity used for actions without a comment.
pub const ANONYMOUS_ACTION: &str = "anon";

// Trace events emitted while an action is applied
pub const EVENT_APPLYING: &str = "applying";
pub const EVENT_RULE_CONDITION: &str = "rule_condition";
pub const EVENT_VARIANT_CONDITION: &str = "variant_condition";
pub const EVENT_TRIGGERED: &str = "triggered";
pub const EVENT_NOT_TRIGGERED: &str = "not_triggered";
