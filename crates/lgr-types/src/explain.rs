//! Explain registry for error codes.
//!
//! Maps codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the code.
    pub title: &'static str,
    /// What the failure means and when it is raised.
    pub description: &'static str,
    /// How to fix the offending definition.
    pub remediation: &'static str,
    /// Before/after definition examples.
    pub examples: ExamplePair,
}

/// Before and after definition examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Definition that triggers the error.
    pub before: &'static str,
    /// Definition that is accepted.
    pub after: &'static str,
}

/// Look up an explanation by code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CODE_MATCH_AND_NOT_MATCH_BOTH_SET => Some(explain_match_and_not_match()),
        ids::CODE_UNKNOWN_RULE_REFERENCE => Some(explain_unknown_rule_reference()),
        ids::CODE_RULE_MATCHER_FAILED => Some(explain_rule_matcher_failed()),
        _ => None,
    }
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_MATCH_AND_NOT_MATCH_BOTH_SET,
        ids::CODE_UNKNOWN_RULE_REFERENCE,
        ids::CODE_RULE_MATCHER_FAILED,
    ]
}

fn explain_match_and_not_match() -> Explanation {
    Explanation {
        title: "Action Sets Both match and not-match",
        description: "\
An action may carry a `match` attribute or a `not-match` attribute, never both.

The combination is rejected when the action is constructed, so the whole ruleset fails to
load instead of producing an action whose trigger condition is ambiguous.",
        remediation: "\
Keep one rule condition per action. If both conditions are really needed, define a new rule
that combines them and reference it from a single `match`:

    <rule name=\"combined\"> ... </rule>
    <action disp=\"invalid\" match=\"combined\"/>",
        examples: ExamplePair {
            before: r#"<action disp="invalid" match="leading-digit" not-match="ascii-only"/>"#,
            after: r#"<action disp="invalid" match="leading-digit"/>"#,
        },
    }
}

fn explain_unknown_rule_reference() -> Explanation {
    Explanation {
        title: "Unknown Rule Reference",
        description: "\
An action's `match` or `not-match` attribute names a rule that is not registered.

Rule names are resolved when the action is evaluated, not when it is built, because the rule
registry may still be incomplete while actions are constructed. The failure is reported for
the label being evaluated and is never treated as a non-matching rule.",
        remediation: "\
Define the missing rule, or fix the spelling of the reference so it names an existing rule.",
        examples: ExamplePair {
            before: r#"<action disp="invalid" match="leading-digt"/>"#,
            after: r#"<rule name="leading-digit"> ... </rule>
<action disp="invalid" match="leading-digit"/>"#,
        },
    }
}

fn explain_rule_matcher_failed() -> Explanation {
    Explanation {
        title: "Rule Matcher Failed",
        description: "\
The rule referenced by an action was found, but the rule matcher itself reported an error
while evaluating it against the label (for example a reference to an undefined class, or a
code point property the Unicode database does not know).

The matcher's error is carried unchanged as the source of the evaluation error.",
        remediation: "\
Inspect the source error: it names the rule and the failing construct. Fix the rule
definition; retrying the same label without changing the ruleset yields the same result.",
        examples: ExamplePair {
            before: r#"<rule name="r"><class by-ref="undefined-class"/></rule>"#,
            after: r#"<class name="defined-class">0061-007A</class>
<rule name="r"><class by-ref="defined-class"/></rule>"#,
        },
    }
}
