//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Action construction and structural identity
//! - Each variant quantifier against its set-algebra definition
//! - Quantifier priority and the AND of rule and variant conditions

use crate::action::Action;
use crate::diagnostics::{TraceLog, Verbosity};
use crate::error::ConfigurationError;
use crate::test_support::{apply, rules};
use crate::context::EvalContext;
use lgr_types::{ActionSpec, CodePoint, Disposition, DispositionSet};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strategy for dispositions drawn from a small alphabet so that sets overlap often.
fn arb_disposition() -> impl Strategy<Value = Disposition> {
    prop_oneof![
        Just(Disposition::from("valid")),
        Just(Disposition::from("blocked")),
        Just(Disposition::from("allocatable")),
        Just(Disposition::from("invalid")),
        Just(Disposition::from("x")),
    ]
}

/// Strategy for variant lists as written in a definition (may repeat, may be empty).
fn arb_disposition_list() -> impl Strategy<Value = Vec<Disposition>> {
    prop::collection::vec(arb_disposition(), 0..4)
}

fn arb_disp_set() -> impl Strategy<Value = DispositionSet> {
    arb_disposition_list().prop_map(|v| v.into_iter().collect())
}

fn arb_label() -> impl Strategy<Value = Vec<CodePoint>> {
    prop::collection::vec(prop_oneof![Just(0x61u32), Just(0x62), Just(0x2D), 0x30u32..0x3A], 0..6)
}

/// Strategy for rule references resolvable in the fixture registry (never failing).
fn arb_rule_ref() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just("always".to_string()),
        Just("never".to_string()),
        Just("starts-with-a".to_string()),
        Just("has-hyphen".to_string()),
    ])
}

fn arb_comment() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-z ]{1,16}")
}

/// Strategy for valid specs: at most one of match / not-match.
fn arb_valid_spec() -> impl Strategy<Value = ActionSpec> {
    (
        arb_disposition(),
        arb_comment(),
        arb_rule_ref(),
        any::<bool>(),
        arb_disposition_list(),
        arb_disposition_list(),
        arb_disposition_list(),
    )
        .prop_map(|(disposition, comment, rule, negate, any, all, only)| {
            let (match_rule, not_match) = if negate { (None, rule) } else { (rule, None) };
            ActionSpec {
                disposition,
                comment,
                match_rule,
                not_match,
                any_variant: any,
                all_variants: all,
                only_variants: only,
            }
        })
}

fn hash_of(action: &Action) -> u64 {
    let mut h = DefaultHasher::new();
    action.hash(&mut h);
    h.finish()
}

fn set_of(items: &[Disposition]) -> DispositionSet {
    items.iter().collect()
}

fn fires(action: &Action, label: &[CodePoint], disp_set: &DispositionSet, flag: bool) -> bool {
    apply(action, label, disp_set, flag)
        .expect("fixture rules never fail")
        .is_some()
}

// ============================================================================
// Property tests: construction and identity
// ============================================================================

proptest! {
    /// Naming both rules is always rejected, whatever else the action carries.
    #[test]
    fn match_with_not_match_always_rejected(
        spec in arb_valid_spec(),
        m in "[a-z]{1,8}",
        n in "[a-z]{1,8}",
    ) {
        let spec = ActionSpec { match_rule: Some(m), not_match: Some(n), ..spec };
        let result = Action::new(spec);
        let is_both_set = matches!(
            result,
            Err(ConfigurationError::MatchAndNotMatchBothSet { .. })
        );
        prop_assert!(is_both_set);
    }

    /// Valid specs always construct, and empty lists never survive as empty sets.
    #[test]
    fn valid_specs_construct_without_empty_sets(spec in arb_valid_spec()) {
        let action = Action::new(spec).expect("valid spec");
        for set in [action.any_variant(), action.all_variants(), action.only_variants()]
            .into_iter()
            .flatten()
        {
            prop_assert!(!set.is_empty());
        }
    }

    /// The comment never affects equality or hashing.
    #[test]
    fn comment_is_ignored_by_eq_and_hash(spec in arb_valid_spec(), other in arb_comment()) {
        let a = Action::new(spec.clone()).expect("valid spec");
        let b = Action::new(ActionSpec { comment: other, ..spec }).expect("valid spec");
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    /// Equal actions hash identically.
    #[test]
    fn equal_actions_hash_identically(a in arb_valid_spec(), b in arb_valid_spec()) {
        let a = Action::new(a).expect("valid spec");
        let b = Action::new(b).expect("valid spec");
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }
}

// ============================================================================
// Property tests: quantifier semantics
// ============================================================================

proptest! {
    /// No conditions: fires for every label, set and flag.
    #[test]
    fn unconditional_always_fires(
        label in arb_label(),
        disp_set in arb_disp_set(),
        flag in any::<bool>(),
        disposition in arb_disposition(),
    ) {
        let action = Action::new(ActionSpec::new(disposition.clone())).expect("valid spec");
        let result = apply(&action, &label, &disp_set, flag).expect("no rules to fail");
        prop_assert_eq!(result, Some(disposition));
    }

    #[test]
    fn any_variant_is_intersection(
        allowed in arb_disposition_list(),
        disp_set in arb_disp_set(),
        flag in any::<bool>(),
    ) {
        let action = Action::new(ActionSpec {
            any_variant: allowed.clone(),
            ..ActionSpec::new("fired")
        })
        .expect("valid spec");

        let expected = allowed.is_empty() || set_of(&allowed).intersects(&disp_set);
        prop_assert_eq!(fires(&action, &[0x61], &disp_set, flag), expected);
    }

    #[test]
    fn all_variants_is_non_empty_subset(
        allowed in arb_disposition_list(),
        disp_set in arb_disp_set(),
        flag in any::<bool>(),
    ) {
        let action = Action::new(ActionSpec {
            all_variants: allowed.clone(),
            ..ActionSpec::new("fired")
        })
        .expect("valid spec");

        let expected = allowed.is_empty()
            || (!disp_set.is_empty() && disp_set.is_subset(&set_of(&allowed)));
        prop_assert_eq!(fires(&action, &[0x61], &disp_set, flag), expected);
    }

    #[test]
    fn only_variants_requires_flag_and_non_empty_subset(
        allowed in arb_disposition_list(),
        disp_set in arb_disp_set(),
        flag in any::<bool>(),
    ) {
        let action = Action::new(ActionSpec {
            only_variants: allowed.clone(),
            ..ActionSpec::new("fired")
        })
        .expect("valid spec");

        let expected = allowed.is_empty()
            || (flag && !disp_set.is_empty() && disp_set.is_subset(&set_of(&allowed)));
        prop_assert_eq!(fires(&action, &[0x61], &disp_set, flag), expected);
    }

    /// Only the first present quantifier is evaluated.
    #[test]
    fn first_present_quantifier_decides(
        spec in arb_valid_spec(),
        label in arb_label(),
        disp_set in arb_disp_set(),
        flag in any::<bool>(),
    ) {
        let full = Action::new(spec.clone()).expect("valid spec");

        let reduced = if !spec.any_variant.is_empty() {
            ActionSpec { all_variants: Vec::new(), only_variants: Vec::new(), ..spec }
        } else if !spec.all_variants.is_empty() {
            ActionSpec { only_variants: Vec::new(), ..spec }
        } else {
            spec
        };
        let reduced = Action::new(reduced).expect("valid spec");

        prop_assert_eq!(
            fires(&full, &label, &disp_set, flag),
            fires(&reduced, &label, &disp_set, flag)
        );
    }

    /// The action fires exactly when both conditions hold on their own.
    #[test]
    fn rule_and_variant_are_combined_with_and(
        spec in arb_valid_spec(),
        label in arb_label(),
        disp_set in arb_disp_set(),
        flag in any::<bool>(),
    ) {
        let action = Action::new(spec).expect("valid spec");
        let rules = rules();
        let ctx = EvalContext::new(&label, &disp_set, flag, &rules, &(), &());

        let rule_matched = action.rule_matched(&ctx).expect("fixture rules never fail");
        let variant_matched = action.variant_matched(&ctx);
        let fired = action.evaluate(&ctx).expect("fixture rules never fail");

        prop_assert_eq!(fired.is_some(), rule_matched && variant_matched);
        if let Some(disposition) = fired {
            prop_assert_eq!(disposition, action.disposition());
        }
    }

    /// Recording a trace never changes the outcome.
    #[test]
    fn tracing_is_observational(
        spec in arb_valid_spec(),
        label in arb_label(),
        disp_set in arb_disp_set(),
        flag in any::<bool>(),
    ) {
        let action = Action::new(spec).expect("valid spec");
        let rules = rules();
        let log = TraceLog::with_verbosity(Verbosity::Conditions);
        let plain = EvalContext::new(&label, &disp_set, flag, &rules, &(), &());

        let without = action.evaluate(&plain).expect("fixture rules never fail").cloned();
        let with = action
            .evaluate(&plain.with_sink(&log))
            .expect("fixture rules never fail")
            .cloned();

        prop_assert_eq!(without, with);
        prop_assert!(!log.records().is_empty());
    }
}
