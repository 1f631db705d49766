use crate::action::{Action, Quantifier};
use crate::context::EvalContext;
use crate::diagnostics::TraceEvent;
use crate::error::{EvaluationError, RuleError};
use lgr_types::{Disposition, DispositionSet, format_cp, ids};

impl Action {
    /// Apply this action to a label.
    ///
    /// Returns the action's disposition when both the rule condition and the variant
    /// condition hold, `None` otherwise. An absent condition holds trivially, so an action
    /// without any condition always fires.
    ///
    /// Errors from the rule collaborators (including an unknown rule name) are returned as-is
    /// inside [`EvaluationError`]; they never count as a non-matching rule.
    pub fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Option<&Disposition>, EvaluationError> {
        ctx.sink.record(&TraceEvent::Applying {
            action: self,
            label: ctx.label,
            disp_set: ctx.disp_set,
        });

        // Both conditions are always evaluated and combined with AND.
        let rule_matched = self.rule_matched(ctx)?;
        let variant_matched = self.variant_matched(ctx);

        if rule_matched && variant_matched {
            ctx.sink.record(&TraceEvent::Triggered {
                action: self,
                disposition: &self.disposition,
            });
            return Ok(Some(&self.disposition));
        }

        ctx.sink.record(&TraceEvent::NotTriggered { action: self });
        Ok(None)
    }

    /// The `match` / `not-match` condition. True when the action has neither.
    pub fn rule_matched(&self, ctx: &EvalContext<'_>) -> Result<bool, EvaluationError> {
        let (condition, rule, negate) = match (&self.match_rule, &self.not_match) {
            (Some(rule), _) => (ids::COND_MATCH, rule.as_str(), false),
            (None, Some(rule)) => (ids::COND_NOT_MATCH, rule.as_str(), true),
            (None, None) => return Ok(true),
        };

        let matched = ctx
            .rules
            .lookup(rule)
            .and_then(|matcher| matcher.matches(ctx.label, ctx.rules, ctx.classes, ctx.unicode))
            .map_err(|source| self.evaluation_error(ctx, source))?;
        let matched = matched != negate;

        ctx.sink.record(&TraceEvent::RuleCondition {
            action: self,
            condition,
            rule,
            matched,
        });
        Ok(matched)
    }

    /// The variant quantifier condition. True when the action has none.
    pub fn variant_matched(&self, ctx: &EvalContext<'_>) -> bool {
        let Some((quantifier, allowed)) = self.quantifier() else {
            return true;
        };

        let matched = quantifier_holds(quantifier, allowed, ctx.disp_set, ctx.only_variants_flag);

        ctx.sink.record(&TraceEvent::VariantCondition {
            action: self,
            condition: quantifier.as_str(),
            matched,
        });
        matched
    }

    fn evaluation_error(&self, ctx: &EvalContext<'_>, source: RuleError) -> EvaluationError {
        EvaluationError {
            action: self.identity().to_string(),
            disposition: self.disposition.clone(),
            label: format_cp(ctx.label),
            source,
        }
    }
}

fn quantifier_holds(
    quantifier: Quantifier,
    allowed: &DispositionSet,
    disp_set: &DispositionSet,
    only_variants_flag: bool,
) -> bool {
    match quantifier {
        // A single shared disposition is enough.
        Quantifier::AnyVariant => allowed.intersects(disp_set),
        // Every present disposition must be allowed, and at least one must be present.
        Quantifier::AllVariants => !disp_set.is_empty() && disp_set.is_subset(allowed),
        // As all-variants, and the label must come entirely from variant mappings.
        Quantifier::OnlyVariants => {
            only_variants_flag && !disp_set.is_empty() && disp_set.is_subset(allowed)
        }
    }
}
