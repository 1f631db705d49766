use crate::error::ConfigurationError;
use lgr_types::{ActionSpec, Disposition, DispositionSet, ids};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Variant quantifier of an action, in evaluation priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quantifier {
    AnyVariant,
    AllVariants,
    OnlyVariants,
}

impl Quantifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Quantifier::AnyVariant => ids::COND_ANY_VARIANT,
            Quantifier::AllVariants => ids::COND_ALL_VARIANTS,
            Quantifier::OnlyVariants => ids::COND_ONLY_VARIANTS,
        }
    }
}

/// One validated `<action>` element.
///
/// Immutable once built. Equality and hashing cover the disposition, both rule references and
/// the three variant sets; the comment is ignored.
#[derive(Clone, Debug)]
pub struct Action {
    pub(crate) disposition: Disposition,
    pub(crate) comment: Option<String>,
    pub(crate) match_rule: Option<String>,
    pub(crate) not_match: Option<String>,
    pub(crate) any_variant: Option<DispositionSet>,
    pub(crate) all_variants: Option<DispositionSet>,
    pub(crate) only_variants: Option<DispositionSet>,
}

impl Action {
    /// Validate a definition.
    ///
    /// Empty variant lists become absent. An action naming both a `match` and a `not-match`
    /// rule is rejected; rule names themselves are only resolved at evaluation.
    pub fn new(spec: ActionSpec) -> Result<Self, ConfigurationError> {
        let ActionSpec {
            disposition,
            comment,
            match_rule,
            not_match,
            any_variant,
            all_variants,
            only_variants,
        } = spec;

        if let (Some(m), Some(n)) = (&match_rule, &not_match) {
            return Err(ConfigurationError::MatchAndNotMatchBothSet {
                action: identity(comment.as_deref()).to_string(),
                disposition,
                match_rule: m.clone(),
                not_match_rule: n.clone(),
            });
        }

        Ok(Self {
            disposition,
            comment,
            match_rule,
            not_match,
            any_variant: non_empty(any_variant),
            all_variants: non_empty(all_variants),
            only_variants: non_empty(only_variants),
        })
    }

    /// Shorthand for an action without any condition; it fires for every label.
    pub fn unconditional<D: Into<Disposition>>(disposition: D) -> Self {
        Self {
            disposition: disposition.into(),
            comment: None,
            match_rule: None,
            not_match: None,
            any_variant: None,
            all_variants: None,
            only_variants: None,
        }
    }

    pub fn disposition(&self) -> &Disposition {
        &self.disposition
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn match_rule(&self) -> Option<&str> {
        self.match_rule.as_deref()
    }

    pub fn not_match(&self) -> Option<&str> {
        self.not_match.as_deref()
    }

    pub fn any_variant(&self) -> Option<&DispositionSet> {
        self.any_variant.as_ref()
    }

    pub fn all_variants(&self) -> Option<&DispositionSet> {
        self.all_variants.as_ref()
    }

    pub fn only_variants(&self) -> Option<&DispositionSet> {
        self.only_variants.as_ref()
    }

    /// Name used for this action in diagnostics: its comment, or `anon`.
    pub fn identity(&self) -> &str {
        identity(self.comment.as_deref())
    }

    /// The quantifier evaluation will use.
    ///
    /// Only the first present of any-variant, all-variants, only-variants counts; later ones
    /// are carried along but never evaluated.
    pub fn quantifier(&self) -> Option<(Quantifier, &DispositionSet)> {
        if let Some(set) = &self.any_variant {
            return Some((Quantifier::AnyVariant, set));
        }
        if let Some(set) = &self.all_variants {
            return Some((Quantifier::AllVariants, set));
        }
        self.only_variants
            .as_ref()
            .map(|set| (Quantifier::OnlyVariants, set))
    }

    /// True when the action has neither a rule nor a variant condition.
    pub fn is_unconditional(&self) -> bool {
        self.match_rule.is_none() && self.not_match.is_none() && self.quantifier().is_none()
    }

    pub fn to_spec(&self) -> ActionSpec {
        let to_vec = |set: &Option<DispositionSet>| {
            set.as_ref()
                .map(|s| s.iter().cloned().collect())
                .unwrap_or_default()
        };
        ActionSpec {
            disposition: self.disposition.clone(),
            comment: self.comment.clone(),
            match_rule: self.match_rule.clone(),
            not_match: self.not_match.clone(),
            any_variant: to_vec(&self.any_variant),
            all_variants: to_vec(&self.all_variants),
            only_variants: to_vec(&self.only_variants),
        }
    }
}

fn identity(comment: Option<&str>) -> &str {
    comment.unwrap_or(ids::ANONYMOUS_ACTION)
}

fn non_empty(items: Vec<Disposition>) -> Option<DispositionSet> {
    if items.is_empty() {
        None
    } else {
        Some(items.into_iter().collect())
    }
}

impl TryFrom<ActionSpec> for Action {
    type Error = ConfigurationError;

    fn try_from(spec: ActionSpec) -> Result<Self, Self::Error> {
        Action::new(spec)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Action: {}>", self.identity())
    }
}

impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.disposition == other.disposition
            && self.match_rule == other.match_rule
            && self.not_match == other.not_match
            && self.any_variant == other.any_variant
            && self.all_variants == other.all_variants
            && self.only_variants == other.only_variants
    }
}

impl Eq for Action {}

impl Hash for Action {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.disposition.hash(state);
        self.match_rule.hash(state);
        self.not_match.hash(state);
        self.any_variant.hash(state);
        self.all_variants.hash(state);
        self.only_variants.hash(state);
    }
}
