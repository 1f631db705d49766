use crate::Disposition;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Serializable description of one `<action>` element.
///
/// This is a *definition*, not a validated action: it is the input to `Action::new` in
/// `lgr-domain`, which rejects invalid combinations and normalizes the variant lists.
/// Field names on the wire match the action attributes (`not-match`, `any-variant`, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub struct ActionSpec {
    /// Disposition returned when the action fires.
    #[serde(rename = "disp")]
    pub disposition: Disposition,

    /// Free text, only used to identify the action in diagnostics and errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Name of a rule that must match the label.
    #[serde(default, rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_rule: Option<String>,

    /// Name of a rule that must not match the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_match: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub any_variant: Vec<Disposition>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub all_variants: Vec<Disposition>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub only_variants: Vec<Disposition>,
}

impl ActionSpec {
    /// An unconditional action: no rule and no variant condition.
    pub fn new<D: Into<Disposition>>(disposition: D) -> Self {
        Self {
            disposition: disposition.into(),
            ..Self::default()
        }
    }
}
