use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Outcome tag attached to a label or to one of its variants (`valid`, `blocked`, ...).
///
/// The value is opaque: nothing in this workspace interprets it beyond equality.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct Disposition(String);

impl Disposition {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Disposition {
    fn from(value: &str) -> Self {
        Disposition::new(value)
    }
}

impl From<String> for Disposition {
    fn from(value: String) -> Self {
        Disposition(value)
    }
}

impl From<&Disposition> for Disposition {
    fn from(value: &Disposition) -> Self {
        value.clone()
    }
}

impl PartialEq<str> for Disposition {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Disposition {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Immutable, value-comparable set of dispositions.
///
/// Backed by an ordered set so that iteration order, `Debug` output and hashing are
/// deterministic. There is no mutation API: build a new set instead.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct DispositionSet(BTreeSet<Disposition>);

impl DispositionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, disposition: &str) -> bool {
        self.0.iter().any(|d| d.as_str() == disposition)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Disposition> {
        self.0.iter()
    }

    /// True when at least one disposition is present in both sets.
    pub fn intersects(&self, other: &DispositionSet) -> bool {
        !self.0.is_disjoint(&other.0)
    }

    /// True when every disposition of `self` is also in `other` (vacuously true when empty).
    pub fn is_subset(&self, other: &DispositionSet) -> bool {
        self.0.is_subset(&other.0)
    }
}

impl<D: Into<Disposition>> FromIterator<D> for DispositionSet {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a DispositionSet {
    type Item = &'a Disposition;
    type IntoIter = std::collections::btree_set::Iter<'a, Disposition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for DispositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{d}")?;
        }
        f.write_str("}")
    }
}
