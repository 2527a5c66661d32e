//! The flat claim collection carried by an authenticated session.

use serde::{Deserialize, Serialize};

/// Unordered collection of string claims/roles for one principal.
///
/// Only membership is meaningful for role derivation; insertion order is kept
/// so that scans (e.g. for the owned employee id) are deterministic.
/// Matching is exact and case-sensitive. Equality ignores order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ClaimSet(Vec<String>);

impl ClaimSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a claim. Duplicates are ignored.
    pub fn insert(&mut self, claim: impl Into<String>) {
        let claim = claim.into();
        if !self.contains(&claim) {
            self.0.push(claim);
        }
    }

    pub fn contains(&self, claim: &str) -> bool {
        self.0.iter().any(|c| c == claim)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for ClaimSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|claim| other.contains(claim))
    }
}

impl Eq for ClaimSet {}

impl From<Vec<String>> for ClaimSet {
    fn from(claims: Vec<String>) -> Self {
        claims.into_iter().collect()
    }
}

impl From<ClaimSet> for Vec<String> {
    fn from(claims: ClaimSet) -> Self {
        claims.0
    }
}

impl<S: Into<String>> FromIterator<S> for ClaimSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for claim in iter {
            set.insert(claim);
        }
        set
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for ClaimSet {
    fn from(claims: [S; N]) -> Self {
        claims.into_iter().collect()
    }
}
