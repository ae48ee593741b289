//! The ancestor join: subtract exemption overrides from the raw error tree.
//!
//! An error at path `p` is neutralized when any exemption covers `p` or an ancestor of
//! `p`. The exemption credited is the one at the closest such path; when several sit at
//! the same depth the lowest exemption id wins. Overrides without a matching error do
//! nothing.

use crate::overrides::OverrideSet;
use crate::tree::ErrorTree;
use propguard_types::ErrorPath;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use tracing::debug;

/// Override sets keyed by exemption id. Keyed storage makes the join independent of the
/// order in which exemptions ran.
pub type ExemptionSets = BTreeMap<String, OverrideSet>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Neutralization {
    /// The error that was removed.
    pub path: ErrorPath,
    /// Exemption credited with removing it.
    pub exemption: String,
    /// Path (the error's own, or an ancestor) the exemption matched at.
    pub matched: ErrorPath,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Merged {
    pub errors: ErrorTree,
    /// In pre-order of the raw tree.
    pub neutralized: Vec<Neutralization>,
}

/// Closest exemption covering `path`, as `(exemption id, matched path)`.
pub fn closest_override<'a>(
    path: &ErrorPath,
    exemptions: &'a ExemptionSets,
) -> Option<(&'a str, &'a ErrorPath)> {
    // Ids iterate in ascending order and `min_by_key` keeps the first of equal keys.
    exemptions
        .iter()
        .filter_map(|(id, set)| set.covering(path).map(|m| (id.as_str(), m)))
        .min_by_key(|(_, matched)| Reverse(matched.len()))
}

pub fn ancestor_join(raw: &ErrorTree, exemptions: &ExemptionSets) -> Merged {
    let mut neutralized = Vec::new();

    let errors = raw.retain_leaves(|path, _| match closest_override(path, exemptions) {
        Some((exemption, matched)) => {
            debug!(path = %path, exemption, matched = %matched, "error neutralized");
            neutralized.push(Neutralization {
                path: path.clone(),
                exemption: exemption.to_string(),
                matched: matched.clone(),
            });
            false
        }
        None => true,
    });

    Merged {
        errors,
        neutralized,
    }
}
