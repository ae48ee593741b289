use propguard_types::ErrorPath;
use std::collections::BTreeSet;

/// Paths an exemption neutralizes. A path covers itself and everything below it.
///
/// Exemptions produce sets of paths rather than trees with messages: an override can only
/// name what to remove, so there is no way for one to add an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverrideSet {
    paths: BTreeSet<ErrorPath>,
}

impl OverrideSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: ErrorPath) -> Self {
        self.paths.insert(path);
        self
    }

    pub fn insert(&mut self, path: ErrorPath) {
        self.paths.insert(path);
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ErrorPath> {
        self.paths.iter()
    }

    /// The closest entry at `path` or above it.
    pub fn covering(&self, path: &ErrorPath) -> Option<&ErrorPath> {
        path.ancestors().find_map(|a| self.paths.get(&a))
    }
}

impl FromIterator<ErrorPath> for OverrideSet {
    fn from_iter<I: IntoIterator<Item = ErrorPath>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}

impl Extend<ErrorPath> for OverrideSet {
    fn extend<I: IntoIterator<Item = ErrorPath>>(&mut self, iter: I) {
        self.paths.extend(iter);
    }
}
