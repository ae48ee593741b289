//! Hierarchical error structure produced by checks.

use propguard_types::ErrorPath;
use std::collections::BTreeMap;

/// Either a message, or named children.
///
/// Children live in a `BTreeMap`, so traversal order is the lexicographic order of the
/// path vocabulary and does not depend on how the tree was built. A `Node` with no
/// children means "no errors"; pruning never leaves one behind below the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorTree {
    Leaf(String),
    Node(BTreeMap<String, ErrorTree>),
}

impl Default for ErrorTree {
    fn default() -> Self {
        ErrorTree::Node(BTreeMap::new())
    }
}

impl ErrorTree {
    pub fn leaf(message: impl Into<String>) -> Self {
        ErrorTree::Leaf(message.into())
    }

    /// A node holding a single leaf under `segment`.
    pub fn single(segment: &str, message: impl Into<String>) -> Self {
        ErrorTree::from_children([(segment.to_string(), ErrorTree::leaf(message))])
    }

    pub fn from_children<I>(children: I) -> Self
    where
        I: IntoIterator<Item = (String, ErrorTree)>,
    {
        ErrorTree::Node(
            children
                .into_iter()
                .filter(|(_, child)| !child.is_empty())
                .collect(),
        )
    }

    /// Build a tree from `(path, message)` pairs. Later pairs replace earlier ones at the
    /// same path; a leaf on the way to a deeper path is replaced by a node.
    pub fn from_leaves<I, S>(leaves: I) -> Self
    where
        I: IntoIterator<Item = (ErrorPath, S)>,
        S: Into<String>,
    {
        let mut tree = ErrorTree::default();
        for (path, message) in leaves {
            tree.insert(&path, ErrorTree::leaf(message));
        }
        tree
    }

    /// Place `subtree` at `path`, replacing whatever was there.
    pub fn insert(&mut self, path: &ErrorPath, subtree: ErrorTree) {
        let mut cursor = self;
        for segment in path.segments() {
            if let ErrorTree::Leaf(_) = cursor {
                *cursor = ErrorTree::default();
            }
            let ErrorTree::Node(children) = cursor else {
                unreachable!("cursor was just made a node");
            };
            cursor = children.entry(segment.clone()).or_default();
        }
        *cursor = subtree;
    }

    pub fn get(&self, path: &ErrorPath) -> Option<&ErrorTree> {
        let mut cursor = self;
        for segment in path.segments() {
            match cursor {
                ErrorTree::Node(children) => cursor = children.get(segment)?,
                ErrorTree::Leaf(_) => return None,
            }
        }
        if cursor.is_empty() { None } else { Some(cursor) }
    }

    pub fn contains(&self, path: &ErrorPath) -> bool {
        self.get(path).is_some()
    }

    /// True for a node without children. A leaf is never empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, ErrorTree::Node(children) if children.iter().all(|(_, c)| c.is_empty()))
    }

    /// Every leaf with its full path, in pre-order.
    pub fn leaves(&self) -> Vec<(ErrorPath, &str)> {
        let mut out = Vec::new();
        collect_leaves(self, ErrorPath::root(), &mut out);
        out
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            ErrorTree::Leaf(_) => 1,
            ErrorTree::Node(children) => children.values().map(ErrorTree::leaf_count).sum(),
        }
    }

    /// Keep only the leaves `keep` accepts; nodes left without leaves are dropped.
    pub fn retain_leaves<F>(&self, mut keep: F) -> ErrorTree
    where
        F: FnMut(&ErrorPath, &str) -> bool,
    {
        retain_at(self, &ErrorPath::root(), &mut keep).unwrap_or_default()
    }
}

fn collect_leaves<'t>(tree: &'t ErrorTree, at: ErrorPath, out: &mut Vec<(ErrorPath, &'t str)>) {
    match tree {
        ErrorTree::Leaf(message) => out.push((at, message.as_str())),
        ErrorTree::Node(children) => {
            for (segment, child) in children {
                collect_leaves(child, at.child(segment), out);
            }
        }
    }
}

fn retain_at<F>(tree: &ErrorTree, at: &ErrorPath, keep: &mut F) -> Option<ErrorTree>
where
    F: FnMut(&ErrorPath, &str) -> bool,
{
    match tree {
        ErrorTree::Leaf(message) => keep(at, message).then(|| tree.clone()),
        ErrorTree::Node(children) => {
            let kept: BTreeMap<String, ErrorTree> = children
                .iter()
                .filter_map(|(segment, child)| {
                    retain_at(child, &at.child(segment), keep).map(|c| (segment.clone(), c))
                })
                .collect();
            if kept.is_empty() {
                None
            } else {
                Some(ErrorTree::Node(kept))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(text: &str) -> ErrorPath {
        ErrorPath::parse(text).unwrap()
    }

    #[test]
    fn leaves_come_out_in_preorder_regardless_of_insertion_order() {
        let a = ErrorTree::from_leaves([
            (p("status.transition"), "t"),
            (p("authors.base"), "a"),
            (p("status.valid"), "v"),
        ]);
        let b = ErrorTree::from_leaves([
            (p("status.valid"), "v"),
            (p("status.transition"), "t"),
            (p("authors.base"), "a"),
        ]);
        assert_eq!(a, b);

        let paths: Vec<String> = a.leaves().iter().map(|(p, _)| p.to_string()).collect();
        assert_eq!(paths, vec!["authors.base", "status.transition", "status.valid"]);
    }

    #[test]
    fn get_distinguishes_leaves_nodes_and_absence() {
        let t = ErrorTree::from_leaves([(p("file.name"), "bad name")]);
        assert_eq!(t.get(&p("file.name")), Some(&ErrorTree::leaf("bad name")));
        assert!(matches!(t.get(&p("file")), Some(ErrorTree::Node(_))));
        assert!(t.get(&p("file.name.deeper")).is_none());
        assert!(t.get(&p("content")).is_none());
        assert!(t.contains(&ErrorPath::root()));
        assert!(!ErrorTree::default().contains(&ErrorPath::root()));
    }

    #[test]
    fn insert_replaces_leaf_on_the_way_down() {
        let mut t = ErrorTree::from_leaves([(p("a"), "shallow")]);
        t.insert(&p("a.b"), ErrorTree::leaf("deep"));
        assert_eq!(t.leaves(), vec![(p("a.b"), "deep")]);
    }

    #[test]
    fn from_children_drops_empty_subtrees() {
        let t = ErrorTree::from_children([
            ("empty".to_string(), ErrorTree::default()),
            ("full".to_string(), ErrorTree::single("x", "msg")),
        ]);
        assert_eq!(t.leaf_count(), 1);
        assert!(t.get(&p("empty")).is_none());
    }

    #[test]
    fn retain_prunes_emptied_nodes() {
        let t = ErrorTree::from_leaves([
            (p("status.transition"), "t"),
            (p("status.valid"), "v"),
            (p("file.name"), "f"),
        ]);
        let kept = t.retain_leaves(|path, _| !path.starts_with(&p("status")));
        assert_eq!(kept, ErrorTree::from_leaves([(p("file.name"), "f")]));

        let none = t.retain_leaves(|_, _| false);
        assert!(none.is_empty());
        assert_eq!(none.leaf_count(), 0);
    }
}
