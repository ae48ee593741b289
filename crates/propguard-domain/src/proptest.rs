//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - The ancestor join (closest ancestor then lowest id, subtraction only, existential coverage)
//! - Authorship being read from the base version only
//! - Pass/fail not depending on classification

use crate::context::EvaluationContext;
use crate::engine::evaluate;
use crate::merge::{ExemptionSets, Neutralization, ancestor_join, closest_override};
use crate::model::ProposalDiff;
use crate::overrides::OverrideSet;
use crate::test_support::{author_approval, healthy_diff, policy};
use crate::tree::ErrorTree;
use propguard_types::ErrorPath;
use proptest::prelude::*;
use std::collections::BTreeMap;

// ============================================================================
// Strategies
// ============================================================================

/// Short segments from a small alphabet so that generated paths share ancestors often.
fn arb_path(max_len: usize) -> impl Strategy<Value = ErrorPath> {
    prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d"]), 0..=max_len)
        .prop_map(|segments| ErrorPath::from_segments(segments))
}

fn arb_leaf_path() -> impl Strategy<Value = ErrorPath> {
    prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d"]), 1..=4)
        .prop_map(|segments| ErrorPath::from_segments(segments))
}

fn arb_tree() -> impl Strategy<Value = ErrorTree> {
    prop::collection::vec(arb_leaf_path(), 0..12).prop_map(|paths| {
        ErrorTree::from_leaves(paths.into_iter().map(|p| {
            let message = format!("error at {p}");
            (p, message)
        }))
    })
}

fn arb_override_sets() -> impl Strategy<Value = Vec<(String, OverrideSet)>> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["p1", "p2", "p3", "p4"]),
            prop::collection::vec(arb_path(4), 0..4),
        ),
        0..5,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(id, paths)| (id.to_string(), paths.into_iter().collect()))
            .collect()
    })
}

/// Flat `(exemption id, path)` pairs in a random order; ids repeat across pairs.
fn arb_override_pairs() -> impl Strategy<Value = Vec<(String, ErrorPath)>> {
    prop::collection::vec(
        (prop::sample::select(vec!["p1", "p2", "p3", "p4"]), arb_path(4)),
        0..10,
    )
    .prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(id, path)| (id.to_string(), path))
            .collect::<Vec<_>>()
    })
    .prop_shuffle()
}

fn keyed(entries: &[(String, OverrideSet)]) -> ExemptionSets {
    let mut sets = ExemptionSets::new();
    for (id, set) in entries {
        sets.entry(id.clone())
            .or_default()
            .extend(set.iter().cloned());
    }
    sets
}

fn arb_status() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        prop::sample::select(vec!["Draft", "Review", "Last Call", "Final", "Withdrawn", "bogus"])
            .prop_map(|s| Some(s.to_string())),
    ]
}

// ============================================================================
// Ancestor join
// ============================================================================

proptest! {
    #[test]
    fn join_matches_closest_then_lowest_id_in_any_order(
        raw in arb_tree(),
        pairs in arb_override_pairs(),
    ) {
        let sets: ExemptionSets = pairs.iter().fold(ExemptionSets::new(), |mut sets, (id, path)| {
            sets.entry(id.clone()).or_default().insert(path.clone());
            sets
        });
        let merged = ancestor_join(&raw, &sets);

        let mut expected_errors = Vec::new();
        let mut expected_neutralized = Vec::new();
        for (path, message) in raw.leaves() {
            let best = pairs
                .iter()
                .filter(|(_, matched)| path.starts_with(matched))
                .max_by(|(a_id, a), (b_id, b)| a.len().cmp(&b.len()).then_with(|| b_id.cmp(a_id)));
            match best {
                Some((id, matched)) => expected_neutralized.push(Neutralization {
                    path,
                    exemption: id.clone(),
                    matched: matched.clone(),
                }),
                None => expected_errors.push((path, message)),
            }
        }

        prop_assert_eq!(merged.errors, ErrorTree::from_leaves(expected_errors));
        prop_assert_eq!(merged.neutralized, expected_neutralized);
    }

    #[test]
    fn join_only_removes_errors(
        raw in arb_tree(),
        entries in arb_override_sets(),
    ) {
        let merged = ancestor_join(&raw, &keyed(&entries));
        let raw_leaves: BTreeMap<ErrorPath, &str> = raw.leaves().into_iter().collect();

        for (path, message) in merged.errors.leaves() {
            prop_assert_eq!(raw_leaves.get(&path).copied(), Some(message));
        }
        prop_assert_eq!(
            merged.errors.leaf_count() + merged.neutralized.len(),
            raw.leaf_count()
        );
    }

    #[test]
    fn error_survives_iff_no_set_covers_it(
        raw in arb_tree(),
        entries in arb_override_sets(),
    ) {
        let sets = keyed(&entries);
        let merged = ancestor_join(&raw, &sets);

        for (path, _) in raw.leaves() {
            let covered = sets.values().any(|set| set.covering(&path).is_some());
            prop_assert_eq!(merged.errors.contains(&path), !covered);
        }
    }

    #[test]
    fn credited_match_is_the_closest_ancestor(
        raw in arb_tree(),
        entries in arb_override_sets(),
    ) {
        let sets = keyed(&entries);
        let merged = ancestor_join(&raw, &sets);

        for n in &merged.neutralized {
            prop_assert!(n.path.starts_with(&n.matched));
            let deepest = sets
                .values()
                .filter_map(|set| set.covering(&n.path))
                .map(ErrorPath::len)
                .max();
            prop_assert_eq!(Some(n.matched.len()), deepest);
            prop_assert_eq!(
                closest_override(&n.path, &sets).map(|(id, _)| id),
                Some(n.exemption.as_str())
            );
        }
    }
}

// ============================================================================
// Engine
// ============================================================================

proptest! {
    #[test]
    fn authorship_ignores_head_author_changes(
        head_authors in prop::option::of(prop::collection::vec("[A-Za-z@() ]{0,16}", 0..4)),
        base_has_author in any::<bool>(),
    ) {
        let policy = policy();
        let approvals = author_approval();
        let ctx = EvaluationContext::new(&policy).with_approvals(&approvals);

        let mut reference = healthy_diff();
        if !base_has_author {
            reference.base.authors = None;
        }
        let mut mutated = reference.clone();
        mutated.head.authors = head_authors;

        let a = evaluate(&reference, &ctx).unwrap();
        let b = evaluate(&mutated, &ctx).unwrap();
        prop_assert_eq!(a.verdict.passed(), b.verdict.passed());
        prop_assert_eq!(a.verdict.errors, b.verdict.errors);
    }

    #[test]
    fn classification_does_not_decide_pass(
        base_status in arb_status(),
        head_status in arb_status(),
        kind in prop::option::of(Just("Meta".to_string())),
    ) {
        let policy = policy();
        let approvals = author_approval();
        let ctx = EvaluationContext::new(&policy).with_approvals(&approvals);

        let mut diff: ProposalDiff = healthy_diff();
        diff.base.status = base_status;
        diff.head.status = head_status;
        diff.head.kind = kind;

        let evaluation = evaluate(&diff, &ctx).unwrap();
        prop_assert_eq!(evaluation.verdict.passed(), evaluation.verdict.errors.is_empty());

        let mut untyped = diff.clone();
        untyped.head.kind = None;
        let stripped = evaluate(&untyped, &ctx).unwrap();
        prop_assert_eq!(stripped.verdict.change_type, None);
        prop_assert_eq!(stripped.verdict.errors, evaluation.verdict.errors);
    }

    #[test]
    fn evaluation_is_deterministic(
        base_status in arb_status(),
        head_status in arb_status(),
    ) {
        let policy = policy();
        let approvals = author_approval();
        let ctx = EvaluationContext::new(&policy).with_approvals(&approvals);

        let mut diff = healthy_diff();
        diff.base.status = base_status;
        diff.head.status = head_status;

        prop_assert_eq!(evaluate(&diff, &ctx), evaluate(&diff, &ctx));
    }
}
