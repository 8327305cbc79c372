//! Property-based tests for path entities.
//!
//! The normalize module has its own property tests. This module covers the
//! equality, hashing and ordering contract of [`PathEntity`].

use super::{EntryKind, PathEntity};
use proptest::prelude::*;
use std::collections::HashSet;
use std::path::PathBuf;

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(component_strategy(), 1..6).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

fn kind_strategy() -> impl Strategy<Value = Option<EntryKind>> {
    prop_oneof![
        Just(None),
        Just(Some(EntryKind::Dir)),
        Just(Some(EntryKind::Symlink)),
        Just(Some(EntryKind::Other)),
    ]
}

fn entity(path: PathBuf, kind: Option<EntryKind>) -> PathEntity {
    match kind {
        Some(kind) => PathEntity::with_kind(path, kind),
        None => PathEntity::new(path),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Equality ignores where an entity came from.
    #[test]
    fn equality_ignores_source(
        path in absolute_path_strategy(),
        a in kind_strategy(),
        b in kind_strategy(),
    ) {
        let left = entity(path.clone(), a);
        let right = entity(path, b);
        prop_assert_eq!(&left, &right);

        let mut set = HashSet::new();
        set.insert(left);
        prop_assert!(!set.insert(right));
    }

    // Ordering is total and consistent with equality.
    #[test]
    fn ordering_consistent_with_equality(
        a in absolute_path_strategy(),
        b in absolute_path_strategy(),
    ) {
        let left = PathEntity::from(a);
        let right = PathEntity::from(b);
        prop_assert_eq!(left.cmp(&right), right.cmp(&left).reverse());
        prop_assert_eq!(left.cmp(&right).is_eq(), left == right);
    }

    // Case only breaks ties: paths equal ignoring case sort next to each other.
    #[test]
    fn ordering_is_case_insensitive_first(
        base in absolute_path_strategy(),
        other in absolute_path_strategy(),
    ) {
        let lower = PathEntity::from(base.to_string_lossy().to_lowercase());
        let upper = PathEntity::from(base.to_string_lossy().to_uppercase());
        let third = PathEntity::from(other);
        let folded = third.as_path().to_string_lossy().to_lowercase();
        let base_folded = base.to_string_lossy().to_lowercase();

        if folded < base_folded {
            prop_assert!(third < lower && third < upper);
        } else if folded > base_folded {
            prop_assert!(third > lower && third > upper);
        }
    }

    // Joining then taking the parent returns the original entity.
    #[test]
    fn join_then_parent_round_trips(
        base in absolute_path_strategy(),
        segment in component_strategy(),
    ) {
        let parent = PathEntity::from(base);
        let child = parent.join(&segment);
        prop_assert_eq!(child.parent(), Some(parent));
        prop_assert_eq!(child.file_name().and_then(|n| n.to_str()), Some(segment.as_str()));
    }
}
