//! Property-based tests for path values.
//!
//! Note: The syntax, suffix and relationship modules have their own
//! property tests. This module checks the invariants of `PurePath` edits.

use super::pure::PurePath;
use super::relationship::RelativeMode;
use proptest::prelude::*;

// Strategy for generating file names, with optional leading dots and suffixes
fn name_strategy() -> impl Strategy<Value = String> {
    "\\.{0,3}[a-z0-9_-]{1,8}(\\.[a-z0-9]{1,4}){0,3}"
}

fn path_strategy() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec("[a-z0-9_-]{1,8}", 0..5),
        name_strategy(),
    )
        .prop_map(|(absolute, dirs, name)| {
            let mut path = if absolute { "/".to_string() } else { String::new() };
            for dir in dirs {
                path.push_str(&dir);
                path.push('/');
            }
            path.push_str(&name);
            path
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Re-constructing from the string form is the identity
    #[test]
    fn round_trip_stable(s in path_strategy()) {
        let path = PurePath::new(&s);
        prop_assert_eq!(PurePath::new(path.to_string()), path);
    }

    // Renaming to the current name is the identity
    #[test]
    fn identity_rename(s in path_strategy()) {
        let path = PurePath::new(&s);
        let renamed = path.with_name(path.name()).unwrap();
        prop_assert_eq!(renamed, path);
    }

    // Re-applying the current suffix is the identity
    #[test]
    fn identity_suffix(s in path_strategy()) {
        let path = PurePath::new(&s);
        let resuffixed = path.with_suffix(path.suffix()).unwrap();
        prop_assert_eq!(resuffixed, path);
    }

    // Re-applying the current suffix chain is the identity
    #[test]
    fn identity_suffixes(s in path_strategy()) {
        let path = PurePath::new(&s);
        let chain = path.suffixes();
        let resuffixed = path.with_suffixes(&chain).unwrap();
        prop_assert_eq!(resuffixed, path);
    }

    // Removing or replacing suffixes keeps the path in normal form
    #[test]
    fn suffix_edits_round_trip(s in path_strategy()) {
        let path = PurePath::new(&s);
        for edited in [
            path.with_suffix("").unwrap(),
            path.with_suffixes::<&str>(&[]).unwrap(),
            path.with_suffixes(&[".a", ".b"]).unwrap(),
        ] {
            prop_assert_eq!(PurePath::new(edited.to_string()), edited);
        }
    }

    // Renames keep the path in normal form
    #[test]
    fn rename_edits_round_trip(s in path_strategy(), name in name_strategy()) {
        let path = PurePath::new(&s);
        for edited in [path.with_name(&name).unwrap(), path.with_stem(&name).unwrap()] {
            prop_assert_eq!(PurePath::new(edited.to_string()), edited);
        }
    }

    // The name is the stem followed by the last suffix
    #[test]
    fn stem_and_suffix_rebuild_name(s in path_strategy()) {
        let path = PurePath::new(&s);
        let rebuilt = format!("{}{}", path.stem(), path.suffix());
        prop_assert_eq!(rebuilt, path.name());
        prop_assert_eq!(path.parts().last().map(String::as_str), Some(path.name()));
    }

    // The new name is exactly what was asked for
    #[test]
    fn with_name_sets_name(s in path_strategy(), name in name_strategy()) {
        let path = PurePath::new(&s);
        let renamed = path.with_name(&name).unwrap();
        prop_assert_eq!(renamed.name(), name.as_str());
        prop_assert_eq!(renamed.parent(), path.parent());
    }

    // A joined child is relative to its parent in both modes
    #[test]
    fn joined_child_relative_to_parent(s in path_strategy(), child in name_strategy()) {
        let parent = PurePath::new(&s);
        let joined = parent.join([child.as_str()]);
        let segments = joined.relative_to(&parent).unwrap();
        let prefix = joined.relative_to_with(&parent, RelativeMode::StringPrefix).unwrap();
        prop_assert_eq!(segments.as_str(), child.as_str());
        prop_assert_eq!(prefix, segments);
    }

    // The parent of a joined child is the original path
    #[test]
    fn parent_of_join(s in path_strategy(), child in name_strategy()) {
        let parent = PurePath::new(&s);
        prop_assert_eq!(parent.join([child.as_str()]).parent(), parent);
    }
}
