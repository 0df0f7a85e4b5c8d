//! Path relationship checking.
//!
//! This module provides functionality to determine the relationship between
//! two paths, such as whether one is an ancestor or descendant of the other.
//! Relationships are decided lexically, one whole segment at a time, so
//! `/usr/local` is not an ancestor of `/usr/local-old`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::pure::PurePath;
use super::syntax::PathSyntax;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use purepath::{PathRelationship, PurePath};
///
/// let parent = PurePath::new("/home/user");
/// let child = PurePath::new("/home/user/project");
///
/// assert_eq!(
///     PathRelationship::between(&parent, &child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same.
    Same,

    /// Neither path is an ancestor or descendant of the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// Both paths are already normalized, so this compares their roots and
    /// then their segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::{PathRelationship, PurePath};
    ///
    /// let rel = PathRelationship::between(&PurePath::new("/a"), &PurePath::new("/a/b"));
    /// assert_eq!(rel, PathRelationship::Ancestor);
    ///
    /// let rel = PathRelationship::between(&PurePath::new("/a/b"), &PurePath::new("/a"));
    /// assert_eq!(rel, PathRelationship::Descendant);
    ///
    /// let rel = PathRelationship::between(&PurePath::new("/a"), &PurePath::new("/a"));
    /// assert_eq!(rel, PathRelationship::Same);
    ///
    /// let rel = PathRelationship::between(&PurePath::new("/a"), &PurePath::new("/ab"));
    /// assert_eq!(rel, PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between<S: PathSyntax>(path1: &PurePath<S>, path2: &PurePath<S>) -> Self {
        if path1 == path2 {
            return Self::Same;
        }
        if path1.root() != path2.root() {
            return Self::Unrelated;
        }

        let parts1 = path1.parts();
        let parts2 = path2.parts();

        if parts2.starts_with(parts1) {
            return Self::Ancestor;
        }
        if parts1.starts_with(parts2) {
            return Self::Descendant;
        }

        Self::Unrelated
    }

    /// Check if the relationship is hierarchical (not unrelated).
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::PathRelationship;
    ///
    /// assert!(PathRelationship::Ancestor.is_hierarchical());
    /// assert!(PathRelationship::Same.is_hierarchical());
    /// assert!(!PathRelationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if a path is within a directory (descendant or same).
    #[must_use]
    pub fn is_within<S: PathSyntax>(path: &PurePath<S>, directory: &PurePath<S>) -> bool {
        matches!(
            Self::between(path, directory),
            Self::Descendant | Self::Same
        )
    }

    /// Check if a path contains another path (ancestor or same).
    #[must_use]
    pub fn contains<S: PathSyntax>(path: &PurePath<S>, other: &PurePath<S>) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    #[must_use]
    pub fn description<S: PathSyntax>(&self, path1: &PurePath<S>, path2: &PurePath<S>) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated paths"),
        }
    }
}

/// How [`PurePath::relative_to_with`] decides that one path lies beneath
/// another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelativeMode {
    /// Compare whole segments.
    #[default]
    Segments,
    /// Compare raw strings. `/usr/local-old` is beneath `/usr/local`.
    StringPrefix,
}

impl RelativeMode {
    /// Parses a mode from a string.
    ///
    /// Recognizes: "segments", "string-prefix" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::RelativeMode;
    ///
    /// assert_eq!(RelativeMode::parse("segments").unwrap(), RelativeMode::Segments);
    /// assert_eq!(RelativeMode::parse("STRING-PREFIX").unwrap(), RelativeMode::StringPrefix);
    /// assert!(RelativeMode::parse("fuzzy").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "segments" => Ok(Self::Segments),
            "string-prefix" => Ok(Self::StringPrefix),
            _ => Err(format!("invalid relative mode: {s}")),
        }
    }
}

impl fmt::Display for RelativeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Segments => write!(f, "segments"),
            Self::StringPrefix => write!(f, "string-prefix"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> PurePath {
        PurePath::new(s)
    }

    #[test]
    fn test_relationship_ancestor() {
        assert_eq!(
            PathRelationship::between(&p("/a"), &p("/a/b")),
            PathRelationship::Ancestor
        );
        assert_eq!(
            PathRelationship::between(&p("/a/b"), &p("/a/b/c/d")),
            PathRelationship::Ancestor
        );
        assert_eq!(
            PathRelationship::between(&p("/"), &p("/a")),
            PathRelationship::Ancestor
        );
    }

    #[test]
    fn test_relationship_descendant() {
        assert_eq!(
            PathRelationship::between(&p("/a/b"), &p("/a")),
            PathRelationship::Descendant
        );
    }

    #[test]
    fn test_relationship_same() {
        assert_eq!(
            PathRelationship::between(&p("/a/b/c"), &p("/a/b/c")),
            PathRelationship::Same
        );
        assert_eq!(
            PathRelationship::between(&p("/a/"), &p("/a")),
            PathRelationship::Same
        );
    }

    #[test]
    fn test_relationship_unrelated() {
        assert_eq!(
            PathRelationship::between(&p("/a/b"), &p("/a/c")),
            PathRelationship::Unrelated
        );
        assert_eq!(
            PathRelationship::between(&p("/usr/local"), &p("/usr/local-old")),
            PathRelationship::Unrelated
        );
    }

    #[test]
    fn test_relationship_relative_paths() {
        assert_eq!(
            PathRelationship::between(&p("."), &p("a/b")),
            PathRelationship::Ancestor
        );
        assert_eq!(
            PathRelationship::between(&p("."), &p("/a")),
            PathRelationship::Unrelated
        );
        assert_eq!(
            PathRelationship::between(&p("a"), &p("/a")),
            PathRelationship::Unrelated
        );
    }

    #[test]
    fn test_is_within_and_contains() {
        assert!(PathRelationship::is_within(&p("/a/b"), &p("/a")));
        assert!(PathRelationship::is_within(&p("/a"), &p("/a")));
        assert!(!PathRelationship::is_within(&p("/a"), &p("/a/b")));
        assert!(PathRelationship::contains(&p("/a"), &p("/a/b")));
        assert!(!PathRelationship::contains(&p("/a"), &p("/b")));
    }

    #[test]
    fn test_description() {
        let desc = PathRelationship::Ancestor.description(&p("/a"), &p("/a/b"));
        assert_eq!(desc, "/a is an ancestor of /a/b");

        let desc = PathRelationship::Unrelated.description(&p("/a"), &p("/b"));
        assert!(desc.contains("unrelated"));
    }

    #[test]
    fn test_relative_mode_display() {
        assert_eq!(RelativeMode::Segments.to_string(), "segments");
        assert_eq!(RelativeMode::StringPrefix.to_string(), "string-prefix");
        assert_eq!(RelativeMode::default(), RelativeMode::Segments);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn path_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec("[a-c]{1,2}", 0..=4)
                .prop_map(|parts| format!("/{}", parts.join("/")))
        }

        proptest! {
            /// A path is the same as itself
            #[test]
            fn relationship_reflexive(s in path_strategy()) {
                let path = p(&s);
                prop_assert_eq!(PathRelationship::between(&path, &path), PathRelationship::Same);
            }

            /// Swapping the arguments mirrors the relationship
            #[test]
            fn relationship_symmetric(s1 in path_strategy(), s2 in path_strategy()) {
                let (p1, p2) = (p(&s1), p(&s2));
                let rel1 = PathRelationship::between(&p1, &p2);
                let rel2 = PathRelationship::between(&p2, &p1);

                match (rel1, rel2) {
                    (PathRelationship::Ancestor, PathRelationship::Descendant)
                    | (PathRelationship::Descendant, PathRelationship::Ancestor)
                    | (PathRelationship::Same, PathRelationship::Same)
                    | (PathRelationship::Unrelated, PathRelationship::Unrelated) => {}
                    _ => prop_assert!(false, "Invalid relationship symmetry: {:?} vs {:?}", rel1, rel2),
                }
            }

            /// Joining a segment always produces a descendant
            #[test]
            fn join_produces_descendant(s in path_strategy(), child in "[a-z]{1,5}") {
                let parent = p(&s);
                let joined = parent.join([child.as_str()]);
                prop_assert_eq!(PathRelationship::between(&parent, &joined), PathRelationship::Ancestor);
            }
        }
    }
}
