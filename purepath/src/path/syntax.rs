//! Lexical path syntax.
//!
//! [`PathSyntax`] is the small set of string primitives that [`PurePath`]
//! builds on: joining, normalizing, splitting off the directory or base name,
//! and recognizing the root. None of these functions touch the filesystem.
//!
//! [`Posix`] is the only syntax shipped with the crate. It uses `/` as its
//! single separator.
//!
//! [`PurePath`]: super::PurePath

use std::fmt::Debug;
use std::hash::Hash;

/// String-level path primitives for one separator convention.
///
/// Implementations are zero-sized markers; [`PurePath`](super::PurePath) is
/// generic over them so that the separator is fixed at the type level.
pub trait PathSyntax: Debug + Default + Clone + Copy + PartialEq + Eq + Hash + Send + Sync {
    /// The separator between path segments.
    const SEPARATOR: char;

    /// Join segments with the separator, skipping empty segments.
    ///
    /// The result is not normalized. Joining nothing yields an empty string.
    fn join<S: AsRef<str>>(&self, segments: &[S]) -> String {
        let mut joined = String::new();
        for segment in segments {
            let segment: &str = segment.as_ref();
            if segment.is_empty() {
                continue;
            }
            if !joined.is_empty() {
                joined.push(Self::SEPARATOR);
            }
            joined.push_str(segment);
        }
        joined
    }

    /// Lexically normalize a path.
    fn normalize(&self, path: &str) -> String;

    /// The root of the path: the separator for absolute paths, empty otherwise.
    fn parse_root<'a>(&self, path: &'a str) -> &'a str;

    /// Whether the path is absolute.
    fn is_absolute(&self, path: &str) -> bool {
        !self.parse_root(path).is_empty()
    }

    /// The final segment of a normalized path.
    fn basename<'a>(&self, path: &'a str) -> &'a str {
        let rest = &path[self.parse_root(path).len()..];
        match rest.rfind(Self::SEPARATOR) {
            Some(idx) => &rest[idx + Self::SEPARATOR.len_utf8()..],
            None => rest,
        }
    }

    /// Everything before the final segment of a normalized path.
    ///
    /// The directory of a root path is the root itself, and the directory of
    /// a single relative segment is `"."`.
    fn dirname<'a>(&self, path: &'a str) -> &'a str {
        let root = self.parse_root(path);
        let rest = &path[root.len()..];
        match rest.rfind(Self::SEPARATOR) {
            Some(idx) => &path[..root.len() + idx],
            None if root.is_empty() => ".",
            None => root,
        }
    }
}

/// POSIX path syntax with `/` as the separator.
///
/// # Examples
///
/// ```
/// use purepath::path::{PathSyntax, Posix};
///
/// assert_eq!(Posix.normalize("/a/./b/../c/"), "/a/c");
/// assert_eq!(Posix.normalize("../a//b"), "../a/b");
/// assert_eq!(Posix.normalize(""), ".");
/// assert_eq!(Posix.join(&["/path/", "to/file.txt"]), "/path//to/file.txt");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Posix;

impl PathSyntax for Posix {
    const SEPARATOR: char = '/';

    fn normalize(&self, path: &str) -> String {
        let absolute = self.is_absolute(path);
        let mut segments: Vec<&str> = Vec::new();

        for segment in path.split(Self::SEPARATOR) {
            match segment {
                // Empty segments come from repeated or trailing separators
                "" | "." => {}
                ".." => match segments.last() {
                    Some(&last) if last != ".." => {
                        segments.pop();
                    }
                    // Nothing above the root
                    _ if absolute => {}
                    _ => segments.push(segment),
                },
                _ => segments.push(segment),
            }
        }

        let body = segments.join("/");
        if absolute {
            format!("/{body}")
        } else if body.is_empty() {
            ".".to_string()
        } else {
            body
        }
    }

    fn parse_root<'a>(&self, path: &'a str) -> &'a str {
        if path.starts_with(Self::SEPARATOR) {
            &path[..1]
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_skips_empty_segments() {
        assert_eq!(Posix.join(&["/path", "", "to"]), "/path/to");
        assert_eq!(Posix.join(&["", "a"]), "a");
        assert_eq!(Posix.join::<&str>(&[]), "");
    }

    #[test]
    fn test_join_does_not_reset_on_absolute() {
        assert_eq!(Posix.normalize(&Posix.join(&["/a", "/b"])), "/a/b");
    }

    #[test]
    fn test_normalize_simple() {
        assert_eq!(Posix.normalize("/a/./b/../c"), "/a/c");
        assert_eq!(Posix.normalize("/a/b/../../c"), "/c");
    }

    #[test]
    fn test_normalize_duplicate_and_trailing_separators() {
        assert_eq!(Posix.normalize("//a///b//"), "/a/b");
        assert_eq!(Posix.normalize("a/b/"), "a/b");
    }

    #[test]
    fn test_normalize_root() {
        assert_eq!(Posix.normalize("/"), "/");
        assert_eq!(Posix.normalize("///"), "/");
        assert_eq!(Posix.normalize("/.."), "/");
        assert_eq!(Posix.normalize("/a/../.."), "/");
    }

    #[test]
    fn test_normalize_relative() {
        assert_eq!(Posix.normalize(""), ".");
        assert_eq!(Posix.normalize("."), ".");
        assert_eq!(Posix.normalize("./a"), "a");
        assert_eq!(Posix.normalize("a/.."), ".");
        assert_eq!(Posix.normalize("../a"), "../a");
        assert_eq!(Posix.normalize("a/../../b"), "../b");
        assert_eq!(Posix.normalize("../../a/.."), "../..");
    }

    #[test]
    fn test_parse_root() {
        assert_eq!(Posix.parse_root("/a/b"), "/");
        assert_eq!(Posix.parse_root("a/b"), "");
        assert_eq!(Posix.parse_root("."), "");
    }

    #[test]
    fn test_is_absolute() {
        assert!(Posix.is_absolute("/path/to/file.txt"));
        assert!(!Posix.is_absolute("./path/to/file.txt"));
        assert!(!Posix.is_absolute("../path/to/file.txt"));
    }

    #[test]
    fn test_basename() {
        assert_eq!(Posix.basename("/path/to/file.txt"), "file.txt");
        assert_eq!(Posix.basename("file.txt"), "file.txt");
        assert_eq!(Posix.basename("/"), "");
    }

    #[test]
    fn test_dirname() {
        assert_eq!(Posix.dirname("/path/to/file.txt"), "/path/to");
        assert_eq!(Posix.dirname("/path"), "/");
        assert_eq!(Posix.dirname("/"), "/");
        assert_eq!(Posix.dirname("a/b"), "a");
        assert_eq!(Posix.dirname("a"), ".");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn raw_path_strategy() -> impl Strategy<Value = String> {
            let parts = prop::collection::vec(
                prop_oneof![
                    Just(String::new()),
                    Just(".".to_string()),
                    Just("..".to_string()),
                    "[a-zA-Z0-9_.-]{1,10}",
                ],
                0..=8,
            );
            (any::<bool>(), parts).prop_map(|(absolute, parts)| {
                let body = parts.join("/");
                if absolute {
                    format!("/{body}")
                } else {
                    body
                }
            })
        }

        proptest! {
            /// Normalization is idempotent
            #[test]
            fn normalize_idempotent(s in raw_path_strategy()) {
                let once = Posix.normalize(&s);
                prop_assert_eq!(Posix.normalize(&once), once);
            }

            /// Normalization preserves absoluteness
            #[test]
            fn normalize_preserves_absolute(s in raw_path_strategy()) {
                prop_assert_eq!(Posix.is_absolute(&Posix.normalize(&s)), Posix.is_absolute(&s));
            }

            /// Normalized paths have no empty or "." segments
            #[test]
            fn normalize_no_empty_segments(s in raw_path_strategy()) {
                let normalized = Posix.normalize(&s);
                if normalized != "/" && normalized != "." {
                    let rest = normalized.strip_prefix('/').unwrap_or(&normalized);
                    for segment in rest.split('/') {
                        prop_assert!(!segment.is_empty());
                        prop_assert_ne!(segment, ".");
                    }
                }
            }

            /// dirname joined with basename rebuilds the path
            #[test]
            fn dirname_basename_rebuild(s in raw_path_strategy()) {
                let normalized = Posix.normalize(&s);
                let base = Posix.basename(&normalized);
                if !base.is_empty() && normalized != "." {
                    let dir = Posix.dirname(&normalized);
                    let rebuilt = Posix.normalize(&Posix.join(&[dir, base]));
                    prop_assert_eq!(rebuilt, normalized);
                }
            }
        }
    }
}
