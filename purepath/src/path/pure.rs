//! The [`PurePath`] value type.

use std::cmp::Ordering;
use std::ffi::OsStr;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::relationship::{PathRelationship, RelativeMode};
use super::suffix::{self, json_type_name};
use super::syntax::{PathSyntax, Posix};
use crate::error::{Error, Result};

/// An immutable, normalized path string.
///
/// A `PurePath` never touches the filesystem. It is normalized once, when it
/// is constructed, and every edit returns a new value.
///
/// # Examples
///
/// ```
/// use purepath::PurePath;
///
/// let path = PurePath::new("/path/to/archive.tar.gz");
/// assert_eq!(path.name(), "archive.tar.gz");
/// assert_eq!(path.stem(), "archive.tar");
/// assert_eq!(path.suffix(), ".gz");
/// assert_eq!(path.suffixes(), vec![".tar", ".gz"]);
/// assert_eq!(path.parts(), ["/", "path", "to", "archive.tar.gz"]);
///
/// let zipped = path.with_suffixes(&[".zip"]).unwrap();
/// assert_eq!(zipped.as_str(), "/path/to/archive.zip");
/// ```
pub struct PurePath<S: PathSyntax = Posix> {
    path: String,
    parts: OnceLock<Vec<String>>,
    syntax: S,
}

impl PurePath<Posix> {
    /// Create a path from a single string, normalizing it.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::PurePath;
    ///
    /// assert_eq!(PurePath::new("/a/./b/../c/").as_str(), "/a/c");
    /// assert_eq!(PurePath::new("").as_str(), ".");
    /// ```
    #[must_use]
    pub fn new(path: impl AsRef<str>) -> Self {
        Self::from_segments([path])
    }
}

impl<S: PathSyntax> PurePath<S> {
    /// Create a path by joining and normalizing several segments.
    ///
    /// Segments may be strings or other `PurePath`s. Empty segments do not
    /// introduce a separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::PurePath;
    ///
    /// let path: PurePath = PurePath::from_segments(["/path/", "to/file.txt"]);
    /// assert_eq!(path.as_str(), "/path/to/file.txt");
    /// ```
    #[must_use]
    pub fn from_segments<I, T>(segments: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let syntax = S::default();
        let segments: Vec<T> = segments.into_iter().collect();
        let path = syntax.normalize(&syntax.join(&segments));
        log::trace!("constructed path {path:?} from {} segment(s)", segments.len());
        Self::from_normalized(path)
    }

    /// Wrap a string that is already in normal form.
    fn from_normalized(path: String) -> Self {
        Self {
            path,
            parts: OnceLock::new(),
            syntax: S::default(),
        }
    }

    /// The canonical string form of the path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// The path with every separator written as `/`.
    #[must_use]
    pub fn as_posix(&self) -> String {
        self.path.replace(S::SEPARATOR, "/")
    }

    /// The path as a `file://` URI.
    ///
    /// Special characters are not percent-encoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::PurePath;
    ///
    /// let path = PurePath::new("/path/to/file.txt");
    /// assert_eq!(path.as_uri(), "file:///path/to/file.txt");
    /// ```
    #[must_use]
    pub fn as_uri(&self) -> String {
        format!("file://{}", self.as_posix())
    }

    /// The root of the path: the separator if absolute, otherwise `""`.
    #[must_use]
    pub fn root(&self) -> &str {
        self.syntax.parse_root(&self.path)
    }

    /// Whether the path consists of its root alone.
    #[must_use]
    pub fn is_root(&self) -> bool {
        !self.path.is_empty() && self.root() == self.path
    }

    /// Whether the path is absolute.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.syntax.is_absolute(&self.path)
    }

    /// The components of the path, starting with the root if there is one.
    ///
    /// Computed on first access and cached.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::PurePath;
    ///
    /// assert_eq!(PurePath::new("/").parts(), ["/"]);
    /// assert_eq!(PurePath::new("a/b").parts(), ["a", "b"]);
    /// assert!(PurePath::new(".").parts().is_empty());
    /// ```
    pub fn parts(&self) -> &[String] {
        self.parts.get_or_init(|| {
            let root = self.root();
            if self.is_root() {
                return vec![root.to_string()];
            }

            let mut parts = Vec::new();
            if !root.is_empty() {
                parts.push(root.to_string());
            }
            if self.path != "." {
                parts.extend(
                    self.path[root.len()..]
                        .split(S::SEPARATOR)
                        .map(str::to_string),
                );
            }
            parts
        })
    }

    /// The final component, or `""` for a root path and for `.`.
    #[must_use]
    pub fn name(&self) -> &str {
        if self.path == "." {
            return "";
        }
        self.syntax.basename(&self.path)
    }

    /// The final component without its last suffix.
    #[must_use]
    pub fn stem(&self) -> &str {
        suffix::stem(self.name())
    }

    /// The last suffix of the final component, including the dot.
    #[must_use]
    pub fn suffix(&self) -> &str {
        suffix::last_suffix(self.name())
    }

    /// Every suffix of the final component, in order.
    #[must_use]
    pub fn suffixes(&self) -> Vec<&str> {
        suffix::split_suffixes(self.name())
    }

    /// The logical parent of the path.
    ///
    /// The parent of a root path is itself, and the parent of `.` or of a
    /// single relative segment is `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::PurePath;
    ///
    /// assert_eq!(PurePath::new("/path/to/file.txt").parent().as_str(), "/path/to");
    /// assert_eq!(PurePath::new("/").parent().as_str(), "/");
    /// assert_eq!(PurePath::new("file.txt").parent().as_str(), ".");
    /// ```
    #[must_use]
    pub fn parent(&self) -> Self {
        if self.path == "." {
            return self.clone();
        }
        Self::from_normalized(self.syntax.dirname(&self.path).to_string())
    }

    /// Append segments beneath this path.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::PurePath;
    ///
    /// let base = PurePath::new("/path/to");
    /// assert_eq!(base.join(["dir", "file.txt"]).as_str(), "/path/to/dir/file.txt");
    /// assert_eq!(base.join([PurePath::new("dir")]).as_str(), "/path/to/dir");
    /// ```
    #[must_use]
    pub fn join<I, T>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut all = vec![self.path.clone()];
        all.extend(segments.into_iter().map(|s| s.as_ref().to_string()));
        Self::from_segments(all)
    }

    /// The path relative to `other`, comparing whole segments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotRelative`] unless `other` is this path or one of
    /// its ancestors.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::PurePath;
    ///
    /// let path = PurePath::new("/usr/local/etc");
    /// assert_eq!(path.relative_to(&PurePath::new("/usr")).unwrap().as_str(), "local/etc");
    ///
    /// let err = PurePath::new("/usr/local/bin")
    ///     .relative_to(&PurePath::new("/usr/bin"))
    ///     .unwrap_err();
    /// assert_eq!(err.to_string(), "'/usr/local/bin' does not start with '/usr/bin'");
    /// ```
    pub fn relative_to(&self, other: &Self) -> Result<Self> {
        self.relative_to_with(other, RelativeMode::Segments)
    }

    /// The path relative to `other`, using the given comparison mode.
    ///
    /// [`RelativeMode::StringPrefix`] compares the raw strings, so
    /// `/usr/local-old` counts as beneath `/usr/local`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotRelative`] if `other` does not contain this path
    /// under the chosen mode.
    pub fn relative_to_with(&self, other: &Self, mode: RelativeMode) -> Result<Self> {
        let remainder = match mode {
            RelativeMode::Segments => self.segment_remainder(other),
            RelativeMode::StringPrefix => self.prefix_remainder(other),
        };

        match remainder {
            Some(rest) => Ok(Self::from_segments([rest])),
            None => {
                log::debug!("{self} is not relative to {other} ({mode})");
                Err(Error::NotRelative {
                    path: self.path.clone(),
                    other: other.path.clone(),
                })
            }
        }
    }

    fn segment_remainder(&self, other: &Self) -> Option<String> {
        match PathRelationship::between(other, self) {
            PathRelationship::Same => Some(String::new()),
            PathRelationship::Ancestor => {
                let skip = other.parts().len();
                let rest = &self.parts()[skip..];
                Some(self.syntax.join(rest))
            }
            PathRelationship::Descendant | PathRelationship::Unrelated => None,
        }
    }

    fn prefix_remainder(&self, other: &Self) -> Option<String> {
        let rest = self.path.strip_prefix(other.path.as_str())?;
        let rest = rest.strip_prefix(S::SEPARATOR).unwrap_or(rest);
        Some(rest.to_string())
    }

    /// Whether [`relative_to`](Self::relative_to) would succeed.
    #[must_use]
    pub fn is_relative_to(&self, other: &Self) -> bool {
        matches!(
            PathRelationship::between(other, self),
            PathRelationship::Same | PathRelationship::Ancestor
        )
    }

    fn require_name(&self, component: &'static str) -> Result<()> {
        if self.name().is_empty() {
            log::debug!("cannot replace the {component} of {self}");
            return Err(Error::EmptyName {
                path: self.path.clone(),
                component,
            });
        }
        Ok(())
    }

    /// Replace the final component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyName`] if the path has no name (a root path or
    /// `.`), or [`Error::InvalidName`] if `name` is empty, `.`, `..` or
    /// contains a separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::PurePath;
    ///
    /// let path = PurePath::new("/path/to/file.txt");
    /// assert_eq!(path.with_name("file.md").unwrap().as_str(), "/path/to/file.md");
    ///
    /// let err = PurePath::new("/").with_name("name").unwrap_err();
    /// assert_eq!(err.to_string(), "PurePath('/') has an empty name");
    /// ```
    pub fn with_name(&self, name: &str) -> Result<Self> {
        self.require_name("name")?;
        if name.is_empty() || name == "." || name == ".." || name.contains(S::SEPARATOR) {
            return Err(Error::InvalidName {
                name: name.to_string(),
            });
        }

        let head = &self.path[..self.path.len() - self.name().len()];
        Ok(Self::from_normalized(format!("{head}{name}")))
    }

    /// Replace the stem of the final component, keeping its suffix.
    ///
    /// # Errors
    ///
    /// Fails like [`with_name`](Self::with_name) when the path has no name or
    /// the resulting name is not a single segment. An empty stem is always
    /// rejected with [`Error::InvalidName`].
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::PurePath;
    ///
    /// let path = PurePath::new("/path/to/file.tar.gz");
    /// assert_eq!(path.with_stem("backup").unwrap().as_str(), "/path/to/backup.gz");
    /// ```
    pub fn with_stem(&self, stem: &str) -> Result<Self> {
        self.require_name("name")?;
        if stem.is_empty() {
            return Err(Error::InvalidName {
                name: stem.to_string(),
            });
        }
        let name = self.name();
        let kept = &name[self.stem().len()..];
        self.with_name(&format!("{stem}{kept}"))
    }

    /// Replace the last suffix. An empty suffix removes it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSuffix`] if `suffix` is neither empty nor a
    /// dot followed by word characters, or [`Error::EmptyName`] if the path
    /// has no name.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::PurePath;
    ///
    /// let path = PurePath::new("/path/to/file.tar.gz");
    /// assert_eq!(path.with_suffix(".zip").unwrap().as_str(), "/path/to/file.tar.zip");
    /// assert_eq!(path.with_suffix("").unwrap().as_str(), "/path/to/file.tar");
    /// assert!(path.with_suffix("zip").is_err());
    /// ```
    pub fn with_suffix(&self, suffix: &str) -> Result<Self> {
        suffix::validate_suffix(suffix)?;
        self.require_name("suffix")?;

        let keep = self.path.len() - self.suffix().len();
        Ok(Self::from_normalized(format!("{}{suffix}", &self.path[..keep])))
    }

    /// Replace the whole suffix chain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSuffix`] with the index of the first invalid
    /// suffix, or [`Error::EmptyName`] if the path has no name.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::PurePath;
    ///
    /// let path = PurePath::new("/path/to/file.txt.tar.gz");
    /// assert_eq!(
    ///     path.with_suffixes(&[".md", ".zip"]).unwrap().as_str(),
    ///     "/path/to/file.md.zip"
    /// );
    /// ```
    pub fn with_suffixes<T: AsRef<str>>(&self, suffixes: &[T]) -> Result<Self> {
        suffix::validate_suffixes(suffixes)?;
        self.require_name("suffix")?;

        let chain_len: usize = self.suffixes().iter().map(|s| s.len()).sum();
        let keep = self.path.len() - chain_len;
        let mut path = self.path[..keep].to_string();
        for suffix in suffixes {
            path.push_str(suffix.as_ref());
        }
        Ok(Self::from_normalized(path))
    }

    /// Replace the whole suffix chain from a dynamically typed value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidType`] if `value` is not an array of strings,
    /// otherwise fails like [`with_suffixes`](Self::with_suffixes).
    pub fn with_suffixes_value(&self, value: &serde_json::Value) -> Result<Self> {
        let suffixes = suffix::suffixes_from_value(value)?;
        self.with_suffixes(&suffixes)
    }
}

impl<S: PathSyntax> Clone for PurePath<S> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            parts: self.parts.clone(),
            syntax: self.syntax,
        }
    }
}

impl<S: PathSyntax> fmt::Debug for PurePath<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PurePath({:?})", self.path)
    }
}

impl<S: PathSyntax> fmt::Display for PurePath<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

// The parts cache is derived from `path`, so only `path` takes part in
// comparisons.
impl<S: PathSyntax> PartialEq for PurePath<S> {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl<S: PathSyntax> Eq for PurePath<S> {}

impl<S: PathSyntax> PartialOrd for PurePath<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: PathSyntax> Ord for PurePath<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.path.cmp(&other.path)
    }
}

impl<S: PathSyntax> Hash for PurePath<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl<S: PathSyntax> AsRef<str> for PurePath<S> {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl<S: PathSyntax> From<&str> for PurePath<S> {
    fn from(path: &str) -> Self {
        Self::from_segments([path])
    }
}

impl<S: PathSyntax> From<String> for PurePath<S> {
    fn from(path: String) -> Self {
        Self::from_segments([path])
    }
}

impl<S: PathSyntax> FromStr for PurePath<S> {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl<S: PathSyntax> TryFrom<&OsStr> for PurePath<S> {
    type Error = Error;

    fn try_from(value: &OsStr) -> Result<Self> {
        let path = value.to_str().ok_or_else(|| Error::InvalidType {
            argument: "path",
            expected: "one of (string, PurePath)",
            found: "non-UTF-8 OsStr".to_string(),
        })?;
        Ok(Self::from(path))
    }
}

impl<S: PathSyntax> TryFrom<&std::path::Path> for PurePath<S> {
    type Error = Error;

    fn try_from(value: &std::path::Path) -> Result<Self> {
        Self::try_from(value.as_os_str())
    }
}

/// Build a path from a JSON string, or join a JSON array of strings.
///
/// # Examples
///
/// ```
/// use purepath::{PurePath, Posix};
/// use serde_json::json;
///
/// let path: PurePath = PurePath::try_from(&json!(["/path/", "to/file.txt"])).unwrap();
/// assert_eq!(path.as_str(), "/path/to/file.txt");
///
/// let err = PurePath::<Posix>::try_from(&json!(1)).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Invalid type for argument path. Expected one of (string, PurePath), got number"
/// );
/// ```
impl<S: PathSyntax> TryFrom<&serde_json::Value> for PurePath<S> {
    type Error = Error;

    fn try_from(value: &serde_json::Value) -> Result<Self> {
        let invalid = |found: &serde_json::Value| Error::InvalidType {
            argument: "path",
            expected: "one of (string, PurePath)",
            found: json_type_name(found).to_string(),
        };

        match value {
            serde_json::Value::String(s) => Ok(Self::from(s.as_str())),
            serde_json::Value::Array(items) => {
                let segments = items
                    .iter()
                    .map(|item| item.as_str().ok_or_else(|| invalid(item)))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::from_segments(segments))
            }
            other => Err(invalid(other)),
        }
    }
}

impl<S: PathSyntax> Serialize for PurePath<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error> {
        serializer.serialize_str(&self.path)
    }
}

impl<'de, S: PathSyntax> Deserialize<'de> for PurePath<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let path = String::deserialize(deserializer)?;
        Ok(Self::from(path))
    }
}
