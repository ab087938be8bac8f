//! Node identity scheme
//!
//! Every schema node is identified by the path that leads to it from the
//! document root: `.key` for object members and `[index]` for array slots,
//! e.g. `root.user.tags[0]` or `root[2].name`. The structural editor parses
//! these ids back with [`NodePath::parse`], so both directions live here.

use regex::Regex;
use std::sync::LazyLock;

/// Id of the document root
pub const ROOT: &str = "root";

/// One dot-separated part: a name followed by any number of `[index]` suffixes
static PART_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^\[\]]*)((?:\[\d+\])*)$").unwrap());

static INDEX_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(\d+)\]").unwrap());

/// A single step of a parsed path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object member access
    Key(String),
    /// Array element access
    Index(usize),
}

/// Builder and parser for node ids
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePath(String);

impl Default for NodePath {
    fn default() -> Self {
        Self::root()
    }
}

impl NodePath {
    /// The root path
    pub fn root() -> Self {
        Self(ROOT.to_string())
    }

    /// Wrap an existing id
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Path of an object member
    #[must_use]
    pub fn child(&self, key: &str) -> Self {
        Self(format!("{}.{key}", self.0))
    }

    /// Path of an array element
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }

    /// Whether this is the root path
    pub fn is_root(&self) -> bool {
        self.0 == ROOT
    }

    /// The id string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the id string
    pub fn into_string(self) -> String {
        self.0
    }

    /// Parse a path into access segments relative to the document root
    ///
    /// The leading `root` name is dropped (its index suffixes are kept, for
    /// root-level arrays). Returns `None` for paths the identity scheme never
    /// produces, such as an empty member name.
    pub fn parse(path: &str) -> Option<Vec<PathSegment>> {
        let mut segments = Vec::new();

        for (position, part) in path.split('.').enumerate() {
            let caps = PART_REGEX.captures(part)?;
            let name = caps.get(1).map_or("", |m| m.as_str());
            let indices = caps.get(2).map_or("", |m| m.as_str());

            if position == 0 && name == ROOT {
                // document root, nothing to dereference
            } else if name.is_empty() {
                return None;
            } else {
                segments.push(PathSegment::Key(name.to_string()));
            }

            for idx in INDEX_REGEX.captures_iter(indices) {
                let index = idx[1].parse().ok()?;
                segments.push(PathSegment::Index(index));
            }
        }

        Some(segments)
    }

    /// Parsed segments of this path
    pub fn segments(&self) -> Option<Vec<PathSegment>> {
        Self::parse(&self.0)
    }
}

impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NodePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<NodePath> for String {
    fn from(path: NodePath) -> Self {
        path.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_paths() {
        let root = NodePath::root();
        assert!(root.is_root());
        assert_eq!(root.child("user").as_str(), "root.user");
        assert_eq!(root.child("user").child("tags").index(0).as_str(), "root.user.tags[0]");
        assert_eq!(root.index(2).child("name").as_str(), "root[2].name");
    }

    #[test]
    fn test_parse_root() {
        assert_eq!(NodePath::parse("root"), Some(vec![]));
    }

    #[test]
    fn test_parse_members_and_indices() {
        assert_eq!(
            NodePath::parse("root.user.tags[0]"),
            Some(vec![
                PathSegment::Key("user".into()),
                PathSegment::Key("tags".into()),
                PathSegment::Index(0),
            ])
        );
    }

    #[test]
    fn test_parse_root_array_and_nested_arrays() {
        assert_eq!(
            NodePath::parse("root[1].grid[2][3]"),
            Some(vec![
                PathSegment::Index(1),
                PathSegment::Key("grid".into()),
                PathSegment::Index(2),
                PathSegment::Index(3),
            ])
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(NodePath::parse("root..a"), None);
        assert_eq!(NodePath::parse("root.a[x]"), None);
        assert_eq!(NodePath::parse("root.a[0"), None);
    }

    #[test]
    fn test_root_name_only_special_at_start() {
        assert_eq!(
            NodePath::parse("root.root"),
            Some(vec![PathSegment::Key("root".into())])
        );
    }
}
