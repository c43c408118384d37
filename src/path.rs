mod encoding;
mod error;

pub use self::error::DecodeError;
use self::encoding::{SEPARATOR, escape, split, unescape};
use itertools::Itertools;
use once_cell::sync::{Lazy, OnceCell};
use std::{
    borrow::Cow,
    fmt::{self, Debug, Display, Formatter},
    hash::{Hash, Hasher},
    str::FromStr,
    sync::Arc,
};

static ROOT: Lazy<Path> = Lazy::new(|| Path::new("", None));

/// A node in a tree of named scopes.
///
/// Paths are immutable and cheap to clone. A child holds its parent but a
/// parent never knows its children. Equality and hashing are structural over
/// the whole ancestor chain.
#[derive(Clone)]
pub struct Path(Arc<Node>);

struct Node {
    name: Box<str>,
    parent: Option<Path>,
    serialized: OnceCell<String>,
}

// Unlinks ancestors one by one so that dropping a deep chain doesn't recurse.
impl Drop for Node {
    fn drop(&mut self) {
        let mut parent = self.parent.take();

        while let Some(Path(node)) = parent {
            parent = match Arc::try_unwrap(node) {
                Ok(mut node) => node.parent.take(),
                Err(_) => None,
            };
        }
    }
}

impl Path {
    fn new(name: impl Into<Box<str>>, parent: Option<Path>) -> Self {
        Self(
            Node {
                name: name.into(),
                parent,
                serialized: OnceCell::new(),
            }
            .into(),
        )
    }

    pub fn root() -> Self {
        ROOT.clone()
    }

    /// Creates a child of `parent` from a raw segment name.
    pub fn create(name: &str, parent: &Path) -> Self {
        Self::new(escape(name), Some(parent.clone()))
    }

    pub fn resolve(&self, name: &str) -> Self {
        Self::create(name, self)
    }

    pub fn from_segments<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        names
            .into_iter()
            .fold(Self::root(), |parent, name| parent.resolve(name.as_ref()))
    }

    /// Parses a path produced by [`Path::serialize`].
    ///
    /// The input must already be escaped. Use [`Path::create`] or
    /// [`Path::from_segments`] for raw names.
    ///
    /// Leading separators are ignored, so `/a` decodes like `a`. The encoder
    /// never produces them since it trims them from serialized paths.
    pub fn deserialize(path: &str) -> Result<Self, DecodeError> {
        let trimmed = path.trim_start_matches(SEPARATOR);

        if trimmed.is_empty() {
            return Ok(Self::root());
        }

        Ok(split(trimmed)
            .map_err(|offset| DecodeError::new(path, path.len() - trimmed.len() + offset))?
            .into_iter()
            .fold(Self::root(), |parent, name| Self::new(name, Some(parent))))
    }

    pub fn serialize(&self) -> &str {
        self.0.serialized.get_or_init(|| {
            self.ancestors()
                .map(Path::name)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .join(&SEPARATOR.to_string())
                .trim_start_matches(SEPARATOR)
                .into()
        })
    }

    /// Returns the escaped segment name.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn unescaped_name(&self) -> Cow<'_, str> {
        unescape(&self.0.name)
    }

    pub fn parent(&self) -> Option<&Path> {
        self.0.parent.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.0.parent.is_none()
    }

    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }

    /// Returns true if `path` is this path or one of its descendants.
    pub fn is_parent_of(&self, path: &Path) -> bool {
        path.depth()
            .checked_sub(self.depth())
            .and_then(|distance| path.ancestors().nth(distance))
            .is_some_and(|ancestor| ancestor == self)
    }

    /// Iterates over this path and then each of its ancestors up to the root.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }

    /// Returns raw segment names from the outermost scope down to this path.
    pub fn segments(&self) -> Vec<Cow<'_, str>> {
        let mut segments = self
            .ancestors()
            .filter(|path| !path.is_root())
            .map(Path::unescaped_name)
            .collect::<Vec<_>>();

        segments.reverse();

        segments
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        let (mut one, mut other) = (self, other);

        loop {
            if Arc::ptr_eq(&one.0, &other.0) {
                return true;
            } else if one.0.name != other.0.name {
                return false;
            }

            match (one.parent(), other.parent()) {
                (Some(parent), Some(other_parent)) => {
                    one = parent;
                    other = other_parent;
                }
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}

impl Eq for Path {}

impl Hash for Path {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        for path in self.ancestors() {
            path.0.name.hash(hasher);
        }
    }
}

impl Debug for Path {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.debug_tuple("Path").field(&self.serialize()).finish()
    }
}

impl Display for Path {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.serialize())
    }
}

impl FromStr for Path {
    type Err = DecodeError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        Self::deserialize(path)
    }
}

#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    next: Option<&'a Path>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Path;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.next?;

        self.next = path.parent();

        Some(path)
    }
}
