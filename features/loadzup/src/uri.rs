use std::{fmt::Display, sync::Arc};

/// Identifier of a loadable asset, e.g. `res://ui/Foo.prefab` or `ui/Foo`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetUri(Arc<str>);

impl AssetUri {
    pub fn new(uri: impl Into<Arc<str>>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The scheme before `://`, if any
    pub fn scheme(&self) -> Option<&str> {
        self.0.split_once("://").map(|(scheme, _)| scheme)
    }

    /// Everything after the scheme, without query or fragment
    pub fn path(&self) -> &str {
        let path = match self.0.split_once("://") {
            Some((_, rest)) => rest,
            None => &self.0,
        };
        path.split(['?', '#']).next().unwrap_or(path)
    }

    /// The last path segment without its extension, `Foo` for `res://ui/Foo.prefab`
    pub fn name(&self) -> &str {
        let segment = self
            .path()
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default();
        match segment.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => segment,
        }
    }
}

impl Display for AssetUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetUri {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AssetUri {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
