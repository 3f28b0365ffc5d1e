use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::Error;

/// Registry of symbolic path roots (e.g. `@mail` -> `/srv/app/mail`).
///
/// View paths are passed around as aliases so that callers never hardcode
/// where templates live on a given deployment.
#[derive(Debug, Default)]
pub struct Aliases {
    map: HashMap<String, PathBuf>,
}

impl Aliases {
    pub fn new() -> Self {
        Default::default()
    }

    /// Register or replace an alias. The leading `@` is part of the name.
    pub fn set(&mut self, alias: impl Into<String>, path: impl Into<PathBuf>) {
        self.map.insert(alias.into(), path.into());
    }

    /// Resolve a possibly-aliased path.
    ///
    /// Paths that do not start with `@` are returned unchanged.
    /// `@alias/rest` expands the registered root and keeps the remainder.
    /// An unregistered alias is a configuration error and propagates.
    pub fn resolve(&self, path: &str) -> Result<PathBuf, Error> {
        if !path.starts_with('@') {
            return Ok(PathBuf::from(path));
        }

        let (alias, rest) = match path.find('/') {
            Some(pos) => (&path[..pos], Some(&path[pos + 1..])),
            None => (path, None),
        };

        let root = self
            .map
            .get(alias)
            .ok_or_else(|| Error::Alias(format!("invalid path alias: {}", path)))?;

        Ok(match rest {
            Some(rest) => root.join(rest),
            None => root.clone(),
        })
    }
}
