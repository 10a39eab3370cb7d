//! This module provides an in-memory namespace: a tree of named collections addressed by
//! split paths.

use std::collections::BTreeMap;

use anyhow::anyhow;

use crate::core::{Namespace, Result};
use crate::WorkingPath;

/// An in-memory [`Namespace`] that keeps every collection as its full split path, with an
/// optional title.
///
/// ### Invariants
///
/// 1. **Root existence**: the empty split path is always present.
/// 2. **Parent consistency**: for any entry `[a, b, c]` the entry `[a, b]` exists.
/// 3. **Uniqueness**: each split path is stored once.
///
/// Segments are opaque: `"a/b"` is one collection name, never two levels.
///
/// ### Example
///
/// ```
/// use wpath_kit::{MapNS, Namespace};
///
/// let mut ns = MapNS::new();
/// ns.mkdir(["films", "sci/fi"]).unwrap();
///
/// let films = vec![String::from("films")];
/// assert!(ns.exists(&films));
/// assert_eq!(ns.ls(&films).unwrap().collect::<Vec<_>>(), ["sci/fi"]);
/// ```
pub struct MapNS {
    entries: BTreeMap<Vec<String>, Option<String>>, // raw split path -> title
}

impl MapNS {
    /// Creates new MapNS instance holding only the root.
    pub fn new() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(Vec::new(), None);
        Self { entries }
    }

    /// Creates collection and all its parents (if needed), all without title.
    pub fn mkdir<I, S>(&mut self, split_path: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let split_path: Vec<String> = split_path.into_iter().map(Into::into).collect();
        if split_path.is_empty() {
            return Err(anyhow!("invalid path: the root already exists"));
        }
        if self.entries.contains_key(&split_path) {
            return Err(anyhow!("path already exists: {}", display(&split_path)));
        }

        for depth in 1..=split_path.len() {
            let prefix = &split_path[..depth];
            if !self.entries.contains_key(prefix) {
                self.entries.insert(prefix.to_vec(), None);
            }
        }
        Ok(())
    }

    /// Changes the title of an existing collection; `None` clears it.
    pub fn set_title<S: Into<String>>(
        &mut self,
        split_path: &[String],
        title: Option<S>,
    ) -> Result<()> {
        match self.entries.get_mut(split_path) {
            Some(entry) => {
                *entry = title.map(Into::into);
                Ok(())
            }
            None => Err(anyhow!("{} does not exist", display(split_path))),
        }
    }

    /// Removes a collection with all its descendants.
    pub fn rm(&mut self, split_path: &[String]) -> Result<()> {
        if split_path.is_empty() {
            return Err(anyhow!("invalid path: the root cannot be removed"));
        }
        if !self.exists(split_path) {
            return Err(anyhow!("{} does not exist", display(split_path)));
        }

        let removed: Vec<Vec<String>> = self
            .entries
            .keys()
            .filter(|&entry| entry.starts_with(split_path))
            .cloned()
            .collect();

        for entry in &removed {
            self.entries.remove(entry);
        }
        Ok(())
    }
}

impl Default for MapNS {
    fn default() -> Self {
        Self::new()
    }
}

impl Namespace for MapNS {
    fn exists(&self, split_path: &[String]) -> bool {
        self.entries.contains_key(split_path)
    }

    /// Children come out in lexicographic order of their raw names.
    fn ls(&self, split_path: &[String]) -> Result<impl Iterator<Item = &str>> {
        if !self.exists(split_path) {
            return Err(anyhow!("{} does not exist", display(split_path)));
        }
        let child_depth = split_path.len() + 1;
        Ok(self
            .entries
            .keys()
            .filter(move |&entry| entry.len() == child_depth && entry.starts_with(split_path))
            .filter_map(|entry| entry.last().map(String::as_str)))
    }

    /// Every collection comes right before its own descendants.
    fn tree(&self, split_path: &[String]) -> Result<impl Iterator<Item = &[String]>> {
        if !self.exists(split_path) {
            return Err(anyhow!("{} does not exist", display(split_path)));
        }
        Ok(self
            .entries
            .keys()
            .filter(move |&entry| entry.len() > split_path.len() && entry.starts_with(split_path))
            .map(Vec::as_slice))
    }

    fn title(&self, split_path: &[String]) -> Option<&str> {
        self.entries.get(split_path)?.as_deref()
    }
}

fn display(split_path: &[String]) -> WorkingPath {
    let mut wp = WorkingPath::new();
    wp.location(split_path.iter().cloned());
    wp
}
