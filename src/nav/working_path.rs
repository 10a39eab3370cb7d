//! Current location inside a hierarchical namespace, kept as a stack of raw segments.

use std::fmt;

use crate::core::utils::{self, SEPARATOR};

/// A stack of raw path segments describing "where am I" in a menu, category tree or any other
/// virtual hierarchy.
///
/// Segments are stored exactly as given: a segment may contain the separator itself
/// (`"aa / aa"`), non-ASCII text, or be empty. Escaping happens only when the path is displayed,
/// so `get()` always hands back the original strings.
///
/// The empty stack is the root and is displayed as `/`.
///
/// ### Example
///
/// ```
/// use wpath_kit::WorkingPath;
///
/// let mut wp = WorkingPath::new();
/// wp.cd1("films");
/// wp.cd1("sci/fi");
/// assert_eq!(wp.to_string(), "/films/sci\\/fi");
/// assert_eq!(wp.get(), &["films", "sci/fi"]);
///
/// wp.up();
/// assert_eq!(wp.to_string(), "/films");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WorkingPath {
    split_path: Vec<String>, // raw, unescaped
}

impl WorkingPath {
    /// Creates a working path at the root.
    pub fn new() -> Self {
        Self {
            split_path: Vec::new(),
        }
    }

    /// Returns the raw segments, outermost first.
    pub fn get(&self) -> &[String] {
        &self.split_path
    }

    /// Enters one level down. `name` is taken verbatim as a single segment.
    pub fn cd1<S: Into<String>>(&mut self, name: S) {
        self.split_path.push(name.into());
    }

    /// Goes to the parent location. Does nothing at the root.
    pub fn up(&mut self) {
        self.split_path.pop();
    }

    /// Reverts a descent made with `cd1()`, e.g. when the host could not find the new location.
    /// Same effect as `up()`: the innermost segment is dropped, nothing happens at the root.
    pub fn restore(&mut self) {
        self.split_path.pop();
    }

    /// Goes to the root.
    pub fn home(&mut self) {
        self.split_path.clear();
    }

    /// Replaces the whole location. Segments are not split on the separator.
    pub fn location<I, S>(&mut self, split_path: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.split_path = split_path.into_iter().map(Into::into).collect();
    }

    /// Returns the number of segments, 0 at the root.
    pub fn depth(&self) -> usize {
        self.split_path.len()
    }

    /// Returns true at the root.
    pub fn is_root(&self) -> bool {
        self.split_path.is_empty()
    }

    /// Innermost segment, `None` at the root.
    pub fn basename(&self) -> Option<&str> {
        self.split_path.last().map(String::as_str)
    }

    /// Raw segments of the enclosing location, `None` at the root.
    pub fn parent(&self) -> Option<&[String]> {
        self.split_path.split_last().map(|(_, parent)| parent)
    }
}

impl fmt::Display for WorkingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.split_path.is_empty() {
            return write!(f, "{}", SEPARATOR);
        }
        for segment in &self.split_path {
            write!(f, "{}{}", SEPARATOR, utils::escape(segment))?;
        }
        Ok(())
    }
}
