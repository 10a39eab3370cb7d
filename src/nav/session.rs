use anyhow::anyhow;
use tracing::{debug, warn};

use crate::core::{Namespace, Result};
use crate::WorkingPath;

/// One interactive shell session walking a [`Namespace`].
///
/// The session owns its own [`WorkingPath`], so several sessions in one process never share a
/// location. In strict mode (the default) every descent is checked against the namespace and
/// reverted when the target does not exist.
///
/// ### Example
///
/// ```
/// use wpath_kit::{MapNS, Session};
///
/// let mut ns = MapNS::new();
/// ns.mkdir(["docs", "2024/25"]).unwrap();
///
/// let mut session = Session::new(ns);
/// session.cd("docs").unwrap();
/// session.cd("2024/25").unwrap();
/// assert_eq!(session.pwd(), "/docs/2024\\/25");
///
/// assert!(session.cd("missing").is_err());
/// assert_eq!(session.pwd(), "/docs/2024\\/25");
/// ```
pub struct Session<N: Namespace> {
    namespace: N,
    working_path: WorkingPath,
    is_strict: bool,
}

impl<N: Namespace> Session<N> {
    /// Creates a session at the root of `namespace`, strict mode on.
    pub fn new(namespace: N) -> Self {
        Self {
            namespace,
            working_path: WorkingPath::new(),
            is_strict: true,
        }
    }

    /// Changes strict flag.
    /// If strict flag is false, `cd()` accepts locations unknown to the namespace.
    pub fn set_strict(&mut self, strict: bool) {
        self.is_strict = strict;
    }

    /// Returns the current location.
    pub fn working_path(&self) -> &WorkingPath {
        &self.working_path
    }

    /// Returns the walked namespace.
    pub fn namespace(&self) -> &N {
        &self.namespace
    }

    /// Returns the walked namespace for changes.
    pub fn namespace_mut(&mut self) -> &mut N {
        &mut self.namespace
    }

    /// Returns the current location in its displayed (escaped) form.
    pub fn pwd(&self) -> String {
        self.working_path.to_string()
    }

    /// Changes the current location.
    /// * `""` or `"/"` goes to the root;
    /// * `".."` goes to the parent, staying at the root if already there;
    /// * anything else is entered as one segment, separators included.
    ///
    /// A trailing line ending of `line` is dropped. Surrounding whitespace is ignored when
    /// looking for `/` or `..`, but kept in segment names.
    /// In strict mode an error returns if the new location does not exist; the location is
    /// left unchanged in that case.
    pub fn cd(&mut self, line: &str) -> Result<()> {
        let line = line.trim_end_matches(['\r', '\n']);
        match line.trim() {
            "" | "/" => self.working_path.home(),
            ".." => self.working_path.up(),
            _ => {
                self.working_path.cd1(line);
                if self.is_strict && !self.namespace.exists(self.working_path.get()) {
                    let attempted = self.pwd();
                    self.working_path.restore();
                    warn!(%attempted, staying = %self.working_path, "cd target not found");
                    return Err(anyhow!("Path: {} not found", attempted));
                }
            }
        }
        debug!(to = %self.working_path, "cd");
        Ok(())
    }

    /// Returns names of the collections under the current location.
    pub fn ls(&self) -> Result<Vec<String>> {
        Ok(self
            .namespace
            .ls(self.working_path.get())?
            .map(String::from)
            .collect())
    }

    /// Like `ls()`, but a collection with a title is listed as `name (title)`.
    pub fn ls_titled(&self) -> Result<Vec<String>> {
        let mut child = self.working_path.get().to_vec();
        let mut listed = Vec::new();
        for name in self.namespace.ls(self.working_path.get())? {
            child.push(name.to_string());
            listed.push(match self.namespace.title(&child) {
                Some(title) => format!("{} ({})", name, title),
                None => name.to_string(),
            });
            child.pop();
        }
        Ok(listed)
    }
}
