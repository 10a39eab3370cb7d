//! A small navigator for virtual hierarchies: menu trees, category trees, or virtual file systems
//! exposed by interactive command shells.
//!
//! ### Overview
//!
//! `wpath-kit` tracks "where am I" inside a namespace that only exists as a tree of names.
//! The core is [`WorkingPath`], a stack of raw segments rendered as a POSIX-like string with
//! `/` escaped inside segments. Hosts plug their own tree in through the [`Namespace`] trait and
//! drive it with a [`Session`].
//!
//! **Key ideas**:
//! - **Raw storage**: segments are kept verbatim; a category named `aa / aa` is one segment.
//! - **Escaping on display only**: `/` inside a segment is shown as `\/`, `get()` never escapes.
//! - **Total navigation**: `up()` at the root does nothing and is never an error.
//! - **Independent sessions**: every session owns its location.
//!
//! ```
//! use wpath_kit::WorkingPath;
//!
//! let mut wp = WorkingPath::new();
//! wp.location(["aa / aa", "bbbb"]);
//! assert_eq!(wp.to_string(), "/aa \\/ aa/bbbb");
//! ```

mod core;
mod nav;

pub use crate::core::{Namespace, Result, utils};
pub use nav::{MapNS, Session, WorkingPath};
