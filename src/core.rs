pub trait Namespace {
    /// Returns true if `split_path` names an existing collection.
    /// The root (empty split path) always exists.
    fn exists(&self, split_path: &[String]) -> bool;

    /// Returns raw names of the immediate children of `split_path`.
    /// An error returns if `split_path` does not exist.
    fn ls(&self, split_path: &[String]) -> Result<impl Iterator<Item = &str>>;

    /// Returns split paths of all descendants of `split_path`, at any depth.
    /// `split_path` itself is not included.
    /// An error returns if `split_path` does not exist.
    fn tree(&self, split_path: &[String]) -> Result<impl Iterator<Item = &[String]>>;

    /// Returns the human readable title of a collection, if it has one.
    fn title(&self, _split_path: &[String]) -> Option<&str> {
        None
    }
}

pub type Result<T> = std::result::Result<T, anyhow::Error>;

pub mod utils {
    use std::borrow::Cow;

    /// Delimits segments in the rendered form.
    pub const SEPARATOR: char = '/';

    /// The form a literal separator takes inside a rendered segment.
    pub const ESCAPED_SEPARATOR: &str = "\\/";

    /// Escapes every literal separator inside one raw segment.
    /// Nothing else is touched, non-ASCII text passes through as is.
    pub fn escape(segment: &str) -> Cow<'_, str> {
        if segment.contains(SEPARATOR) {
            Cow::Owned(segment.replace(SEPARATOR, ESCAPED_SEPARATOR))
        } else {
            Cow::Borrowed(segment)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_escape_plain_segment_is_borrowed() {
            assert!(matches!(escape("lol"), Cow::Borrowed("lol")));
        }

        #[test]
        fn test_escape_separators() {
            assert_eq!(escape("aa / aa"), "aa \\/ aa");
            assert_eq!(escape("//"), "\\/\\/");
            assert_eq!(escape("héhé/hé"), "héhé\\/hé");
        }

        #[test]
        fn test_escape_leaves_backslash_alone() {
            assert_eq!(escape("a\\b"), "a\\b");
            assert_eq!(escape(""), "");
        }
    }
}
