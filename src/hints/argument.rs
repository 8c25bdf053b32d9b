//! Hint argument tokens with glob-lenient identifier matching.

use std::fmt;
use std::hash::{Hash, Hasher};

use regex::Regex;

/// One argument of a hint entry, e.g. the `foo` in
/// `@lint ignoreUndefined(foo)`.
///
/// Matching against identifiers is lenient: `*` in the source acts as a
/// glob wildcard, and a trailing `.*` also covers the bare prefix, so
/// `qx.*` matches `qx`, `qx.foo` and `qx.foo.Bar`. Equality and hashing
/// use the source text only, so a set of arguments dedupes by spelling.
#[derive(Debug, Clone)]
pub struct HintArgument {
    source: String,
    regex: Regex,
}

impl HintArgument {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let mut pattern = regex::escape(&source).replace(r"\*", ".*");
        if let Some(prefix) = pattern.strip_suffix(r"\..*") {
            pattern = format!(r"{prefix}(\..*)?");
        }
        // The pattern is an escape of the source, so it always compiles.
        let regex = Regex::new(&format!("^{pattern}$")).unwrap();
        Self { source, regex }
    }

    /// The argument as written in the comment.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether this argument covers the given identifier.
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

impl PartialEq for HintArgument {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for HintArgument {}

impl Hash for HintArgument {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

impl From<&str> for HintArgument {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl fmt::Display for HintArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_literal_match() {
        let arg = HintArgument::new("foo");
        assert!(arg.matches("foo"));
        assert!(!arg.matches("foobar"));
        assert!(!arg.matches("fo"));
        assert!(!arg.matches("Foo"));
    }

    #[test]
    fn test_dotted_literal_match() {
        let arg = HintArgument::new("qx.core.Object");
        assert!(arg.matches("qx.core.Object"));
        assert!(!arg.matches("qx.core"));
        assert!(!arg.matches("qx.core.ObjectX"));
    }

    #[test]
    fn test_glob_match() {
        let arg = HintArgument::new("jQuery*");
        assert!(arg.matches("jQuery"));
        assert!(arg.matches("jQueryUI"));
        assert!(!arg.matches("jquery"));
    }

    #[test]
    fn test_trailing_dot_glob_covers_prefix() {
        let arg = HintArgument::new("qx.*");
        assert!(arg.matches("qx"));
        assert!(arg.matches("qx.foo"));
        assert!(arg.matches("qx.foo.Bar"));
        assert!(!arg.matches("qxx"));
    }

    #[test]
    fn test_inner_glob() {
        let arg = HintArgument::new("qx.*.Object");
        assert!(arg.matches("qx.core.Object"));
        assert!(arg.matches("qx.a.b.Object"));
        assert!(!arg.matches("qx.Object"));
    }

    #[test]
    fn test_regex_metachars_in_source_are_literal() {
        let arg = HintArgument::new("a+b");
        assert!(arg.matches("a+b"));
        assert!(!arg.matches("aab"));
    }

    #[test]
    fn test_set_dedup_by_source() {
        let mut set = HashSet::new();
        set.insert(HintArgument::new("foo"));
        set.insert(HintArgument::new("foo"));
        set.insert(HintArgument::new("foo*"));
        assert_eq!(set.len(), 2);
    }
}
