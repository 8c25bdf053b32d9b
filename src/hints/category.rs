//! The closed set of hint categories the collector keeps.

use std::fmt;

use serde::Serialize;

/// A recognized hint category.
///
/// Comment entries with any other category string are dropped during
/// collection; unknown categories are forward-compatible, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ignore,
    Lint,
    Require,
    Use,
    Asset,
    Cldr,
}

impl Category {
    /// Parse a category name as written in comments. Returns `None` for
    /// anything outside the recognized set.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ignore" => Some(Self::Ignore),
            "lint" => Some(Self::Lint),
            "require" => Some(Self::Require),
            "use" => Some(Self::Use),
            "asset" => Some(Self::Asset),
            "cldr" => Some(Self::Cldr),
            _ => None,
        }
    }

    /// All recognized categories.
    pub fn all() -> [Self; 6] {
        [
            Self::Ignore,
            Self::Lint,
            Self::Require,
            Self::Use,
            Self::Asset,
            Self::Cldr,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Lint => "lint",
            Self::Require => "require",
            Self::Use => "use",
            Self::Asset => "asset",
            Self::Cldr => "cldr",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_known() {
        assert_eq!(Category::parse("ignore"), Some(Category::Ignore));
        assert_eq!(Category::parse("lint"), Some(Category::Lint));
        assert_eq!(Category::parse("require"), Some(Category::Require));
        assert_eq!(Category::parse("use"), Some(Category::Use));
        assert_eq!(Category::parse("asset"), Some(Category::Asset));
        assert_eq!(Category::parse("cldr"), Some(Category::Cldr));
    }

    #[test]
    fn test_category_parse_unknown() {
        assert_eq!(Category::parse("deprecated"), None);
        assert_eq!(Category::parse("Ignore"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn test_category_roundtrip() {
        for cat in Category::all() {
            assert_eq!(Category::parse(cat.as_str()), Some(cat));
        }
    }
}
