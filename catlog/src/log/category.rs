//! Hierarchical category labels.
//!
//! Categories are dotted paths such as `app.db.pool`. Module paths
//! (`app::db`) and namespace-style names (`App\Db`, `app/db`) are accepted and
//! normalized to the dotted form, so `app::db` and `app.db` name the same
//! category.

use std::fmt;

const SEPARATOR: char = '.';

/// A normalized category label.
///
/// The empty label is the root category, which is the implicit parent of
/// every single-segment category.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category(String);

impl Category {
    /// Create a category, normalizing separators and empty segments.
    pub fn new(name: &str) -> Self {
        let unified = name.trim().replace("::", ".").replace(['\\', '/'], ".");
        let normalized = unified
            .split(SEPARATOR)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(".");
        Self(normalized)
    }

    /// The root category.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Returns true for the root category.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The normalized label.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Label segments, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR).filter(|s| !s.is_empty())
    }

    /// The enclosing category, or `None` for root.
    pub fn parent(&self) -> Option<Category> {
        if self.is_root() {
            return None;
        }
        match self.0.rsplit_once(SEPARATOR) {
            Some((parent, _)) => Some(Category(parent.to_string())),
            None => Some(Category::root()),
        }
    }

    /// This category followed by each enclosing category, excluding root.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            remaining: Some(self.0.as_str()).filter(|s| !s.is_empty()),
        }
    }

    /// Category for a nested segment (`app.db` + `pool` = `app.db.pool`).
    pub fn join(&self, segment: &str) -> Category {
        if self.is_root() {
            Category::new(segment)
        } else {
            Category::new(&format!("{}.{}", self.0, segment))
        }
    }
}

/// Iterator returned by [`Category::ancestors`].
pub struct Ancestors<'a> {
    remaining: Option<&'a str>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.remaining?;
        self.remaining = current.rsplit_once(SEPARATOR).map(|(parent, _)| parent);
        Some(current)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Category::new(name)
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Category::new(&name)
    }
}

impl From<&Category> for Category {
    fn from(category: &Category) -> Self {
        category.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalizes_separators() {
        assert_eq!(Category::new("app::db::pool").as_str(), "app.db.pool");
        assert_eq!(Category::new("App\\Db\\Pool").as_str(), "App.Db.Pool");
        assert_eq!(Category::new("app/db").as_str(), "app.db");
        assert_eq!(Category::new(" .app..db. ").as_str(), "app.db");
        assert_eq!(Category::from("app::db"), Category::from("app.db"));
    }

    #[test]
    fn test_root() {
        assert!(Category::new("").is_root());
        assert!(Category::new(" ... ").is_root());
        assert!(Category::root().parent().is_none());
        assert_eq!(Category::root().ancestors().count(), 0);
    }

    #[test]
    fn test_parent() {
        let category = Category::new("app.db.pool");
        assert_eq!(category.parent(), Some(Category::new("app.db")));
        assert_eq!(Category::new("app").parent(), Some(Category::root()));
    }

    #[test]
    fn test_ancestors_most_specific_first() {
        let category = Category::new("app.db.pool");
        let ancestors: Vec<_> = category.ancestors().collect();
        assert_eq!(ancestors, vec!["app.db.pool", "app.db", "app"]);
    }

    #[test]
    fn test_join() {
        assert_eq!(Category::root().join("app").as_str(), "app");
        assert_eq!(Category::new("app").join("db::pool").as_str(), "app.db.pool");
    }

    #[test]
    fn test_segments() {
        let category = Category::new("a.b.c");
        assert_eq!(category.segments().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(Category::root().segments().count(), 0);
    }

    proptest! {
        /// Property: normalization is idempotent.
        #[test]
        fn prop_normalize_idempotent(name in "[a-z:./\\\\ ]{0,24}") {
            let once = Category::new(&name);
            let twice = Category::new(once.as_str());
            prop_assert_eq!(once, twice);
        }

        /// Property: ancestors walk one segment at a time and end at a single segment.
        #[test]
        fn prop_ancestors_shrink_by_one_segment(segments in proptest::collection::vec("[a-z]{1,6}", 1..6)) {
            let category = Category::new(&segments.join("."));
            let ancestors: Vec<_> = category.ancestors().collect();

            prop_assert_eq!(ancestors.len(), segments.len());
            for (depth, label) in ancestors.iter().enumerate() {
                prop_assert_eq!(label.split('.').count(), segments.len() - depth);
            }
        }
    }
}
