//! Product categories and the category half of the selection state.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A product category. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Cases,
    Chargers,
    Audio,
    Protection,
}

impl Category {
    /// Every category, in navigation order.
    pub const ALL: [Category; 4] = [
        Category::Cases,
        Category::Chargers,
        Category::Audio,
        Category::Protection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cases => "Cases",
            Category::Chargers => "Chargers",
            Category::Audio => "Audio",
            Category::Protection => "Protection",
        }
    }
}

impl FromStr for Category {
    type Err = StoreError;

    /// Exact, case-sensitive match against the category names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| StoreError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active category of the catalog view.
///
/// `Unknown` holds a category name outside the closed set. It matches no
/// product at all; a typo in a category name must never widen the view to
/// the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    Unknown(String),
}

impl CategoryFilter {
    /// Label used for the "everything" entry.
    pub const ALL_LABEL: &'static str = "All";

    /// Parse a category name. Never fails: unrecognized names become `Unknown`.
    pub fn parse(name: &str) -> Self {
        if name == Self::ALL_LABEL {
            return CategoryFilter::All;
        }
        match name.parse::<Category>() {
            Ok(category) => CategoryFilter::Only(category),
            Err(_) => CategoryFilter::Unknown(name.to_string()),
        }
    }

    /// Every selectable filter, "All" first.
    pub fn choices() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    /// Check whether a product in `category` passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
            CategoryFilter::Unknown(_) => false,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Only(c) => c.as_str(),
            CategoryFilter::Unknown(name) => name,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_names() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_category_parse_is_case_sensitive() {
        assert!("cases".parse::<Category>().is_err());
        assert!("Phones".parse::<Category>().is_err());
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Audio"),
            CategoryFilter::Only(Category::Audio)
        );
        assert_eq!(
            CategoryFilter::parse("Watches"),
            CategoryFilter::Unknown("Watches".to_string())
        );
    }

    #[test]
    fn test_unknown_filter_matches_nothing() {
        let filter = CategoryFilter::parse("all");
        for category in Category::ALL {
            assert!(!filter.matches(category));
        }
    }

    #[test]
    fn test_choices_start_with_all() {
        let choices = CategoryFilter::choices();
        assert_eq!(choices.len(), 5);
        assert_eq!(choices[0], CategoryFilter::All);
        assert_eq!(choices[4].label(), "Protection");
    }
}
