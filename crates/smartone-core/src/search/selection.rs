//! Selection state for the catalog view.

use crate::catalog::{CategoryFilter, Product};
use crate::search::Filter;
use serde::{Deserialize, Serialize};

/// The shell's current category and search string.
///
/// The core never stores a selection; the shell owns one and hands it to
/// [`Catalog::select`](crate::catalog::Catalog::select) on every render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Active category, `All` by default.
    pub category: CategoryFilter,
    /// Search text, empty by default.
    pub query: String,
}

impl Selection {
    /// `All` categories, empty search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the active category.
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the search text.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) {
        self.category = category.into();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The filters this selection applies. Filters that pass everything are left out.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();
        if self.category != CategoryFilter::All {
            filters.push(Filter::Category(self.category.clone()));
        }
        if !self.query.is_empty() {
            filters.push(Filter::Text(self.query.clone()));
        }
        filters
    }

    /// Check whether a product is visible under this selection.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters().iter().all(|f| f.matches(product))
    }
}
