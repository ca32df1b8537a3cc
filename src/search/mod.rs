use crate::models::Property;
use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sentinel meaning "no filter" for the category and operation selectors.
pub const ALL: &str = "all";

/// Canonicalize text for comparison: lowercase, trim, strip diacritics
/// (NFD decomposition, combining marks dropped), collapse whitespace runs.
/// Both sides of every match go through this, so "Querétaro" and
/// "queretaro" compare equal.
pub fn normalize(input: &str) -> String {
    let stripped: String = input
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Filter parameters for the listing search. Transient; nothing here is
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-text term matched against location, title and description
    pub location_text: String,
    /// Category label, or `all`
    pub category: String,
    /// Operation wire value (`venta`/`renta` or `sale`/`rent`), or `all`
    pub operation: String,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            location_text: String::new(),
            category: ALL.to_string(),
            operation: ALL.to_string(),
        }
    }
}

impl SearchQuery {
    pub fn is_empty(&self) -> bool {
        self.location_text.trim().is_empty()
            && is_all(&self.category)
            && is_all(&self.operation)
    }
}

fn is_all(value: &str) -> bool {
    let normalized = normalize(value);
    normalized.is_empty() || normalized == ALL
}

/// Select the subset of `properties` matching `query`, preserving the
/// input order (creation time descending, per the catalog).
pub fn filter<'a>(properties: &'a [Property], query: &SearchQuery) -> Vec<&'a Property> {
    properties.iter().filter(|p| matches(p, query)).collect()
}

fn matches(property: &Property, query: &SearchQuery) -> bool {
    let term = normalize(&query.location_text);
    if !term.is_empty() {
        let haystacks = [
            normalize(&property.location),
            normalize(&property.title),
            normalize(&property.description),
        ];
        if !haystacks.iter().any(|h| h.contains(&term)) {
            return false;
        }
    }

    if !is_all(&query.category) {
        let wanted = normalize(&query.category);
        let actual = normalize(&property.category);
        // Containment either way: the tab key "naves" matches the stored
        // label "naves industriales" and vice versa.
        if !actual.contains(&wanted) && !wanted.contains(&actual) {
            return false;
        }
    }

    if !is_all(&query.operation) {
        let wanted = normalize(&query.operation);
        let actual = property.operation;
        if wanted != actual.to_string() && wanted != actual.wire_value() {
            return false;
        }
    }

    true
}

/// Search state as the landing page drives it. The category tabs and the
/// free-text search bar are mutually exclusive filter modes: engaging one
/// resets the other, so stale combined filters never apply.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: SearchQuery,
}

impl SearchState {
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// A category tab was selected: the free-text parameters are cleared.
    pub fn select_category(&mut self, category: &str) {
        self.query.location_text.clear();
        self.query.operation = ALL.to_string();
        self.query.category = category.to_string();
    }

    /// The search bar was submitted: the selected category tab resets to
    /// `all` so the tab filter does not silently combine with the text.
    pub fn submit_search(&mut self, location_text: &str, operation: &str) {
        self.query.location_text = location_text.to_string();
        self.query.operation = if operation.trim().is_empty() {
            ALL.to_string()
        } else {
            operation.to_string()
        };
        self.query.category = ALL.to_string();
    }

    pub fn clear(&mut self) {
        self.query = SearchQuery::default();
    }
}
