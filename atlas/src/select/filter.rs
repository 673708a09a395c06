//! Filtering and truncation of the country list.

use crate::country::Country;
use crate::query::{is_search_mode, parse_directive, SearchDirective, DEFAULT_LIMIT};

/// Index of the row picked by auto-selection when enough rows are visible.
pub const AUTO_PICK_INDEX: usize = 9;

/// How the raw input is turned into a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterMode {
    /// Input contains `search:`: only the parsed term and limit count.
    Directive(SearchDirective),
    /// Plain text: the whole input is the needle, `size:` is ignored.
    FreeText { needle: String, limit: usize },
}

impl FilterMode {
    pub fn from_input(raw_input: &str) -> Self {
        if is_search_mode(raw_input) {
            FilterMode::Directive(parse_directive(raw_input))
        } else {
            FilterMode::FreeText {
                needle: raw_input.to_string(),
                limit: DEFAULT_LIMIT,
            }
        }
    }

    pub fn needle(&self) -> &str {
        match self {
            FilterMode::Directive(d) => &d.term,
            FilterMode::FreeText { needle, .. } => needle,
        }
    }

    pub fn limit(&self) -> usize {
        match self {
            FilterMode::Directive(d) => d.limit,
            FilterMode::FreeText { limit, .. } => *limit,
        }
    }

    /// Apply to a list: filter by needle then keep the first `limit` in list order.
    pub fn apply<'a>(&self, countries: &'a [Country]) -> Vec<&'a Country> {
        let needle = self.needle();
        countries
            .iter()
            .filter(|c| c.matches(needle))
            .take(self.limit())
            .collect()
    }
}

/// Visible subset for a raw input string.
pub fn visible<'a>(countries: &'a [Country], raw_input: &str) -> Vec<&'a Country> {
    FilterMode::from_input(raw_input).apply(countries)
}

/// Row chosen by auto-selection: the 10th if there are at least 10, else the last.
pub fn auto_pick<'a>(visible: &[&'a Country]) -> Option<&'a Country> {
    visible
        .get(AUTO_PICK_INDEX)
        .or_else(|| visible.last())
        .copied()
}
