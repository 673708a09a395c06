//! Selection state and the pure display computation that drives it.

use log::debug;

use super::filter::{auto_pick, visible};
use super::palette::{Highlight, Palette};
use crate::country::Country;

/// Result of evaluating an input against the country list.
#[derive(Debug, Clone, PartialEq)]
pub struct Display<'a> {
    /// Rows to show, in list order.
    pub visible: Vec<&'a Country>,
    /// Set only when the input changed and something is visible.
    pub auto_selection: Option<(&'a Country, Highlight)>,
    /// Input to remember as the last one auto-selection ran for.
    pub prev_input: String,
}

/// Compute visible rows and the auto-selection for `raw_input`.
///
/// Auto-selection is evaluated only when `raw_input` differs from
/// `prev_input`; otherwise the returned `prev_input` is unchanged.
pub fn compute_display<'a>(countries: &'a [Country], raw_input: &str, prev_input: &str) -> Display<'a> {
    let visible = visible(countries, raw_input);

    if raw_input == prev_input {
        return Display {
            visible,
            auto_selection: None,
            prev_input: prev_input.to_string(),
        };
    }

    let auto_selection = auto_pick(&visible).map(|c| (c, Palette::for_code(&c.code)));

    Display {
        visible,
        auto_selection,
        prev_input: raw_input.to_string(),
    }
}

/// UI state owned by the browser: input text, selection and highlight.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    input: String,
    prev_input: String,
    selected: Option<Country>,
    highlight: Highlight,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn prev_input(&self) -> &str {
        &self.prev_input
    }

    pub fn selected(&self) -> Option<&Country> {
        self.selected.as_ref()
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    /// Replace the raw input text. Takes effect on the next [`refresh`](Self::refresh).
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// True if `country` is the current selection.
    pub fn is_selected(&self, country: &Country) -> bool {
        self.selected.as_ref().is_some_and(|s| s.same_as(country))
    }

    /// Recompute visible rows and apply any auto-selection.
    ///
    /// Safe to call on every render; unchanged input does nothing.
    pub fn refresh<'a>(&mut self, countries: &'a [Country]) -> Vec<&'a Country> {
        let display = compute_display(countries, &self.input, &self.prev_input);

        if let Some((country, highlight)) = display.auto_selection {
            debug!("auto-selected {} ({}) for input {:?}", country.code, highlight, self.input);
            self.selected = Some(country.clone());
            self.highlight = highlight;
        }
        self.prev_input = display.prev_input;

        display.visible
    }

    /// Toggle the visible row at `index`.
    ///
    /// Returns false when `index` is outside the visible list.
    pub fn click(&mut self, countries: &[Country], index: usize) -> bool {
        let rows = visible(countries, &self.input);
        let Some(country) = rows.get(index) else {
            return false;
        };

        if self.is_selected(country) {
            debug!("deselected {}", country.code);
            self.selected = None;
        } else {
            debug!("selected {} at row {}", country.code, index);
            self.selected = Some((*country).clone());
        }
        self.highlight = Palette::for_row(index);
        true
    }
}
