//! Pure view model: state in, rows out.

use crate::country::Country;
use crate::remote::RemoteData;
use crate::select::{Highlight, SelectionState};

pub const LOADING_TEXT: &str = "Loading...";
pub const ERROR_TEXT: &str = "Error :(";

/// One clickable list row.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub code: String,
    pub label: String,
    pub background: Highlight,
    pub selected: bool,
}

/// What the list area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Fetch still pending.
    Loading,
    /// Fetch failed. No detail is shown.
    Failed,
    /// Data available.
    List(Vec<Row>),
}

impl View {
    /// Placeholder text for the non-list modes.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            View::Loading => Some(LOADING_TEXT),
            View::Failed => Some(ERROR_TEXT),
            View::List(_) => None,
        }
    }
}

/// Build rows for the visible countries.
pub fn rows(state: &SelectionState, visible: &[&Country]) -> Vec<Row> {
    visible
        .iter()
        .map(|country| {
            let selected = state.is_selected(country);
            Row {
                code: country.code.clone(),
                label: country.label(),
                background: if selected { state.highlight() } else { Highlight::NEUTRAL },
                selected,
            }
        })
        .collect()
}

/// Refresh the state against the data source and build the view.
///
/// Loading and failure preempt the list and leave the state untouched.
pub fn view(state: &mut SelectionState, data: &RemoteData) -> View {
    match data {
        RemoteData::Loading => View::Loading,
        RemoteData::Failed(_) => View::Failed,
        RemoteData::Ready(countries) => {
            let visible = state.refresh(countries);
            View::List(rows(state, &visible))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::sample;
    use crate::select::Palette;

    fn data(n: usize) -> RemoteData {
        RemoteData::Ready(
            (0..n)
                .map(|i| sample(&format!("B{}", i), &format!("Row {}", i)))
                .collect(),
        )
    }

    #[test]
    fn test_loading_preempts_list() {
        let mut state = SelectionState::new();
        state.set_input("row");
        let view = view(&mut state, &RemoteData::Loading);
        assert_eq!(view, View::Loading);
        assert_eq!(view.placeholder(), Some("Loading..."));
        // Auto-selection waits for data
        assert_eq!(state.prev_input(), "");
    }

    #[test]
    fn test_failed_shows_generic_error() {
        let mut state = SelectionState::new();
        let view = view(&mut state, &RemoteData::Failed("boom".to_string()));
        assert_eq!(view.placeholder(), Some("Error :("));
    }

    #[test]
    fn test_selected_row_has_highlight() {
        let mut state = SelectionState::new();
        state.set_input("row");
        let View::List(rows) = view(&mut state, &data(3)) else {
            panic!("expected list");
        };

        assert_eq!(rows.len(), 3);
        assert!(!rows[0].selected);
        assert_eq!(rows[0].background, Highlight::NEUTRAL);
        assert!(rows[2].selected);
        // 'B' = 66, 66 % 6 = 0
        assert_eq!(rows[2].background, Palette::COLORS[0]);
        assert_eq!(rows[2].label, "Row 2");
    }

    #[test]
    fn test_no_selection_all_neutral() {
        let mut state = SelectionState::new();
        let View::List(rows) = view(&mut state, &data(2)) else {
            panic!("expected list");
        };
        assert!(rows.iter().all(|r| !r.selected && r.background == Highlight::NEUTRAL));
    }
}
