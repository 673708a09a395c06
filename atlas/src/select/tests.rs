//! Tests for filtering and selection.

use super::*;
use crate::country::{sample, Country};

/// `n` countries all named "...land", codes A00, A01, ...
fn lands(n: usize) -> Vec<Country> {
    (0..n)
        .map(|i| sample(&format!("A{:02}", i), &format!("Land {}", i)))
        .collect()
}

fn codes(rows: &[&Country]) -> Vec<String> {
    rows.iter().map(|c| c.code.clone()).collect()
}

#[test]
fn test_free_text_case_insensitive() {
    let list = vec![sample("FR", "FRANCE"), sample("DE", "Germany")];
    let rows = visible(&list, "fra");
    assert_eq!(codes(&rows), vec!["FR"]);
}

#[test]
fn test_directive_term_case_insensitive() {
    let list = vec![sample("FR", "France"), sample("DE", "Germany")];
    assert_eq!(codes(&visible(&list, "search:FRA")), vec!["FR"]);
    assert_eq!(codes(&visible(&list, "search:ger size:1")), vec!["DE"]);
}

#[test]
fn test_free_text_matches_code() {
    let list = vec![sample("FR", "France"), sample("DE", "Germany")];
    assert_eq!(codes(&visible(&list, "De")), vec!["DE"]);
}

#[test]
fn test_directive_truncates_in_list_order() {
    let list = lands(15);
    let rows = visible(&list, "search:land size:5");
    assert_eq!(codes(&rows), vec!["A00", "A01", "A02", "A03", "A04"]);
}

#[test]
fn test_directive_uses_only_term() {
    let list = vec![sample("FR", "France"), sample("DE", "Germany")];
    // The rest of the input is not part of the needle
    let rows = visible(&list, "zzz search:germ qqq");
    assert_eq!(codes(&rows), vec!["DE"]);
}

#[test]
fn test_directive_empty_term_matches_all() {
    let list = lands(15);
    assert_eq!(visible(&list, "search: size:12").len(), 12);
    assert_eq!(visible(&list, "search:").len(), 10);
}

#[test]
fn test_free_text_ignores_size() {
    let mode = FilterMode::from_input("land size:3");
    assert_eq!(
        mode,
        FilterMode::FreeText {
            needle: "land size:3".to_string(),
            limit: 10
        }
    );

    let list = lands(15);
    assert_eq!(visible(&list, "").len(), 10);
    assert_eq!(visible(&list, "land").len(), 10);
}

#[test]
fn test_size_zero_shows_nothing() {
    let list = lands(15);
    assert!(visible(&list, "search:land size:0").is_empty());
}

#[test]
fn test_huge_size_is_untruncated() {
    let list = lands(15);
    assert_eq!(visible(&list, "search:land size:100000").len(), 15);
}

#[test]
fn test_auto_pick_tenth_of_twelve() {
    let list = lands(12);
    let rows = visible(&list, "search:land size:12");
    assert_eq!(rows.len(), 12);
    assert_eq!(auto_pick(&rows).map(|c| c.code.as_str()), Some("A09"));
}

#[test]
fn test_auto_pick_last_of_four() {
    let list = lands(4);
    let rows = visible(&list, "land");
    assert_eq!(auto_pick(&rows).map(|c| c.code.as_str()), Some("A03"));
}

#[test]
fn test_auto_pick_exactly_ten() {
    let list = lands(10);
    let rows = visible(&list, "land");
    assert_eq!(auto_pick(&rows).map(|c| c.code.as_str()), Some("A09"));
}

#[test]
fn test_auto_pick_empty() {
    assert!(auto_pick(&[]).is_none());
}

#[test]
fn test_compute_display_on_change() {
    let list = lands(4);
    let display = compute_display(&list, "land", "");
    assert_eq!(display.visible.len(), 4);
    let (country, color) = display.auto_selection.unwrap();
    assert_eq!(country.code, "A03");
    // 'A' = 65, 65 % 6 = 5
    assert_eq!(color, Palette::COLORS[5]);
    assert_eq!(display.prev_input, "land");
}

#[test]
fn test_compute_display_unchanged_input() {
    let list = lands(4);
    let display = compute_display(&list, "land", "land");
    assert_eq!(display.visible.len(), 4);
    assert!(display.auto_selection.is_none());
    assert_eq!(display.prev_input, "land");
}

#[test]
fn test_compute_display_empty_result_advances_prev_input() {
    let list = lands(4);
    let display = compute_display(&list, "nothing", "land");
    assert!(display.visible.is_empty());
    assert!(display.auto_selection.is_none());
    assert_eq!(display.prev_input, "nothing");
}

#[test]
fn test_initial_refresh_does_not_auto_select() {
    let list = lands(4);
    let mut state = SelectionState::new();
    let rows = state.refresh(&list);
    assert_eq!(rows.len(), 4);
    assert!(state.selected().is_none());
    assert_eq!(state.highlight(), Highlight::NEUTRAL);
}

#[test]
fn test_refresh_auto_selects_on_input_change() {
    let list = lands(12);
    let mut state = SelectionState::new();
    state.set_input("land");
    state.refresh(&list);
    assert_eq!(state.selected().map(|c| c.code.as_str()), Some("A09"));
    assert_eq!(state.highlight(), Palette::for_code("A09"));
    assert_eq!(state.prev_input(), "land");
}

#[test]
fn test_refresh_is_idempotent() {
    let list = lands(12);
    let mut state = SelectionState::new();
    state.set_input("land");
    state.refresh(&list);

    // Manual click changes the selection; re-rendering must not undo it
    assert!(state.click(&list, 2));
    assert_eq!(state.selected().map(|c| c.code.as_str()), Some("A02"));

    state.refresh(&list);
    state.refresh(&list);
    assert_eq!(state.selected().map(|c| c.code.as_str()), Some("A02"));
    assert_eq!(state.highlight(), Palette::for_row(2));
}

#[test]
fn test_click_toggles_auto_selection() {
    let list = lands(4);
    let mut state = SelectionState::new();
    state.set_input("land");
    state.refresh(&list);
    assert_eq!(state.selected().map(|c| c.code.as_str()), Some("A03"));

    // Clicking the auto-selected row clears it
    assert!(state.click(&list, 3));
    assert!(state.selected().is_none());
    assert_eq!(state.prev_input(), "land");
}

#[test]
fn test_click_other_row_changes_color() {
    let list = lands(4);
    let mut state = SelectionState::new();
    state.set_input("land");
    state.refresh(&list);
    let auto_color = state.highlight();

    assert!(state.click(&list, 1));
    assert_eq!(state.selected().map(|c| c.code.as_str()), Some("A01"));
    assert_eq!(state.highlight(), Palette::COLORS[1]);
    assert_ne!(state.highlight(), auto_color);
}

#[test]
fn test_input_change_after_click_auto_selects_again() {
    let list = lands(12);
    let mut state = SelectionState::new();
    state.set_input("land");
    state.refresh(&list);
    state.click(&list, 9);
    assert!(state.selected().is_none());

    state.set_input("land 1");
    state.refresh(&list);
    // "Land 1", "Land 10", "Land 11" -> last of three
    assert_eq!(state.selected().map(|c| c.code.as_str()), Some("A11"));
}

#[test]
fn test_empty_result_keeps_prior_selection() {
    let list = lands(4);
    let mut state = SelectionState::new();
    state.set_input("land");
    state.refresh(&list);

    state.set_input("search:land size:0");
    let rows = state.refresh(&list);
    assert!(rows.is_empty());
    assert_eq!(state.selected().map(|c| c.code.as_str()), Some("A03"));
    assert_eq!(state.prev_input(), "search:land size:0");
}

#[test]
fn test_click_out_of_range() {
    let list = lands(3);
    let mut state = SelectionState::new();
    assert!(!state.click(&list, 3));
    assert!(state.selected().is_none());
}

#[test]
fn test_click_uses_visible_index() {
    let list = vec![sample("FR", "France"), sample("DE", "Germany"), sample("GR", "Greece")];
    let mut state = SelectionState::new();
    state.set_input("g");
    // Visible: Germany, Greece (France does not contain "g")
    assert!(state.click(&list, 1));
    assert_eq!(state.selected().map(|c| c.code.as_str()), Some("GR"));
    assert!(state.is_selected(&list[2]));
    assert!(!state.is_selected(&list[1]));
}

#[test]
fn test_push_and_pop_char() {
    let mut state = SelectionState::new();
    state.push_char('f');
    state.push_char('r');
    assert_eq!(state.input(), "fr");
    state.pop_char();
    assert_eq!(state.input(), "f");
}
