//! Filtering, auto-selection and manual selection over the country list.
//!
//! - **Filter**: `search:` input filters by the parsed term and limit,
//!   anything else filters by the whole input with a limit of 10.
//! - **Auto-selection**: on input change, the 10th visible row (or the last
//!   one if fewer) is selected and colored from its code.
//! - **Manual selection**: clicking a row toggles it and colors it from the
//!   row index.

mod filter;
mod palette;
mod state;

pub use filter::{auto_pick, visible, FilterMode, AUTO_PICK_INDEX};
pub use palette::{Highlight, Palette};
pub use state::{compute_display, Display, SelectionState};

#[cfg(test)]
mod tests;
