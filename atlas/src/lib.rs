//! atlas: country data, search mini-language and selection logic.
//!
//! Fetches countries from a public GraphQL API and computes the filtered,
//! selectable list a browser renders.

pub mod config;
pub mod country;
pub mod error;
pub mod query;
pub mod remote;
pub mod render;
pub mod select;

pub use config::{Config, DEFAULT_ENDPOINT};
pub use country::{find_by_code, Country, Language};
pub use error::{Error, Result};
pub use query::{is_search_mode, parse_directive, SearchDirective, DEFAULT_LIMIT};
pub use remote::{decode_response, load_countries_file, CountriesClient, RemoteData, COUNTRIES_QUERY};
pub use render::{rows, view, Row, View};
pub use select::{auto_pick, compute_display, visible, Display, FilterMode, Highlight, Palette, SelectionState};
