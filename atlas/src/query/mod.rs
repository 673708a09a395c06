//! Search mini-language parser.
//!
//! # Syntax Overview
//!
//! - **Search term**: `search:<word>` where `<word>` is `[A-Za-z0-9_]+`
//! - **Size limit**: `size:<digits>`
//!
//! Both fragments may appear anywhere, in any order. The first match of
//! each wins and all other text is ignored. Without `search:` the whole
//! input is a plain-text filter (see [`crate::select::FilterMode`]).

mod parser;

pub use parser::{is_search_mode, parse_directive, SearchDirective, DEFAULT_LIMIT, SEARCH_PREFIX, SIZE_PREFIX};
