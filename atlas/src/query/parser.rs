//! Directive parser for the search mini-language.

/// Literal that introduces a search term and switches on directive mode.
pub const SEARCH_PREFIX: &str = "search:";

/// Literal that introduces a size limit.
pub const SIZE_PREFIX: &str = "size:";

/// Limit used when no `size:` fragment is present.
pub const DEFAULT_LIMIT: usize = 10;

/// A parsed directive: free-text term plus result-size limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDirective {
    /// Term from `search:<word>` (empty when absent)
    pub term: String,
    /// Limit from `size:<digits>` (no upper bound enforced)
    pub limit: usize,
}

impl Default for SearchDirective {
    #[inline]
    fn default() -> Self {
        Self {
            term: String::new(),
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Parse a raw input string into a directive.
///
/// Never fails: missing or malformed fragments fall back to the defaults.
pub fn parse_directive(input: &str) -> SearchDirective {
    let mut directive = SearchDirective::default();

    if let Some(term) = first_capture(input, SEARCH_PREFIX, is_word_char) {
        directive.term = term.to_string();
    }

    if let Some(digits) = first_capture(input, SIZE_PREFIX, |c| c.is_ascii_digit()) {
        directive.limit = parse_limit(digits);
    }

    directive
}

/// True when the input contains the literal `search:` (with or without a term).
pub fn is_search_mode(input: &str) -> bool {
    input.contains(SEARCH_PREFIX)
}

/// Find the first `prefix` occurrence followed by at least one char accepted
/// by `accept`, returning the accepted run.
///
/// An occurrence with nothing acceptable after it does not count, so
/// scanning moves on to the next one.
fn first_capture<'a>(input: &'a str, prefix: &str, accept: impl Fn(char) -> bool) -> Option<&'a str> {
    let mut offset = 0;

    while let Some(pos) = input[offset..].find(prefix) {
        let start = offset + pos + prefix.len();
        let rest = &input[start..];
        let end = rest
            .char_indices()
            .find(|&(_, c)| !accept(c))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        if end > 0 {
            return Some(&rest[..end]);
        }

        // Prefixes are ASCII, so one byte past the match start is a char boundary
        offset += pos + 1;
    }

    None
}

/// Word characters: ASCII letters, digits, underscore.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Parse a digit run, saturating on overflow.
fn parse_limit(digits: &str) -> usize {
    digits.parse().unwrap_or(usize::MAX)
}

impl SearchDirective {
    /// True when nothing was parsed beyond the defaults.
    pub fn is_default(&self) -> bool {
        self.term.is_empty() && self.limit == DEFAULT_LIMIT
    }
}

impl std::fmt::Display for SearchDirective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "search:{} size:{}", self.term, self.limit)
    }
}
