//! CLI command implementations.

use std::path::PathBuf;

use atlas::{
    find_by_code, load_countries_file, parse_directive, view, Config, CountriesClient, Country,
    Error, FilterMode, RemoteData, SelectionState, View,
};
use log::{debug, info};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Where country data comes from.
#[derive(Clone)]
pub enum Source {
    /// Local JSON file (bare array or GraphQL response).
    File(PathBuf),
    /// The GraphQL endpoint.
    Remote(CountriesClient),
}

impl Source {
    /// Resolve from config plus command-line overrides.
    pub fn resolve(opts: &SourceOptions) -> atlas::Result<Self> {
        if let Some(path) = &opts.from_file {
            return Ok(Source::File(path.clone()));
        }

        let mut config = Config::load()?;
        if let Some(endpoint) = &opts.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(secs) = opts.timeout_secs {
            config.timeout_secs = secs;
        }
        Ok(Source::Remote(CountriesClient::new(&config)))
    }

    pub async fn load(&self) -> atlas::Result<Vec<Country>> {
        match self {
            Source::File(path) => {
                info!("loading countries from {}", path.display());
                load_countries_file(path)
            }
            Source::Remote(client) => client.fetch_countries().await,
        }
    }
}

/// Data source flags shared by all commands.
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    pub endpoint: Option<String>,
    pub from_file: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

/// One row of `cq list` output.
#[derive(serde::Serialize)]
struct ListRow<'a> {
    code: &'a str,
    name: &'a str,
    emoji: &'a str,
    selected: bool,
    color: Option<String>,
}

/// Evaluate a query as if typed into a fresh browser and print the rows.
pub async fn list(query: &str, format: &str, source: &Source) -> atlas::Result<()> {
    let countries = source.load().await?;

    let mut state = SelectionState::new();
    state.set_input(query);
    let visible = state.refresh(&countries);
    debug!("{} of {} countries visible for {:?}", visible.len(), countries.len(), query);

    let rows: Vec<ListRow> = visible
        .iter()
        .map(|c| {
            let selected = state.is_selected(c);
            ListRow {
                code: &c.code,
                name: &c.name,
                emoji: &c.emoji,
                selected,
                color: selected.then(|| state.highlight().hex()),
            }
        })
        .collect();

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        "names" => {
            for row in &rows {
                println!("{}", row.name);
            }
        }
        "table" => {
            if rows.is_empty() {
                println!("No matching countries.");
                return Ok(());
            }

            println!("{:<2} {:<6} {:<40} COLOR", "", "CODE", "NAME");
            println!("{}", "-".repeat(60));
            for row in &rows {
                let marker = if row.selected { "*" } else { "" };
                let name = pad_to_width(&truncate_string(&format!("{} {}", row.name, row.emoji), 40), 40);
                println!(
                    "{:<2} {:<6} {} {}",
                    marker,
                    row.code,
                    name,
                    row.color.as_deref().unwrap_or("")
                );
            }
        }
        other => return Err(Error::Config(format!("Unknown format: {}", other))),
    }

    Ok(())
}

/// Print how a query is interpreted.
pub fn parse(query: &str, format: &str) -> atlas::Result<()> {
    let directive = parse_directive(query);
    let mode = FilterMode::from_input(query);
    let mode_name = match mode {
        FilterMode::Directive(_) => "search",
        FilterMode::FreeText { .. } => "text",
    };

    match format {
        "json" => {
            let value = serde_json::json!({
                "mode": mode_name,
                "needle": mode.needle(),
                "limit": mode.limit(),
                "term": directive.term,
                "size": directive.limit,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        "table" => {
            println!("mode:   {}", mode_name);
            println!("needle: {:?}", mode.needle());
            println!("limit:  {}", mode.limit());
            if matches!(mode, FilterMode::FreeText { .. }) && !directive.is_default() {
                println!("(directive {} ignored without search:)", directive);
            }
        }
        other => return Err(Error::Config(format!("Unknown format: {}", other))),
    }

    Ok(())
}

/// Print the details of one country.
pub async fn show(code: &str, format: &str, source: &Source) -> atlas::Result<()> {
    let countries = source.load().await?;
    let country = find_by_code(&countries, code)
        .ok_or_else(|| Error::NotFound(format!("country {}", code)))?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(country)?);
        }
        "table" => {
            let languages: Vec<String> = country
                .languages
                .iter()
                .map(|l| format!("{} ({})", l.name, l.code))
                .collect();

            println!("Code:      {}", country.code);
            println!("Name:      {} {}", country.name, country.emoji);
            println!("Native:    {}", country.native);
            println!("Capital:   {}", country.capital.as_deref().unwrap_or("-"));
            println!("Currency:  {}", country.currency.as_deref().unwrap_or("-"));
            println!(
                "Languages: {}",
                if languages.is_empty() { "-".to_string() } else { languages.join(", ") }
            );
        }
        other => return Err(Error::Config(format!("Unknown format: {}", other))),
    }

    Ok(())
}

/// Render a one-shot view of the browser screen without a terminal.
pub async fn snapshot(query: &str, source: &Source) -> atlas::Result<()> {
    let data = RemoteData::from(source.load().await);
    let mut state = SelectionState::new();
    state.set_input(query);

    println!("> {}", state.input());
    match view(&mut state, &data) {
        View::List(rows) => {
            for row in rows {
                let marker = if row.selected { format!("[{}]", row.background) } else { String::new() };
                println!("  {} {}", row.label, marker);
            }
        }
        other => {
            if let RemoteData::Failed(reason) = &data {
                debug!("fetch failed: {}", reason);
            }
            println!("{}", other.placeholder().unwrap_or_default());
        }
    }

    Ok(())
}

pub fn quick_help() -> atlas::Result<()> {
    print!("{}", QUICK_HELP);
    Ok(())
}

/// Longest prefix of `s` that fits in `max_width` terminal columns.
pub(crate) fn fit_width(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (i, c) in s.char_indices() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            return &s[..i];
        }
    }
    s
}

fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        s.to_string()
    } else {
        format!("{}...", fit_width(s, max_width.saturating_sub(3)))
    }
}

/// Pad with spaces to `width` columns; `{:<N}` counts chars, not columns.
fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

const QUICK_HELP: &str = r#"
CQ QUICK REFERENCE
==================

COMMANDS                                    EXAMPLES
────────────────────────────────────────────────────────────────────────────────
browse (b)         Interactive browser      cq b              cq b "search:fr"
list (l)           Print matching rows      cq l fra          cq l "search:a size:3"
snapshot           Print one browser frame  cq snapshot land
show (s)           Country details          cq s JP           cq s de -f json
parse (p)          Explain a query          cq p "size:5 search:in"

QUERY SYNTAX
────────────────────────────────────────────────────────────────────────────────
TEXT          fra             Code or name contains "fra" (any case), first 10
SEARCH        search:ger      Code or name contains "ger"; other text ignored
SIZE          size:25         Show up to 25 rows (only together with search:)
COMBINED      size:3 search:an   Any order, first occurrence of each wins

SELECTION
────────────────────────────────────────────────────────────────────────────────
When the query changes, the 10th row (or the last, if fewer) is selected.
Enter or a mouse click toggles a row. Esc or Ctrl+C quits.
"#;
