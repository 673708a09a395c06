//! Country records as returned by the countries GraphQL API.

use serde::{Deserialize, Serialize};

/// A spoken language attached to a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}

/// A single country. `code` is the primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub native: String,
    /// Some territories have no capital.
    #[serde(default)]
    pub capital: Option<String>,
    /// Flag emoji, shown next to the name.
    #[serde(default)]
    pub emoji: String,
    /// Comma-separated currency codes, when known.
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub languages: Vec<Language>,
}

impl Country {
    /// Case-insensitive substring test against the code or the name.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.code.to_lowercase().contains(&needle) || self.name.to_lowercase().contains(&needle)
    }

    /// Same identity as `other` (compares the primary key only).
    pub fn same_as(&self, other: &Country) -> bool {
        self.code == other.code
    }

    /// Row label: name followed by the flag.
    pub fn label(&self) -> String {
        if self.emoji.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.emoji)
        }
    }
}

/// Find a country by code, ignoring case.
pub fn find_by_code<'a>(countries: &'a [Country], code: &str) -> Option<&'a Country> {
    let code = code.trim();
    countries.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

#[cfg(test)]
pub(crate) fn sample(code: &str, name: &str) -> Country {
    Country {
        code: code.to_string(),
        name: name.to_string(),
        native: name.to_string(),
        capital: None,
        emoji: String::new(),
        currency: None,
        languages: Vec::new(),
    }
}
