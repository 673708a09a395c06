//! Highlight colors for the selected row.

/// An RGB highlight color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Highlight {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Background for rows that are not selected.
    pub const NEUTRAL: Highlight = Highlight::rgb(0xff, 0xff, 0xff);

    /// `#rrggbb` form.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Highlight {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl std::fmt::Display for Highlight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hex())
    }
}

/// The fixed, ordered highlight palette, indexed modulo its length.
pub struct Palette;

impl Palette {
    pub const COLORS: [Highlight; 6] = [
        Highlight::rgb(0xff, 0x00, 0x00),
        Highlight::rgb(0x00, 0xff, 0x00),
        Highlight::rgb(0x00, 0x00, 0xff),
        Highlight::rgb(0xff, 0xff, 0x00),
        Highlight::rgb(0x00, 0xff, 0xff),
        Highlight::rgb(0xff, 0x00, 0xff),
    ];

    pub fn len() -> usize {
        Self::COLORS.len()
    }

    /// Color at `index` modulo the palette size.
    pub fn at(index: usize) -> Highlight {
        Self::COLORS[index % Self::len()]
    }

    /// Auto-selection color: keyed on the code point of the code's first char.
    ///
    /// An empty code maps to the first color.
    pub fn for_code(code: &str) -> Highlight {
        let key = code.chars().next().map(|c| c as usize).unwrap_or(0);
        Self::at(key)
    }

    /// Manual-click color: keyed on the row's position in the visible list.
    pub fn for_row(index: usize) -> Highlight {
        Self::at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(Palette::COLORS[0].hex(), "#ff0000");
        assert_eq!(Palette::COLORS[5].hex(), "#ff00ff");
        assert_eq!(Highlight::NEUTRAL.to_string(), "#ffffff");
    }

    #[test]
    fn test_at_wraps() {
        assert_eq!(Palette::len(), 6);
        assert_eq!(Palette::at(6), Palette::COLORS[0]);
        assert_eq!(Palette::at(13), Palette::COLORS[1]);
    }

    #[test]
    fn test_for_code() {
        // 'F' = 70, 70 % 6 = 4
        assert_eq!(Palette::for_code("FR"), Palette::COLORS[4]);
        // 'D' = 68, 68 % 6 = 2
        assert_eq!(Palette::for_code("DE"), Palette::COLORS[2]);
        assert_eq!(Palette::for_code(""), Palette::COLORS[0]);
    }

    #[test]
    fn test_for_row() {
        assert_eq!(Palette::for_row(0), Palette::COLORS[0]);
        assert_eq!(Palette::for_row(7), Palette::COLORS[1]);
    }
}
