//! Colors and palettes.
//!
//! A `Color` is an opaque index into a `Palette`. The engine only ever
//! compares colors for equality; names exist for display.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Dot color. Opaque index into the board's palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u8);

impl Color {
    /// Create a new color.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the palette index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Names of the standard six-color palette, in level order.
pub const STANDARD_COLORS: [&str; 6] = ["red", "blue", "green", "yellow", "purple", "orange"];

/// A fixed, non-empty set of named colors.
///
/// Color `i` is the palette's `i`-th name. At most 255 colors are supported.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette {
    names: Vec<String>,
}

impl Palette {
    /// Create a palette from color names.
    ///
    /// Fails if `names` is empty or has more than 255 entries.
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if names.len() > u8::MAX as usize {
            return Err(ConfigError::PaletteTooLarge(names.len()));
        }
        Ok(Self { names })
    }

    /// The first `count` colors of the standard palette (clamped to 1..=6).
    #[must_use]
    pub fn standard(count: usize) -> Self {
        let count = count.clamp(1, STANDARD_COLORS.len());
        Self {
            names: STANDARD_COLORS[..count].iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Number of colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false: palettes are non-empty by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over all colors.
    pub fn colors(&self) -> impl Iterator<Item = Color> {
        (0..self.names.len() as u8).map(Color)
    }

    /// Display name of a color. `"?"` for colors outside this palette.
    #[must_use]
    pub fn name(&self, color: Color) -> &str {
        self.names.get(color.index()).map_or("?", String::as_str)
    }

    /// Look up a color by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<Color> {
        self.names.iter().position(|n| n == name).map(|i| Color(i as u8))
    }

    /// Check whether a color belongs to this palette.
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        color.index() < self.names.len()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard(4)
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = ConfigError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<Palette> for Vec<String> {
    fn from(palette: Palette) -> Self {
        palette.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_palette_rejected() {
        let names: Vec<String> = Vec::new();
        assert!(matches!(Palette::new(names), Err(ConfigError::EmptyPalette)));
    }

    #[test]
    fn test_oversized_palette_rejected() {
        let names = (0..300).map(|i| format!("c{i}"));
        assert!(matches!(Palette::new(names), Err(ConfigError::PaletteTooLarge(300))));
    }

    #[test]
    fn test_standard_palette() {
        let p = Palette::standard(3);
        assert_eq!(p.len(), 3);
        assert_eq!(p.name(Color(0)), "red");
        assert_eq!(p.name(Color(2)), "green");
        assert_eq!(p.name(Color(9)), "?");

        assert_eq!(Palette::standard(0).len(), 1);
        assert_eq!(Palette::standard(99).len(), 6);
    }

    #[test]
    fn test_find_and_contains() {
        let p = Palette::new(["red", "blue"]).unwrap();
        assert_eq!(p.find("blue"), Some(Color(1)));
        assert_eq!(p.find("green"), None);
        assert!(p.contains(Color(1)));
        assert!(!p.contains(Color(2)));
        assert_eq!(p.colors().count(), 2);
    }

    #[test]
    fn test_serde_rejects_empty() {
        let ok: Palette = serde_json::from_str(r#"["red","blue"]"#).unwrap();
        assert_eq!(ok.len(), 2);

        let err = serde_json::from_str::<Palette>("[]");
        assert!(err.is_err());
    }
}
