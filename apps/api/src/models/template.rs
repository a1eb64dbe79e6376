use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Visual template variant. Variants share data semantics and differ only in layout policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Classic,
    #[default]
    Modern,
    Creative,
    Minimalist,
}

impl Template {
    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Classic => "classic",
            Template::Modern => "modern",
            Template::Creative => "creative",
            Template::Minimalist => "minimalist",
        }
    }
}

impl FromStr for Template {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Template::Classic),
            "modern" => Ok(Template::Modern),
            "creative" => Ok(Template::Creative),
            "minimalist" => Ok(Template::Minimalist),
            other => Err(format!("unknown template '{other}'")),
        }
    }
}

/// Accent color of the creative template's header band and headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Green,
    Red,
    Orange,
    Blue,
    Purple,
    Gray,
    Black,
}

impl AccentColor {
    /// sRGB components, 0–255.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            AccentColor::Green => (22, 163, 74),
            AccentColor::Red => (220, 38, 38),
            AccentColor::Orange => (234, 88, 12),
            AccentColor::Blue => (37, 99, 235),
            AccentColor::Purple => (147, 51, 234),
            AccentColor::Gray => (75, 85, 99),
            AccentColor::Black => (0, 0, 0),
        }
    }

    pub fn hex(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}
