//! Static Helvetica metric table and A4 page geometry.
//!
//! Widths come from the Helvetica AFM (1/1000 em) and cover ASCII 0x20..=0x7E.
//! Index = (char as usize) - 32. Everything else falls back to the average width.
//! The PDF export draws with the standard Helvetica font, so measuring with the
//! same table keeps pagination and export in agreement.

use serde::{Deserialize, Serialize};

/// Points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Page geometry shared by the layout pass and the PDF export. All values in points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    pub margin_pt: f32,
}

impl PageConfig {
    pub fn content_width(&self) -> f32 {
        self.page_width_pt - 2.0 * self.margin_pt
    }

    /// The page budget: height available for content after margins.
    pub fn content_height(&self) -> f32 {
        self.page_height_pt - 2.0 * self.margin_pt
    }
}

/// A4 (210 × 297 mm) with 12 mm margins.
pub fn a4_page_config() -> PageConfig {
    PageConfig {
        page_width_pt: 210.0 * PT_PER_MM,
        page_height_pt: 297.0 * PT_PER_MM,
        margin_pt: 12.0 * PT_PER_MM,
    }
}

/// Bold glyphs run wider than regular; one factor is close enough for line breaking.
const BOLD_WIDTH_FACTOR: f32 = 1.06;

pub struct FontMetricTable {
    widths: [u16; 95],
    average_char_width: u16,
}

#[rustfmt::skip]
static HELVETICA: FontMetricTable = FontMetricTable {
    widths: [
        // sp    !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0-9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A-Z
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a-z
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {    |    }    ~
        334, 260, 334, 584,
    ],
    average_char_width: 556,
};

pub fn helvetica() -> &'static FontMetricTable {
    &HELVETICA
}

impl FontMetricTable {
    /// Width of `s` in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                let units = if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                };
                f32::from(units) / 1000.0
            })
            .sum()
    }

    /// Width of `s` in points at `size_pt`.
    pub fn width_pt(&self, s: &str, size_pt: f32, bold: bool) -> f32 {
        let factor = if bold { BOLD_WIDTH_FACTOR } else { 1.0 };
        self.measure_str(s) * size_pt * factor
    }

    /// Greedy word-wrap of `s` into lines no wider than `max_width_pt`.
    ///
    /// A single word wider than the line stays on its own line rather than being broken.
    /// Blank input wraps to zero lines.
    pub fn wrap(&self, s: &str, size_pt: f32, bold: bool, max_width_pt: f32) -> Vec<String> {
        let space = self.width_pt(" ", size_pt, bold);
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in s.split_whitespace() {
            let word_width = self.width_pt(word, size_pt, bold);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + space + word_width <= max_width_pt {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_width;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_geometry() {
        let config = a4_page_config();
        assert!((config.page_width_pt - 595.28).abs() < 0.01);
        assert!((config.page_height_pt - 841.89).abs() < 0.01);
        assert!((config.content_height() - 773.86).abs() < 0.01);
    }

    #[test]
    fn test_space_width_matches_afm() {
        assert!((helvetica().measure_str(" ") - 0.278).abs() < 1e-6);
    }

    #[test]
    fn test_non_ascii_uses_average_width() {
        let m = helvetica();
        assert!((m.measure_str("ş") - 0.556).abs() < 1e-6);
    }

    #[test]
    fn test_wide_glyphs_measure_wider() {
        let m = helvetica();
        assert!(m.measure_str("WWWW") > m.measure_str("iiii"));
    }

    #[test]
    fn test_bold_is_wider() {
        let m = helvetica();
        assert!(m.width_pt("Senior", 10.0, true) > m.width_pt("Senior", 10.0, false));
    }

    #[test]
    fn test_wrap_breaks_long_text() {
        let m = helvetica();
        let text = "word ".repeat(60);
        let lines = m.wrap(&text, 10.0, false, 200.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(m.width_pt(line, 10.0, false) <= 200.0);
        }
        let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
        assert_eq!(rejoined.len(), 60);
    }

    #[test]
    fn test_wrap_keeps_overlong_word_whole() {
        let m = helvetica();
        let lines = m.wrap("Supercalifragilisticexpialidocious", 12.0, false, 20.0);
        assert_eq!(lines, vec!["Supercalifragilisticexpialidocious"]);
    }

    #[test]
    fn test_wrap_blank_is_empty() {
        assert!(helvetica().wrap("   ", 10.0, false, 100.0).is_empty());
    }
}
