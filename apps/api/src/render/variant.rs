//! Template variants as layout policies.
//!
//! A variant decides typography, heading treatment and the header band. It never
//! changes which sections or entries appear, and every variant flows in one column
//! at the full content width.

use serde::Serialize;

use crate::models::{AccentColor, Template};
use crate::render::blocks::TextRole;

/// Font sizes in points and vertical rhythm.
#[derive(Debug, Clone, Serialize)]
pub struct Typography {
    pub name_pt: f32,
    pub title_pt: f32,
    pub heading_pt: f32,
    pub entry_title_pt: f32,
    pub body_pt: f32,
    /// Line height as a multiple of font size.
    pub leading: f32,
    /// Space under a section heading.
    pub heading_gap_pt: f32,
    /// Space after each item.
    pub item_gap_pt: f32,
    /// Space between two sections on the same page.
    pub section_gap_pt: f32,
}

impl Typography {
    /// (size, bold) for a text role.
    pub fn style(&self, role: TextRole) -> (f32, bool) {
        match role {
            TextRole::Name => (self.name_pt, true),
            TextRole::Title => (self.title_pt, false),
            TextRole::Contact => (self.body_pt, false),
            TextRole::Heading => (self.heading_pt, true),
            TextRole::EntryTitle => (self.entry_title_pt, true),
            TextRole::EntryMeta => (self.body_pt, false),
            TextRole::Body => (self.body_pt, false),
            TextRole::Bullet => (self.body_pt, false),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VariantPolicy {
    pub template: Template,
    pub typography: Typography,
    /// Heading and header-band color; `None` renders in plain black.
    pub accent: Option<AccentColor>,
    pub uppercase_headings: bool,
    /// Profile drawn inside a filled accent band.
    pub header_band: bool,
}

pub fn variant_policy(template: Template, accent_color: AccentColor) -> VariantPolicy {
    match template {
        Template::Classic => VariantPolicy {
            template,
            typography: Typography {
                name_pt: 22.0,
                title_pt: 11.0,
                heading_pt: 10.5,
                entry_title_pt: 10.5,
                body_pt: 9.0,
                leading: 1.4,
                heading_gap_pt: 6.0,
                item_gap_pt: 8.0,
                section_gap_pt: 12.0,
            },
            accent: None,
            uppercase_headings: true,
            header_band: false,
        },
        Template::Modern => VariantPolicy {
            template,
            typography: Typography {
                name_pt: 24.0,
                title_pt: 11.0,
                heading_pt: 12.0,
                entry_title_pt: 10.5,
                body_pt: 9.5,
                leading: 1.35,
                heading_gap_pt: 5.0,
                item_gap_pt: 7.0,
                section_gap_pt: 10.0,
            },
            accent: Some(AccentColor::Blue),
            uppercase_headings: false,
            header_band: false,
        },
        Template::Creative => VariantPolicy {
            template,
            typography: Typography {
                name_pt: 28.0,
                title_pt: 13.0,
                heading_pt: 10.5,
                entry_title_pt: 11.0,
                body_pt: 10.0,
                leading: 1.45,
                heading_gap_pt: 8.0,
                item_gap_pt: 10.0,
                section_gap_pt: 16.0,
            },
            accent: Some(accent_color),
            uppercase_headings: true,
            header_band: true,
        },
        Template::Minimalist => VariantPolicy {
            template,
            typography: Typography {
                name_pt: 32.0,
                title_pt: 14.0,
                heading_pt: 10.0,
                entry_title_pt: 11.0,
                body_pt: 11.0,
                leading: 1.5,
                heading_gap_pt: 10.0,
                item_gap_pt: 12.0,
                section_gap_pt: 22.0,
            },
            accent: None,
            uppercase_headings: true,
            header_band: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_creative_uses_the_selected_accent() {
        assert_eq!(
            variant_policy(Template::Creative, AccentColor::Red).accent,
            Some(AccentColor::Red)
        );
        assert_eq!(variant_policy(Template::Classic, AccentColor::Red).accent, None);
        assert_eq!(
            variant_policy(Template::Modern, AccentColor::Red).accent,
            Some(AccentColor::Blue)
        );
    }

    #[test]
    fn test_name_is_the_largest_text() {
        for template in [
            Template::Classic,
            Template::Modern,
            Template::Creative,
            Template::Minimalist,
        ] {
            let t = variant_policy(template, AccentColor::Green).typography;
            assert!(t.name_pt > t.heading_pt && t.name_pt > t.body_pt);
        }
    }
}
