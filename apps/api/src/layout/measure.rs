//! Layout pass: wraps every text line of a block and measures the result.
//!
//! Heights are recomputed from the block on every call; nothing is cached, so a
//! measurement can never reflect an earlier version of the document.

use serde::Serialize;
use thiserror::Error;

use crate::layout::font_metrics::helvetica;
use crate::models::SectionId;
use crate::render::blocks::{Item, SectionBlock, TextLine, TextRole};
use crate::render::variant::VariantPolicy;

/// Horizontal space reserved for a bullet glyph.
pub const BULLET_INDENT_PT: f32 = 10.0;

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("height measurement unavailable: {0}")]
    MeasurementUnavailable(String),

    #[error("page budget must be a positive number, got {0}")]
    InvalidBudget(f32),

    #[error("section '{section}' has an invalid height {height}")]
    InvalidHeight { section: SectionId, height: f32 },
}

/// Heights of one section: its heading and each of its items, in points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasuredSection {
    pub section: SectionId,
    pub heading_height: f32,
    pub item_heights: Vec<f32>,
}

impl MeasuredSection {
    pub fn total_height(&self) -> f32 {
        self.heading_height + self.item_heights.iter().sum::<f32>()
    }
}

/// Strategy for obtaining block heights.
pub trait HeightMeasurer: Send + Sync {
    fn measure(
        &self,
        block: &SectionBlock,
        policy: &VariantPolicy,
    ) -> Result<MeasuredSection, LayoutError>;
}

/// A wrapped, styled output line.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub role: TextRole,
    pub text: String,
    pub size_pt: f32,
    pub bold: bool,
    /// Vertical advance of this line.
    pub height: f32,
    /// True on the first wrapped line of a bullet; the glyph is drawn there.
    pub bullet_start: bool,
}

/// Heading as displayed by the variant.
pub fn heading_text(heading: &str, policy: &VariantPolicy) -> String {
    if policy.uppercase_headings {
        heading.to_uppercase()
    } else {
        heading.to_string()
    }
}

/// Wraps logical lines into placed lines at `width_pt`.
pub fn layout_lines(lines: &[TextLine], policy: &VariantPolicy, width_pt: f32) -> Vec<PlacedLine> {
    let metrics = helvetica();
    let mut placed = Vec::new();
    for line in lines {
        let (size_pt, bold) = policy.typography.style(line.role);
        let (text, available) = match line.role {
            TextRole::Heading => (heading_text(&line.text, policy), width_pt),
            TextRole::Bullet => (line.text.clone(), width_pt - BULLET_INDENT_PT),
            _ => (line.text.clone(), width_pt),
        };
        let height = size_pt * policy.typography.leading;
        for (i, wrapped) in metrics
            .wrap(&text, size_pt, bold, available)
            .into_iter()
            .enumerate()
        {
            placed.push(PlacedLine {
                role: line.role,
                text: wrapped,
                size_pt,
                bold,
                height,
                bullet_start: line.role == TextRole::Bullet && i == 0,
            });
        }
    }
    placed
}

/// Placed lines of a section heading (empty when the block has none).
pub fn layout_heading(block: &SectionBlock, policy: &VariantPolicy, width_pt: f32) -> Vec<PlacedLine> {
    match &block.heading {
        Some(heading) => layout_lines(
            &[TextLine {
                role: TextRole::Heading,
                text: heading.clone(),
            }],
            policy,
            width_pt,
        ),
        None => Vec::new(),
    }
}

pub fn item_height(item: &Item, policy: &VariantPolicy, width_pt: f32) -> f32 {
    let lines: f32 = layout_lines(&item.lines, policy, width_pt)
        .iter()
        .map(|l| l.height)
        .sum();
    lines + policy.typography.item_gap_pt
}

pub fn heading_height(block: &SectionBlock, policy: &VariantPolicy, width_pt: f32) -> f32 {
    let lines = layout_heading(block, policy, width_pt);
    if lines.is_empty() {
        0.0
    } else {
        lines.iter().map(|l| l.height).sum::<f32>() + policy.typography.heading_gap_pt
    }
}

/// Measures with the static Helvetica tables at a fixed column width.
pub struct MetricMeasurer {
    pub content_width_pt: f32,
}

impl HeightMeasurer for MetricMeasurer {
    fn measure(
        &self,
        block: &SectionBlock,
        policy: &VariantPolicy,
    ) -> Result<MeasuredSection, LayoutError> {
        if !(self.content_width_pt > 0.0) {
            return Err(LayoutError::MeasurementUnavailable(format!(
                "content width {} is not positive",
                self.content_width_pt
            )));
        }
        Ok(MeasuredSection {
            section: block.section,
            heading_height: heading_height(block, policy, self.content_width_pt),
            item_heights: block
                .items
                .iter()
                .map(|item| item_height(item, policy, self.content_width_pt))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccentColor, Language, Template};
    use crate::render::blocks::compose;
    use crate::render::variant::variant_policy;
    use crate::resume::seed::seed_resume;

    fn classic() -> VariantPolicy {
        variant_policy(Template::Classic, AccentColor::Green)
    }

    #[test]
    fn test_bullet_wraps_only_mark_first_line() {
        let policy = classic();
        let line = TextLine {
            role: TextRole::Bullet,
            text: "Reduced build times across the monorepo ".repeat(6),
        };
        let placed = layout_lines(&[line], &policy, 300.0);
        assert!(placed.len() > 1);
        assert!(placed[0].bullet_start);
        assert!(placed[1..].iter().all(|l| !l.bullet_start));
    }

    #[test]
    fn test_headings_are_uppercased_when_policy_says_so() {
        let policy = classic();
        assert_eq!(heading_text("Eğitim", &policy), "EĞITIM");
        let modern = variant_policy(Template::Modern, AccentColor::Green);
        assert_eq!(heading_text("Skills", &modern), "Skills");
    }

    #[test]
    fn test_measurement_is_repeatable() {
        let data = seed_resume(Language::En);
        let blocks = compose(&data, Language::En);
        let measurer = MetricMeasurer {
            content_width_pt: 500.0,
        };
        let policy = classic();
        let first: Vec<_> = blocks
            .iter()
            .map(|b| measurer.measure(b, &policy).unwrap())
            .collect();
        let second: Vec<_> = blocks
            .iter()
            .map(|b| measurer.measure(b, &policy).unwrap())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_narrow_column_is_taller() {
        let data = seed_resume(Language::En);
        let blocks = compose(&data, Language::En);
        let summary = blocks.iter().find(|b| b.section == SectionId::Summary).unwrap();
        let policy = classic();
        let wide = MetricMeasurer { content_width_pt: 520.0 }
            .measure(summary, &policy)
            .unwrap();
        let narrow = MetricMeasurer { content_width_pt: 200.0 }
            .measure(summary, &policy)
            .unwrap();
        assert!(narrow.total_height() > wide.total_height());
    }

    #[test]
    fn test_profile_has_no_heading_height() {
        let data = seed_resume(Language::En);
        let blocks = compose(&data, Language::En);
        let measured = MetricMeasurer { content_width_pt: 500.0 }
            .measure(&blocks[0], &classic())
            .unwrap();
        assert_eq!(measured.section, SectionId::Profile);
        assert_eq!(measured.heading_height, 0.0);
        assert_eq!(measured.item_heights.len(), 1);
    }

    #[test]
    fn test_zero_width_reports_unavailable() {
        let data = seed_resume(Language::En);
        let blocks = compose(&data, Language::En);
        let err = MetricMeasurer { content_width_pt: 0.0 }
            .measure(&blocks[0], &classic())
            .unwrap_err();
        assert!(matches!(err, LayoutError::MeasurementUnavailable(_)));
    }
}
