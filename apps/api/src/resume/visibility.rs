//! Section visibility: decides whether a section takes part in a render pass.
//!
//! A section is visible when its settings flag is on AND it has something to show:
//! - profile: always has something (blank fields degrade to blanks)
//! - summary: non-blank text
//! - list sections: at least one non-blank entry
//! - customSections: at least one entry with non-blank content
//!
//! Profile obeys `showProfile` like every other section.

use crate::models::resume::is_blank;
use crate::models::{ResumeData, SectionId};

pub fn is_section_visible(data: &ResumeData, section: SectionId) -> bool {
    data.settings.flag(section) && has_content(data, section)
}

/// Visible sections in display order.
pub fn visible_sections(data: &ResumeData) -> Vec<SectionId> {
    data.sections
        .iter()
        .filter(|&section| is_section_visible(data, section))
        .collect()
}

fn has_content(data: &ResumeData, section: SectionId) -> bool {
    match section {
        SectionId::Profile => true,
        SectionId::Summary => !is_blank(&data.summary),
        SectionId::Experience => data.experience.iter().any(|e| !e.is_blank()),
        SectionId::Education => data.education.iter().any(|e| !e.is_blank()),
        SectionId::Projects => data.projects.iter().any(|p| !p.is_blank()),
        SectionId::Skills => data.skills.iter().any(|s| !is_blank(s)),
        SectionId::CustomSections => data.custom_sections.iter().any(|c| !c.is_blank()),
    }
}
