//! Section composition: turns `ResumeData` into ordered, template-neutral blocks.
//!
//! One block per visible section, in `sections` order. A block is a heading plus
//! items; an item is the smallest unit pagination will keep together (one
//! experience entry, one skills row, one custom section, ...).

use serde::Serialize;

use crate::models::resume::is_blank;
use crate::models::{Language, ResumeData, SectionId};
use crate::resume::bullets::split_bullets;
use crate::resume::visibility::visible_sections;

/// Skills are laid out in rows of this many.
pub const SKILLS_PER_ROW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextRole {
    Name,
    Title,
    Contact,
    Heading,
    EntryTitle,
    EntryMeta,
    Body,
    Bullet,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLine {
    pub role: TextRole,
    pub text: String,
}

impl TextLine {
    fn new(role: TextRole, text: impl Into<String>) -> Self {
        TextLine {
            role,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub lines: Vec<TextLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionBlock {
    pub section: SectionId,
    /// `None` for the profile header and for custom sections, whose items carry their own titles.
    pub heading: Option<String>,
    pub items: Vec<Item>,
}

/// Builds the blocks of every visible section in display order.
pub fn compose(data: &ResumeData, language: Language) -> Vec<SectionBlock> {
    visible_sections(data)
        .into_iter()
        .map(|section| compose_section(data, section, language))
        .collect()
}

fn compose_section(data: &ResumeData, section: SectionId, language: Language) -> SectionBlock {
    let heading = match section {
        SectionId::Profile | SectionId::CustomSections => None,
        other => Some(other.title(language).to_string()),
    };
    let items = match section {
        SectionId::Profile => vec![profile_item(data)],
        SectionId::Summary => vec![Item {
            lines: vec![TextLine::new(TextRole::Body, data.summary.trim())],
        }],
        SectionId::Experience => data
            .experience
            .iter()
            .filter(|e| !e.is_blank())
            .map(|e| {
                let mut lines = Vec::new();
                push_non_blank(&mut lines, TextRole::EntryTitle, e.title.trim().to_string());
                let meta = join_non_blank(&[
                    &e.company,
                    &e.location,
                    &date_range(&e.start_date, &e.end_date),
                ]);
                push_non_blank(&mut lines, TextRole::EntryMeta, meta);
                push_bullets(&mut lines, &e.description);
                Item { lines }
            })
            .collect(),
        SectionId::Education => data
            .education
            .iter()
            .filter(|e| !e.is_blank())
            .map(|e| {
                let mut lines = Vec::new();
                push_non_blank(&mut lines, TextRole::EntryTitle, e.institution.trim().to_string());
                push_non_blank(&mut lines, TextRole::EntryMeta, e.degree.trim().to_string());
                let meta = join_non_blank(&[&date_range(&e.start_date, &e.end_date), &e.location]);
                push_non_blank(&mut lines, TextRole::EntryMeta, meta);
                Item { lines }
            })
            .collect(),
        SectionId::Projects => data
            .projects
            .iter()
            .filter(|p| !p.is_blank())
            .map(|p| {
                let mut lines = Vec::new();
                push_non_blank(&mut lines, TextRole::EntryTitle, p.name.trim().to_string());
                push_non_blank(&mut lines, TextRole::EntryMeta, p.date.trim().to_string());
                push_bullets(&mut lines, &p.description);
                Item { lines }
            })
            .collect(),
        SectionId::Skills => {
            let skills: Vec<&str> = data
                .skills
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect();
            skills
                .chunks(SKILLS_PER_ROW)
                .map(|row| Item {
                    lines: vec![TextLine::new(TextRole::Body, row.join("  •  "))],
                })
                .collect()
        }
        SectionId::CustomSections => data
            .custom_sections
            .iter()
            .filter(|c| !c.is_blank())
            .map(|c| {
                let mut lines = Vec::new();
                push_non_blank(&mut lines, TextRole::Heading, c.title.trim().to_string());
                push_bullets(&mut lines, &c.content);
                Item { lines }
            })
            .collect(),
    };
    SectionBlock {
        section,
        heading,
        items,
    }
}

fn profile_item(data: &ResumeData) -> Item {
    let p = &data.profile;
    let mut lines = vec![TextLine::new(TextRole::Name, p.name.trim())];
    push_non_blank(&mut lines, TextRole::Title, p.title.trim().to_string());
    let contact = join_with(&[&p.phone, &p.email, &p.address], "  •  ");
    push_non_blank(&mut lines, TextRole::Contact, contact);
    Item { lines }
}

/// "start - end", or whichever side is present.
pub fn date_range(start: &str, end: &str) -> String {
    join_with(&[start, end], " - ")
}

fn join_with(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

fn join_non_blank(parts: &[&str]) -> String {
    join_with(parts, " | ")
}

fn push_non_blank(lines: &mut Vec<TextLine>, role: TextRole, text: String) {
    if !is_blank(&text) {
        lines.push(TextLine::new(role, text));
    }
}

fn push_bullets(lines: &mut Vec<TextLine>, text: &str) {
    lines.extend(
        split_bullets(text)
            .into_iter()
            .map(|b| TextLine::new(TextRole::Bullet, b)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CustomSection;
    use crate::resume::seed::seed_resume;

    #[test]
    fn test_blocks_follow_visible_order() {
        let mut data = seed_resume(Language::En);
        data.reorder_sections(5, 1).unwrap();
        let blocks = compose(&data, Language::En);
        let order: Vec<SectionId> = blocks.iter().map(|b| b.section).collect();
        assert_eq!(
            order,
            vec![
                SectionId::Profile,
                SectionId::Skills,
                SectionId::Summary,
                SectionId::Experience,
                SectionId::Education,
                SectionId::Projects,
            ]
        );
    }

    #[test]
    fn test_experience_item_lines() {
        let data = seed_resume(Language::En);
        let blocks = compose(&data, Language::En);
        let exp = blocks.iter().find(|b| b.section == SectionId::Experience).unwrap();
        assert_eq!(exp.heading.as_deref(), Some("Experience"));
        assert_eq!(exp.items.len(), 2);
        let first = &exp.items[0].lines;
        assert_eq!(first[0].text, "Senior Software Engineer");
        assert_eq!(
            first[1].text,
            "Tech Solutions Inc. | San Francisco, CA | Jan 2020 - Present"
        );
        assert_eq!(first.iter().filter(|l| l.role == TextRole::Bullet).count(), 3);
        assert!(first[2].text.starts_with("Led the development"));
    }

    #[test]
    fn test_skills_are_chunked_into_rows() {
        let data = seed_resume(Language::En);
        let blocks = compose(&data, Language::En);
        let skills = blocks.iter().find(|b| b.section == SectionId::Skills).unwrap();
        assert_eq!(skills.items.len(), 12 / SKILLS_PER_ROW);
        assert_eq!(skills.items[0].lines[0].text, "JavaScript  •  TypeScript  •  React");
    }

    #[test]
    fn test_blank_entries_and_empty_custom_sections_are_skipped() {
        let mut data = seed_resume(Language::En);
        data.add_entry(SectionId::Projects).unwrap();
        data.custom_sections = vec![
            CustomSection {
                id: "c1".to_string(),
                title: "Awards".to_string(),
                content: "- Dean's list".to_string(),
            },
            CustomSection {
                id: "c2".to_string(),
                title: "Empty".to_string(),
                content: String::new(),
            },
        ];
        let blocks = compose(&data, Language::En);
        let projects = blocks.iter().find(|b| b.section == SectionId::Projects).unwrap();
        assert_eq!(projects.items.len(), 1);
        let custom = blocks
            .iter()
            .find(|b| b.section == SectionId::CustomSections)
            .unwrap();
        assert_eq!(custom.items.len(), 1);
        assert_eq!(custom.items[0].lines[0].role, TextRole::Heading);
        assert_eq!(custom.items[0].lines[1].text, "Dean's list");
    }

    #[test]
    fn test_headings_are_localized() {
        let data = seed_resume(Language::Tr);
        let blocks = compose(&data, Language::Tr);
        assert_eq!(blocks[1].heading.as_deref(), Some("Özet"));
        assert!(blocks[0].heading.is_none());
    }

    #[test]
    fn test_date_range_omits_missing_side() {
        assert_eq!(date_range("2014", ""), "2014");
        assert_eq!(date_range(" ", "2016"), "2016");
        assert_eq!(date_range("2014", "2016"), "2014 - 2016");
    }
}
