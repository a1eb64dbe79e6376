use serde::{Deserialize, Serialize};

use crate::models::section::{SectionOrder, Settings};

/// Contact header. Always present; blank fields render as blanks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Data URI or remote URL.
    pub photo_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// Newline-delimited bullets.
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    pub date: String,
    /// Newline-delimited bullets.
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSection {
    pub id: String,
    pub title: String,
    /// Newline-delimited bullets. Blank content hides the section.
    pub content: String,
}

/// The whole resume held by one editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub profile: Profile,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Vec<String>,
    pub custom_sections: Vec<CustomSection>,
    pub settings: Settings,
    pub sections: SectionOrder,
}

pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl ExperienceEntry {
    pub fn is_blank(&self) -> bool {
        [
            &self.title,
            &self.company,
            &self.location,
            &self.start_date,
            &self.end_date,
            &self.description,
        ]
        .iter()
        .all(|s| is_blank(s))
    }
}

impl EducationEntry {
    pub fn is_blank(&self) -> bool {
        [
            &self.degree,
            &self.institution,
            &self.location,
            &self.start_date,
            &self.end_date,
        ]
        .iter()
        .all(|s| is_blank(s))
    }
}

impl ProjectEntry {
    pub fn is_blank(&self) -> bool {
        [&self.name, &self.date, &self.description]
            .iter()
            .all(|s| is_blank(s))
    }
}

impl CustomSection {
    /// Only the content counts; a titled section with no content is absent.
    pub fn is_blank(&self) -> bool {
        is_blank(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_data_uses_camel_case_wire_names() {
        let data = ResumeData {
            profile: Profile {
                photo_url: "data:image/png;base64,AAAA".to_string(),
                ..Profile::default()
            },
            summary: String::new(),
            experience: vec![ExperienceEntry {
                id: "exp1".to_string(),
                start_date: "Jan 2020".to_string(),
                ..ExperienceEntry::default()
            }],
            education: vec![],
            projects: vec![],
            skills: vec![],
            custom_sections: vec![],
            settings: Settings::default(),
            sections: SectionOrder::default(),
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["profile"]["photoUrl"], "data:image/png;base64,AAAA");
        assert_eq!(json["experience"][0]["startDate"], "Jan 2020");
        assert!(json["customSections"].is_array());
        assert_eq!(json["sections"][6], "customSections");
    }

    #[test]
    fn test_custom_section_blankness_ignores_title() {
        let section = CustomSection {
            id: "c1".to_string(),
            title: "Awards".to_string(),
            content: "  \n ".to_string(),
        };
        assert!(section.is_blank());
    }

    #[test]
    fn test_entry_with_only_whitespace_is_blank() {
        let entry = ProjectEntry {
            id: "p1".to_string(),
            name: "   ".to_string(),
            ..ProjectEntry::default()
        };
        assert!(entry.is_blank());
    }
}
