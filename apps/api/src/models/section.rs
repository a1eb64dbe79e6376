use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The seven top-level resume sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionId {
    Profile,
    Summary,
    Experience,
    Education,
    Projects,
    Skills,
    CustomSections,
}

impl SectionId {
    /// Canonical order; also the default display order of a fresh resume.
    pub const ALL: [SectionId; 7] = [
        SectionId::Profile,
        SectionId::Summary,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::CustomSections,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Profile => "profile",
            SectionId::Summary => "summary",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::CustomSections => "customSections",
        }
    }

    /// Localized section heading. Custom sections carry their own titles.
    pub fn title(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::En, SectionId::Profile) => "Profile",
            (Language::En, SectionId::Summary) => "Summary",
            (Language::En, SectionId::Experience) => "Experience",
            (Language::En, SectionId::Education) => "Education",
            (Language::En, SectionId::Projects) => "Projects",
            (Language::En, SectionId::Skills) => "Skills",
            (Language::En, SectionId::CustomSections) => "Additional Sections",
            (Language::Tr, SectionId::Profile) => "Profil",
            (Language::Tr, SectionId::Summary) => "Özet",
            (Language::Tr, SectionId::Experience) => "Deneyim",
            (Language::Tr, SectionId::Education) => "Eğitim",
            (Language::Tr, SectionId::Projects) => "Projeler",
            (Language::Tr, SectionId::Skills) => "Yetenekler",
            (Language::Tr, SectionId::CustomSections) => "Ek Bölümler",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown section '{0}'")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section order
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq)]
pub enum SectionOrderError {
    #[error("section order must list all {expected} sections, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("section '{0}' appears more than once")]
    Duplicate(SectionId),

    #[error("index {index} out of range for {len} sections")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Display/print order of the sections.
///
/// Always a permutation of `SectionId::ALL`: construction and deserialization
/// reject duplicates and omissions, and `move_section` is the only mutator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SectionId>", into = "Vec<SectionId>")]
pub struct SectionOrder(Vec<SectionId>);

impl SectionOrder {
    pub fn as_slice(&self) -> &[SectionId] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.0.iter().copied()
    }

    /// Removes the section at `from` and reinserts it at `to`.
    pub fn move_section(&mut self, from: usize, to: usize) -> Result<(), SectionOrderError> {
        let len = self.0.len();
        for index in [from, to] {
            if index >= len {
                return Err(SectionOrderError::IndexOutOfRange { index, len });
            }
        }
        let section = self.0.remove(from);
        self.0.insert(to, section);
        Ok(())
    }
}

impl Default for SectionOrder {
    fn default() -> Self {
        SectionOrder(SectionId::ALL.to_vec())
    }
}

impl TryFrom<Vec<SectionId>> for SectionOrder {
    type Error = SectionOrderError;

    fn try_from(sections: Vec<SectionId>) -> Result<Self, Self::Error> {
        if sections.len() != SectionId::ALL.len() {
            return Err(SectionOrderError::WrongLength {
                expected: SectionId::ALL.len(),
                actual: sections.len(),
            });
        }
        for (i, section) in sections.iter().enumerate() {
            if sections[..i].contains(section) {
                return Err(SectionOrderError::Duplicate(*section));
            }
        }
        Ok(SectionOrder(sections))
    }
}

impl From<SectionOrder> for Vec<SectionId> {
    fn from(order: SectionOrder) -> Self {
        order.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Visibility settings
// ────────────────────────────────────────────────────────────────────────────

/// Per-section visibility flags, independent of section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub show_profile: bool,
    pub show_summary: bool,
    pub show_experience: bool,
    pub show_education: bool,
    pub show_projects: bool,
    pub show_skills: bool,
    pub show_custom_sections: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            show_profile: true,
            show_summary: true,
            show_experience: true,
            show_education: true,
            show_projects: true,
            show_skills: true,
            show_custom_sections: true,
        }
    }
}

impl Settings {
    pub fn flag(&self, section: SectionId) -> bool {
        match section {
            SectionId::Profile => self.show_profile,
            SectionId::Summary => self.show_summary,
            SectionId::Experience => self.show_experience,
            SectionId::Education => self.show_education,
            SectionId::Projects => self.show_projects,
            SectionId::Skills => self.show_skills,
            SectionId::CustomSections => self.show_custom_sections,
        }
    }

    pub fn flag_mut(&mut self, section: SectionId) -> &mut bool {
        match section {
            SectionId::Profile => &mut self.show_profile,
            SectionId::Summary => &mut self.show_summary,
            SectionId::Experience => &mut self.show_experience,
            SectionId::Education => &mut self.show_education,
            SectionId::Projects => &mut self.show_projects,
            SectionId::Skills => &mut self.show_skills,
            SectionId::CustomSections => &mut self.show_custom_sections,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Language
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Tr,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "tr" => Ok(Language::Tr),
            other => Err(format!("unsupported language '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_round_trip_through_str() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
        assert!("sidebar".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_section_order_rejects_duplicates() {
        let mut sections = SectionId::ALL.to_vec();
        sections[1] = SectionId::Profile;
        assert_eq!(
            SectionOrder::try_from(sections),
            Err(SectionOrderError::Duplicate(SectionId::Profile))
        );
    }

    #[test]
    fn test_section_order_rejects_omissions() {
        let sections = SectionId::ALL[..6].to_vec();
        assert!(matches!(
            SectionOrder::try_from(sections),
            Err(SectionOrderError::WrongLength { actual: 6, .. })
        ));
    }

    #[test]
    fn test_section_order_deserialization_validates() {
        let bad = r#"["profile","profile","experience","education","projects","skills","customSections"]"#;
        assert!(serde_json::from_str::<SectionOrder>(bad).is_err());

        let good = r#"["skills","profile","summary","experience","education","projects","customSections"]"#;
        let order: SectionOrder = serde_json::from_str(good).unwrap();
        assert_eq!(order.as_slice()[0], SectionId::Skills);
    }

    #[test]
    fn test_move_section_keeps_permutation_for_all_index_pairs() {
        for from in 0..7 {
            for to in 0..7 {
                let mut order = SectionOrder::default();
                order.move_section(from, to).unwrap();
                assert_eq!(order.as_slice()[to], SectionId::ALL[from]);
                let mut sorted: Vec<&str> = order.iter().map(|s| s.as_str()).collect();
                sorted.sort();
                let mut expected: Vec<&str> = SectionId::ALL.iter().map(|s| s.as_str()).collect();
                expected.sort();
                assert_eq!(sorted, expected, "from={from} to={to}");
            }
        }
    }

    #[test]
    fn test_move_section_out_of_range_leaves_order_untouched() {
        let mut order = SectionOrder::default();
        let err = order.move_section(2, 7).unwrap_err();
        assert_eq!(err, SectionOrderError::IndexOutOfRange { index: 7, len: 7 });
        assert_eq!(order, SectionOrder::default());
    }

    #[test]
    fn test_settings_flag_mapping_is_explicit() {
        let mut settings = Settings::default();
        *settings.flag_mut(SectionId::CustomSections) = false;
        assert!(!settings.show_custom_sections);
        assert!(!settings.flag(SectionId::CustomSections));
        assert!(settings.flag(SectionId::Skills));
    }

    #[test]
    fn test_settings_serialize_as_camel_case_flags() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["showCustomSections"], true);
        assert_eq!(json["showProfile"], true);
    }
}
