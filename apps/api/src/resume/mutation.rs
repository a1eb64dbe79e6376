//! Resume Mutation API: the only way editors change a `ResumeData`.
//!
//! Every structural change goes through these methods so the invariants hold
//! in one place: list entry ids are unique and never reused, and `sections`
//! stays a permutation of all section ids.
//!
//! Skills are plain strings without ids; they are addressed by their decimal
//! position ("0", "1", ...).

use thiserror::Error;
use uuid::Uuid;

use crate::models::section::SectionOrderError;
use crate::models::{
    CustomSection, EducationEntry, ExperienceEntry, ProjectEntry, ResumeData, SectionId,
};

/// Field name used to address a single skill string.
pub const SKILL_FIELD: &str = "skill";
/// Field name used to address the summary text.
pub const SUMMARY_FIELD: &str = "summary";

#[derive(Debug, Error, PartialEq)]
pub enum MutationError {
    #[error("entries of section '{0}' must be addressed by id")]
    MissingEntryId(SectionId),

    #[error("section '{0}' has no entries; omit the id")]
    UnexpectedEntryId(SectionId),

    #[error("section '{section}' has no field '{field}'")]
    UnknownField { section: SectionId, field: String },

    #[error("no entry '{id}' in section '{section}'")]
    EntryNotFound { section: SectionId, id: String },

    #[error("section '{0}' is not a list")]
    NotAList(SectionId),

    #[error(transparent)]
    Order(#[from] SectionOrderError),
}

// ────────────────────────────────────────────────────────────────────────────
// Entry abstraction over the id-carrying list types
// ────────────────────────────────────────────────────────────────────────────

trait Entry {
    const ID_PREFIX: &'static str;

    fn id(&self) -> &str;
    fn with_id(id: String) -> Self;
    fn field(&self, name: &str) -> Option<&String>;
    fn field_mut(&mut self, name: &str) -> Option<&mut String>;
}

impl Entry for ExperienceEntry {
    const ID_PREFIX: &'static str = "exp";

    fn id(&self) -> &str {
        &self.id
    }

    fn with_id(id: String) -> Self {
        ExperienceEntry {
            id,
            ..Default::default()
        }
    }

    fn field(&self, name: &str) -> Option<&String> {
        match name {
            "title" => Some(&self.title),
            "company" => Some(&self.company),
            "location" => Some(&self.location),
            "startDate" => Some(&self.start_date),
            "endDate" => Some(&self.end_date),
            "description" => Some(&self.description),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "title" => Some(&mut self.title),
            "company" => Some(&mut self.company),
            "location" => Some(&mut self.location),
            "startDate" => Some(&mut self.start_date),
            "endDate" => Some(&mut self.end_date),
            "description" => Some(&mut self.description),
            _ => None,
        }
    }
}

impl Entry for EducationEntry {
    const ID_PREFIX: &'static str = "edu";

    fn id(&self) -> &str {
        &self.id
    }

    fn with_id(id: String) -> Self {
        EducationEntry {
            id,
            ..Default::default()
        }
    }

    fn field(&self, name: &str) -> Option<&String> {
        match name {
            "degree" => Some(&self.degree),
            "institution" => Some(&self.institution),
            "location" => Some(&self.location),
            "startDate" => Some(&self.start_date),
            "endDate" => Some(&self.end_date),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "degree" => Some(&mut self.degree),
            "institution" => Some(&mut self.institution),
            "location" => Some(&mut self.location),
            "startDate" => Some(&mut self.start_date),
            "endDate" => Some(&mut self.end_date),
            _ => None,
        }
    }
}

impl Entry for ProjectEntry {
    const ID_PREFIX: &'static str = "proj";

    fn id(&self) -> &str {
        &self.id
    }

    fn with_id(id: String) -> Self {
        ProjectEntry {
            id,
            ..Default::default()
        }
    }

    fn field(&self, name: &str) -> Option<&String> {
        match name {
            "name" => Some(&self.name),
            "date" => Some(&self.date),
            "description" => Some(&self.description),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "name" => Some(&mut self.name),
            "date" => Some(&mut self.date),
            "description" => Some(&mut self.description),
            _ => None,
        }
    }
}

impl Entry for CustomSection {
    const ID_PREFIX: &'static str = "custom";

    fn id(&self) -> &str {
        &self.id
    }

    fn with_id(id: String) -> Self {
        CustomSection {
            id,
            ..Default::default()
        }
    }

    fn field(&self, name: &str) -> Option<&String> {
        match name {
            "title" => Some(&self.title),
            "content" => Some(&self.content),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "title" => Some(&mut self.title),
            "content" => Some(&mut self.content),
            _ => None,
        }
    }
}

/// Fresh opaque id. UUIDv4 makes reuse practically impossible.
fn new_entry_id<E: Entry>() -> String {
    format!("{}-{}", E::ID_PREFIX, Uuid::new_v4().simple())
}

fn find_entry<'a, E: Entry>(
    list: &'a [E],
    section: SectionId,
    id: &str,
) -> Result<&'a E, MutationError> {
    list.iter()
        .find(|e| e.id() == id)
        .ok_or_else(|| MutationError::EntryNotFound {
            section,
            id: id.to_string(),
        })
}

fn find_entry_mut<'a, E: Entry>(
    list: &'a mut [E],
    section: SectionId,
    id: &str,
) -> Result<&'a mut E, MutationError> {
    list.iter_mut()
        .find(|e| e.id() == id)
        .ok_or_else(|| MutationError::EntryNotFound {
            section,
            id: id.to_string(),
        })
}

fn unknown_field(section: SectionId, field: &str) -> MutationError {
    MutationError::UnknownField {
        section,
        field: field.to_string(),
    }
}

fn skill_index(skills: &[String], id: &str) -> Option<usize> {
    id.parse::<usize>().ok().filter(|&i| i < skills.len())
}

fn add<E: Entry>(list: &mut Vec<E>) -> String {
    let id = new_entry_id::<E>();
    list.push(E::with_id(id.clone()));
    id
}

fn remove<E: Entry>(list: &mut Vec<E>, id: &str) -> bool {
    let before = list.len();
    list.retain(|e| e.id() != id);
    list.len() != before
}

// ────────────────────────────────────────────────────────────────────────────
// Public operations
// ────────────────────────────────────────────────────────────────────────────

impl ResumeData {
    /// Reads one text field, addressed the same way as `update_field`.
    pub fn read_field(
        &self,
        section: SectionId,
        id: Option<&str>,
        field: &str,
    ) -> Result<&str, MutationError> {
        let value = match (section, id) {
            (SectionId::Profile | SectionId::Summary, Some(_)) => {
                return Err(MutationError::UnexpectedEntryId(section))
            }
            (SectionId::Profile, None) => match field {
                "name" => &self.profile.name,
                "title" => &self.profile.title,
                "phone" => &self.profile.phone,
                "email" => &self.profile.email,
                "address" => &self.profile.address,
                "photoUrl" => &self.profile.photo_url,
                _ => return Err(unknown_field(section, field)),
            },
            (SectionId::Summary, None) => match field {
                SUMMARY_FIELD => &self.summary,
                _ => return Err(unknown_field(section, field)),
            },
            (_, None) => return Err(MutationError::MissingEntryId(section)),
            (SectionId::Experience, Some(id)) => find_entry(&self.experience, section, id)?
                .field(field)
                .ok_or_else(|| unknown_field(section, field))?,
            (SectionId::Education, Some(id)) => find_entry(&self.education, section, id)?
                .field(field)
                .ok_or_else(|| unknown_field(section, field))?,
            (SectionId::Projects, Some(id)) => find_entry(&self.projects, section, id)?
                .field(field)
                .ok_or_else(|| unknown_field(section, field))?,
            (SectionId::CustomSections, Some(id)) => {
                find_entry(&self.custom_sections, section, id)?
                    .field(field)
                    .ok_or_else(|| unknown_field(section, field))?
            }
            (SectionId::Skills, Some(id)) => {
                if field != SKILL_FIELD {
                    return Err(unknown_field(section, field));
                }
                let index =
                    skill_index(&self.skills, id).ok_or_else(|| MutationError::EntryNotFound {
                        section,
                        id: id.to_string(),
                    })?;
                &self.skills[index]
            }
        };
        Ok(value.as_str())
    }

    /// Replaces one scalar field. `id` is required for list sections and must be
    /// omitted for profile and summary.
    pub fn update_field(
        &mut self,
        section: SectionId,
        id: Option<&str>,
        field: &str,
        value: String,
    ) -> Result<(), MutationError> {
        let slot: &mut String = match (section, id) {
            (SectionId::Profile | SectionId::Summary, Some(_)) => {
                return Err(MutationError::UnexpectedEntryId(section))
            }
            (SectionId::Profile, None) => match field {
                "name" => &mut self.profile.name,
                "title" => &mut self.profile.title,
                "phone" => &mut self.profile.phone,
                "email" => &mut self.profile.email,
                "address" => &mut self.profile.address,
                "photoUrl" => &mut self.profile.photo_url,
                _ => return Err(unknown_field(section, field)),
            },
            (SectionId::Summary, None) => match field {
                SUMMARY_FIELD => &mut self.summary,
                _ => return Err(unknown_field(section, field)),
            },
            (_, None) => return Err(MutationError::MissingEntryId(section)),
            (SectionId::Experience, Some(id)) => find_entry_mut(&mut self.experience, section, id)?
                .field_mut(field)
                .ok_or_else(|| unknown_field(section, field))?,
            (SectionId::Education, Some(id)) => find_entry_mut(&mut self.education, section, id)?
                .field_mut(field)
                .ok_or_else(|| unknown_field(section, field))?,
            (SectionId::Projects, Some(id)) => find_entry_mut(&mut self.projects, section, id)?
                .field_mut(field)
                .ok_or_else(|| unknown_field(section, field))?,
            (SectionId::CustomSections, Some(id)) => {
                find_entry_mut(&mut self.custom_sections, section, id)?
                    .field_mut(field)
                    .ok_or_else(|| unknown_field(section, field))?
            }
            (SectionId::Skills, Some(id)) => {
                if field != SKILL_FIELD {
                    return Err(unknown_field(section, field));
                }
                let index =
                    skill_index(&self.skills, id).ok_or_else(|| MutationError::EntryNotFound {
                        section,
                        id: id.to_string(),
                    })?;
                &mut self.skills[index]
            }
        };
        *slot = value;
        Ok(())
    }

    /// Appends a blank entry and returns its id.
    pub fn add_entry(&mut self, section: SectionId) -> Result<String, MutationError> {
        let id = match section {
            SectionId::Experience => add(&mut self.experience),
            SectionId::Education => add(&mut self.education),
            SectionId::Projects => add(&mut self.projects),
            SectionId::CustomSections => add(&mut self.custom_sections),
            SectionId::Skills => {
                self.skills.push(String::new());
                (self.skills.len() - 1).to_string()
            }
            SectionId::Profile | SectionId::Summary => {
                return Err(MutationError::NotAList(section))
            }
        };
        Ok(id)
    }

    /// Removes the entry with `id`. Returns false (and changes nothing) when absent.
    pub fn remove_entry(&mut self, section: SectionId, id: &str) -> Result<bool, MutationError> {
        let removed = match section {
            SectionId::Experience => remove(&mut self.experience, id),
            SectionId::Education => remove(&mut self.education, id),
            SectionId::Projects => remove(&mut self.projects, id),
            SectionId::CustomSections => remove(&mut self.custom_sections, id),
            SectionId::Skills => match skill_index(&self.skills, id) {
                Some(index) => {
                    self.skills.remove(index);
                    true
                }
                None => false,
            },
            SectionId::Profile | SectionId::Summary => {
                return Err(MutationError::NotAList(section))
            }
        };
        Ok(removed)
    }

    pub fn clear_all(&mut self, section: SectionId) -> Result<(), MutationError> {
        match section {
            SectionId::Experience => self.experience.clear(),
            SectionId::Education => self.education.clear(),
            SectionId::Projects => self.projects.clear(),
            SectionId::CustomSections => self.custom_sections.clear(),
            SectionId::Skills => self.skills.clear(),
            SectionId::Profile | SectionId::Summary => {
                return Err(MutationError::NotAList(section))
            }
        }
        Ok(())
    }

    pub fn reorder_sections(&mut self, from: usize, to: usize) -> Result<(), MutationError> {
        self.sections.move_section(from, to)?;
        Ok(())
    }

    /// Flips the section's settings flag and returns the new value.
    pub fn toggle_visibility(&mut self, section: SectionId) -> bool {
        let flag = self.settings.flag_mut(section);
        *flag = !*flag;
        *flag
    }
}
