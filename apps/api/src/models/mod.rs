pub mod resume;
pub mod section;
pub mod template;

pub use resume::{
    CustomSection, EducationEntry, ExperienceEntry, Profile, ProjectEntry, ResumeData,
};
pub use section::{Language, SectionId, SectionOrder, Settings};
pub use template::{AccentColor, Template};
