pub mod document;

pub use document::{
    Certification, EducationEntry, ExperienceEntry, Language, PersonalInfo, Proficiency,
    ResumeDocument, SkillCategory,
};
