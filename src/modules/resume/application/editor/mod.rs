mod resume_edit;
mod resume_editor;

pub use resume_edit::{
    CertificationField, EducationField, ExperienceField, LanguageField, PersonalInfoField,
    ResumeEdit, SkillCategoryField,
};
pub use resume_editor::{BatchEditError, ResumeEditError, ResumeEditor};
