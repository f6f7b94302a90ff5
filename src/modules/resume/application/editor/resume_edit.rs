// src/modules/resume/application/editor/resume_edit.rs

use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::resume::application::domain::Proficiency;

//
// ──────────────────────────────────────────────────────────
// Field updates, one enum per entry type
// ──────────────────────────────────────────────────────────
// Serialized as a single-key object, e.g. `{ "job_title": "Designer" }`.
//

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PersonalInfoField {
    Name(String),
    Title(String),
    Email(String),
    Phone(String),
    Location(String),
    Website(String),
    Linkedin(String),
    Portfolio(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    JobTitle(String),
    Company(String),
    Location(String),
    StartDate(String),
    EndDate(String),
    IsCurrent(bool),
    Responsibilities(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Degree(String),
    FieldOfStudy(String),
    Institution(String),
    Location(String),
    StartDate(String),
    EndDate(String),
    Gpa(Option<String>),
    Achievements(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategoryField {
    Category(String),
    Skills(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CertificationField {
    Name(String),
    Issuer(String),
    Date(String),
    CredentialId(Option<String>),
    Url(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LanguageField {
    Name(String),
    Proficiency(Proficiency),
}

//
// ──────────────────────────────────────────────────────────
// Edit commands
// ──────────────────────────────────────────────────────────
// `{ "op": "update_experience", "index": 0, "field": { "company": "Acme" } }`
//

/// One local edit of the resume draft. Indexes address the current order of
/// the targeted list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ResumeEdit {
    SetPersonalInfo { field: PersonalInfoField },
    SetSummary { summary: String },

    AddExperience,
    UpdateExperience { index: usize, field: ExperienceField },
    RemoveExperience { index: usize },
    AddResponsibility { experience: usize },
    UpdateResponsibility { experience: usize, index: usize, value: String },
    RemoveResponsibility { experience: usize, index: usize },

    AddEducation,
    UpdateEducation { index: usize, field: EducationField },
    RemoveEducation { index: usize },
    AddAchievement { education: usize },
    UpdateAchievement { education: usize, index: usize, value: String },
    RemoveAchievement { education: usize, index: usize },

    AddSkillCategory,
    UpdateSkillCategory { index: usize, field: SkillCategoryField },
    RemoveSkillCategory { index: usize },
    AddSkill { category: usize },
    UpdateSkill { category: usize, index: usize, value: String },
    RemoveSkill { category: usize, index: usize },

    AddCertification,
    UpdateCertification { index: usize, field: CertificationField },
    RemoveCertification { index: usize },

    AddLanguage,
    UpdateLanguage { index: usize, field: LanguageField },
    RemoveLanguage { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_unit_and_struct_commands() {
        let edits: Vec<ResumeEdit> = serde_json::from_value(json!([
            { "op": "add_experience" },
            { "op": "update_experience", "index": 0, "field": { "job_title": "Art Director" } },
            { "op": "update_language", "index": 1, "field": { "proficiency": "Fluent" } },
            { "op": "update_education", "index": 0, "field": { "gpa": null } }
        ]))
        .unwrap();

        assert_eq!(
            edits,
            vec![
                ResumeEdit::AddExperience,
                ResumeEdit::UpdateExperience {
                    index: 0,
                    field: ExperienceField::JobTitle("Art Director".to_string()),
                },
                ResumeEdit::UpdateLanguage {
                    index: 1,
                    field: LanguageField::Proficiency(Proficiency::Fluent),
                },
                ResumeEdit::UpdateEducation {
                    index: 0,
                    field: EducationField::Gpa(None),
                },
            ]
        );
    }

    #[test]
    fn test_unknown_op_is_rejected() {
        assert!(serde_json::from_value::<ResumeEdit>(json!({ "op": "rename_resume" })).is_err());
    }
}
