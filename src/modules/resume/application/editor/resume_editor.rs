// src/modules/resume/application/editor/resume_editor.rs

use thiserror::Error;
use uuid::Uuid;

use super::resume_edit::{
    CertificationField, EducationField, ExperienceField, LanguageField, PersonalInfoField,
    ResumeEdit, SkillCategoryField,
};
use crate::modules::resume::application::domain::{
    Certification, EducationEntry, ExperienceEntry, Language, ResumeDocument, SkillCategory,
};
use crate::modules::resume::application::ports::incoming::use_cases::{
    GetResumeUseCase, LoadResumeError, SaveResumeError, SaveResumeUseCase,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResumeEditError {
    #[error("{list} has no entry at index {index}")]
    IndexOutOfRange { list: &'static str, index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("edit #{position} failed: {source}")]
pub struct BatchEditError {
    pub position: usize,
    pub source: ResumeEditError,
}

fn entry_mut<'a, T>(
    list: &'a mut [T],
    index: usize,
    name: &'static str,
) -> Result<&'a mut T, ResumeEditError> {
    list.get_mut(index)
        .ok_or(ResumeEditError::IndexOutOfRange { list: name, index })
}

fn remove_at<T>(list: &mut Vec<T>, index: usize, name: &'static str) -> Result<(), ResumeEditError> {
    if index >= list.len() {
        return Err(ResumeEditError::IndexOutOfRange { list: name, index });
    }
    list.remove(index);
    Ok(())
}

/// Local draft of the resume document.
///
/// Every edit is synchronous and touches exactly one list (or field); nothing
/// reaches the content store until [`ResumeEditor::save`]. An edit addressing
/// a missing index fails and leaves the draft unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeEditor {
    draft: ResumeDocument,
}

impl ResumeEditor {
    pub fn new(document: Option<ResumeDocument>) -> Self {
        Self {
            draft: document.unwrap_or_default(),
        }
    }

    /// Seed the draft from the stored record, or an empty document when none
    /// exists. A failed read is returned as an error.
    pub async fn load(get: &dyn GetResumeUseCase) -> Result<Self, LoadResumeError> {
        Ok(Self::new(get.load_for_edit().await?))
    }

    pub fn draft(&self) -> &ResumeDocument {
        &self.draft
    }

    pub fn into_draft(self) -> ResumeDocument {
        self.draft
    }

    /// Upsert the whole draft in one call.
    pub async fn save(self, save: &dyn SaveResumeUseCase) -> Result<ResumeDocument, SaveResumeError> {
        save.execute(self.draft).await
    }

    //
    // ──────────────────────────────────────────────────────────
    // Personal info / summary
    // ──────────────────────────────────────────────────────────
    //

    pub fn set_personal_info(&mut self, field: PersonalInfoField) {
        let info = &mut self.draft.personal_info;
        match field {
            PersonalInfoField::Name(v) => info.name = v,
            PersonalInfoField::Title(v) => info.title = v,
            PersonalInfoField::Email(v) => info.email = v,
            PersonalInfoField::Phone(v) => info.phone = v,
            PersonalInfoField::Location(v) => info.location = v,
            PersonalInfoField::Website(v) => info.website = v,
            PersonalInfoField::Linkedin(v) => info.linkedin = v,
            PersonalInfoField::Portfolio(v) => info.portfolio = v,
        }
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.draft.summary = summary.into();
    }

    //
    // ──────────────────────────────────────────────────────────
    // Experience
    // ──────────────────────────────────────────────────────────
    //

    pub fn add_experience(&mut self) -> Uuid {
        let entry = ExperienceEntry::blank();
        let id = entry.id;
        self.draft.experience.push(entry);
        id
    }

    pub fn update_experience(&mut self, index: usize, field: ExperienceField) -> Result<(), ResumeEditError> {
        let entry = entry_mut(&mut self.draft.experience, index, "experience")?;
        match field {
            ExperienceField::JobTitle(v) => entry.job_title = v,
            ExperienceField::Company(v) => entry.company = v,
            ExperienceField::Location(v) => entry.location = v,
            ExperienceField::StartDate(v) => entry.start_date = v,
            ExperienceField::EndDate(v) => entry.end_date = v,
            ExperienceField::IsCurrent(v) => entry.is_current = v,
            ExperienceField::Responsibilities(v) => entry.responsibilities = v,
        }
        Ok(())
    }

    pub fn remove_experience(&mut self, index: usize) -> Result<(), ResumeEditError> {
        remove_at(&mut self.draft.experience, index, "experience")
    }

    pub fn add_responsibility(&mut self, experience: usize) -> Result<(), ResumeEditError> {
        entry_mut(&mut self.draft.experience, experience, "experience")?
            .responsibilities
            .push(String::new());
        Ok(())
    }

    pub fn update_responsibility(
        &mut self,
        experience: usize,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), ResumeEditError> {
        let entry = entry_mut(&mut self.draft.experience, experience, "experience")?;
        *entry_mut(&mut entry.responsibilities, index, "responsibilities")? = value.into();
        Ok(())
    }

    pub fn remove_responsibility(&mut self, experience: usize, index: usize) -> Result<(), ResumeEditError> {
        let entry = entry_mut(&mut self.draft.experience, experience, "experience")?;
        remove_at(&mut entry.responsibilities, index, "responsibilities")
    }

    //
    // ──────────────────────────────────────────────────────────
    // Education
    // ──────────────────────────────────────────────────────────
    //

    pub fn add_education(&mut self) -> Uuid {
        let entry = EducationEntry::blank();
        let id = entry.id;
        self.draft.education.push(entry);
        id
    }

    pub fn update_education(&mut self, index: usize, field: EducationField) -> Result<(), ResumeEditError> {
        let entry = entry_mut(&mut self.draft.education, index, "education")?;
        match field {
            EducationField::Degree(v) => entry.degree = v,
            EducationField::FieldOfStudy(v) => entry.field_of_study = v,
            EducationField::Institution(v) => entry.institution = v,
            EducationField::Location(v) => entry.location = v,
            EducationField::StartDate(v) => entry.start_date = v,
            EducationField::EndDate(v) => entry.end_date = v,
            EducationField::Gpa(v) => entry.gpa = v,
            EducationField::Achievements(v) => entry.achievements = v,
        }
        Ok(())
    }

    pub fn remove_education(&mut self, index: usize) -> Result<(), ResumeEditError> {
        remove_at(&mut self.draft.education, index, "education")
    }

    pub fn add_achievement(&mut self, education: usize) -> Result<(), ResumeEditError> {
        entry_mut(&mut self.draft.education, education, "education")?
            .achievements
            .push(String::new());
        Ok(())
    }

    pub fn update_achievement(
        &mut self,
        education: usize,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), ResumeEditError> {
        let entry = entry_mut(&mut self.draft.education, education, "education")?;
        *entry_mut(&mut entry.achievements, index, "achievements")? = value.into();
        Ok(())
    }

    pub fn remove_achievement(&mut self, education: usize, index: usize) -> Result<(), ResumeEditError> {
        let entry = entry_mut(&mut self.draft.education, education, "education")?;
        remove_at(&mut entry.achievements, index, "achievements")
    }

    //
    // ──────────────────────────────────────────────────────────
    // Skills
    // ──────────────────────────────────────────────────────────
    //

    pub fn add_skill_category(&mut self) -> Uuid {
        let entry = SkillCategory::blank();
        let id = entry.id;
        self.draft.skills.push(entry);
        id
    }

    pub fn update_skill_category(
        &mut self,
        index: usize,
        field: SkillCategoryField,
    ) -> Result<(), ResumeEditError> {
        let entry = entry_mut(&mut self.draft.skills, index, "skills")?;
        match field {
            SkillCategoryField::Category(v) => entry.category = v,
            SkillCategoryField::Skills(v) => entry.skills = v,
        }
        Ok(())
    }

    pub fn remove_skill_category(&mut self, index: usize) -> Result<(), ResumeEditError> {
        remove_at(&mut self.draft.skills, index, "skills")
    }

    pub fn add_skill(&mut self, category: usize) -> Result<(), ResumeEditError> {
        entry_mut(&mut self.draft.skills, category, "skills")?
            .skills
            .push(String::new());
        Ok(())
    }

    pub fn update_skill(
        &mut self,
        category: usize,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), ResumeEditError> {
        let entry = entry_mut(&mut self.draft.skills, category, "skills")?;
        *entry_mut(&mut entry.skills, index, "skill names")? = value.into();
        Ok(())
    }

    pub fn remove_skill(&mut self, category: usize, index: usize) -> Result<(), ResumeEditError> {
        let entry = entry_mut(&mut self.draft.skills, category, "skills")?;
        remove_at(&mut entry.skills, index, "skill names")
    }

    //
    // ──────────────────────────────────────────────────────────
    // Certifications / languages
    // ──────────────────────────────────────────────────────────
    //

    pub fn add_certification(&mut self) -> Uuid {
        let entry = Certification::blank();
        let id = entry.id;
        self.draft.certifications.push(entry);
        id
    }

    pub fn update_certification(
        &mut self,
        index: usize,
        field: CertificationField,
    ) -> Result<(), ResumeEditError> {
        let entry = entry_mut(&mut self.draft.certifications, index, "certifications")?;
        match field {
            CertificationField::Name(v) => entry.name = v,
            CertificationField::Issuer(v) => entry.issuer = v,
            CertificationField::Date(v) => entry.date = v,
            CertificationField::CredentialId(v) => entry.credential_id = v,
            CertificationField::Url(v) => entry.url = v,
        }
        Ok(())
    }

    pub fn remove_certification(&mut self, index: usize) -> Result<(), ResumeEditError> {
        remove_at(&mut self.draft.certifications, index, "certifications")
    }

    pub fn add_language(&mut self) -> Uuid {
        let entry = Language::blank();
        let id = entry.id;
        self.draft.languages.push(entry);
        id
    }

    pub fn update_language(&mut self, index: usize, field: LanguageField) -> Result<(), ResumeEditError> {
        let entry = entry_mut(&mut self.draft.languages, index, "languages")?;
        match field {
            LanguageField::Name(v) => entry.name = v,
            LanguageField::Proficiency(v) => entry.proficiency = v,
        }
        Ok(())
    }

    pub fn remove_language(&mut self, index: usize) -> Result<(), ResumeEditError> {
        remove_at(&mut self.draft.languages, index, "languages")
    }

    //
    // ──────────────────────────────────────────────────────────
    // Commands
    // ──────────────────────────────────────────────────────────
    //

    pub fn apply(&mut self, edit: ResumeEdit) -> Result<(), ResumeEditError> {
        match edit {
            ResumeEdit::SetPersonalInfo { field } => self.set_personal_info(field),
            ResumeEdit::SetSummary { summary } => self.set_summary(summary),

            ResumeEdit::AddExperience => {
                self.add_experience();
            }
            ResumeEdit::UpdateExperience { index, field } => self.update_experience(index, field)?,
            ResumeEdit::RemoveExperience { index } => self.remove_experience(index)?,
            ResumeEdit::AddResponsibility { experience } => self.add_responsibility(experience)?,
            ResumeEdit::UpdateResponsibility { experience, index, value } => {
                self.update_responsibility(experience, index, value)?
            }
            ResumeEdit::RemoveResponsibility { experience, index } => {
                self.remove_responsibility(experience, index)?
            }

            ResumeEdit::AddEducation => {
                self.add_education();
            }
            ResumeEdit::UpdateEducation { index, field } => self.update_education(index, field)?,
            ResumeEdit::RemoveEducation { index } => self.remove_education(index)?,
            ResumeEdit::AddAchievement { education } => self.add_achievement(education)?,
            ResumeEdit::UpdateAchievement { education, index, value } => {
                self.update_achievement(education, index, value)?
            }
            ResumeEdit::RemoveAchievement { education, index } => {
                self.remove_achievement(education, index)?
            }

            ResumeEdit::AddSkillCategory => {
                self.add_skill_category();
            }
            ResumeEdit::UpdateSkillCategory { index, field } => {
                self.update_skill_category(index, field)?
            }
            ResumeEdit::RemoveSkillCategory { index } => self.remove_skill_category(index)?,
            ResumeEdit::AddSkill { category } => self.add_skill(category)?,
            ResumeEdit::UpdateSkill { category, index, value } => {
                self.update_skill(category, index, value)?
            }
            ResumeEdit::RemoveSkill { category, index } => self.remove_skill(category, index)?,

            ResumeEdit::AddCertification => {
                self.add_certification();
            }
            ResumeEdit::UpdateCertification { index, field } => {
                self.update_certification(index, field)?
            }
            ResumeEdit::RemoveCertification { index } => self.remove_certification(index)?,

            ResumeEdit::AddLanguage => {
                self.add_language();
            }
            ResumeEdit::UpdateLanguage { index, field } => self.update_language(index, field)?,
            ResumeEdit::RemoveLanguage { index } => self.remove_language(index)?,
        }
        Ok(())
    }

    /// Apply a batch in order. All or nothing: on the first failure the draft
    /// is left as it was before the batch.
    pub fn apply_all(&mut self, edits: Vec<ResumeEdit>) -> Result<(), BatchEditError> {
        let mut next = self.clone();
        for (position, edit) in edits.into_iter().enumerate() {
            next.apply(edit)
                .map_err(|source| BatchEditError { position, source })?;
        }
        *self = next;
        Ok(())
    }
}
