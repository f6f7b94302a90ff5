// src/modules/resume/application/domain/document.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Sub-entity ids are UUID v4. Records written before that carried short
/// random strings; those (and missing ids) are replaced with fresh ids on read.
fn entry_id<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| Uuid::parse_str(&s).ok())
        .unwrap_or_else(Uuid::new_v4))
}

fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// The single resume record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ResumeDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillCategory>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub portfolio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "entry_id", default = "new_id")]
    pub id: Uuid,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

impl ExperienceEntry {
    /// New entries start with one empty responsibility line.
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            job_title: String::new(),
            company: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            is_current: false,
            responsibilities: vec![String::new()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EducationEntry {
    #[serde(deserialize_with = "entry_id", default = "new_id")]
    pub id: Uuid,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field_of_study: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl EducationEntry {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            degree: String::new(),
            field_of_study: String::new(),
            institution: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            gpa: None,
            achievements: vec![String::new()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SkillCategory {
    #[serde(deserialize_with = "entry_id", default = "new_id")]
    pub id: Uuid,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl SkillCategory {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            category: String::new(),
            skills: vec![String::new()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Certification {
    #[serde(deserialize_with = "entry_id", default = "new_id")]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Certification {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            issuer: String::new(),
            date: String::new(),
            credential_id: None,
            url: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Proficiency {
    Native,
    Fluent,
    Advanced,
    #[default]
    Intermediate,
    Basic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Language {
    #[serde(deserialize_with = "entry_id", default = "new_id")]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub proficiency: Proficiency,
}

impl Language {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            proficiency: Proficiency::default(),
        }
    }
}
