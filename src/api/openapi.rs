use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::modules::auth::adapter::incoming::web::routes::{
    LoginAdminRequestDto, LoginAdminResponseBody,
};
// Projects
use crate::modules::project::adapter::incoming::web::routes::{
    EditorActionRequest, EditorMediaResponse, EditorView, SubmitProjectRequest,
};
use crate::modules::project::application::domain::{CaseStudy, NewProject, Project};
use crate::modules::project::application::editor::{
    EditorAction, EditorDraft, MediaSlot, ProjectForm,
};
use crate::modules::project::application::projects_resource::ProjectsSnapshot;
// Media
use crate::modules::multimedia::adapter::incoming::web::routes::{
    DeleteMediaRequest, DeleteMediaResponse, ResumeUrlResponse, UploadMediaResponse,
};
use crate::modules::multimedia::application::domain::Bucket;
// Contact
use crate::modules::contact::adapter::incoming::web::routes::{
    SubmitContactRequest, SubmitContactResponse,
};
// Analytics
use crate::modules::analytics::adapter::incoming::web::routes::TrackingAccepted;
use crate::modules::analytics::application::domain::AnalyticsStats;
// Resume
use crate::modules::resume::adapter::incoming::web::routes::ResumeEditsRequest;
use crate::modules::resume::application::domain::{
    Certification, EducationEntry, ExperienceEntry, Language, PersonalInfo, Proficiency,
    ResumeDocument, SkillCategory,
};
use crate::modules::resume::application::editor::{
    CertificationField, EducationField, ExperienceField, LanguageField, PersonalInfoField,
    ResumeEdit, SkillCategoryField,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folio API",
        version = "1.0.0",
        description = "Content backend for a personal portfolio: projects, media, resume, contact and analytics",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::modules::auth::adapter::incoming::web::routes::login_admin_handler,

        // Project endpoints
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_featured_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_by_slug_handler,
        crate::modules::project::adapter::incoming::web::routes::get_admin_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_editor_handler,
        crate::modules::project::adapter::incoming::web::routes::submit_project_editor_handler,
        crate::modules::project::adapter::incoming::web::routes::apply_editor_action_handler,
        crate::modules::project::adapter::incoming::web::routes::upload_editor_media_handler,
        crate::modules::project::adapter::incoming::web::routes::delete_project_handler,

        // Media endpoints
        crate::modules::multimedia::adapter::incoming::web::routes::upload_media_handler,
        crate::modules::multimedia::adapter::incoming::web::routes::delete_media_handler,
        crate::modules::multimedia::adapter::incoming::web::routes::upload_resume_file_handler,
        crate::modules::multimedia::adapter::incoming::web::routes::get_resume_url_handler,

        // Contact endpoints
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler,

        // Analytics endpoints
        crate::modules::analytics::adapter::incoming::web::routes::track_resume_download_handler,
        crate::modules::analytics::adapter::incoming::web::routes::track_project_view_handler,
        crate::modules::analytics::adapter::incoming::web::routes::get_analytics_stats_handler,
        crate::modules::analytics::adapter::incoming::web::routes::download_resume_handler,

        // Resume endpoints
        crate::modules::resume::adapter::incoming::web::routes::get_resume_handler,
        crate::modules::resume::adapter::incoming::web::routes::get_resume_draft_handler,
        crate::modules::resume::adapter::incoming::web::routes::save_resume_handler,
        crate::modules::resume::adapter::incoming::web::routes::apply_resume_edits_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<Project>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            LoginAdminRequestDto,
            LoginAdminResponseBody,

            // Projects
            Project,
            NewProject,
            CaseStudy,
            ProjectsSnapshot,
            ProjectForm,
            EditorDraft,
            EditorView,
            SubmitProjectRequest,
            EditorAction,
            EditorActionRequest,
            EditorMediaResponse,
            MediaSlot,

            // Media
            Bucket,
            UploadMediaResponse,
            DeleteMediaRequest,
            DeleteMediaResponse,
            ResumeUrlResponse,

            // Contact
            SubmitContactRequest,
            SubmitContactResponse,

            // Analytics
            TrackingAccepted,
            AnalyticsStats,

            // Resume
            ResumeDocument,
            PersonalInfo,
            ExperienceEntry,
            EducationEntry,
            SkillCategory,
            Certification,
            Language,
            Proficiency,
            ResumeEdit,
            ResumeEditsRequest,
            PersonalInfoField,
            ExperienceField,
            EducationField,
            SkillCategoryField,
            CertificationField,
            LanguageField,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "admin", description = "Admin-only endpoints, bearer token required"),
        (name = "projects", description = "Public project listing"),
        (name = "resume", description = "Resume document and file"),
        (name = "contact", description = "Contact form"),
        (name = "analytics", description = "Resume download and project view tracking"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from POST /api/admin/login"))
                        .build(),
                ),
            )
        }
    }
}
