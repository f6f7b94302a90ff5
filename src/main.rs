pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::modules::analytics::adapter::outgoing::{AnalyticsStoreLocal, AnalyticsStoreRemote};
use crate::modules::analytics::application::analytics_use_cases::AnalyticsUseCases;
use crate::modules::analytics::application::ports::outgoing::AnalyticsStore;
use crate::modules::analytics::application::service::{
    GetAnalyticsStatsService, TrackProjectViewService, TrackResumeDownloadService,
};
use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::adapter::outgoing::security::Argon2Hasher;
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::domain::AdminCredentials;
use crate::modules::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::modules::auth::application::use_cases::LoginAdminService;
use crate::modules::contact::adapter::outgoing::{ContactStoreDisabled, ContactStoreRemote};
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::ports::outgoing::ContactStore;
use crate::modules::contact::application::service::SubmitContactService;
use crate::modules::multimedia::adapter::outgoing::{MediaStorageDisabled, MediaStorageRemote};
use crate::modules::multimedia::application::domain::policies::UploadPolicy;
use crate::modules::multimedia::application::media_use_cases::MultimediaUseCases;
use crate::modules::multimedia::application::ports::outgoing::MediaStorage;
use crate::modules::multimedia::application::services::{
    DeleteMediaService, GetResumeUrlService, UploadMediaService, UploadResumeFileService,
};
use crate::modules::project::adapter::outgoing::{ProjectStoreDisabled, ProjectStoreRemote};
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectRepository};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::projects_resource::ProjectsResource;
use crate::modules::project::application::service::{
    CreateProjectService, DeleteProjectService, GetFeaturedProjectsService,
    GetProjectBySlugService, GetProjectsService, UpdateProjectService,
};
use crate::modules::resume::adapter::outgoing::{ResumeStoreDisabled, ResumeStoreRemote};
use crate::modules::resume::application::ports::outgoing::ResumeStore;
use crate::modules::resume::application::resume_use_cases::ResumeUseCases;
use crate::modules::resume::application::service::{GetResumeService, SaveResumeService};
use crate::shared::api::{custom_json_config, upload_payload_config};
use crate::shared::backend::{Backend, BackendConfig, BackendMode, LocalStore};
use crate::shared::config::AppConfig;

use actix_web::{web, App, HttpServer};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub project: ProjectUseCases,
    /// Project list shared by the admin list view and the editor.
    pub projects: Arc<ProjectsResource>,
    pub media: MultimediaUseCases,
    pub contact: ContactUseCases,
    pub analytics: AnalyticsUseCases,
    pub resume: ResumeUseCases,
    pub backend_mode: BackendMode,
    pub resume_file_path: PathBuf,
}

fn project_use_cases<S>(store: S) -> ProjectUseCases
where
    S: ProjectQuery + ProjectRepository + Clone + 'static,
{
    ProjectUseCases {
        get_list: Arc::new(GetProjectsService::new(store.clone())),
        get_featured: Arc::new(GetFeaturedProjectsService::new(store.clone())),
        get_by_slug: Arc::new(GetProjectBySlugService::new(store.clone())),
        create: Arc::new(CreateProjectService::new(store.clone())),
        update: Arc::new(UpdateProjectService::new(store.clone())),
        delete: Arc::new(DeleteProjectService::new(store)),
    }
}

fn media_use_cases<S>(storage: S, policy: UploadPolicy, resume_object: &str) -> MultimediaUseCases
where
    S: MediaStorage + Clone + 'static,
{
    MultimediaUseCases {
        upload: Arc::new(UploadMediaService::new(storage.clone(), policy.clone())),
        delete: Arc::new(DeleteMediaService::new(storage.clone())),
        upload_resume: Arc::new(UploadResumeFileService::new(
            storage.clone(),
            policy.clone(),
            resume_object,
        )),
        resume_url: Arc::new(GetResumeUrlService::new(storage, resume_object)),
        policy,
    }
}

fn contact_use_cases<S>(store: S) -> ContactUseCases
where
    S: ContactStore + 'static,
{
    ContactUseCases {
        submit: Arc::new(SubmitContactService::new(store)),
    }
}

fn analytics_use_cases<S>(store: S) -> AnalyticsUseCases
where
    S: AnalyticsStore + Clone + 'static,
{
    AnalyticsUseCases {
        track_resume_download: Arc::new(TrackResumeDownloadService::new(store.clone())),
        track_project_view: Arc::new(TrackProjectViewService::new(store.clone())),
        stats: Arc::new(GetAnalyticsStatsService::new(store)),
    }
}

fn resume_use_cases<S>(store: S) -> ResumeUseCases
where
    S: ResumeStore + Clone + 'static,
{
    ResumeUseCases {
        get: Arc::new(GetResumeService::new(store.clone())),
        save: Arc::new(SaveResumeService::new(store)),
    }
}

/// Print an Argon2 PHC string for `ADMIN_PASSWORD_HASH`. The password comes
/// from the next argument or, if absent, the first line of stdin.
#[cfg(not(tarpaulin_include))]
fn hash_password(password: Option<String>) -> io::Result<()> {
    let password = match password {
        Some(p) => p,
        None => {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };
    if password.trim().is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "password is empty"));
    }

    let hasher = Argon2Hasher::from_env()?;
    let hash = actix_web::rt::System::new()
        .block_on(async move { hasher.hash_password(&password).await })
        .map_err(io::Error::other)?;
    println!("{hash}");
    Ok(())
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()?;
    let server_url = config.bind_address();

    // Content store: remote when configured, local fallback otherwise
    let backend = Backend::select(
        BackendConfig::from_env().as_ref(),
        LocalStore::new(&config.local_storage_path),
    )
    .map_err(io::Error::other)?;
    let backend_mode = backend.mode();

    let upload_policy = UploadPolicy::from_env();
    let max_upload_bytes = upload_policy.max_file_size_bytes;
    let resume_object = config.resume_object_name.as_str();

    let (project, media, contact, analytics, resume) = match backend {
        Backend::Configured(client) => (
            project_use_cases(ProjectStoreRemote::new(client.clone())),
            media_use_cases(
                MediaStorageRemote::new(client.clone()),
                upload_policy,
                resume_object,
            ),
            contact_use_cases(ContactStoreRemote::new(client.clone())),
            analytics_use_cases(AnalyticsStoreRemote::new(client.clone())),
            resume_use_cases(ResumeStoreRemote::new(client)),
        ),
        Backend::Disabled(local) => (
            project_use_cases(ProjectStoreDisabled),
            media_use_cases(MediaStorageDisabled, upload_policy, resume_object),
            contact_use_cases(ContactStoreDisabled),
            analytics_use_cases(AnalyticsStoreLocal::new(local)),
            resume_use_cases(ResumeStoreDisabled),
        ),
    };

    // Admin auth
    let jwt_service = JwtTokenService::new(JwtConfig::from_env()?);
    let admin_credentials = AdminCredentials::from_env();
    if admin_credentials.is_none() {
        tracing::warn!("ADMIN_EMAIL or ADMIN_PASSWORD_HASH not set: admin login is disabled");
    }
    let login_admin_use_case = LoginAdminService::new(
        admin_credentials,
        Argon2Hasher::from_env()?,
        jwt_service.clone(),
    );

    let projects = Arc::new(ProjectsResource::mount(Arc::clone(&project.get_list)).await);
    info!(count = projects.count().await, "Project list mounted");

    let state = AppState {
        auth: AuthUseCases {
            login: Arc::new(login_admin_use_case),
        },
        project,
        projects,
        media,
        contact,
        analytics,
        resume,
        backend_mode,
        resume_file_path: config.resume_file_path.clone(),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    info!(backend = backend_mode.as_str(), "Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(custom_json_config())
            .app_data(upload_payload_config(max_upload_bytes))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{analytics, auth, contact, multimedia, project, resume};

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth::adapter::incoming::web::routes::login_admin_handler);
    // Projects: `featured` before `{slug}` so it is not captured as a slug
    cfg.service(project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(project::adapter::incoming::web::routes::get_featured_projects_handler);
    cfg.service(project::adapter::incoming::web::routes::get_project_by_slug_handler);
    cfg.service(project::adapter::incoming::web::routes::get_admin_projects_handler);
    cfg.service(project::adapter::incoming::web::routes::get_project_editor_handler);
    cfg.service(project::adapter::incoming::web::routes::submit_project_editor_handler);
    cfg.service(project::adapter::incoming::web::routes::apply_editor_action_handler);
    cfg.service(project::adapter::incoming::web::routes::upload_editor_media_handler);
    cfg.service(project::adapter::incoming::web::routes::delete_project_handler);
    // Media
    cfg.service(multimedia::adapter::incoming::web::routes::upload_media_handler);
    cfg.service(multimedia::adapter::incoming::web::routes::delete_media_handler);
    cfg.service(multimedia::adapter::incoming::web::routes::upload_resume_file_handler);
    cfg.service(multimedia::adapter::incoming::web::routes::get_resume_url_handler);
    // Contact
    cfg.service(contact::adapter::incoming::web::routes::submit_contact_handler);
    // Analytics
    cfg.service(analytics::adapter::incoming::web::routes::track_resume_download_handler);
    cfg.service(analytics::adapter::incoming::web::routes::track_project_view_handler);
    cfg.service(analytics::adapter::incoming::web::routes::get_analytics_stats_handler);
    cfg.service(analytics::adapter::incoming::web::routes::download_resume_handler);
    // Resume
    cfg.service(resume::adapter::incoming::web::routes::get_resume_handler);
    cfg.service(resume::adapter::incoming::web::routes::get_resume_draft_handler);
    cfg.service(resume::adapter::incoming::web::routes::save_resume_handler);
    cfg.service(resume::adapter::incoming::web::routes::apply_resume_edits_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    let mut args = std::env::args().skip(1);
    let result = match args.next().as_deref() {
        Some("hash-password") => hash_password(args.next()),
        _ => start(),
    };

    if let Err(e) = result {
        eprintln!("Error starting app: {e}");
    }
}
