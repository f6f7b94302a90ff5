mod admin_projects;
mod delete_project;
mod get_featured_projects;
mod get_project_by_slug;
mod get_projects;
mod project_editor;
mod project_editor_actions;

pub use admin_projects::{get_admin_projects_handler, AdminProjectsQuery};
pub use delete_project::delete_project_handler;
pub use get_featured_projects::get_featured_projects_handler;
pub use get_project_by_slug::get_project_by_slug_handler;
pub use get_projects::get_projects_handler;
pub use project_editor::{
    get_project_editor_handler, submit_project_editor_handler, EditorView, SubmitProjectRequest,
};
pub use project_editor_actions::{
    apply_editor_action_handler, upload_editor_media_handler, EditorActionRequest,
    EditorMediaQuery, EditorMediaResponse,
};
pub use delete_project::__path_delete_project_handler;
pub use get_project_by_slug::__path_get_project_by_slug_handler;
pub use admin_projects::__path_get_admin_projects_handler;
pub use project_editor_actions::{__path_upload_editor_media_handler, __path_apply_editor_action_handler};
pub use get_projects::__path_get_projects_handler;
pub use project_editor::{__path_get_project_editor_handler, __path_submit_project_editor_handler};
pub use get_featured_projects::__path_get_featured_projects_handler;

use actix_web::HttpResponse;
use tracing::warn;

use crate::modules::project::application::editor::{EditorIntent, ProjectEditor};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fresh editor bound to the shared project list.
fn editor_for(state: &AppState) -> ProjectEditor {
    ProjectEditor::new(
        state.projects.clone(),
        state.project.clone(),
        state.media.clone(),
    )
}

/// Open the editor from `intent`. An `edit` id missing from the shared list
/// triggers one reload; if it is still missing the answer is 404.
async fn open_editor(
    editor: &mut ProjectEditor,
    intent: &EditorIntent,
    state: &AppState,
) -> Result<bool, HttpResponse> {
    let open = editor.open_from_intent(intent).await;
    let Some(id) = intent.edit else {
        return Ok(open);
    };
    let editing = |editor: &ProjectEditor| editor.draft().and_then(|d| d.editing) == Some(id);

    if editing(editor) {
        return Ok(true);
    }

    state.projects.refetch().await;
    editor.open_from_intent(intent).await;
    if editing(editor) {
        Ok(true)
    } else {
        warn!(%id, "editor requested for an unknown project");
        Err(ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found"))
    }
}
