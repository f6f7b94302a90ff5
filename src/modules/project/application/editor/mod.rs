mod project_editor;
mod project_form;

pub use project_editor::{
    EditorAction, EditorDraft, EditorIntent, MediaSlot, ProjectEditor, SubmitProjectError,
};
pub use project_form::{ProjectForm, ProjectFormError};
