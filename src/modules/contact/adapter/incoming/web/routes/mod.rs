mod submit_contact;

pub use submit_contact::{submit_contact_handler, SubmitContactRequest, SubmitContactResponse};
pub use submit_contact::__path_submit_contact_handler;
