pub mod login_admin;

pub use login_admin::{
    LoginAdminRequest, LoginAdminRequestError, LoginAdminResponse, LoginAdminUseCase, LoginError,
    LoginAdminService,
};
