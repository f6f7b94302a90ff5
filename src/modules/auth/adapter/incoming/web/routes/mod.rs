mod login_admin;

pub use login_admin::{login_admin_handler, LoginAdminRequestDto, LoginAdminResponseBody};
pub use login_admin::__path_login_admin_handler;
