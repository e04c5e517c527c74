pub mod session;

pub use session::{get_current_user_id, require_user, set_user_session};
