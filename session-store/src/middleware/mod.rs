pub mod guard;

pub use guard::{access_guard, content_guard, CurrentSession, ErrorResponse, GuardState};
