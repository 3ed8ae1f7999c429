pub mod role;
pub mod session;
pub mod user;

pub use role::Role;
pub use session::Session;
pub use user::UserProfile;
