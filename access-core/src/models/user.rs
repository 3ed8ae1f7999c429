//! User profile - the authenticated user's record as handed back by the
//! login transport.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::Role;

/// Profile of the logged-in user.
///
/// `attributes` carries whatever extra fields the login transport
/// returned; it survives persistence round-trips untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl UserProfile {
    pub fn new(id: Uuid, full_name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            email: email.into(),
            role,
            attributes: Map::new(),
        }
    }
}
