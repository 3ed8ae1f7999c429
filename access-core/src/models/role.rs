//! Role vocabulary - the closed set of capability classes a user can hold.

use serde::{Deserialize, Serialize};

/// Role tags recognized by the platform.
///
/// `Unknown` absorbs any tag outside the closed set so that parsing and
/// deserialization are total; an unknown role never authorizes anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Attendee,
    Organizer,
    VenueOwner,
    Admin,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Attendee => "attendee",
            Role::Organizer => "organizer",
            Role::VenueOwner => "venue_owner",
            Role::Admin => "admin",
            Role::Unknown => "unknown",
        }
    }

    /// Parse a role tag. Total: anything outside the closed set maps to
    /// `Unknown` rather than an error.
    pub fn parse(value: &str) -> Role {
        match value.trim().to_lowercase().as_str() {
            "attendee" => Role::Attendee,
            "organizer" => Role::Organizer,
            "venue_owner" => Role::VenueOwner,
            "admin" => Role::Admin,
            _ => Role::Unknown,
        }
    }

    /// Whether this is one of the four recognized platform roles.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Role::Unknown)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
