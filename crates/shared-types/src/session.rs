use serde::{Deserialize, Serialize};

/// Storage key holding the serialized [`Session`] while someone is signed in.
pub const SESSION_STORAGE_KEY: &str = "hms_user";

/// Staff role attached to a session.
///
/// - `Admin`: hospital administration, full dashboard access.
/// - `Doctor`, `Nurse`: clinical staff.
/// - `Receptionist`: front desk, the least privileged role.
///
/// Deserialization goes through [`StaffRole::from_str_or_default`], so a
/// stored record or config file with an unknown role still loads.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum StaffRole {
    Admin,
    Doctor,
    Nurse,
    #[default]
    Receptionist,
}

impl StaffRole {
    /// Parse a role string. Unknown values default to Receptionist.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "admin" => StaffRole::Admin,
            "doctor" => StaffRole::Doctor,
            "nurse" => StaffRole::Nurse,
            _ => StaffRole::Receptionist,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Admin => "admin",
            StaffRole::Doctor => "doctor",
            StaffRole::Nurse => "nurse",
            StaffRole::Receptionist => "receptionist",
        }
    }

    /// Human-readable label for the navbar.
    pub fn display_name(&self) -> &'static str {
        match self {
            StaffRole::Admin => "Administrator",
            StaffRole::Doctor => "Doctor",
            StaffRole::Nurse => "Nurse",
            StaffRole::Receptionist => "Receptionist",
        }
    }
}

impl From<String> for StaffRole {
    fn from(s: String) -> Self {
        StaffRole::from_str_or_default(&s)
    }
}

/// The signed-in staff member.
///
/// Present only between a successful login and the next logout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Opaque user identifier.
    pub id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    pub role: StaffRole,
    pub email: String,
}

impl Session {
    /// Up to two uppercase initials for the avatar fallback.
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}
