use serde::{Deserialize, Serialize};

use crate::session::StaffRole;

/// Demo credentials and the profile of the account they unlock.
///
/// Loaded from the `[auth]` table of `config.toml`. Every field has a
/// default so a missing or incomplete file still yields a usable login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AuthConfig {
    pub admin_email: String,
    pub admin_password: String,
    /// Code required by the challenge on secure sections (accounts, communication).
    pub secure_section_code: String,
    pub user_id: String,
    pub display_name: String,
    pub role: StaffRole,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_email: "admin@hospital.com".to_string(),
            admin_password: "password".to_string(),
            secure_section_code: "admin123".to_string(),
            user_id: "1".to_string(),
            display_name: "Hospital Admin".to_string(),
            role: StaffRole::Admin,
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Brand shown in the sidebar header.
    pub brand: String,
    /// Departments offered by the list filters.
    pub departments: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            brand: "HMS Portal".to_string(),
            departments: ["Cardiology", "Neurology", "Pediatrics", "Psychology"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub ui: UiConfig,
}
