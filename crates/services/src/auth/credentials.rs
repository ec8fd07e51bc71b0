use shared_types::{AuthConfig, AuthError, Session};

/// Checks login credentials and the secondary access code.
///
/// The app ships with [`StaticCredentials`]; a real deployment would put a
/// remote identity provider behind this trait.
pub trait CredentialVerifier {
    /// Resolve an identifier/secret pair to the signed-in user's profile.
    fn verify_login(&self, identifier: &str, secret: &str) -> Result<Session, AuthError>;

    /// Check the code that unlocks a protected section.
    fn verify_secure_code(&self, code: &str) -> Result<(), AuthError>;
}

/// A single fixed account plus one shared secondary code, read from the
/// `[auth]` table of `config.toml`.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    email: String,
    password: String,
    secure_code: String,
    profile: Session,
}

impl StaticCredentials {
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            email: config.admin_email.trim().to_string(),
            password: config.admin_password.clone(),
            secure_code: config.secure_section_code.clone(),
            profile: Session {
                id: config.user_id.clone(),
                display_name: config.display_name.clone(),
                role: config.role,
                email: config.admin_email.trim().to_string(),
            },
        }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::from_config(&AuthConfig::default())
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify_login(&self, identifier: &str, secret: &str) -> Result<Session, AuthError> {
        // Both halves of the pair must match exactly.
        if identifier == self.email && secret == self.password {
            Ok(self.profile.clone())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    fn verify_secure_code(&self, code: &str) -> Result<(), AuthError> {
        if code == self.secure_code {
            Ok(())
        } else {
            Err(AuthError::InvalidSecondaryCode)
        }
    }
}
