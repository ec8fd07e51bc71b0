use pretty_assertions::assert_eq;
use services::{parse_config, CredentialVerifier, StaticCredentials};
use shared_types::StaffRole;

const CONFIG_TOML: &str = include_str!("../../../config.toml");

#[test]
fn test_shipped_config_parses() {
    let config = parse_config(CONFIG_TOML);

    assert_eq!(config.auth.admin_email, "admin@hospital.com");
    assert_eq!(config.auth.role, StaffRole::Admin);
    assert_eq!(config.ui.brand, "HMS Portal");
    assert!(config.ui.departments.contains(&"Cardiology".to_string()));
}

#[test]
fn test_shipped_config_departments_cover_sample_doctors() {
    let config = parse_config(CONFIG_TOML);
    for doctor in shared_types::sample_doctors() {
        assert!(
            config.ui.departments.contains(&doctor.department),
            "{} is missing from [ui].departments",
            doctor.department
        );
    }
}

#[test]
fn test_verifier_built_from_shipped_config() {
    let config = parse_config(CONFIG_TOML);
    let verifier = StaticCredentials::from_config(&config.auth);

    let session = verifier
        .verify_login("admin@hospital.com", "password")
        .expect("shipped credentials should verify");
    assert_eq!(session.display_name, config.auth.display_name);
    assert!(verifier.verify_secure_code("admin123").is_ok());
}
