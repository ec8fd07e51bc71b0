use pretty_assertions::assert_eq;
use services::PreferenceService;
use shared_types::{
    filter_by_department, sample_doctors, sample_patients, SelectedDepartment,
};

fn doctor_ids(selected: Option<&str>) -> Vec<String> {
    let doctors = sample_doctors();
    filter_by_department(&doctors, selected)
        .into_iter()
        .map(|d| d.id.clone())
        .collect()
}

fn patient_ids(selected: Option<&str>) -> Vec<String> {
    let patients = sample_patients();
    filter_by_department(&patients, selected)
        .into_iter()
        .map(|p| p.id.clone())
        .collect()
}

#[test]
fn test_no_department_returns_full_lists() {
    assert_eq!(doctor_ids(None).len(), sample_doctors().len());
    assert_eq!(patient_ids(None).len(), sample_patients().len());
}

#[test]
fn test_department_match_ignores_case() {
    assert_eq!(doctor_ids(Some("cardiology")), vec!["1"]);
    assert_eq!(patient_ids(Some("CARDIOLOGY")), vec!["P1001", "P1005"]);
}

#[test]
fn test_department_match_is_exact() {
    assert!(doctor_ids(Some("Cardio")).is_empty());
    assert!(patient_ids(Some("Neurology ")).is_empty());
}

#[test]
fn test_stored_department_drives_both_lists() {
    let prefs = PreferenceService::in_memory();
    prefs.set::<SelectedDepartment>(&Some("Pediatrics".to_string()));

    let selected = prefs.get::<SelectedDepartment>();

    assert_eq!(doctor_ids(selected.as_deref()), vec!["3"]);
    assert_eq!(patient_ids(selected.as_deref()), vec!["P1003", "P1007"]);
}

#[test]
fn test_clearing_department_restores_full_list() {
    let prefs = PreferenceService::in_memory();
    prefs.set::<SelectedDepartment>(&Some("Psychology".to_string()));
    prefs.set::<SelectedDepartment>(&None);

    let selected = prefs.get::<SelectedDepartment>();

    assert_eq!(selected, None);
    assert_eq!(patient_ids(selected.as_deref()).len(), sample_patients().len());
}
