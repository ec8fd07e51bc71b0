use pretty_assertions::assert_eq;
use services::{KeyValueStore, MemoryStore, PreferenceService, StorageChange};
use shared_types::{SelectedDepartment, SidebarCollapsed};

use crate::common::{self, MountedView};

#[test]
fn test_set_then_get_in_same_view() {
    let prefs = PreferenceService::in_memory();
    prefs.set::<SelectedDepartment>(&Some("Cardiology".to_string()));
    assert_eq!(
        prefs.get::<SelectedDepartment>(),
        Some("Cardiology".to_string())
    );
}

#[test]
fn test_views_in_same_tab_follow_each_write() {
    let prefs = PreferenceService::in_memory();
    let doctors = MountedView::<SelectedDepartment>::mount(&prefs);
    let patients = MountedView::<SelectedDepartment>::mount(&prefs);

    prefs.set::<SelectedDepartment>(&Some("Neurology".to_string()));

    assert_eq!(doctors.value(), Some("Neurology".to_string()));
    assert_eq!(patients.value(), Some("Neurology".to_string()));
}

#[test]
fn test_second_tab_sees_value_only_after_notification() {
    let profile = MemoryStore::new();
    let tab_a = common::open_tab(&profile);
    let tab_b = common::open_tab(&profile);
    let view_b = MountedView::<SelectedDepartment>::mount(&tab_b);

    tab_a.set::<SelectedDepartment>(&Some("Cardiology".to_string()));

    assert_eq!(view_b.value(), None, "Tab B has not been notified yet");

    tab_b.notify(&StorageChange::key("selectedDepartment"));

    assert_eq!(view_b.value(), Some("Cardiology".to_string()));
}

#[test]
fn test_unrelated_key_change_does_not_refresh() {
    let profile = MemoryStore::new();
    let tab_a = common::open_tab(&profile);
    let tab_b = common::open_tab(&profile);
    let view_b = MountedView::<SelectedDepartment>::mount(&tab_b);

    tab_a.set::<SelectedDepartment>(&Some("Oncology".to_string()));
    tab_b.notify(&StorageChange::key("sidebarCollapsed"));

    assert_eq!(view_b.value(), None);
}

#[test]
fn test_cleared_storage_resets_to_defaults() {
    let profile = MemoryStore::new();
    let prefs = common::open_tab(&profile);
    prefs.set::<SidebarCollapsed>(&true);
    let sidebar = MountedView::<SidebarCollapsed>::mount(&prefs);
    assert!(sidebar.value());

    profile.remove("sidebarCollapsed");
    prefs.notify(&StorageChange::cleared());

    assert!(!sidebar.value());
}

#[test]
fn test_unmounted_view_stops_listening() {
    let prefs = PreferenceService::in_memory();
    let view = MountedView::<SidebarCollapsed>::mount(&prefs);
    assert_eq!(prefs.subscriber_count(), 1);

    drop(view);

    assert_eq!(prefs.subscriber_count(), 0);
    prefs.set::<SidebarCollapsed>(&true);
}

#[test]
fn test_sidebar_flag_stored_as_text() {
    let profile = MemoryStore::new();
    let prefs = common::open_tab(&profile);

    prefs.set::<SidebarCollapsed>(&true);
    assert_eq!(profile.get("sidebarCollapsed").as_deref(), Some("true"));

    prefs.set::<SidebarCollapsed>(&false);
    assert_eq!(profile.get("sidebarCollapsed").as_deref(), Some("false"));
}

#[test]
fn test_corrupt_values_read_as_defaults() {
    let profile = MemoryStore::new();
    profile.set("sidebarCollapsed", "{not a bool}");
    profile.set("selectedDepartment", "");
    let prefs = common::open_tab(&profile);

    assert!(!prefs.get::<SidebarCollapsed>());
    assert_eq!(prefs.get::<SelectedDepartment>(), None);
}
