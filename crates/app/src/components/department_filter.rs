use dioxus::prelude::*;
use shared_types::SelectedDepartment;
use shared_ui::components::{FormSelect, SelectOption};

use crate::preferences::{use_preference, use_preferences};

/// Department selector shared by the doctor and patient lists.
///
/// Backed by the `selectedDepartment` preference, so every mounted list
/// (and every open tab) follows a change made in any one of them.
/// "All departments" clears the preference.
#[component]
pub fn DepartmentFilter() -> Element {
    let prefs = use_preferences();
    let selected = use_preference::<SelectedDepartment>();
    let departments = &services::app_config().ui.departments;

    let options: Vec<SelectOption> = std::iter::once(SelectOption::new("", "All departments"))
        .chain(departments.iter().map(|d| SelectOption::new(d.clone(), d.clone())))
        .collect();

    rsx! {
        FormSelect {
            label: "Department",
            value: selected().unwrap_or_default(),
            options,
            on_change: move |value: String| {
                let next = if value.trim().is_empty() { None } else { Some(value) };
                prefs.set::<SelectedDepartment>(&next);
            },
        }
    }
}
