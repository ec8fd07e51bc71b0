use dioxus::prelude::*;
use shared_types::{filter_by_department, sample_doctors, Doctor, SelectedDepartment};
use shared_ui::components::{
    Badge, BadgeTone, DataTable, DataTableCell, DataTableRow, PageHeader, SearchBar,
};

use crate::components::DepartmentFilter;
use crate::format_helpers::initials_of;
use crate::preferences::use_preference;
use crate::routes::Route;

#[component]
pub fn DoctorListPage() -> Element {
    let selected = use_preference::<SelectedDepartment>();
    let mut search = use_signal(String::new);
    let doctors = use_hook(sample_doctors);

    let term = search.read().trim().to_lowercase();
    let visible: Vec<Doctor> = filter_by_department(&doctors, selected.read().as_deref())
        .into_iter()
        .filter(|d| term.is_empty() || d.name.to_lowercase().contains(&term))
        .cloned()
        .collect();

    let empty_message = match selected() {
        Some(dept) => format!("No doctors found in {dept}."),
        None => "No doctors match your search.".to_string(),
    };

    rsx! {
        div { class: "container",
            PageHeader {
                title: "My Doctors",
                subtitle: subtitle(selected.read().as_deref()),
            }

            SearchBar {
                value: search(),
                placeholder: "Search doctors by name...",
                on_search: move |v: String| search.set(v),
                DepartmentFilter {}
            }

            DataTable {
                columns: vec!["Doctor".into(), "Department".into(), "Experience".into(), "Availability".into()],
                empty: visible.is_empty(),
                empty_message,
                for doctor in visible.into_iter() {
                    DoctorRow { key: "{doctor.id}", doctor }
                }
            }
        }
    }
}

#[component]
fn DoctorRow(doctor: Doctor) -> Element {
    let nav_id = doctor.id.clone();
    let initials = initials_of(&doctor.name);

    rsx! {
        DataTableRow {
            onclick: move |_| {
                navigator().push(Route::DoctorDetail { id: nav_id.clone() });
            },
            DataTableCell {
                div { class: "person-cell",
                    span { class: "person-avatar", "{initials}" }
                    div {
                        div { class: "person-name", "{doctor.name}" }
                        div { class: "person-sub", "{doctor.email}" }
                    }
                }
            }
            DataTableCell {
                Badge { tone: BadgeTone::Info, "{doctor.department}" }
            }
            DataTableCell { "{doctor.experience_years} years" }
            DataTableCell { "{doctor.availability}" }
        }
    }
}

/// Names the active department filter, if any.
fn subtitle(selected: Option<&str>) -> String {
    match selected {
        Some(dept) => format!("Showing doctors in {dept} department"),
        None => "Medical staff by department".to_string(),
    }
}
