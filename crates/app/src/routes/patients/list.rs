use dioxus::prelude::*;
use shared_types::{filter_by_department, sample_patients, Patient, SelectedDepartment};
use shared_ui::components::{
    Badge, BadgeTone, DataTable, DataTableCell, DataTableRow, PageHeader, SearchBar,
};

use crate::components::DepartmentFilter;
use crate::format_helpers::{format_date_human, initials_of};
use crate::preferences::use_preference;
use crate::routes::Route;

#[component]
pub fn PatientListPage() -> Element {
    let selected = use_preference::<SelectedDepartment>();
    let mut search = use_signal(String::new);
    let patients = use_hook(sample_patients);

    let term = search();
    let visible: Vec<Patient> = filter_by_department(&patients, selected.read().as_deref())
        .into_iter()
        .filter(|p| p.matches_search(&term))
        .cloned()
        .collect();

    rsx! {
        div { class: "container",
            PageHeader {
                title: "My Patients",
                subtitle: subtitle(selected.read().as_deref(), visible.len(), patients.len()),
            }

            SearchBar {
                value: term.clone(),
                placeholder: "Search by name, ID, doctor or diagnosis...",
                on_search: move |v: String| search.set(v),
                DepartmentFilter {}
            }

            DataTable {
                columns: vec![
                    "Patient".into(),
                    "Age / Gender".into(),
                    "Last Visit".into(),
                    "Doctor".into(),
                    "Department".into(),
                    "Diagnosis".into(),
                ],
                empty: visible.is_empty(),
                empty_message: "No patients match the current filters.",
                for patient in visible.into_iter() {
                    PatientRow { key: "{patient.id}", patient }
                }
            }
        }
    }
}

#[component]
fn PatientRow(patient: Patient) -> Element {
    let nav_id = patient.id.clone();

    rsx! {
        DataTableRow {
            onclick: move |_| {
                navigator().push(Route::PatientDetail { id: nav_id.clone() });
            },
            DataTableCell {
                div { class: "person-cell",
                    span { class: "person-avatar", "{initials_of(&patient.name)}" }
                    div {
                        div { class: "person-name", "{patient.name}" }
                        div { class: "person-sub", "{patient.id}" }
                    }
                }
            }
            DataTableCell { "{patient.age} / {patient.gender}" }
            DataTableCell { "{format_date_human(patient.visit_date)}" }
            DataTableCell { "{patient.doctor}" }
            DataTableCell {
                Badge { tone: BadgeTone::Info, "{patient.department}" }
            }
            DataTableCell { "{patient.diagnosis}" }
        }
    }
}

/// Names the active department filter, if any, plus the match count.
fn subtitle(selected: Option<&str>, shown: usize, total: usize) -> String {
    match selected {
        Some(dept) => format!("Showing patients in {dept} department ({shown} of {total})"),
        None => format!("{shown} of {total} patients"),
    }
}
