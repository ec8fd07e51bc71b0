use dioxus::prelude::*;
use shared_types::{sample_bookings, sample_invoices, sample_patients};
use shared_ui::components::{
    Badge, BadgeTone, Card, CardContent, CardHeader, PageHeader, StatCard,
};

use crate::format_helpers::{format_cents, format_date_human};
use crate::routes::bookings::status_tone;
use crate::routes::Route;

#[component]
pub fn PatientDetailPage(id: String) -> Element {
    let Some(patient) = sample_patients().into_iter().find(|p| p.id == id) else {
        return rsx! {
            div { class: "container",
                Card {
                    CardContent {
                        p { "No patient with ID {id}." }
                        Link { to: Route::PatientList {}, "Back to patients" }
                    }
                }
            }
        };
    };

    let bookings: Vec<_> = sample_bookings()
        .into_iter()
        .filter(|b| b.patient_id == patient.id)
        .collect();
    let invoiced: i64 = sample_invoices()
        .iter()
        .filter(|i| i.patient_id == patient.id)
        .map(|i| i.amount_cents)
        .sum();

    rsx! {
        div { class: "container",
            PageHeader {
                title: patient.name.clone(),
                subtitle: "Patient {patient.id}",
                actions: rsx! {
                    Link { to: Route::PatientList {}, class: "back-link", "Back to patients" }
                },
            }

            div { class: "stat-grid",
                StatCard { label: "Age", value: patient.age.to_string(), hint: patient.gender.clone() }
                StatCard { label: "Last Visit", value: format_date_human(patient.visit_date) }
                StatCard { label: "Billing", value: format_cents(patient.billing_cents), hint: format!("{} invoiced", format_cents(invoiced)) }
            }

            div { class: "detail-grid",
                Card {
                    CardHeader { title: "Medical Record" }
                    CardContent {
                        dl { class: "detail-list",
                            dt { "Department" }
                            dd { Badge { tone: BadgeTone::Info, "{patient.department}" } }
                            dt { "Attending Doctor" }
                            dd { "{patient.doctor}" }
                            dt { "Diagnosis" }
                            dd { "{patient.diagnosis}" }
                            dt { "Prescription" }
                            dd { "{patient.prescription}" }
                            dt { "Phone" }
                            dd { "{patient.phone}" }
                        }
                    }
                }

                Card {
                    CardHeader { title: "Appointments" }
                    CardContent {
                        if bookings.is_empty() {
                            p { class: "muted", "No appointments on file." }
                        }
                        ul { class: "timeline",
                            for booking in bookings.iter() {
                                li { key: "{booking.id}",
                                    span { class: "timeline-date", "{format_date_human(booking.date)} {booking.time}" }
                                    span { "{booking.appointment_type} with {booking.doctor_name}" }
                                    Badge { tone: status_tone(booking.status), "{booking.status.as_str()}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
