use dioxus::prelude::*;
use shared_types::{sample_bookings, sample_doctors};
use shared_ui::components::{
    Badge, BadgeTone, Card, CardContent, CardHeader, DataTable, DataTableCell, DataTableRow,
    PageHeader,
};

use crate::format_helpers::format_date_human;
use crate::routes::bookings::status_tone;
use crate::routes::Route;

#[component]
pub fn DoctorDetailPage(id: String) -> Element {
    let doctor = sample_doctors().into_iter().find(|d| d.id == id);

    let Some(doctor) = doctor else {
        return rsx! {
            div { class: "container",
                Card {
                    CardContent {
                        p { "Doctor not found." }
                        Link { to: Route::DoctorList {}, "Back to doctors" }
                    }
                }
            }
        };
    };

    let appointments: Vec<_> = sample_bookings()
        .into_iter()
        .filter(|b| b.doctor_id == doctor.id)
        .collect();

    rsx! {
        div { class: "container",
            PageHeader {
                title: doctor.name.clone(),
                subtitle: doctor.specialty.clone(),
                actions: rsx! {
                    Link { to: Route::DoctorList {}, class: "back-link", "Back to doctors" }
                },
            }

            div { class: "detail-grid",
                Card {
                    CardHeader { title: "Profile" }
                    CardContent {
                        dl { class: "detail-list",
                            dt { "Department" }
                            dd { Badge { tone: BadgeTone::Info, "{doctor.department}" } }
                            dt { "Experience" }
                            dd { "{doctor.experience_years} years" }
                            dt { "Availability" }
                            dd { "{doctor.availability}" }
                            dt { "Email" }
                            dd { "{doctor.email}" }
                            dt { "Phone" }
                            dd { "{doctor.phone}" }
                        }
                    }
                }

                Card {
                    CardHeader { title: "Appointments", description: "Upcoming and past bookings" }
                    CardContent {
                        DataTable {
                            columns: vec!["Patient".into(), "Type".into(), "Date".into(), "Status".into()],
                            empty: appointments.is_empty(),
                            empty_message: "No appointments booked.",
                            for booking in appointments.iter() {
                                DataTableRow { key: "{booking.id}",
                                    DataTableCell { "{booking.patient_name}" }
                                    DataTableCell { "{booking.appointment_type}" }
                                    DataTableCell { "{format_date_human(booking.date)} {booking.time}" }
                                    DataTableCell {
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
}
