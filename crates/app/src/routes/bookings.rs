use dioxus::prelude::*;
use shared_types::{sample_bookings, BookingStatus};
use shared_ui::components::{Badge, BadgeTone, DataTable, DataTableCell, DataTableRow, PageHeader};

use crate::format_helpers::format_date_human;
use crate::routes::Route;

pub fn status_tone(status: BookingStatus) -> BadgeTone {
    match status {
        BookingStatus::Confirmed => BadgeTone::Success,
        BookingStatus::Pending => BadgeTone::Warning,
        BookingStatus::Completed => BadgeTone::Info,
        BookingStatus::Cancelled => BadgeTone::Danger,
    }
}

#[component]
pub fn BookingsPage() -> Element {
    let bookings = use_hook(sample_bookings);

    rsx! {
        div { class: "container",
            PageHeader {
                title: "My Bookings",
                subtitle: "{bookings.len()} appointments",
            }

            DataTable {
                columns: vec![
                    "Booking".into(),
                    "Patient".into(),
                    "Doctor".into(),
                    "Type".into(),
                    "Date".into(),
                    "Status".into(),
                ],
                empty: bookings.is_empty(),
                empty_message: "No appointments booked.",
                for booking in bookings.iter() {
                    DataTableRow { key: "{booking.id}",
                        DataTableCell { "{booking.id}" }
                        DataTableCell {
                            Link { to: Route::PatientDetail { id: booking.patient_id.clone() },
                                "{booking.patient_name}"
                            }
                        }
                        DataTableCell {
                            Link { to: Route::DoctorDetail { id: booking.doctor_id.clone() },
                                "{booking.doctor_name}"
                            }
                        }
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
