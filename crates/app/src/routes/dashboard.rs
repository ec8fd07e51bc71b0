use dioxus::prelude::*;
use shared_types::{
    sample_bookings, sample_doctors, sample_invoices, sample_patients, BookingStatus,
    InvoiceStatus,
};
use shared_ui::components::{Badge, Card, CardContent, CardHeader, PageHeader, StatCard};

use crate::format_helpers::{format_cents, format_date_human};
use crate::routes::bookings::status_tone;
use crate::ProfileState;

/// Headline counts across the sample records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSummary {
    pub doctors: usize,
    pub patients: usize,
    pub open_bookings: usize,
    pub outstanding_cents: i64,
}

impl DashboardSummary {
    pub fn compute() -> Self {
        Self {
            doctors: sample_doctors().len(),
            patients: sample_patients().len(),
            open_bookings: sample_bookings()
                .iter()
                .filter(|b| matches!(b.status, BookingStatus::Confirmed | BookingStatus::Pending))
                .count(),
            outstanding_cents: sample_invoices()
                .iter()
                .filter(|i| i.status != InvoiceStatus::Paid)
                .map(|i| i.amount_cents)
                .sum(),
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let profile: ProfileState = use_context();
    let summary = use_hook(DashboardSummary::compute);
    let mut recent = use_hook(sample_bookings);
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(5);

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Welcome back, {profile.display_name}",
                subtitle: "Hospital activity at a glance",
            }

            div { class: "stat-grid",
                StatCard { label: "Doctors", value: summary.doctors.to_string() }
                StatCard { label: "Patients", value: summary.patients.to_string() }
                StatCard { label: "Open Bookings", value: summary.open_bookings.to_string() }
                StatCard { label: "Outstanding", value: format_cents(summary.outstanding_cents), hint: "Pending and overdue invoices" }
            }

            Card {
                CardHeader { title: "Recent Appointments" }
                CardContent {
                    ul { class: "timeline",
                        for booking in recent.iter() {
                            li { key: "{booking.id}",
                                span { class: "timeline-date", "{format_date_human(booking.date)}" }
                                span { "{booking.patient_name} with {booking.doctor_name}" }
                                Badge { tone: status_tone(booking.status), "{booking.status.as_str()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn summary_counts_sample_records() {
        let summary = DashboardSummary::compute();
        assert_eq!(summary.doctors, 4);
        assert_eq!(summary.patients, 8);
        let open = sample_bookings()
            .iter()
            .filter(|b| b.status != BookingStatus::Completed && b.status != BookingStatus::Cancelled)
            .count();
        assert_eq!(summary.open_bookings, open);
        assert!(summary.outstanding_cents > 0);
    }
}
