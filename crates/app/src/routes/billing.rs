use dioxus::prelude::*;
use shared_types::{sample_invoices, Invoice, InvoiceStatus};
use shared_ui::components::{
    Badge, BadgeTone, DataTable, DataTableCell, DataTableRow, PageHeader, StatCard,
};

use crate::format_helpers::{format_cents, format_date_human};

fn invoice_tone(status: InvoiceStatus) -> BadgeTone {
    match status {
        InvoiceStatus::Paid => BadgeTone::Success,
        InvoiceStatus::Pending => BadgeTone::Warning,
        InvoiceStatus::Overdue => BadgeTone::Danger,
    }
}

fn total_with_status(invoices: &[Invoice], status: InvoiceStatus) -> i64 {
    invoices
        .iter()
        .filter(|i| i.status == status)
        .map(|i| i.amount_cents)
        .sum()
}

#[component]
pub fn BillingPage() -> Element {
    let invoices = use_hook(sample_invoices);
    let paid = total_with_status(&invoices, InvoiceStatus::Paid);
    let pending = total_with_status(&invoices, InvoiceStatus::Pending);
    let overdue = total_with_status(&invoices, InvoiceStatus::Overdue);

    rsx! {
        div { class: "container",
            PageHeader { title: "Billing", subtitle: "Patient invoices" }

            div { class: "stat-grid",
                StatCard { label: "Collected", value: format_cents(paid) }
                StatCard { label: "Pending", value: format_cents(pending) }
                StatCard { label: "Overdue", value: format_cents(overdue) }
            }

            DataTable {
                columns: vec![
                    "Invoice".into(),
                    "Patient".into(),
                    "Date".into(),
                    "Category".into(),
                    "Amount".into(),
                    "Status".into(),
                ],
                empty: invoices.is_empty(),
                empty_message: "No invoices yet.",
                for invoice in invoices.iter() {
                    DataTableRow { key: "{invoice.id}",
                        DataTableCell { "{invoice.id}" }
                        DataTableCell {
                            div { class: "person-name", "{invoice.patient_name}" }
                            div { class: "person-sub", "{invoice.patient_id}" }
                        }
                        DataTableCell { "{format_date_human(invoice.date)}" }
                        DataTableCell { "{invoice.category}: {invoice.description}" }
                        DataTableCell { "{format_cents(invoice.amount_cents)}" }
                        DataTableCell {
                            Badge { tone: invoice_tone(invoice.status), "{invoice.status.as_str()}" }
                        }
                    }
                }
            }
        }
    }
}
