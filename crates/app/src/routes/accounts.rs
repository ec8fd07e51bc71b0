use dioxus::prelude::*;
use shared_types::{sample_transactions, LedgerSummary, TransactionKind};
use shared_ui::components::{
    Badge, BadgeTone, DataTable, DataTableCell, DataTableRow, PageHeader, StatCard,
};

use crate::format_helpers::{format_cents, format_date_human};

/// Hospital ledger. Only reachable through the secondary challenge.
#[component]
pub fn AccountsPage() -> Element {
    let transactions = use_hook(sample_transactions);
    let summary = LedgerSummary::from_transactions(&transactions);

    rsx! {
        div { class: "container",
            PageHeader { title: "Accounts", subtitle: "Income and expenses" }

            div { class: "stat-grid",
                StatCard { label: "Total Income", value: format_cents(summary.income_cents) }
                StatCard { label: "Total Expenses", value: format_cents(summary.expense_cents) }
                StatCard {
                    label: "Net Balance",
                    value: format_cents(summary.net_cents()),
                    hint: if summary.net_cents() < 0 { "Running at a loss".to_string() } else { String::new() },
                }
            }

            DataTable {
                columns: vec![
                    "Transaction".into(),
                    "Date".into(),
                    "Description".into(),
                    "Category".into(),
                    "Amount".into(),
                ],
                empty: transactions.is_empty(),
                empty_message: "No transactions recorded.",
                for tx in transactions.iter() {
                    DataTableRow { key: "{tx.id}",
                        DataTableCell { "{tx.id}" }
                        DataTableCell { "{format_date_human(tx.date)}" }
                        DataTableCell { "{tx.description}" }
                        DataTableCell { Badge { "{tx.category}" } }
                        DataTableCell {
                            match tx.kind {
                                TransactionKind::Income => rsx! {
                                    Badge { tone: BadgeTone::Success, "+{format_cents(tx.amount_cents)}" }
                                },
                                TransactionKind::Expense => rsx! {
                                    Badge { tone: BadgeTone::Danger, "-{format_cents(tx.amount_cents)}" }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
