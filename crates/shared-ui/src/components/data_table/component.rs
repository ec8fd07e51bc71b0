use dioxus::prelude::*;

/// Read-only table. Renders `empty_message` instead of rows when `rows`
/// is empty.
#[component]
pub fn DataTable(
    columns: Vec<String>,
    #[props(default = "No records found.".to_string())] empty_message: String,
    children: Element,
    #[props(default = false)] empty: bool,
) -> Element {
    let span = columns.len().max(1);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                thead {
                    tr {
                        for column in columns.iter() {
                            th { key: "{column}", "{column}" }
                        }
                    }
                }
                tbody {
                    if empty {
                        tr { class: "data-table-empty",
                            td { colspan: "{span}", "{empty_message}" }
                        }
                    } else {
                        {children}
                    }
                }
            }
        }
    }
}

/// Table row; clickable when `onclick` is set.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let clickable = onclick.is_some();
    rsx! {
        tr {
            class: if clickable { "data-table-row clickable" } else { "data-table-row" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}
