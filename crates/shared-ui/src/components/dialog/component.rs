use dioxus::prelude::*;
use dioxus_primitives::dialog as prim;

/// Modal root. Closing through the overlay or Escape reports `false` via
/// `on_open_change`.
#[component]
pub fn DialogRoot(mut props: prim::DialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "hms-dialog-overlay", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot { ..props }
    }
}

#[component]
pub fn DialogContent(mut props: prim::DialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("hms-dialog-content".to_string());
    }

    rsx! {
        prim::DialogContent { ..props }
    }
}

#[component]
pub fn DialogTitle(mut props: prim::DialogTitleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "hms-dialog-title", None, false));

    rsx! {
        prim::DialogTitle { ..props }
    }
}

#[component]
pub fn DialogDescription(mut props: prim::DialogDescriptionProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "hms-dialog-description", None, false));

    rsx! {
        prim::DialogDescription { ..props }
    }
}

/// Right-aligned row of dialog actions.
#[component]
pub fn DialogFooter(children: Element) -> Element {
    rsx! {
        div { class: "hms-dialog-footer", {children} }
    }
}
