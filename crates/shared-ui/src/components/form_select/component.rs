use dioxus::prelude::*;

/// One entry of a [`FormSelect`].
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Native `<select>` driven by a list of options.
///
/// `value` must equal one option's `value` to be shown as selected; an
/// option with an empty value works as the "all" choice.
#[component]
pub fn FormSelect(
    value: String,
    options: Vec<SelectOption>,
    on_change: EventHandler<String>,
    #[props(default)] label: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                disabled: disabled,
                onchange: move |evt| on_change.call(evt.value()),
                for opt in options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
