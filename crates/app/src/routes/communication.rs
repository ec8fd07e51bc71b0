use dioxus::prelude::*;
use shared_types::{sample_messages, Message};
use shared_ui::components::{Badge, BadgeTone, Card, CardContent, CardHeader, PageHeader};

use crate::format_helpers::{format_date_human, initials_of};

/// Staff inbox. Only reachable through the secondary challenge.
#[component]
pub fn CommunicationPage() -> Element {
    let messages = use_hook(sample_messages);
    let mut open_id = use_signal(|| Option::<String>::None);
    let unread = messages.iter().filter(|m| !m.read).count();

    let opened: Option<Message> = open_id
        .read()
        .as_ref()
        .and_then(|id| messages.iter().find(|m| &m.id == id).cloned());

    rsx! {
        div { class: "container",
            PageHeader { title: "Communication", subtitle: "{unread} unread messages" }

            div { class: "inbox",
                ul { class: "inbox-list",
                    for message in messages.iter() {
                        li {
                            key: "{message.id}",
                            class: if message.read { "inbox-item" } else { "inbox-item unread" },
                            "data-selected": if opened.as_ref().is_some_and(|o| o.id == message.id) { "true" } else { "false" },
                            onclick: {
                                let id = message.id.clone();
                                move |_| open_id.set(Some(id.clone()))
                            },
                            span { class: "person-avatar", "{initials_of(&message.sender)}" }
                            div { class: "inbox-summary",
                                div { class: "inbox-sender", "{message.sender}" }
                                div { class: "inbox-subject", "{message.subject}" }
                            }
                            span { class: "inbox-date", "{format_date_human(message.date)}" }
                        }
                    }
                }

                match opened {
                    Some(message) => rsx! {
                        Card { class: "inbox-reader",
                            CardHeader {
                                title: message.subject.clone(),
                                description: format!("{} · {}", message.sender, message.sender_role),
                            }
                            CardContent {
                                p { "{message.content}" }
                                if !message.read {
                                    Badge { tone: BadgeTone::Info, "New" }
                                }
                            }
                        }
                    },
                    None => rsx! {
                        Card { class: "inbox-reader",
                            CardContent {
                                p { class: "inbox-placeholder", "Select a message to read it." }
                            }
                        }
                    },
                }
            }
        }
    }
}
