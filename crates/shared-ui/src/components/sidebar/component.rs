use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronLeft, LdChevronRight, LdLock};
use dioxus_free_icons::Icon;

// ─── Context ───────────────────────────────────────────────────────────

/// Collapse state handed down from [`SidebarProvider`].
///
/// The sidebar does not own its collapsed flag: the value comes from the
/// caller and every change is reported back through `on_collapsed_change`,
/// so the caller decides where it is persisted.
#[derive(Clone, Copy, PartialEq)]
pub struct SidebarState {
    collapsed: Signal<bool>,
    on_collapsed_change: EventHandler<bool>,
}

impl SidebarState {
    pub fn is_collapsed(&self) -> bool {
        (self.collapsed)()
    }

    pub fn set_collapsed(&self, collapsed: bool) {
        self.on_collapsed_change.call(collapsed);
    }

    pub fn toggle(&self) {
        self.set_collapsed(!self.is_collapsed());
    }
}

#[component]
pub fn SidebarProvider(
    collapsed: Signal<bool>,
    on_collapsed_change: EventHandler<bool>,
    children: Element,
) -> Element {
    use_context_provider(|| SidebarState {
        collapsed,
        on_collapsed_change,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-collapsed": if collapsed() { "true" } else { "false" },
            {children}
        }
    }
}

pub fn use_sidebar() -> SidebarState {
    use_context::<SidebarState>()
}

// ─── Layout ────────────────────────────────────────────────────────────

#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let state = use_sidebar();

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new(
            "data-state",
            if state.is_collapsed() { "collapsed" } else { "expanded" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        aside {
            ..merged,
            {children}
        }
    }
}

/// Brand row at the top of the sidebar. The label hides when collapsed.
#[component]
pub fn SidebarHeader(brand: String, children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header",
            span { class: "sidebar-brand-mark", {children} }
            span { class: "sidebar-brand-label", "{brand}" }
        }
    }
}

#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-content", {children} }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

// ─── Menu ──────────────────────────────────────────────────────────────

#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        ul { class: "sidebar-menu", {children} }
    }
}

#[component]
pub fn SidebarMenuItem(children: Element) -> Element {
    rsx! {
        li { class: "sidebar-menu-item", {children} }
    }
}

/// Icon plus label of a navigation entry; wrap it in a router `Link`.
/// `locked` adds the marker for entries behind the secondary challenge and
/// `label` doubles as the tooltip while collapsed.
#[component]
pub fn SidebarMenuButton(
    label: String,
    #[props(default = false)] active: bool,
    #[props(default = false)] locked: bool,
    icon: Element,
) -> Element {
    rsx! {
        span {
            class: "sidebar-menu-button",
            "data-active": if active { "true" } else { "false" },
            title: "{label}",
            span { class: "sidebar-menu-icon", {icon} }
            span { class: "sidebar-menu-label",
                "{label}"
                if locked {
                    span { class: "sidebar-lock", "aria-label": "Password protected",
                        Icon { icon: LdLock, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

/// Button that flips the collapsed flag.
#[component]
pub fn SidebarTrigger() -> Element {
    let state = use_sidebar();
    let collapsed = state.is_collapsed();

    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": if collapsed { "Expand sidebar" } else { "Collapse sidebar" },
            "aria-expanded": if collapsed { "false" } else { "true" },
            onclick: move |_| state.toggle(),
            if collapsed {
                Icon { icon: LdChevronRight, width: 16, height: 16 }
            } else {
                Icon { icon: LdChevronLeft, width: 16, height: 16 }
            }
        }
    }
}

/// Main column next to the sidebar; its margin follows the collapse state.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-inset", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[component]
    fn Harness(collapsed: bool) -> Element {
        let collapsed = use_signal(move || collapsed);
        rsx! {
            SidebarProvider { collapsed, on_collapsed_change: move |_: bool| {},
                Sidebar {
                    SidebarHeader { brand: "HMS Portal", "H" }
                    SidebarContent {
                        SidebarMenu {
                            SidebarMenuItem {
                                SidebarMenuButton { label: "Accounts", locked: true, icon: rsx! {} }
                            }
                            SidebarMenuItem {
                                SidebarMenuButton { label: "Billing", active: true, icon: rsx! {} }
                            }
                        }
                    }
                    SidebarFooter { SidebarTrigger {} }
                }
            }
        }
    }

    fn render(collapsed: bool) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { collapsed });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn expanded_sidebar_renders_brand_and_links() {
        let html = render(false);
        assert!(html.contains(r#"data-state="expanded""#));
        assert!(html.contains("HMS Portal"));
        assert!(html.contains("Collapse sidebar"));
        assert!(html.contains(r#"data-active="true""#));
    }

    #[test]
    fn collapsed_state_is_reflected() {
        let html = render(true);
        assert!(html.contains(r#"data-state="collapsed""#));
        assert!(html.contains(r#"data-sidebar-collapsed="true""#));
        assert!(html.contains("Expand sidebar"));
    }

    #[test]
    fn locked_items_carry_the_lock_marker() {
        let html = render(false);
        assert_eq!(html.matches("Password protected").count(), 1);
    }
}
