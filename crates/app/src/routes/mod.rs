pub mod accounts;
pub mod billing;
pub mod bookings;
pub mod communication;
pub mod dashboard;
pub mod doctors;
pub mod login;
pub mod not_found;
pub mod patients;
pub mod secure_section;

use crate::auth::use_auth;
use crate::preferences::{use_preference, use_preferences};
use crate::ProfileState;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdCalendar, LdFileText, LdLayoutDashboard, LdLogOut, LdMessageSquare,
    LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{evaluate, AccessDecision, GuardClass, ProtectedSection, SidebarCollapsed};
use shared_ui::{
    use_toast, Navbar, Sidebar, SidebarContent, SidebarFooter, SidebarHeader, SidebarInset,
    SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarProvider, SidebarTrigger,
    ToastOptions,
};

use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;
use secure_section::SecureSection;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Login {})]
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/doctors")]
    DoctorList {},
    #[route("/doctors/:id")]
    DoctorDetail { id: String },
    #[route("/bookings")]
    Bookings {},
    #[route("/patients")]
    PatientList {},
    #[route("/patients/:id")]
    PatientDetail { id: String },
    #[route("/billing")]
    Billing {},
    // ── Behind the secondary challenge ──
    #[route("/accounts")]
    Accounts {},
    #[route("/communication")]
    Communication {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    pub fn guard_class(&self) -> GuardClass {
        match self {
            Route::Login {} | Route::NotFound { .. } => GuardClass::Public,
            Route::Accounts {} => GuardClass::Secured(ProtectedSection::Accounts),
            Route::Communication {} => GuardClass::Secured(ProtectedSection::Communication),
            _ => GuardClass::Authenticated,
        }
    }

    /// Title shown in the navbar.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login {} => "Sign In",
            Route::Dashboard {} => "Dashboard",
            Route::DoctorList {} | Route::DoctorDetail { .. } => "My Doctors",
            Route::Bookings {} => "My Bookings",
            Route::PatientList {} | Route::PatientDetail { .. } => "My Patients",
            Route::Billing {} => "Billing",
            Route::Accounts {} => "Accounts",
            Route::Communication {} => "Communication",
            Route::NotFound { .. } => "Not Found",
        }
    }
}

/// Coarse guard. Sends anonymous visitors to the login page; secured
/// routes are additionally wrapped in [`SecureSection`].
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();

    match evaluate(route.guard_class(), auth.is_authenticated(), true) {
        AccessDecision::RedirectToLogin => {
            tracing::debug!(?route, "Anonymous visit to a guarded route");
            navigator().replace(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        _ => rsx! { Outlet::<Route> {} },
    }
}

/// Page shell: sidebar, navbar and the routed view.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let profile: ProfileState = use_context();
    let prefs = use_preferences();
    let collapsed = use_preference::<SidebarCollapsed>();
    let mut auth = use_auth();
    let toast = use_toast();

    let brand = services::app_config().ui.brand.clone();

    let handle_logout = move |_| {
        auth.logout();
        toast.success(
            "You have been logged out successfully".to_string(),
            ToastOptions::new(),
        );
        navigator().replace(Route::Login {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider {
            collapsed,
            on_collapsed_change: move |next: bool| prefs.set::<SidebarCollapsed>(&next),
            Sidebar {
                SidebarHeader { brand: brand,
                    Icon { icon: LdUserCheck, width: 18, height: 18 }
                }

                SidebarContent {
                    SidebarMenu {
                        SidebarMenuItem {
                            Link { to: Route::DoctorList {},
                                SidebarMenuButton {
                                    label: "My Doctors",
                                    active: matches!(route, Route::DoctorList {} | Route::DoctorDetail { .. }),
                                    icon: rsx! { Icon { icon: LdUserCheck, width: 18, height: 18 } },
                                }
                            }
                        }
                        SidebarMenuItem {
                            Link { to: Route::Bookings {},
                                SidebarMenuButton {
                                    label: "My Bookings",
                                    active: matches!(route, Route::Bookings {}),
                                    icon: rsx! { Icon { icon: LdCalendar, width: 18, height: 18 } },
                                }
                            }
                        }
                        SidebarMenuItem {
                            Link { to: Route::PatientList {},
                                SidebarMenuButton {
                                    label: "My Patients",
                                    active: matches!(route, Route::PatientList {} | Route::PatientDetail { .. }),
                                    icon: rsx! { Icon { icon: LdUsers, width: 18, height: 18 } },
                                }
                            }
                        }
                        SidebarMenuItem {
                            Link { to: Route::Billing {},
                                SidebarMenuButton {
                                    label: "Billing",
                                    active: matches!(route, Route::Billing {}),
                                    icon: rsx! { Icon { icon: LdFileText, width: 18, height: 18 } },
                                }
                            }
                        }
                        SidebarMenuItem {
                            Link { to: Route::Accounts {},
                                SidebarMenuButton {
                                    label: "Accounts",
                                    active: matches!(route, Route::Accounts {}),
                                    locked: true,
                                    icon: rsx! { Icon { icon: LdBriefcase, width: 18, height: 18 } },
                                }
                            }
                        }
                        SidebarMenuItem {
                            Link { to: Route::Communication {},
                                SidebarMenuButton {
                                    label: "Communication",
                                    active: matches!(route, Route::Communication {}),
                                    locked: true,
                                    icon: rsx! { Icon { icon: LdMessageSquare, width: 18, height: 18 } },
                                }
                            }
                        }
                        SidebarMenuItem {
                            Link { to: Route::Dashboard {},
                                SidebarMenuButton {
                                    label: "Dashboard",
                                    active: matches!(route, Route::Dashboard {}),
                                    icon: rsx! { Icon { icon: LdLayoutDashboard, width: 18, height: 18 } },
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    SidebarTrigger {}
                    button {
                        class: "sidebar-logout",
                        r#type: "button",
                        title: "Logout",
                        onclick: handle_logout,
                        Icon { icon: LdLogOut, width: 18, height: 18 }
                        span { class: "sidebar-menu-label", "Logout" }
                    }
                }
            }

            SidebarInset {
                Navbar {
                    title: route.title().to_string(),
                    user_name: profile.display_name.read().clone(),
                    user_role: profile.role_label.read().clone(),
                    initials: profile.initials.read().clone(),
                }
                main { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

// ── Route components ──

#[component]
fn DoctorList() -> Element {
    doctors::list::DoctorListPage()
}

#[component]
fn DoctorDetail(id: String) -> Element {
    rsx! { doctors::detail::DoctorDetailPage { id: id } }
}

#[component]
fn Bookings() -> Element {
    bookings::BookingsPage()
}

#[component]
fn PatientList() -> Element {
    patients::list::PatientListPage()
}

#[component]
fn PatientDetail(id: String) -> Element {
    rsx! { patients::detail::PatientDetailPage { id: id } }
}

#[component]
fn Billing() -> Element {
    billing::BillingPage()
}

#[component]
fn Accounts() -> Element {
    rsx! {
        SecureSection { section: ProtectedSection::Accounts,
            accounts::AccountsPage {}
        }
    }
}

#[component]
fn Communication() -> Element {
    rsx! {
        SecureSection { section: ProtectedSection::Communication,
            communication::CommunicationPage {}
        }
    }
}
