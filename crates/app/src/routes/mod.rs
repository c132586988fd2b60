pub mod inventory;
pub mod login;
pub mod not_found;
pub mod sales;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLayoutDashboard, LdPackage};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant};

use crate::auth::use_session;
use crate::storage;

use inventory::Inventory;
use login::Login;
use not_found::NotFound;
use sales::SalesReport;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(SessionGuard)]
    #[layout(AppShell)]
    #[route("/")]
    SalesReport {},
    #[route("/inventory")]
    Inventory {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Session guard layout — redirects to /login unless an admin session is
/// present. Checked on every render of a protected route; synchronous, no
/// backend round-trip.
#[component]
fn SessionGuard() -> Element {
    let session = use_session();

    if session.is_authorized() {
        rsx! { Outlet::<Route> {} }
    } else {
        // A token with the wrong role is unusable; drop whatever was stored.
        storage::clear_session();
        navigator().push(Route::Login {});
        rsx! {
            div { class: "guard-redirect",
                p { "Redirecting to login..." }
            }
        }
    }
}

/// Shell layout for protected routes: sidebar navigation plus a topbar.
#[component]
fn AppShell() -> Element {
    let route: Route = use_route();
    let mut session = use_session();

    let page_title = match &route {
        Route::SalesReport {} => "Sales Analytics",
        Route::Inventory {} => "Inventory Management",
        _ => "",
    };

    let handle_logout = move |_| {
        session.sign_out();
        navigator().push(Route::Login {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "shell",
            aside { class: "shell-sidebar",
                div { class: "shell-brand", "SaleTap" }
                nav { class: "shell-nav",
                    Link {
                        to: Route::SalesReport {},
                        class: if matches!(route, Route::SalesReport {}) { "shell-nav-link active" } else { "shell-nav-link" },
                        Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                        "Sales"
                    }
                    Link {
                        to: Route::Inventory {},
                        class: if matches!(route, Route::Inventory {}) { "shell-nav-link active" } else { "shell-nav-link" },
                        Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 }
                        "Inventory"
                    }
                }
                div { class: "shell-sidebar-footer",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: handle_logout,
                        "Log out"
                    }
                }
            }
            div { class: "shell-main",
                header { class: "shell-topbar",
                    h2 { class: "shell-topbar-title", "{page_title}" }
                }
                main { class: "shell-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
