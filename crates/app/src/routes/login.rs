use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::{Role, Session};
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, Input};

use crate::auth::use_session;
use crate::routes::Route;

/// Login page with username/password credentials.
///
/// Only the admin role may enter: any other role claim shows the
/// unauthorized message and nothing is stored.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let client = use_context::<ApiClient>();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Redirect to the dashboard if already signed in
    if session.is_authorized() {
        navigator().push(Route::SalesReport {});
    }

    let handle_login = move |evt: FormEvent| {
        let client = client.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);

            match client.login(&username(), &password()).await {
                Ok(resp) => {
                    let role = Role::from_str_or_default(&resp.role);
                    if role == Role::Admin {
                        tracing::info!("admin login succeeded");
                        session.sign_in(Session::new(resp.access_token, role));
                        navigator().push(Route::SalesReport {});
                    } else {
                        tracing::warn!(claim = %resp.role, "login with non-admin role");
                        error_msg.set(Some(
                            "Unauthorized: you do not have access to this console.".to_string(),
                        ));
                    }
                }
                Err(err) => {
                    tracing::warn!(%err, "login failed");
                    error_msg.set(Some(err.friendly_message()));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-card",
                Card {
                    CardHeader {
                        CardTitle { "SaleTap Console" }
                        CardDescription { "Sign in with your store administrator account" }
                    }
                    CardContent {
                        if let Some(err) = error_msg() {
                            div { class: "auth-error", "{err}" }
                        }

                        form { onsubmit: handle_login,
                            div { class: "auth-field",
                                Input {
                                    label: "Username",
                                    value: username(),
                                    placeholder: "Username",
                                    on_input: move |e: FormEvent| username.set(e.value()),
                                }
                            }
                            div { class: "auth-field",
                                Input {
                                    label: "Password",
                                    input_type: "password",
                                    value: password(),
                                    placeholder: "Enter your password",
                                    on_input: move |e: FormEvent| password.set(e.value()),
                                }
                            }
                            button {
                                r#type: "submit",
                                class: "auth-submit",
                                disabled: loading(),
                                if loading() { "Signing in..." } else { "Sign In" }
                            }
                        }
                    }
                }
            }
        }
    }
}
