use dioxus::prelude::*;

mod auth;
mod fetch;
mod routes;
mod storage;

use api_client::ApiClient;
use auth::SessionState;
use routes::Route;

fn main() {
    dioxus::launch(App);
}

/// Root component: provides the API client and the session context, then
/// mounts the router.
#[component]
fn App() -> Element {
    use_context_provider(ApiClient::new);
    use_context_provider(SessionState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }
        Router::<Route> {}
    }
}
