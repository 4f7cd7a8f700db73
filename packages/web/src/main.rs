use dioxus::prelude::*;

use store::FormConfig;
use views::Users;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Users {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // A browser has no process environment, so this resolves to the
    // BACKEND_URL the bundle was built with, or the default.
    use_context_provider(FormConfig::from_env);

    rsx! {
        Router::<Route> {}
    }
}
