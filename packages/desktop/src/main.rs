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
    dioxus::logger::init(tracing::Level::INFO).ok();
    dotenvy::dotenv().ok();

    let config = load_config();
    tracing::info!("Using users backend at {}", config.base_url());

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

/// Read `<config_dir>/userform/config.toml` if it exists, otherwise fall back to
/// `BACKEND_URL` and the default.
fn load_config() -> FormConfig {
    let from_file = dirs::config_dir()
        .map(|dir| dir.join("userform").join(FormConfig::filename()))
        .and_then(|path| {
            let raw = std::fs::read_to_string(&path).ok()?;
            match FormConfig::from_toml(&raw) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
                    None
                }
            }
        });
    FormConfig::or_from_env(from_file)
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
