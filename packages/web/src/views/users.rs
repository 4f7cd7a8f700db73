use dioxus::prelude::*;
use store::FormConfig;

#[component]
pub fn Users() -> Element {
    let config = use_context::<FormConfig>();
    rsx! {
        ui::UserFormView { config: config }
    }
}
