use dioxus::prelude::*;
use store::UserRecord;

use crate::icons::{FaPen, FaTrashCan};
use crate::Icon;

/// Every stored user as a card with edit and delete actions.
#[component]
pub fn UserList(
    users: Vec<UserRecord>,
    on_edit: EventHandler<UserRecord>,
    on_delete: EventHandler<String>,
) -> Element {
    // Records the backend sent without an id still need a stable key
    let rows: Vec<(String, UserRecord)> = users
        .iter()
        .enumerate()
        .map(|(index, user)| {
            let key = user.id.clone().unwrap_or_else(|| format!("row-{index}"));
            (key, user.clone())
        })
        .collect();

    rsx! {
        div {
            class: "user-list",
            for (key, user) in rows {
                UserCard {
                    key: "{key}",
                    user: user,
                    on_edit: on_edit,
                    on_delete: on_delete,
                }
            }
        }
    }
}

#[component]
pub fn UserCard(
    user: UserRecord,
    on_edit: EventHandler<UserRecord>,
    on_delete: EventHandler<String>,
) -> Element {
    let edit_user = user.clone();

    rsx! {
        div {
            class: "user-card",
            p { strong { "{user.full_name()}" } }
            p { "{user.phone_number}" }
            p { "{user.email}" }
            p { "{user.address}" }
            button {
                class: "edit",
                onclick: move |_| on_edit.call(edit_user.clone()),
                Icon { icon: FaPen, width: 12, height: 12 }
                " Edit"
            }
            if let Some(id) = user.id.clone() {
                button {
                    class: "delete",
                    onclick: move |_| on_delete.call(id.clone()),
                    Icon { icon: FaTrashCan, width: 12, height: 12 }
                    " Delete"
                }
            }
        }
    }
}
