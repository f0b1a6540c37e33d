//! Layout components

use crate::content::{BRAND, LOGOUT_LABEL};
use dioxus::prelude::*;

/// Top navigation bar. The brand link and the logout button are placeholders
/// without targets or handlers.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div { class: "navbar bg-base-100 shadow-lg rounded-box mb-8",
            div { class: "flex-1",
                a { class: "btn btn-ghost normal-case text-xl", "{BRAND}" }
            }
            div { class: "flex-none",
                button { class: "btn btn-ghost", "{LOGOUT_LABEL}" }
            }
        }
    }
}
