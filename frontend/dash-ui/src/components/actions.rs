//! Quick actions card

use crate::content::{ACTIONS_TITLE, QUICK_ACTIONS};
use dioxus::prelude::*;

/// Row of action buttons. None of them is wired to anything.
#[component]
pub fn QuickActions() -> Element {
    rsx! {
        div { class: "card bg-base-100 shadow-xl",
            div { class: "card-body",
                h2 { class: "card-title", "{ACTIONS_TITLE}" }
                div { class: "flex flex-wrap gap-4",
                    {QUICK_ACTIONS.iter().map(|action| {
                        let label = action.label;
                        let variant = action.variant.class();
                        rsx! {
                            button { key: "{label}", class: "btn {variant}", "{label}" }
                        }
                    })}
                }
            }
        }
    }
}
