//! Dashboard page component

use crate::components::{Navbar, QuickActions, RecentActivity, StatsGrid};
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div { class: "min-h-screen p-8",
            Navbar {}
            StatsGrid {}
            div { class: "mt-8 grid grid-cols-1 lg:grid-cols-2 gap-8",
                RecentActivity {}
                QuickActions {}
            }
        }
    }
}
