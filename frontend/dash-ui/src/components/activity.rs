//! Recent activity card

use crate::content::{
    ACTIVITY_COLUMNS, ACTIVITY_TITLE, ActivityRow, RECENT_ACTIVITY,
};
use dioxus::prelude::*;

#[component]
pub fn RecentActivity() -> Element {
    rsx! {
        div { class: "card bg-base-100 shadow-xl",
            div { class: "card-body",
                h2 { class: "card-title", "{ACTIVITY_TITLE}" }
                div { class: "overflow-x-auto",
                    table { class: "table w-full",
                        thead {
                            tr {
                                {ACTIVITY_COLUMNS.iter().map(|column| rsx! {
                                    th { key: "{column}", "{column}" }
                                })}
                            }
                        }
                        tbody {
                            {RECENT_ACTIVITY.iter().map(|row| {
                                let ActivityRow { kind, description, date } = *row;
                                rsx! {
                                    tr { key: "{kind}",
                                        td { "{kind}" }
                                        td { "{description}" }
                                        td { "{date}" }
                                    }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
