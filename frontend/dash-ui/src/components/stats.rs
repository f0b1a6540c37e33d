//! Stat cards

use crate::content::{STATS, StatSummary};
use dioxus::prelude::*;

#[component]
pub fn StatCard(stat: StatSummary) -> Element {
    let StatSummary { title, value, desc } = stat;
    rsx! {
        div { class: "stats shadow",
            div { class: "stat",
                div { class: "stat-title", "{title}" }
                div { class: "stat-value", "{value}" }
                div { class: "stat-desc", "{desc}" }
            }
        }
    }
}

/// Responsive grid holding one card per entry of [`STATS`].
#[component]
pub fn StatsGrid() -> Element {
    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
            {STATS.iter().map(|stat| {
                let title = stat.title;
                rsx! {
                    StatCard { key: "{title}", stat: *stat }
                }
            })}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_renders_title_value_and_desc() {
        let html = dioxus_ssr::render_element(rsx! {
            StatCard { stat: STATS[1] }
        });
        assert!(html.contains(r#"<div class="stat-title">New Users</div>"#));
        assert!(html.contains(r#"<div class="stat-value">4,200</div>"#));
        assert!(html.contains(r#"<div class="stat-desc">↗︎ 400 (22%)</div>"#));
    }

    #[test]
    fn grid_has_three_cards() {
        let html = dioxus_ssr::render_element(rsx! { StatsGrid {} });
        assert_eq!(html.matches(r#"class="stats shadow""#).count(), 3);
    }
}
