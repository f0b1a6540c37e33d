//! Server-side rendering entry points

use crate::components::Dashboard;
use dioxus::prelude::*;

pub const DAISYUI_CSS: &str =
    "https://cdn.jsdelivr.net/npm/daisyui@4.12.10/dist/full.min.css";
pub const TAILWIND_JS: &str = "https://cdn.tailwindcss.com";

const DOCUMENT_OPEN: &str = "<!DOCTYPE html><html lang=\"en\">";
const DOCUMENT_CLOSE: &str = "</html>";

/// Renders the dashboard tree alone, without the surrounding document.
pub fn render_dashboard() -> String {
    let html = dioxus_ssr::render_element(rsx! { Dashboard {} });
    tracing::debug!(bytes = html.len(), "rendered dashboard fragment");
    html
}

/// Renders a complete HTML document with the dashboard as its body.
pub fn render_document() -> String {
    // dioxus_elements has no `html` element, so the root tag is written by hand
    let page = dioxus_ssr::render_element(rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "Dashboard" }
            link { rel: "stylesheet", href: DAISYUI_CSS }
            script { src: TAILWIND_JS }
        }
        body {
            Dashboard {}
        }
    });
    let mut html = String::with_capacity(
        DOCUMENT_OPEN.len() + page.len() + DOCUMENT_CLOSE.len(),
    );
    html.push_str(DOCUMENT_OPEN);
    html.push_str(&page);
    html.push_str(DOCUMENT_CLOSE);
    tracing::debug!(bytes = html.len(), "rendered dashboard document");
    html
}
