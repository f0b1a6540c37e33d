//! Dashboard console - server-rendered UI
//!
//! Architecture:
//! - Dioxus components rendered to HTML with `dioxus-ssr`
//! - No signals, hooks or event handlers; every control is inert markup
//! - Styling comes from Tailwind + DaisyUI classes loaded in the document head

pub mod components;
pub mod content;
mod render;

pub use components::{Dashboard, Navbar, QuickActions, RecentActivity, StatCard, StatsGrid};
pub use render::{DAISYUI_CSS, TAILWIND_JS, render_dashboard, render_document};
