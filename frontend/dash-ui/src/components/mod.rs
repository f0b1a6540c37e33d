//! UI components

pub mod actions;
pub mod activity;
pub mod dashboard;
pub mod layout;
pub mod stats;

pub use actions::QuickActions;
pub use activity::RecentActivity;
pub use dashboard::Dashboard;
pub use layout::Navbar;
pub use stats::{StatCard, StatsGrid};
