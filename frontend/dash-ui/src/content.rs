//! Literal content shown on the dashboard.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatSummary {
    pub title: &'static str,
    pub value: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityRow {
    pub kind: &'static str,
    pub description: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionVariant {
    Primary,
    Secondary,
    Accent,
}

impl ActionVariant {
    /// DaisyUI button modifier class.
    pub fn class(self) -> &'static str {
        match self {
            ActionVariant::Primary => "btn-primary",
            ActionVariant::Secondary => "btn-secondary",
            ActionVariant::Accent => "btn-accent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub variant: ActionVariant,
}

pub const BRAND: &str = "Dashboard";
pub const LOGOUT_LABEL: &str = "Logout";

pub const STATS: [StatSummary; 3] = [
    StatSummary {
        title: "Total Posts",
        value: "31K",
        desc: "Jan 1st - Feb 1st",
    },
    StatSummary {
        title: "New Users",
        value: "4,200",
        desc: "↗︎ 400 (22%)",
    },
    StatSummary {
        title: "Active Users",
        value: "1,200",
        desc: "↘︎ 90 (14%)",
    },
];

pub const ACTIVITY_TITLE: &str = "Recent Activity";
pub const ACTIVITY_COLUMNS: [&str; 3] = ["Type", "Description", "Date"];

pub const RECENT_ACTIVITY: [ActivityRow; 2] = [
    ActivityRow {
        kind: "Post",
        description: "New content added",
        date: "2 min ago",
    },
    ActivityRow {
        kind: "Comment",
        description: "User feedback received",
        date: "5 min ago",
    },
];

pub const ACTIONS_TITLE: &str = "Quick Actions";

pub const QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        label: "Create Post",
        variant: ActionVariant::Primary,
    },
    QuickAction {
        label: "View Analytics",
        variant: ActionVariant::Secondary,
    },
    QuickAction {
        label: "Settings",
        variant: ActionVariant::Accent,
    },
];
