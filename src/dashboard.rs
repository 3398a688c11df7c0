//! Static figures shown on the dashboard. None of this is computed.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatIcon {
    Conversations,
    Personality,
    Analysis,
    Speed,
}

impl StatIcon {
    /// Single glyph standing in for an icon set.
    pub fn glyph(self) -> &'static str {
        match self {
            StatIcon::Conversations => "💬",
            StatIcon::Personality => "🧠",
            StatIcon::Analysis => "📊",
            StatIcon::Speed => "⚡",
        }
    }
}

pub struct Stat {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub icon: StatIcon,
    pub description: &'static str,
}

impl Stat {
    pub fn is_increase(&self) -> bool {
        self.change.starts_with('+')
    }
}

pub const STATS: [Stat; 4] = [
    Stat {
        title: "Conversations",
        value: "847",
        change: "+12%",
        icon: StatIcon::Conversations,
        description: "Total interactions this month",
    },
    Stat {
        title: "Personality Match",
        value: "94%",
        change: "+5%",
        icon: StatIcon::Personality,
        description: "AI-human alignment score",
    },
    Stat {
        title: "Data Analysis",
        value: "1.2K",
        change: "+8%",
        icon: StatIcon::Analysis,
        description: "Data points processed",
    },
    Stat {
        title: "Response Time",
        value: "0.3s",
        change: "-15%",
        icon: StatIcon::Speed,
        description: "Average processing speed",
    },
];

pub struct MoodShare {
    pub label: &'static str,
    pub percentage: u8,
    pub color: &'static str,
}

pub const MOOD_BREAKDOWN: [MoodShare; 4] = [
    MoodShare {
        label: "Happy",
        percentage: 45,
        color: "#22c55e",
    },
    MoodShare {
        label: "Excited",
        percentage: 25,
        color: "#f59e0b",
    },
    MoodShare {
        label: "Calm",
        percentage: 20,
        color: "#3b82f6",
    },
    MoodShare {
        label: "Focused",
        percentage: 10,
        color: "#8b5cf6",
    },
];

pub struct Trait {
    pub name: &'static str,
    pub value: u8,
}

pub const TRAITS: [Trait; 5] = [
    Trait {
        name: "Curiosity",
        value: 92,
    },
    Trait {
        name: "Empathy",
        value: 87,
    },
    Trait {
        name: "Creativity",
        value: 78,
    },
    Trait {
        name: "Analytical",
        value: 85,
    },
    Trait {
        name: "Optimism",
        value: 76,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Info => "info",
        }
    }
}

pub struct Notification {
    pub time: &'static str,
    pub message: &'static str,
    pub kind: NotificationKind,
}

pub const NOTIFICATIONS: [Notification; 4] = [
    Notification {
        time: "2 hours ago",
        message: "Personality analysis updated",
        kind: NotificationKind::Success,
    },
    Notification {
        time: "5 hours ago",
        message: "New conversation patterns detected",
        kind: NotificationKind::Info,
    },
    Notification {
        time: "1 day ago",
        message: "Weekly mood report generated",
        kind: NotificationKind::Success,
    },
    Notification {
        time: "2 days ago",
        message: "System optimization completed",
        kind: NotificationKind::Info,
    },
];

pub struct Goal {
    pub name: &'static str,
    pub progress: u8,
    pub target: &'static str,
}

pub const GOALS: [Goal; 4] = [
    Goal {
        name: "Improve Communication",
        progress: 65,
        target: "Next Month",
    },
    Goal {
        name: "Emotional Intelligence",
        progress: 78,
        target: "Ongoing",
    },
    Goal {
        name: "Creative Expression",
        progress: 45,
        target: "3 Months",
    },
    Goal {
        name: "Technical Skills",
        progress: 82,
        target: "Next Week",
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Macros,
    Notifications,
    Settings,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Macros,
        DashboardTab::Notifications,
        DashboardTab::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Macros => "Macros",
            DashboardTab::Notifications => "Notifications",
            DashboardTab::Settings => "Settings",
        }
    }
}
