use crate::dashboard::{DashboardTab, GOALS, MOOD_BREAKDOWN, NOTIFICATIONS, STATS, Stat, TRAITS};
use crate::mood::with_alpha;
use crate::ui::use_mood;
use crate::views::shared::{Badge, ProgressBar};
use dioxus::prelude::*;

#[component]
pub fn DashboardView() -> Element {
    let mood = use_mood();
    let current = mood.read().mood();
    let mut tab = use_signal(DashboardTab::default);

    rsx! {
        div { class: "main-container dashboard",
            div { class: "dashboard-header",
                h2 { "Dashboard" }
                Badge {
                    label: format!("Mood: {}", current.label()),
                    accent: current.color().to_string(),
                }
            }
            div { class: "stat-grid",
                for stat in STATS.iter() {
                    {stat_card(stat, current.color())}
                }
            }
            nav { class: "tabs dashboard-tabs",
                for option in DashboardTab::ALL {
                    button {
                        key: "{option.label()}",
                        class: if tab() == option { "tab active" } else { "tab" },
                        r#type: "button",
                        onclick: move |_| tab.set(option),
                        "{option.label()}"
                    }
                }
            }
            {match tab() {
                DashboardTab::Macros => rsx! { MacrosPanel {} },
                DashboardTab::Notifications => rsx! { NotificationsPanel {} },
                DashboardTab::Settings => rsx! { GoalsPanel {} },
            }}
        }
    }
}

fn stat_card(stat: &Stat, accent: &str) -> Element {
    let tint = with_alpha(accent, 0.12);
    let trend = if stat.is_increase() { "up" } else { "down" };
    rsx! {
        div { key: "{stat.title}", class: "card stat-card", style: "background-color: {tint};",
            div { class: "stat-head",
                span { class: "stat-icon", "{stat.icon.glyph()}" }
                span { class: "stat-title", "{stat.title}" }
            }
            div { class: "stat-value", "{stat.value}" }
            div { class: "stat-foot",
                span { class: "stat-change {trend}", "{stat.change}" }
                span { class: "text-muted", "{stat.description}" }
            }
        }
    }
}

#[component]
fn MacrosPanel() -> Element {
    rsx! {
        div { class: "panel-grid",
            div { class: "card",
                h3 { class: "section-title", "Mood Analysis" }
                for share in MOOD_BREAKDOWN.iter() {
                    div { key: "{share.label}", class: "meter-row",
                        div { class: "meter-label",
                            span { "{share.label}" }
                            span { class: "text-muted", "{share.percentage}%" }
                        }
                        ProgressBar { value: share.percentage, color: share.color.to_string() }
                    }
                }
            }
            div { class: "card",
                h3 { class: "section-title", "Personality Traits" }
                for item in TRAITS.iter() {
                    div { key: "{item.name}", class: "meter-row",
                        div { class: "meter-label",
                            span { "{item.name}" }
                            span { class: "text-muted", "{item.value}%" }
                        }
                        ProgressBar { value: item.value }
                    }
                }
            }
        }
    }
}

#[component]
fn NotificationsPanel() -> Element {
    rsx! {
        div { class: "card",
            h3 { class: "section-title", "Recent Activity" }
            ul { class: "notification-list",
                for note in NOTIFICATIONS.iter() {
                    li { key: "{note.message}", class: "notification {note.kind.as_str()}",
                        span { class: "notification-dot" }
                        span { class: "notification-message", "{note.message}" }
                        span { class: "text-muted", "{note.time}" }
                    }
                }
            }
        }
    }
}

#[component]
fn GoalsPanel() -> Element {
    rsx! {
        div { class: "card",
            h3 { class: "section-title", "Growth Goals" }
            for goal in GOALS.iter() {
                div { key: "{goal.name}", class: "meter-row",
                    div { class: "meter-label",
                        span { "{goal.name}" }
                        span { class: "text-muted", "{goal.target}" }
                    }
                    ProgressBar { value: goal.progress }
                }
            }
        }
    }
}
