use crate::mood::with_alpha;
use crate::ui::{AppTab, use_mood};
use dioxus::prelude::*;

const FEATURES: [(&str, &str); 3] = [
    (
        "Learns your voice",
        "Every conversation teaches Neura a little more about how you think.",
    ),
    (
        "Feels the room",
        "The avatar shifts colour and energy with the mood of the conversation.",
    ),
    (
        "Yours to shape",
        "Pick a theme and a mood, and watch your doppelganger follow along.",
    ),
];

#[component]
pub fn HomeView(active_tab: Signal<AppTab>) -> Element {
    let mut active_tab = active_tab;
    let mood = use_mood();
    let color = mood.read().color();
    let glow = with_alpha(color, 0.35);

    rsx! {
        div { class: "main-container home",
            section { class: "hero",
                div {
                    class: "hero-orb",
                    style: "background: radial-gradient(circle at 35% 30%, {color}, #0b0b16 70%); box-shadow: 0 0 80px {glow};",
                }
                span { class: "hero-wordmark", "NEURA" }
                h1 { class: "hero-title", "Digital Doppelgänger" }
                p { class: "hero-tagline",
                    "An AI companion that mirrors your personality, mood and way of speaking."
                }
                button {
                    class: "btn btn-primary btn-lg",
                    r#type: "button",
                    onclick: move |_| active_tab.set(AppTab::Chat),
                    "Get Started"
                }
            }
            section { class: "feature-grid",
                for (title, body) in FEATURES {
                    div { key: "{title}", class: "card feature-card",
                        h3 { class: "section-title", "{title}" }
                        p { class: "text-muted", "{body}" }
                    }
                }
            }
        }
    }
}
