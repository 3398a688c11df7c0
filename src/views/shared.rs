use crate::mood::Mood;
use crate::ui::use_mood;
use dioxus::prelude::*;

/// Row of swatches, one per mood; clicking one sets the mood.
#[component]
pub fn MoodPicker() -> Element {
    let mut mood = use_mood();
    let current = mood.read().mood();

    rsx! {
        div { class: "mood-picker",
            span { class: "mood-picker-label", "Current Mood:" }
            div { class: "mood-swatches",
                for option in Mood::ALL {
                    button {
                        key: "{option}",
                        class: format_args!(
                            "mood-swatch {}",
                            if option == current { "active" } else { "" }
                        ),
                        r#type: "button",
                        style: "background-color: {option.color()};",
                        title: option.label(),
                        aria_label: "Set mood to {option}",
                        onclick: move |_| mood.write().set_mood(option),
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProgressBar(value: u8, #[props(default)] color: Option<String>) -> Element {
    let width = value.min(100);
    let fill = color.unwrap_or_else(|| "var(--color-text-primary)".to_string());
    rsx! {
        div { class: "progress",
            role: "progressbar",
            aria_valuenow: "{width}",
            aria_valuemin: "0",
            aria_valuemax: "100",
            div { class: "progress-fill", style: "width: {width}%; background-color: {fill};" }
        }
    }
}

#[component]
pub fn Badge(label: String, #[props(default)] accent: Option<String>) -> Element {
    let style = accent
        .map(|color| format!("border-color: {color}; color: {color};"))
        .unwrap_or_default();
    rsx! {
        span { class: "badge", style: "{style}", "{label}" }
    }
}
