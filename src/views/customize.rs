use crate::mood::Mood;
use crate::types::ThemeMode;
use crate::ui::{use_mood, use_theme};
use crate::views::avatar::Avatar;
use dioxus::prelude::*;

#[component]
pub fn CustomizeView() -> Element {
    let mut theme = use_theme();
    let mut mood = use_mood();
    let current_theme = theme.read().mode();
    let current_mood = mood.read().mood();

    rsx! {
        div { class: "main-container customize",
            div { class: "customize-controls",
                div { class: "settings-section",
                    h3 { class: "section-title", "Appearance" }
                    div { class: "theme-toggle",
                        for mode in [ThemeMode::Dark, ThemeMode::Light] {
                            button {
                                key: "{mode}",
                                class: format_args!(
                                    "theme-option {}",
                                    if mode == current_theme { "active" } else { "" }
                                ),
                                r#type: "button",
                                onclick: move |_| {
                                    if theme.read().mode() != mode {
                                        theme.write().toggle();
                                    }
                                },
                                if mode == ThemeMode::Dark { "Dark" } else { "Light" }
                            }
                        }
                    }
                }
                div { class: "settings-section",
                    h3 { class: "section-title", "Mood" }
                    div { class: "mood-options",
                        for option in Mood::ALL {
                            button {
                                key: "{option}",
                                class: format_args!(
                                    "mood-option {}",
                                    if option == current_mood { "active" } else { "" }
                                ),
                                r#type: "button",
                                onclick: move |_| mood.write().set_mood(option),
                                span {
                                    class: "mood-swatch",
                                    style: "background-color: {option.color()};",
                                }
                                span { "{option.label()}" }
                            }
                        }
                    }
                }
            }
            div { class: "customize-preview card",
                h3 { class: "section-title", "Preview" }
                Avatar { processing: false }
            }
        }
    }
}
