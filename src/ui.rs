use crate::auth::{SessionAuth, SessionUser};
use crate::config;
use crate::mood::MoodStore;
use crate::storage::{self, SharedStore};
use crate::theme::{ThemeStore, document_stylesheet, root_class_script};
use crate::timer;
use crate::types::ThemeMode;
use crate::views::{
    ChatView, CustomizeView, DashboardView, HomeView, LegalDocument, LegalView, SignInView,
    SignUpView,
};
use dioxus::prelude::*;
use std::time::Duration;
use time::OffsetDateTime;

const NEURA_CSS: Asset = asset!("/assets/neura.css");
const PAGE_TRANSITION: Duration = Duration::from_millis(800);
const PREFERS_DARK_QUERY: &str =
    "return window.matchMedia('(prefers-color-scheme: dark)').matches;";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppTab {
    Home,
    Chat,
    Customize,
    Dashboard,
    SignIn,
    SignUp,
    Privacy,
    Terms,
}

impl AppTab {
    pub const NAV: [AppTab; 4] = [AppTab::Home, AppTab::Chat, AppTab::Customize, AppTab::Dashboard];

    pub fn label(self) -> &'static str {
        match self {
            AppTab::Home => "Home",
            AppTab::Chat => "Chat",
            AppTab::Customize => "Customize",
            AppTab::Dashboard => "Dashboard",
            AppTab::SignIn => "Sign in",
            AppTab::SignUp => "Sign up",
            AppTab::Privacy => "Privacy",
            AppTab::Terms => "Terms",
        }
    }
}

/// The app-wide theme store provided by [`App`].
pub fn use_theme() -> Signal<ThemeStore> {
    use_context::<Signal<ThemeStore>>()
}

/// The app-wide mood store provided by [`App`].
pub fn use_mood() -> Signal<MoodStore> {
    use_context::<Signal<MoodStore>>()
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(config::current);
    let local = use_hook(|| storage::local_storage(config.storage_dir.clone()));
    let auth = use_context_provider(|| SessionAuth::new(storage::session_storage()));
    let theme = use_context_provider(|| {
        Signal::new(ThemeStore::load(local.clone(), None, config.default_theme))
    });
    use_context_provider(|| Signal::new(MoodStore::new()));
    let user = use_signal(|| auth.current_user());
    let active_tab = use_signal(|| AppTab::Home);
    let loading = use_signal(|| true);

    use_os_theme_preference(theme, local, config.default_theme);
    use_page_transition(active_tab, loading);

    rsx! {
        ThemeStyles {}
        PageLoader { visible: loading() }
        div { class: "layout",
            AppHeader { active_tab, user }
            main { class: "content",
                TabPanels { active_tab, user }
            }
            AppFooter { active_tab }
        }
    }
}

/// Re-resolve the theme once the OS colour scheme is known. A stored preference
/// still wins inside [`ThemeStore::load`].
fn use_os_theme_preference(theme: Signal<ThemeStore>, storage: SharedStore, fallback: ThemeMode) {
    use_future(move || {
        let storage = storage.clone();
        let mut theme = theme;
        async move {
            match document::eval(PREFERS_DARK_QUERY).join::<bool>().await {
                Ok(prefers_dark) => {
                    theme.set(ThemeStore::load(storage, Some(prefers_dark), fallback));
                }
                Err(err) => tracing::debug!(error = ?err, "OS colour scheme unavailable"),
            }
        }
    });
}

/// Show the loader for a moment whenever the tab changes. A newer change
/// cancels the older timer.
fn use_page_transition(active_tab: Signal<AppTab>, loading: Signal<bool>) {
    let mut pending = use_signal(|| Option::<Task>::None);
    use_effect(move || {
        let tab = active_tab();
        tracing::debug!(?tab, "page transition");
        let mut control = loading;
        control.set(true);
        if let Some(previous) = pending.take() {
            previous.cancel();
        }
        let task = spawn(async move {
            timer::sleep(PAGE_TRANSITION).await;
            control.set(false);
        });
        pending.set(Some(task));
    });
}

#[component]
fn ThemeStyles() -> Element {
    let theme = use_theme();
    let mood = use_mood();
    let stylesheet = document_stylesheet(theme.read().mode(), mood.read().color());

    use_effect(move || {
        let mode = theme.read().mode();
        let eval = document::eval(&root_class_script(mode));
        spawn(async move {
            if let Err(err) = eval.join::<serde_json::Value>().await {
                tracing::debug!(error = ?err, %mode, "root theme class not applied");
            }
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: NEURA_CSS }
        style { dangerous_inner_html: "{stylesheet}" }
    }
}

#[component]
fn PageLoader(visible: bool) -> Element {
    let mood = use_mood();
    let mood_color = mood.read().color();
    let state = if visible { "visible" } else { "hidden" };
    rsx! {
        div { class: "page-loader {state}", aria_hidden: (!visible).to_string(),
            div { class: "loader-orb", style: "border-top-color: {mood_color}; box-shadow: 0 0 40px {mood_color};" }
            span { class: "loader-wordmark", "Neura AI" }
        }
    }
}

#[component]
fn AppHeader(active_tab: Signal<AppTab>, user: Signal<Option<SessionUser>>) -> Element {
    let mut active_tab = active_tab;
    let mut theme = use_theme();
    let mood = use_mood();
    let mood_color = mood.read().color();
    let (toggle_label, toggle_icon) = match theme.read().mode() {
        ThemeMode::Dark => ("Switch to light mode", "☀"),
        ThemeMode::Light => ("Switch to dark mode", "☾"),
    };

    rsx! {
        header { class: "header",
            div { class: "header-content",
                button {
                    class: "brand",
                    r#type: "button",
                    onclick: move |_| active_tab.set(AppTab::Home),
                    span { class: "brand-dot", style: "background-color: {mood_color};" }
                    span { class: "brand-name", "Neura AI" }
                }
                TabNavigation { active_tab }
                div { class: "header-actions",
                    AccountControls { active_tab, user }
                    button {
                        class: "btn btn-ghost icon-btn",
                        r#type: "button",
                        aria_label: toggle_label,
                        title: toggle_label,
                        onclick: move |_| {
                            theme.write().toggle();
                        },
                        "{toggle_icon}"
                    }
                }
            }
        }
    }
}

#[component]
fn TabNavigation(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        nav { class: "tabs",
            for tab in AppTab::NAV {
                TabButton { key: "{tab.label()}", active_tab, tab }
            }
        }
    }
}

#[component]
fn TabButton(active_tab: Signal<AppTab>, tab: AppTab) -> Element {
    let mut active_tab = active_tab;
    let class = if active_tab() == tab {
        "tab active"
    } else {
        "tab"
    };
    rsx! {
        button {
            class: class,
            r#type: "button",
            onclick: move |_| active_tab.set(tab),
            "{tab.label()}"
        }
    }
}

#[component]
fn AccountControls(active_tab: Signal<AppTab>, user: Signal<Option<SessionUser>>) -> Element {
    let mut active_tab = active_tab;
    let mut user = user;
    let auth = use_context::<SessionAuth>();

    let signed_in = user.read().clone();
    match signed_in {
        Some(current) => rsx! {
            span { class: "account-email", "{current.email}" }
            button {
                class: "btn btn-ghost",
                r#type: "button",
                onclick: move |_| {
                    if let Err(err) = auth.sign_out() {
                        tracing::warn!(error = %err, "sign out failed");
                    }
                    user.set(None);
                },
                "Sign out"
            }
        },
        None => rsx! {
            button {
                class: "btn btn-ghost",
                r#type: "button",
                onclick: move |_| active_tab.set(AppTab::SignIn),
                "Sign in"
            }
        },
    }
}

#[component]
fn TabPanels(active_tab: Signal<AppTab>, user: Signal<Option<SessionUser>>) -> Element {
    // Only the active page is mounted, so leaving a page tears down its timers.
    match active_tab() {
        AppTab::Home => rsx! { HomeView { active_tab } },
        AppTab::Chat => rsx! { ChatView {} },
        AppTab::Customize => rsx! { CustomizeView {} },
        AppTab::Dashboard => rsx! { DashboardView {} },
        AppTab::SignIn => rsx! { SignInView { active_tab, user } },
        AppTab::SignUp => rsx! { SignUpView { active_tab, user } },
        AppTab::Privacy => rsx! { LegalView { document: LegalDocument::Privacy } },
        AppTab::Terms => rsx! { LegalView { document: LegalDocument::Terms } },
    }
}

#[component]
fn AppFooter(active_tab: Signal<AppTab>) -> Element {
    let mut active_tab = active_tab;
    let year = OffsetDateTime::now_utc().year();
    rsx! {
        footer { class: "footer",
            p { "© {year} Neura AI. Your digital doppelganger." }
            div { class: "footer-links",
                button {
                    class: "link-btn",
                    r#type: "button",
                    onclick: move |_| active_tab.set(AppTab::Privacy),
                    "Privacy Policy"
                }
                button {
                    class: "link-btn",
                    r#type: "button",
                    onclick: move |_| active_tab.set(AppTab::Terms),
                    "Terms of Service"
                }
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[component]
    fn StylesOnly() -> Element {
        use_context_provider(|| {
            Signal::new(ThemeStore::load(MemoryStore::shared(), None, ThemeMode::Light))
        });
        use_context_provider(|| Signal::new(MoodStore::new()));
        rsx! {
            ThemeStyles {}
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_theme_styles_survive_failed_eval() {
        // No renderer here, so the root class script fails and is only logged
        let mut dom = VirtualDom::new(StylesOnly);
        dom.rebuild_in_place();
        for _ in 0..3 {
            let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
            let _ = dom.render_immediate_to_vec();
        }

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("--color-mood: #9f9ea1"), "{html}");
    }

    #[test]
    fn test_nav_tabs_have_labels() {
        let labels: Vec<_> = AppTab::NAV.iter().map(|tab| tab.label()).collect();
        assert_eq!(labels, ["Home", "Chat", "Customize", "Dashboard"]);
    }
}
