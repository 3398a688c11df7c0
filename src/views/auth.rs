use crate::auth::{AuthError, SessionAuth, SessionUser};
use crate::ui::AppTab;
use dioxus::prelude::*;

fn finish(
    result: Result<SessionUser, AuthError>,
    mut user: Signal<Option<SessionUser>>,
    mut active_tab: Signal<AppTab>,
    mut error: Signal<Option<String>>,
) {
    match result {
        Ok(signed_in) => {
            error.set(None);
            user.set(Some(signed_in));
            active_tab.set(AppTab::Dashboard);
        }
        Err(err) => {
            tracing::debug!(error = %err, "sign in rejected");
            error.set(Some(err.to_string()));
        }
    }
}

#[component]
pub fn SignInView(active_tab: Signal<AppTab>, user: Signal<Option<SessionUser>>) -> Element {
    let mut active_tab = active_tab;
    let auth = use_context::<SessionAuth>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let error = use_signal(|| Option::<String>::None);

    rsx! {
        div { class: "main-container auth-page",
            div { class: "card auth-card",
                h2 { "Welcome back" }
                p { class: "text-muted", "Sign in to continue with your doppelganger." }
                label { class: "field",
                    span { "Email" }
                    input {
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: "{email}",
                        oninput: move |ev| email.set(ev.value()),
                    }
                }
                label { class: "field",
                    span { "Password" }
                    input {
                        r#type: "password",
                        value: "{password}",
                        oninput: move |ev| password.set(ev.value()),
                    }
                }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let result = auth.sign_in(&email(), &password());
                        finish(result, user, active_tab, error);
                    },
                    "Sign in"
                }
                p { class: "auth-switch",
                    "Don't have an account? "
                    button {
                        class: "link-btn",
                        r#type: "button",
                        onclick: move |_| active_tab.set(AppTab::SignUp),
                        "Sign up"
                    }
                }
            }
        }
    }
}

#[component]
pub fn SignUpView(active_tab: Signal<AppTab>, user: Signal<Option<SessionUser>>) -> Element {
    let mut active_tab = active_tab;
    let auth = use_context::<SessionAuth>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let error = use_signal(|| Option::<String>::None);

    rsx! {
        div { class: "main-container auth-page",
            div { class: "card auth-card",
                h2 { "Create your doppelganger" }
                p { class: "text-muted", "It only takes a moment." }
                label { class: "field",
                    span { "Email" }
                    input {
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: "{email}",
                        oninput: move |ev| email.set(ev.value()),
                    }
                }
                label { class: "field",
                    span { "Password" }
                    input {
                        r#type: "password",
                        value: "{password}",
                        oninput: move |ev| password.set(ev.value()),
                    }
                }
                label { class: "field",
                    span { "Confirm password" }
                    input {
                        r#type: "password",
                        value: "{confirm}",
                        oninput: move |ev| confirm.set(ev.value()),
                    }
                }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let result = auth.sign_up(&email(), &password(), &confirm());
                        finish(result, user, active_tab, error);
                    },
                    "Sign up"
                }
                p { class: "auth-switch",
                    "Already have an account? "
                    button {
                        class: "link-btn",
                        r#type: "button",
                        onclick: move |_| active_tab.set(AppTab::SignIn),
                        "Sign in"
                    }
                }
            }
        }
    }
}
