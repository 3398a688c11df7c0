use crate::chat::{ChatSimulator, format_timestamp};
use crate::config::AppConfig;
use crate::mood::MoodStore;
use crate::timer;
use crate::types::ChatMessage;
use crate::ui::use_mood;
use crate::views::avatar::Avatar;
use crate::views::shared::MoodPicker;
use dioxus::events::Key;
use dioxus::prelude::*;
use std::time::Duration;

/// Chat state shared by the page's handlers. Owns the pending reply task; the
/// task is cancelled when the owning component unmounts.
#[derive(Clone, Copy)]
pub struct ChatSession {
    simulator: Signal<ChatSimulator>,
    reply_task: Signal<Option<Task>>,
    mood: Signal<MoodStore>,
    reply_delay: Duration,
}

impl ChatSession {
    /// Submit `text` and schedule the canned reply. Returns false when the
    /// simulator rejects the submission.
    pub fn send(&mut self, text: &str) -> bool {
        let Some(pending) = self.simulator.write().submit(text, &mut self.mood.write()) else {
            return false;
        };

        let mut simulator = self.simulator;
        let mut reply_task = self.reply_task;
        let reply_delay = self.reply_delay;
        let task = spawn(async move {
            timer::sleep(reply_delay).await;
            let mut rng = rand::thread_rng();
            if let Some(reply) = simulator.write().resolve(pending, &mut rng) {
                tracing::debug!(id = %reply.id, "reply delivered");
            }
            reply_task.set(None);
        });
        self.reply_task.set(Some(task));
        true
    }
}

/// Wire `simulator` to the app's mood store and configured reply delay.
pub fn use_chat_session(simulator: Signal<ChatSimulator>) -> ChatSession {
    let reply_task = use_signal(|| Option::<Task>::None);
    let mood = use_mood();
    let reply_delay = use_context::<AppConfig>().reply_delay;

    // Leaving the page abandons an owed reply; the signals may already be gone.
    use_drop(move || {
        let mut reply_task = reply_task;
        let mut simulator = simulator;
        if let Ok(mut slot) = reply_task.try_write()
            && let Some(task) = slot.take()
        {
            task.cancel();
        }
        if let Ok(mut state) = simulator.try_write() {
            state.cancel_pending();
        }
    });

    ChatSession {
        simulator,
        reply_task,
        mood,
        reply_delay,
    }
}

#[component]
pub fn ChatView() -> Element {
    let simulator = use_signal(ChatSimulator::new);
    let mut input = use_signal(String::new);
    let mood = use_mood();
    let session = use_chat_session(simulator);

    let mut send_message = {
        let mut session = session;
        let mut input_signal = input;
        move |text: String| {
            if session.send(&text) {
                input_signal.set(String::new());
            }
        }
    };

    let processing = simulator.read().is_processing();
    let messages = simulator.read().messages().to_vec();
    let accent = mood.read().color();

    rsx! {
        div { class: "main-container chat-page",
            section { class: "chat-avatar-panel",
                Avatar { processing }
                MoodPicker {}
            }
            section { class: "chat-wrap",
                div { id: "chat-list", class: "chat-list",
                    for message in messages {
                        MessageBubble { key: "{message.id}", message, accent }
                    }
                }
                if processing {
                    div { class: "shimmer-line",
                        span { class: "shimmer-text", "Neura is thinking..." }
                    }
                }
                div { class: "composer",
                    div { class: "composer-inner",
                        input {
                            r#type: "text",
                            placeholder: "Type your message...",
                            value: "{input}",
                            disabled: processing,
                            autofocus: true,
                            oninput: move |ev| input.set(ev.value()),
                            onkeydown: move |ev| {
                                if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                    ev.prevent_default();
                                    send_message(input());
                                }
                            },
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: processing || input().trim().is_empty(),
                            onclick: move |_| send_message(input()),
                            "Send"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: ChatMessage, accent: &'static str) -> Element {
    let side = if message.is_ai() { "assistant" } else { "user" };
    let border = if message.is_ai() {
        format!("border-color: {accent};")
    } else {
        String::new()
    };
    rsx! {
        div { class: "message-row {side}",
            div { class: "message-stack",
                div { class: "bubble {side}", style: "{border}", "{message.text}" }
                if let Some(ts) = format_timestamp(message.timestamp) {
                    div { class: "message-meta",
                        span { class: "message-timestamp", "{ts}" }
                    }
                }
            }
        }
    }
}
