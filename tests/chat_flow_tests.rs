//! Integration tests for the simulated conversation
//!
//! Drives the chat simulator through tokio's paused clock the way the chat page
//! does: submit, wait out the reply delay, resolve.

use neura::chat::{CANNED_REPLIES, ChatSimulator, Phase};
use neura::config::DEFAULT_REPLY_DELAY;
use neura::mood::{Mood, MoodStore};
use neura::types::Sender;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct Session {
    chat: Mutex<ChatSimulator>,
    mood: Mutex<MoodStore>,
}

impl Session {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            chat: Mutex::new(ChatSimulator::new()),
            mood: Mutex::new(MoodStore::new()),
        })
    }

    /// Submit `text` and schedule the reply after the default delay.
    fn send(self: &Arc<Self>, text: &str) -> Option<tokio::task::JoinHandle<()>> {
        let pending = {
            let mut mood = self.mood.lock().unwrap();
            self.chat.lock().unwrap().submit(text, &mut mood)?
        };
        let session = Arc::clone(self);
        Some(tokio::spawn(async move {
            tokio::time::sleep(DEFAULT_REPLY_DELAY).await;
            let mut rng = StdRng::seed_from_u64(11);
            session.chat.lock().unwrap().resolve(pending, &mut rng);
        }))
    }

    fn phase(&self) -> Phase {
        self.chat.lock().unwrap().phase()
    }

    fn message_count(&self) -> usize {
        self.chat.lock().unwrap().messages().len()
    }
}

mod latency_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_reply_lands_after_delay() {
        let session = Session::new();
        let handle = session.send("hello there").expect("submission accepted");

        // Greeting plus the user message, no reply yet
        assert_eq!(session.message_count(), 2);
        assert_eq!(session.phase(), Phase::Processing);

        tokio::time::sleep(Duration::from_millis(1400)).await;
        assert_eq!(session.phase(), Phase::Processing);
        assert_eq!(session.message_count(), 2);

        tokio::time::sleep(Duration::from_millis(200)).await;
        handle.await.unwrap();
        assert_eq!(session.phase(), Phase::Idle);

        let chat = session.chat.lock().unwrap();
        let messages = chat.messages();
        assert_eq!(messages.len(), 3);
        let reply = &messages[2];
        assert_eq!(reply.sender, Sender::Ai);
        assert!(CANNED_REPLIES.contains(&reply.text.as_str()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submission_rejected_while_processing() {
        let session = Session::new();
        let handle = session.send("first").expect("submission accepted");
        assert!(session.send("second").is_none());
        assert_eq!(session.message_count(), 2);

        tokio::time::sleep(DEFAULT_REPLY_DELAY).await;
        handle.await.unwrap();
        assert!(session.send("second").is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_abandoned_reply_never_lands() {
        let session = Session::new();
        let handle = session.send("are you there?").expect("submission accepted");

        tokio::time::sleep(Duration::from_millis(500)).await;
        handle.abort();
        session.chat.lock().unwrap().cancel_pending();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(session.message_count(), 2);
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_ticket_after_cancel_appends_nothing() {
        let session = Session::new();
        // The task keeps running; only the simulator forgets the turn.
        let handle = session.send("hello").expect("submission accepted");
        session.chat.lock().unwrap().cancel_pending();

        tokio::time::sleep(DEFAULT_REPLY_DELAY).await;
        handle.await.unwrap();
        assert_eq!(session.message_count(), 2);
    }
}

mod mood_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_message_sets_mood_before_reply() {
        let session = Session::new();
        let handle = session
            .send("I'm having an amazing day")
            .expect("submission accepted");
        assert_eq!(session.mood.lock().unwrap().mood(), Mood::Excited);

        tokio::time::sleep(DEFAULT_REPLY_DELAY).await;
        handle.await.unwrap();
        assert_eq!(session.mood.lock().unwrap().mood(), Mood::Excited);
    }

    #[tokio::test(start_paused = true)]
    async fn test_neutral_text_keeps_mood() {
        let session = Session::new();
        session.mood.lock().unwrap().set_mood(Mood::Sad);
        let _handle = session.send("what time is it").expect("submission accepted");
        assert_eq!(session.mood.lock().unwrap().mood(), Mood::Sad);
    }
}
