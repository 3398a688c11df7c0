use crate::storage::SharedStore;
use crate::types::ThemeMode;

pub const THEME_STORAGE_KEY: &str = "theme";

/// Everything the root document needs for a mode: the class to set on the root
/// element, the one to remove, body colours and the CSS variable block.
pub struct ThemeDefinition {
    pub root_class: &'static str,
    pub stale_class: &'static str,
    pub body_background: &'static str,
    pub body_foreground: &'static str,
    pub particle_color: &'static str,
    pub css: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            root_class: "dark",
            stale_class: "light",
            body_background: "#000",
            body_foreground: "#fff",
            particle_color: "#ffffff",
            css: DARK_THEME,
        },
        ThemeMode::Light => ThemeDefinition {
            root_class: "light",
            stale_class: "dark",
            body_background: "#fff",
            body_foreground: "#000",
            particle_color: "#000000",
            css: LIGHT_THEME,
        },
    }
}

/// Stylesheet for `mode` with the mood accent injected as `--color-mood`.
pub fn document_stylesheet(mode: ThemeMode, mood_color: &str) -> String {
    let definition = theme_definition(mode);
    format!(
        "{css}\n:root {{ --color-mood: {mood_color}; }}\nbody {{ background-color: {bg}; color: {fg}; }}\n",
        css = definition.css,
        bg = definition.body_background,
        fg = definition.body_foreground,
    )
}

/// Script that swaps the root element's mode class. Running it twice for the
/// same mode leaves the document unchanged.
pub fn root_class_script(mode: ThemeMode) -> String {
    let definition = theme_definition(mode);
    format!(
        "document.documentElement.classList.add('{add}'); document.documentElement.classList.remove('{remove}');",
        add = definition.root_class,
        remove = definition.stale_class,
    )
}

/// Persisted light/dark preference.
#[derive(Clone)]
pub struct ThemeStore {
    mode: ThemeMode,
    storage: SharedStore,
}

impl ThemeStore {
    /// Resolve the starting mode: stored preference, then the OS preference,
    /// then `fallback`. Nothing is written until the mode is toggled.
    pub fn load(storage: SharedStore, os_prefers_dark: Option<bool>, fallback: ThemeMode) -> Self {
        let stored = match storage.get(THEME_STORAGE_KEY) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(error = %err, "theme preference unreadable");
                None
            }
        };
        let stored_mode = stored.as_deref().and_then(|raw| match raw.parse::<ThemeMode>() {
            Ok(mode) => Some(mode),
            Err(err) => {
                tracing::debug!(error = %err, "ignoring malformed theme preference");
                None
            }
        });
        let os_mode = os_prefers_dark.map(|dark| if dark { ThemeMode::Dark } else { ThemeMode::Light });
        let mode = stored_mode.or(os_mode).unwrap_or(fallback);

        Self { mode, storage }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn definition(&self) -> ThemeDefinition {
        theme_definition(self.mode)
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        tracing::info!(mode = %self.mode, "theme toggled");
        self.persist();
        self.mode
    }

    fn persist(&self) {
        if let Err(err) = self.storage.set(THEME_STORAGE_KEY, self.mode.as_str()) {
            tracing::warn!(error = %err, "failed to persist theme preference");
        }
    }
}

impl PartialEq for ThemeStore {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode && std::sync::Arc::ptr_eq(&self.storage, &other.storage)
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #000000;
    --color-bg-secondary: #0a0a0a;
    --color-bg-overlay: rgba(0, 0, 0, 0.8);
    --color-text-primary: #ffffff;
    --color-text-muted: #a1a1aa;
    --color-border: #27272a;
    --color-surface-muted: #18181b;
    --color-input-bg: #000000;
    --color-input-border: #3f3f46;
    --color-chat-user-bg: #ffffff;
    --color-chat-user-text: #000000;
    --color-chat-ai-bg: #18181b;
    --color-chat-ai-text: #ffffff;
    --color-orb-background: #0a0a0a;
    --color-progress-track: #27272a;
    --color-error: #ef4444;
}
.header { background: var(--color-bg-overlay); }
.btn:hover,
.btn-ghost:hover { background: var(--color-surface-muted); }
.composer input { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.card { background: var(--color-bg-secondary); border-color: var(--color-border); }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-secondary: #f5f5f5;
    --color-bg-overlay: rgba(255, 255, 255, 0.8);
    --color-text-primary: #000000;
    --color-text-muted: #52525b;
    --color-border: #e4e4e7;
    --color-surface-muted: #f4f4f5;
    --color-input-bg: #ffffff;
    --color-input-border: #d4d4d8;
    --color-chat-user-bg: #111111;
    --color-chat-user-text: #ffffff;
    --color-chat-ai-bg: #f4f4f5;
    --color-chat-ai-text: #000000;
    --color-orb-background: #1a1a1a;
    --color-progress-track: #e4e4e7;
    --color-error: #dc2626;
}
.header { background: var(--color-bg-overlay); }
.btn { color: var(--color-text-primary); }
.btn:hover,
.btn-ghost:hover { background: var(--color-surface-muted); }
.composer input { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.card { background: var(--color-bg-secondary); border-color: var(--color-border); }
"#;
