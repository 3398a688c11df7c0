//! Key/value storage backing the theme preference and the mock session.
//!
//! Two scopes exist, mirroring what a browser page gets:
//! - local storage survives restarts (files on native, `window.localStorage` on wasm)
//! - session storage lives as long as the running app (`window.sessionStorage` on wasm)

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

#[cfg(not(target_arch = "wasm32"))]
use std::fs;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage lock poisoned")]
    Poisoned,

    #[error("browser {0} storage is unavailable")]
    Unavailable(&'static str),

    #[error("browser storage rejected {key}: {message}")]
    Browser { key: String, message: String },
}

pub type StorageResult<T> = Result<T, StorageError>;

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

pub type SharedStore = Arc<dyn KeyValueStore>;

// ============================================
// In-memory backend
// ============================================

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

// ============================================
// File backend (native platforms)
// ============================================

/// One file per key inside `dir`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.txt", sanitize_key(key)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|source| StorageError::Io { path, source })
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }
}

// ============================================
// Browser backend
// ============================================

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WebScope {
    Local,
    Session,
}

#[cfg(target_arch = "wasm32")]
impl WebScope {
    fn as_str(self) -> &'static str {
        match self {
            WebScope::Local => "local",
            WebScope::Session => "session",
        }
    }
}

/// `window.localStorage` or `window.sessionStorage`. The handle is looked up
/// per call since `web_sys::Storage` cannot be shared across threads.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug)]
pub struct WebStorage {
    scope: WebScope,
}

#[cfg(target_arch = "wasm32")]
impl WebStorage {
    pub fn new(scope: WebScope) -> Self {
        Self { scope }
    }

    fn storage(&self) -> StorageResult<web_sys::Storage> {
        let window = web_sys::window().ok_or(StorageError::Unavailable(self.scope.as_str()))?;
        let storage = match self.scope {
            WebScope::Local => window.local_storage(),
            WebScope::Session => window.session_storage(),
        };
        storage
            .ok()
            .flatten()
            .ok_or(StorageError::Unavailable(self.scope.as_str()))
    }
}

#[cfg(target_arch = "wasm32")]
fn browser_error(key: &str, err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Browser {
        key: key.to_string(),
        message: format!("{err:?}"),
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|err| browser_error(key, err))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| browser_error(key, err))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|err| browser_error(key, err))
    }
}

// ============================================
// Scopes
// ============================================

/// Default directory for persisted preferences on native platforms.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_storage_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        return data_dir.join("neura").join("local_storage");
    }

    PathBuf::from("cache").join("local_storage")
}

/// Local storage scope. `dir_override` replaces the platform data directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn local_storage(dir_override: Option<PathBuf>) -> SharedStore {
    let dir = dir_override.unwrap_or_else(default_storage_dir);
    tracing::debug!(dir = %dir.display(), "using file-backed local storage");
    Arc::new(FileStore::new(dir))
}

#[cfg(target_arch = "wasm32")]
pub fn local_storage(_dir_override: Option<PathBuf>) -> SharedStore {
    Arc::new(WebStorage::new(WebScope::Local))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn session_storage() -> SharedStore {
    MemoryStore::shared()
}

#[cfg(target_arch = "wasm32")]
pub fn session_storage() -> SharedStore {
    Arc::new(WebStorage::new(WebScope::Session))
}

/// Sanitize storage key for filesystem use
#[cfg(not(target_arch = "wasm32"))]
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("theme"), "theme");
        assert_eq!(sanitize_key("user:preferences"), "user_preferences");
        assert_eq!(sanitize_key("../escape"), "___escape");
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme").unwrap(), None);

        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));

        store.remove("theme").unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_session_scopes_are_isolated() {
        let first = session_storage();
        let second = session_storage();
        first.set("user", "{}").unwrap();
        assert!(second.get("user").unwrap().is_none());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_outlives_the_handle() {
        local_storage(None).set("theme", "light").unwrap();

        // A fresh handle reads the same browser store, as after a reload
        let reopened = local_storage(None);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("light"));

        reopened.remove("theme").unwrap();
        assert_eq!(local_storage(None).get("theme").unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_session_scope_is_separate_from_local() {
        session_storage().set("user", "{}").unwrap();
        assert_eq!(local_storage(None).get("user").unwrap(), None);
        assert_eq!(session_storage().get("user").unwrap().as_deref(), Some("{}"));
        session_storage().remove("user").unwrap();
    }
}
