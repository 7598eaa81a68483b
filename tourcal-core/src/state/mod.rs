//! Process-wide session state.
//!
//! State is read from a [`KeyValueStore`] once at startup, written back on
//! every setter call and wiped by [`AppState::reset`].

mod kv;

use chrono::Utc;
use tracing::warn;

pub use kv::{FileStore, KeyValueStore, MemoryStore};

use crate::error::TourCalResult;
use crate::locale::Language;

const LANGUAGE_KEY: &str = "language";
const ADMIN_KEY: &str = "admin_authenticated";
const CHAT_SESSION_KEY: &str = "chat_session";

/// Language preference, admin flag and chat session id.
pub struct AppState<S: KeyValueStore> {
    store: S,
    language: Language,
    admin_authenticated: bool,
    chat_session: Option<String>,
}

impl<S: KeyValueStore> AppState<S> {
    /// Initialize from whatever the store already holds.
    pub fn load(store: S) -> Self {
        let language = match store.get(LANGUAGE_KEY) {
            Some(code) => Language::parse(&code).unwrap_or_else(|| {
                warn!(language = %code, "ignoring unknown stored language");
                Language::default()
            }),
            None => Language::default(),
        };
        let admin_authenticated = store.get(ADMIN_KEY).as_deref() == Some("true");
        let chat_session = store.get(CHAT_SESSION_KEY);

        AppState {
            store,
            language,
            admin_authenticated,
            chat_session,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) -> TourCalResult<()> {
        self.store.set(LANGUAGE_KEY, language.code())?;
        self.language = language;
        Ok(())
    }

    pub fn is_admin(&self) -> bool {
        self.admin_authenticated
    }

    pub fn set_admin(&mut self, authenticated: bool) -> TourCalResult<()> {
        if authenticated {
            self.store.set(ADMIN_KEY, "true")?;
        } else {
            self.store.remove(ADMIN_KEY)?;
        }
        self.admin_authenticated = authenticated;
        Ok(())
    }

    /// Set the admin flag if `attempt` matches `password`.
    ///
    /// A wrong attempt leaves the flag untouched.
    pub fn log_in(&mut self, attempt: &str, password: &str) -> TourCalResult<bool> {
        if attempt != password {
            warn!("rejected admin login");
            return Ok(false);
        }
        self.set_admin(true)?;
        Ok(true)
    }

    /// Current chat session id, created and persisted on first use.
    pub fn chat_session(&mut self) -> TourCalResult<String> {
        if let Some(id) = &self.chat_session {
            return Ok(id.clone());
        }
        let id = generate_session_id();
        self.store.set(CHAT_SESSION_KEY, &id)?;
        self.chat_session = Some(id.clone());
        Ok(id)
    }

    /// Clear everything (logout) and fall back to defaults.
    pub fn reset(&mut self) -> TourCalResult<()> {
        self.store.clear()?;
        self.language = Language::default();
        self.admin_authenticated = false;
        self.chat_session = None;
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// `session_<unix millis>_<9 base36 chars>`
pub fn generate_session_id() -> String {
    const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let mut n = uuid::Uuid::new_v4().as_u128();
    let mut suffix = String::with_capacity(9);
    for _ in 0..9 {
        suffix.push(ALPHABET[(n % 36) as usize] as char);
        n /= 36;
    }

    format!("session_{}_{}", Utc::now().timestamp_millis(), suffix)
}
