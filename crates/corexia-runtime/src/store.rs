//! Application-state store.
//!
//! The global UI state of the console (auth session, locale,
//! sidebar-collapsed) lives here behind an explicit read/write/subscribe
//! contract, with persistence delegated to an injectable key-value
//! backend rather than being wired into any view.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const KEY_USER: &str = "corexia:user";
const KEY_TOKEN: &str = "corexia:token";
const KEY_LOCALE: &str = "corexia:locale";
const KEY_SIDEBAR: &str = "corexia:sidebar";

/// Key-value persistence behind the store.
pub trait StateBackend: Send {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Volatile backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: BTreeMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Write-through JSON file backend (one flat object of string values).
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileBackend {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    pub fn default_path(data_dir: &Path) -> PathBuf {
        data_dir.join("state.json")
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl StateBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        self.flush()
    }
}

/// Signed-in user of the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// UI locale preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    pub fn cycled(&self) -> Self {
        match self {
            Locale::En => Locale::Zh,
            Locale::Zh => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "zh" => Ok(Locale::Zh),
            other => Err(format!("unsupported locale '{}' (en|zh)", other)),
        }
    }
}

/// Which part of the state a committed write touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Session,
    Locale,
    Sidebar,
}

type Subscriber = Box<dyn Fn(StateChange) + Send>;

/// The store itself: hydrated from the backend on open, write-through
/// on every mutation, subscribers notified synchronously after each
/// committed write.
pub struct AppStore {
    backend: Box<dyn StateBackend>,
    user: Option<User>,
    token: Option<String>,
    locale: Locale,
    sidebar_collapsed: bool,
    subscribers: Vec<Subscriber>,
}

impl AppStore {
    pub fn open(backend: Box<dyn StateBackend>) -> Result<Self> {
        let user = match backend.get(KEY_USER)? {
            Some(raw) => Some(
                serde_json::from_str(&raw)
                    .map_err(|e| Error::State(format!("corrupt user entry: {}", e)))?,
            ),
            None => None,
        };
        let token = backend.get(KEY_TOKEN)?;
        let locale = backend
            .get(KEY_LOCALE)?
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        let sidebar_collapsed = backend.get(KEY_SIDEBAR)?.as_deref() == Some("1");

        Ok(Self {
            backend,
            user,
            token,
            locale,
            sidebar_collapsed,
            subscribers: Vec::new(),
        })
    }

    pub fn in_memory() -> Self {
        // MemoryBackend::get never fails, so open cannot either
        Self::open(Box::new(MemoryBackend::new())).expect("in-memory store")
    }

    pub fn subscribe(&mut self, callback: impl Fn(StateChange) + Send + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    fn notify(&self, change: StateChange) {
        for subscriber in &self.subscribers {
            subscriber(change);
        }
    }

    // Reads

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    // Writes

    pub fn set_session(&mut self, user: User, token: String) -> Result<()> {
        self.backend.set(KEY_USER, &serde_json::to_string(&user)?)?;
        self.backend.set(KEY_TOKEN, &token)?;
        self.user = Some(user);
        self.token = Some(token);
        self.notify(StateChange::Session);
        Ok(())
    }

    pub fn clear_session(&mut self) -> Result<()> {
        self.backend.remove(KEY_USER)?;
        self.backend.remove(KEY_TOKEN)?;
        self.user = None;
        self.token = None;
        self.notify(StateChange::Session);
        Ok(())
    }

    pub fn set_locale(&mut self, locale: Locale) -> Result<()> {
        self.backend.set(KEY_LOCALE, locale.as_str())?;
        self.locale = locale;
        self.notify(StateChange::Locale);
        Ok(())
    }

    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) -> Result<()> {
        self.backend
            .set(KEY_SIDEBAR, if collapsed { "1" } else { "0" })?;
        self.sidebar_collapsed = collapsed;
        self.notify(StateChange::Sidebar);
        Ok(())
    }
}
