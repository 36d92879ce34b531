//! Runtime services for the Corexia console: configuration, the
//! persisted app-state store, the platform API client, authentication,
//! and remote-with-fallback data sources.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod inference;
pub mod source;
pub mod store;

pub use client::ApiClient;
pub use config::{resolve_data_dir, ApiConfig, Config, UiConfig, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use inference::InferenceRun;
pub use source::{DataSource, LoadPayload, LoadResult, Loader, Origin, Resource, Snapshot};
pub use store::{AppStore, FileBackend, Locale, MemoryBackend, StateBackend, StateChange, User};
