//! Shared command context: resolved data directory, loaded config and
//! the persisted app-state store.

use anyhow::Result;
use corexia_runtime::{
    resolve_data_dir, ApiClient, AppStore, Config, DataSource, FileBackend,
};
use std::path::PathBuf;

pub struct CliContext {
    pub data_dir: PathBuf,
    pub config: Config,
    pub store: AppStore,
}

impl CliContext {
    pub fn open(data_dir_flag: Option<&str>) -> Result<Self> {
        let data_dir = resolve_data_dir(data_dir_flag)?;
        let config = Config::load_from(&Config::path_in(&data_dir))?;
        let backend = FileBackend::open(FileBackend::default_path(&data_dir))?;
        let store = AppStore::open(Box::new(backend))?;

        Ok(Self {
            data_dir,
            config,
            store,
        })
    }

    /// Build the data source for this invocation. Offline mode skips
    /// the API client entirely.
    pub fn data_source(&self, offline: bool) -> Result<DataSource> {
        if offline {
            return Ok(DataSource::offline());
        }
        let client = ApiClient::new(&self.config.api)?
            .with_token(self.store.token().map(str::to_string));
        Ok(DataSource::new(Some(client)))
    }

    /// API client for the auth flow, `None` in offline mode.
    pub fn api_client(&self, offline: bool) -> Result<Option<ApiClient>> {
        if offline {
            return Ok(None);
        }
        Ok(Some(ApiClient::new(&self.config.api)?))
    }
}
