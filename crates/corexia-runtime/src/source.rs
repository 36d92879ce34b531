//! Resource data sources.
//!
//! A [`DataSource`] resolves each resource collection either from the
//! platform API or from the static fixtures, and always reports which
//! one it used. The [`Loader`] runs loads on worker threads tagged with
//! a generation counter; a superseded load is simply discarded and the
//! list pipeline only ever sees fully resolved collections.

use crate::client::ApiClient;
use crate::fixtures;
use corexia_types::{Dataset, Evaluation, FinetuneJob, Model};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::Arc;

/// Where a resolved collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Remote,
    Fixture,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Remote => "remote",
            Origin::Fixture => "fixture",
        }
    }
}

/// A resolved collection plus its provenance. `notice` carries the
/// reason for a fixture fallback so the renderer can surface it.
#[derive(Debug, Clone)]
pub struct Snapshot<R> {
    pub data: Vec<R>,
    pub origin: Origin,
    pub notice: Option<String>,
}

impl<R> Snapshot<R> {
    fn remote(data: Vec<R>) -> Self {
        Self {
            data,
            origin: Origin::Remote,
            notice: None,
        }
    }

    fn fixture(data: Vec<R>, notice: Option<String>) -> Self {
        Self {
            data,
            origin: Origin::Fixture,
            notice,
        }
    }
}

/// Resolves resource collections, remote first with fixture fallback.
pub struct DataSource {
    client: Option<ApiClient>,
}

impl DataSource {
    pub fn new(client: Option<ApiClient>) -> Self {
        Self { client }
    }

    pub fn offline() -> Self {
        Self { client: None }
    }

    /// Datasets come from `GET /datasets` when the API is reachable.
    pub fn datasets(&self) -> Snapshot<Dataset> {
        match &self.client {
            Some(client) => match client.list_datasets() {
                Ok(data) => Snapshot::remote(data),
                Err(err) => Snapshot::fixture(
                    fixtures::datasets(),
                    Some(format!("falling back to sample data: {}", err)),
                ),
            },
            None => Snapshot::fixture(fixtures::datasets(), None),
        }
    }

    // The platform API does not expose these resources yet; they are
    // fixture-backed in every mode.

    pub fn models(&self) -> Snapshot<Model> {
        Snapshot::fixture(fixtures::models(), None)
    }

    pub fn finetunes(&self) -> Snapshot<FinetuneJob> {
        Snapshot::fixture(fixtures::finetunes(), None)
    }

    pub fn evaluations(&self) -> Snapshot<Evaluation> {
        Snapshot::fixture(fixtures::evaluations(), None)
    }
}

/// Which collection a load request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Datasets,
    Finetunes,
    Models,
    Evaluations,
}

impl Resource {
    pub const COUNT: usize = 4;

    fn index(&self) -> usize {
        match self {
            Resource::Datasets => 0,
            Resource::Finetunes => 1,
            Resource::Models => 2,
            Resource::Evaluations => 3,
        }
    }
}

/// Payload of a completed load.
pub enum LoadPayload {
    Datasets(Snapshot<Dataset>),
    Finetunes(Snapshot<FinetuneJob>),
    Models(Snapshot<Model>),
    Evaluations(Snapshot<Evaluation>),
}

pub struct LoadResult {
    resource: Resource,
    generation: u64,
    pub payload: LoadPayload,
}

/// Generation-counted background loader.
///
/// `request` bumps the resource's generation and spawns the load;
/// `try_recv` drops any result whose generation is no longer current
/// for its resource, which is how an in-flight load is abandoned when
/// a newer load of the same resource is requested. Loads of different
/// resources run concurrently without superseding each other.
pub struct Loader {
    source: Arc<DataSource>,
    counter: AtomicU64,
    latest: [AtomicU64; Resource::COUNT],
    tx: Sender<LoadResult>,
    rx: Receiver<LoadResult>,
}

impl Loader {
    pub fn new(source: DataSource) -> Self {
        let (tx, rx) = channel();
        Self {
            source: Arc::new(source),
            counter: AtomicU64::new(0),
            latest: [const { AtomicU64::new(0) }; Resource::COUNT],
            tx,
            rx,
        }
    }

    /// Start a load, superseding any in-flight one for the same
    /// resource. Returns the new generation.
    pub fn request(&self, resource: Resource) -> u64 {
        let generation = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        self.latest[resource.index()].store(generation, Ordering::SeqCst);
        let source = self.source.clone();
        let tx = self.tx.clone();

        std::thread::spawn(move || {
            let payload = match resource {
                Resource::Datasets => LoadPayload::Datasets(source.datasets()),
                Resource::Finetunes => LoadPayload::Finetunes(source.finetunes()),
                Resource::Models => LoadPayload::Models(source.models()),
                Resource::Evaluations => LoadPayload::Evaluations(source.evaluations()),
            };
            // The receiver may already be gone on shutdown
            let _ = tx.send(LoadResult {
                resource,
                generation,
                payload,
            });
        });

        generation
    }

    /// Next current-generation result, if one has arrived. Stale
    /// results are consumed and dropped.
    pub fn try_recv(&self) -> Option<LoadResult> {
        loop {
            match self.rx.try_recv() {
                Ok(result) => {
                    let current = self.latest[result.resource.index()].load(Ordering::SeqCst);
                    if result.generation == current {
                        return Some(result);
                    }
                    // Superseded load: abandon the result
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_offline_source_serves_fixtures() {
        let source = DataSource::offline();
        let snapshot = source.datasets();
        assert_eq!(snapshot.origin, Origin::Fixture);
        assert_eq!(snapshot.data.len(), 3);
        assert!(snapshot.notice.is_none());
    }

    #[test]
    fn test_unreachable_api_falls_back_with_notice() {
        let config = crate::config::ApiConfig {
            // Reserved TEST-NET-1 address: connection refused/timeout
            base_url: "http://192.0.2.1:1".to_string(),
            timeout_secs: 1,
        };
        let client = ApiClient::new(&config).unwrap();
        let source = DataSource::new(Some(client));

        let snapshot = source.datasets();
        assert_eq!(snapshot.origin, Origin::Fixture);
        assert_eq!(snapshot.data.len(), 3);
        assert!(snapshot.notice.is_some());
    }

    #[test]
    fn test_loader_delivers_current_generation() {
        let loader = Loader::new(DataSource::offline());
        loader.request(Resource::Datasets);

        let result = wait_for(&loader);
        match result.payload {
            LoadPayload::Datasets(snapshot) => assert_eq!(snapshot.data.len(), 3),
            _ => panic!("unexpected payload"),
        }
    }

    #[test]
    fn test_stale_generation_is_dropped() {
        let loader = Loader::new(DataSource::offline());
        let first = loader.request(Resource::Datasets);
        let second = loader.request(Resource::Datasets);
        assert!(second > first);

        // Both loads complete, but only the newer one is delivered
        let result = wait_for(&loader);
        assert!(matches!(result.payload, LoadPayload::Datasets(_)));
        assert_eq!(result.generation, second);

        std::thread::sleep(Duration::from_millis(50));
        assert!(loader.try_recv().is_none(), "stale result delivered");
    }

    #[test]
    fn test_loads_of_different_resources_do_not_supersede() {
        let loader = Loader::new(DataSource::offline());
        loader.request(Resource::Datasets);
        loader.request(Resource::Finetunes);
        loader.request(Resource::Models);
        loader.request(Resource::Evaluations);

        let mut delivered = 0;
        for _ in 0..200 {
            if loader.try_recv().is_some() {
                delivered += 1;
            }
            if delivered == 4 {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(delivered, 4);
    }

    fn wait_for(loader: &Loader) -> LoadResult {
        for _ in 0..200 {
            if let Some(result) = loader.try_recv() {
                return result;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("load did not complete");
    }
}
