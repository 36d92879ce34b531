use super::messages::Messages;
use crate::presentation::view_models::TableRow;
use crate::presentation::{presenters, ListViewModel};
use crate::schemas;
use anyhow::Result;
use corexia_engine::{run as run_pipeline, ListSchema, Page, QueryState};
use corexia_runtime::{
    AppStore, Config, DataSource, LoadPayload, Loader, Origin, Resource, Snapshot,
};
use corexia_types::{Dataset, Evaluation, FinetuneJob, Model, Record};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tab {
    Overview,
    Datasets,
    Finetunes,
    Models,
    Evaluations,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Overview,
        Tab::Datasets,
        Tab::Finetunes,
        Tab::Models,
        Tab::Evaluations,
        Tab::Settings,
    ];

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// One list tab: its schema, the live query and the latest snapshot.
pub(crate) struct ResourceState<R: Record> {
    schema: ListSchema<R>,
    pub query: QueryState,
    pub snapshot: Option<Snapshot<R>>,
    pub loading: bool,
}

impl<R: Record> ResourceState<R> {
    fn new(schema: ListSchema<R>, page_size: usize) -> Self {
        let mut query = QueryState::new(&schema);
        query.set_page_size(page_size);
        Self {
            schema,
            query,
            snapshot: None,
            loading: false,
        }
    }

    pub fn page(&self) -> Option<Page<R>> {
        self.snapshot
            .as_ref()
            .map(|s| run_pipeline(&s.data, &self.schema, &self.query))
    }

    fn total_items(&self) -> usize {
        self.snapshot.as_ref().map(|s| s.data.len()).unwrap_or(0)
    }
}

/// List operations shared across the typed resource states so the key
/// handler can act on whichever tab is current.
pub(crate) trait ListControl {
    fn cycle_sort(&mut self);
    fn toggle_direction(&mut self);
    fn commit_search(&mut self, term: String);
    fn next_page(&mut self);
    fn previous_page(&mut self);
    fn grow_page_size(&mut self);
    fn shrink_page_size(&mut self);
    fn search_term(&self) -> &str;
}

impl<R: Record> ListControl for ResourceState<R> {
    fn cycle_sort(&mut self) {
        let keys = self.schema.sort_keys();
        let at = keys
            .iter()
            .position(|k| *k == self.query.sort_key)
            .unwrap_or(0);
        let next = keys[(at + 1) % keys.len()];
        // Keys come from the schema itself, so this cannot be rejected
        let _ = self.query.set_sort(&self.schema, next);
    }

    fn toggle_direction(&mut self) {
        self.query.toggle_direction();
    }

    fn commit_search(&mut self, term: String) {
        self.query.set_search(term);
    }

    fn next_page(&mut self) {
        if let Some(page) = self.page()
            && page.current_page < page.total_pages
        {
            self.query.set_page(page.current_page + 1);
        }
    }

    fn previous_page(&mut self) {
        if let Some(page) = self.page() {
            self.query.set_page(page.current_page.saturating_sub(1));
        }
    }

    fn grow_page_size(&mut self) {
        self.query.set_page_size(self.query.page_size + 1);
    }

    fn shrink_page_size(&mut self) {
        self.query.set_page_size(self.query.page_size.saturating_sub(1));
    }

    fn search_term(&self) -> &str {
        &self.query.search_term
    }
}

/// Table content ready for the draw pass.
pub(crate) struct TableData {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    pub footer: String,
    pub notice: Option<String>,
    pub origin: Origin,
}

impl TableData {
    fn from_list<Row: Serialize + TableRow>(
        vm: ListViewModel<Row>,
        origin: Origin,
        messages: &Messages,
    ) -> Self {
        let rows = vm.items.iter().map(TableRow::cells).collect();
        let footer = format!(
            "{} {}/{} · {} {}",
            messages.page_label, vm.current_page, vm.total_pages, messages.sorted_by, vm.applied.sort
        );
        Self {
            headers: Row::headers().to_vec(),
            rows,
            footer,
            notice: vm.notice,
            origin,
        }
    }
}

pub(crate) struct DashboardApp {
    pub store: AppStore,
    pub config: Config,
    loader: Loader,
    pub tab: Tab,
    pub datasets: ResourceState<Dataset>,
    pub finetunes: ResourceState<FinetuneJob>,
    pub models: ResourceState<Model>,
    pub evaluations: ResourceState<Evaluation>,
    /// Some while the search prompt is open.
    pub search_input: Option<String>,
    pub should_quit: bool,
}

impl DashboardApp {
    pub fn new(store: AppStore, source: DataSource, config: Config) -> Result<Self> {
        let page_size = config.ui.page_size;
        let mut app = Self {
            store,
            config,
            loader: Loader::new(source),
            tab: Tab::Overview,
            datasets: ResourceState::new(schemas::datasets()?, page_size),
            finetunes: ResourceState::new(schemas::finetunes()?, page_size),
            models: ResourceState::new(schemas::models()?, page_size),
            evaluations: ResourceState::new(schemas::evaluations()?, page_size),
            search_input: None,
            should_quit: false,
        };
        app.reload_all();
        Ok(app)
    }

    pub fn reload_all(&mut self) {
        for resource in [
            Resource::Datasets,
            Resource::Finetunes,
            Resource::Models,
            Resource::Evaluations,
        ] {
            self.request(resource);
        }
    }

    fn request(&mut self, resource: Resource) {
        match resource {
            Resource::Datasets => self.datasets.loading = true,
            Resource::Finetunes => self.finetunes.loading = true,
            Resource::Models => self.models.loading = true,
            Resource::Evaluations => self.evaluations.loading = true,
        }
        self.loader.request(resource);
    }

    pub fn reload_current(&mut self) {
        match self.tab {
            Tab::Datasets => self.request(Resource::Datasets),
            Tab::Finetunes => self.request(Resource::Finetunes),
            Tab::Models => self.request(Resource::Models),
            Tab::Evaluations => self.request(Resource::Evaluations),
            Tab::Overview => self.reload_all(),
            Tab::Settings => {}
        }
    }

    /// Drain completed loads into the per-tab states.
    pub fn absorb_loads(&mut self) {
        while let Some(result) = self.loader.try_recv() {
            match result.payload {
                LoadPayload::Datasets(snapshot) => {
                    self.datasets.snapshot = Some(snapshot);
                    self.datasets.loading = false;
                }
                LoadPayload::Finetunes(snapshot) => {
                    self.finetunes.snapshot = Some(snapshot);
                    self.finetunes.loading = false;
                }
                LoadPayload::Models(snapshot) => {
                    self.models.snapshot = Some(snapshot);
                    self.models.loading = false;
                }
                LoadPayload::Evaluations(snapshot) => {
                    self.evaluations.snapshot = Some(snapshot);
                    self.evaluations.loading = false;
                }
            }
        }
    }

    pub fn current_list(&mut self) -> Option<&mut dyn ListControl> {
        match self.tab {
            Tab::Datasets => Some(&mut self.datasets),
            Tab::Finetunes => Some(&mut self.finetunes),
            Tab::Models => Some(&mut self.models),
            Tab::Evaluations => Some(&mut self.evaluations),
            Tab::Overview | Tab::Settings => None,
        }
    }

    pub fn open_search(&mut self) {
        let current = match self.tab {
            Tab::Datasets => self.datasets.search_term().to_string(),
            Tab::Finetunes => self.finetunes.search_term().to_string(),
            Tab::Models => self.models.search_term().to_string(),
            Tab::Evaluations => self.evaluations.search_term().to_string(),
            Tab::Overview | Tab::Settings => return,
        };
        self.search_input = Some(current);
    }

    pub fn commit_search(&mut self) {
        if let Some(term) = self.search_input.take()
            && let Some(list) = self.current_list()
        {
            list.commit_search(term);
        }
    }

    pub fn is_loading(&self) -> bool {
        match self.tab {
            Tab::Datasets => self.datasets.loading,
            Tab::Finetunes => self.finetunes.loading,
            Tab::Models => self.models.loading,
            Tab::Evaluations => self.evaluations.loading,
            Tab::Overview => {
                self.datasets.loading
                    || self.finetunes.loading
                    || self.models.loading
                    || self.evaluations.loading
            }
            Tab::Settings => false,
        }
    }

    /// Record counts for the overview cards, in tab order.
    pub fn overview_counts(&self) -> [usize; 4] {
        [
            self.datasets.total_items(),
            self.finetunes.total_items(),
            self.models.total_items(),
            self.evaluations.total_items(),
        ]
    }

    /// Mock per-day inference volume for the overview card.
    pub fn inference_series(&self) -> [u64; 7] {
        corexia_runtime::fixtures::inference_last7()
    }

    pub fn current_table(&self, messages: &Messages) -> Option<TableData> {
        match self.tab {
            Tab::Datasets => {
                let snapshot = self.datasets.snapshot.as_ref()?;
                let page = self.datasets.page()?;
                let vm = presenters::dataset_list(
                    page,
                    &self.datasets.query,
                    snapshot.origin,
                    snapshot.notice.clone(),
                );
                Some(TableData::from_list(vm, snapshot.origin, messages))
            }
            Tab::Finetunes => {
                let snapshot = self.finetunes.snapshot.as_ref()?;
                let page = self.finetunes.page()?;
                let vm = presenters::finetune_list(
                    page,
                    &self.finetunes.query,
                    snapshot.origin,
                    snapshot.notice.clone(),
                );
                Some(TableData::from_list(vm, snapshot.origin, messages))
            }
            Tab::Models => {
                let snapshot = self.models.snapshot.as_ref()?;
                let page = self.models.page()?;
                let vm = presenters::model_list(
                    page,
                    &self.models.query,
                    snapshot.origin,
                    snapshot.notice.clone(),
                );
                Some(TableData::from_list(vm, snapshot.origin, messages))
            }
            Tab::Evaluations => {
                let snapshot = self.evaluations.snapshot.as_ref()?;
                let page = self.evaluations.page()?;
                let vm = presenters::evaluation_list(
                    page,
                    &self.evaluations.query,
                    snapshot.origin,
                    snapshot.notice.clone(),
                );
                Some(TableData::from_list(vm, snapshot.origin, messages))
            }
            Tab::Overview | Tab::Settings => None,
        }
    }
}
