//! Pure functions mapping engine pages onto view models.

use super::formatters;
use super::view_models::{
    DatasetRow, EvaluationRow, FilterSummary, FinetuneRow, ListViewModel, ModelRow,
};
use corexia_engine::{Page, QueryState};
use corexia_runtime::Origin;
use corexia_types::{Dataset, Evaluation, FinetuneJob, Model};
use serde::Serialize;

fn list_view_model<Row: Serialize, R>(
    resource: &'static str,
    items: Vec<Row>,
    page: &Page<R>,
    query: &QueryState,
    origin: Origin,
    notice: Option<String>,
) -> ListViewModel<Row> {
    let search = if query.search_term.trim().is_empty() {
        None
    } else {
        Some(query.search_term.clone())
    };

    ListViewModel {
        resource,
        items,
        total_items: page.total_items,
        total_pages: page.total_pages,
        current_page: page.current_page,
        origin: origin.as_str(),
        notice,
        applied: FilterSummary {
            search,
            sort: format!("{} {}", query.sort_key, query.sort_direction.as_str()),
            page_size: query.page_size,
        },
    }
}

pub fn dataset_list(
    page: Page<Dataset>,
    query: &QueryState,
    origin: Origin,
    notice: Option<String>,
) -> ListViewModel<DatasetRow> {
    let items = page
        .items
        .iter()
        .map(|d| DatasetRow {
            id: d.id.clone(),
            name: d.name.clone(),
            samples: d.samples,
            size_mb: d.size_mb,
            created_at: formatters::format_date(d.created_at),
        })
        .collect();
    list_view_model("datasets", items, &page, query, origin, notice)
}

pub fn finetune_list(
    page: Page<FinetuneJob>,
    query: &QueryState,
    origin: Origin,
    notice: Option<String>,
) -> ListViewModel<FinetuneRow> {
    let items = page
        .items
        .iter()
        .map(|j| FinetuneRow {
            id: j.id.clone(),
            base_model: j.base_model.clone(),
            status: j.status.as_str().to_string(),
            updated_at: formatters::format_date(j.updated_at),
        })
        .collect();
    list_view_model("finetunes", items, &page, query, origin, notice)
}

pub fn model_list(
    page: Page<Model>,
    query: &QueryState,
    origin: Origin,
    notice: Option<String>,
) -> ListViewModel<ModelRow> {
    let items = page
        .items
        .iter()
        .map(|m| ModelRow {
            id: m.id.clone(),
            name: m.name.clone(),
            kind: m.kind.as_str().to_string(),
            version: m.version.clone(),
            tags: m.tags.clone(),
        })
        .collect();
    list_view_model("models", items, &page, query, origin, notice)
}

pub fn evaluation_list(
    page: Page<Evaluation>,
    query: &QueryState,
    origin: Origin,
    notice: Option<String>,
) -> ListViewModel<EvaluationRow> {
    let items = page
        .items
        .iter()
        .map(|e| EvaluationRow {
            id: e.id.clone(),
            dataset: e.dataset.clone(),
            model: e.model.clone(),
            metric: e.metric.clone(),
            score: e.score,
            created_at: formatters::format_date(e.created_at),
        })
        .collect();
    list_view_model("evaluations", items, &page, query, origin, notice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use corexia_engine::run;
    use corexia_runtime::fixtures;

    #[test]
    fn test_dataset_presenter_formats_rows() {
        let schema = crate::schemas::datasets().unwrap();
        let mut query = QueryState::new(&schema);
        query.set_sort(&schema, "name").unwrap();

        let records = fixtures::datasets();
        let page = run(&records, &schema, &query);
        let vm = dataset_list(page, &query, Origin::Fixture, None);

        assert_eq!(vm.resource, "datasets");
        assert_eq!(vm.items[0].name, "Chat QA");
        assert_eq!(vm.items[0].created_at, "2025-08-12");
        assert_eq!(vm.applied.sort, "name asc");
        assert!(vm.applied.search.is_none());
    }

    #[test]
    fn test_search_term_appears_in_summary() {
        let schema = crate::schemas::datasets().unwrap();
        let mut query = QueryState::new(&schema);
        query.set_search("support");

        let records = fixtures::datasets();
        let page = run(&records, &schema, &query);
        let vm = dataset_list(page, &query, Origin::Remote, None);

        assert_eq!(vm.total_items, 1);
        assert_eq!(vm.applied.search.as_deref(), Some("support"));
        assert_eq!(vm.origin, "remote");
    }
}
