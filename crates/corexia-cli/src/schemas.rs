//! Per-resource list schemas: which columns sort, which fields are
//! searched, and the default ordering. Unknown sort keys are rejected
//! when the query is built, never silently mis-sorted.

use corexia_engine::{ListSchema, Result, SortDirection};
use corexia_types::{Dataset, Evaluation, FinetuneJob, Model};

pub fn datasets() -> Result<ListSchema<Dataset>> {
    ListSchema::builder()
        .sort_key(Dataset::FIELD_NAME)
        .sort_key(Dataset::FIELD_SAMPLES)
        .sort_key(Dataset::FIELD_SIZE_MB)
        .sort_key(Dataset::FIELD_CREATED_AT)
        .search_field(Dataset::FIELD_NAME)
        .default_sort(Dataset::FIELD_CREATED_AT, SortDirection::Desc)
        .build()
}

pub fn finetunes() -> Result<ListSchema<FinetuneJob>> {
    ListSchema::builder()
        .sort_key("id")
        .sort_key(FinetuneJob::FIELD_BASE_MODEL)
        .sort_key(FinetuneJob::FIELD_STATUS)
        .sort_key(FinetuneJob::FIELD_UPDATED_AT)
        .search_field("id")
        .search_field(FinetuneJob::FIELD_BASE_MODEL)
        .default_sort(FinetuneJob::FIELD_UPDATED_AT, SortDirection::Desc)
        .build()
}

pub fn models() -> Result<ListSchema<Model>> {
    ListSchema::builder()
        .sort_key(Model::FIELD_NAME)
        .sort_key(Model::FIELD_KIND)
        .sort_key(Model::FIELD_VERSION)
        .search_field(Model::FIELD_NAME)
        .search_field(Model::FIELD_VERSION)
        .default_sort(Model::FIELD_NAME, SortDirection::Asc)
        .build()
}

pub fn evaluations() -> Result<ListSchema<Evaluation>> {
    ListSchema::builder()
        .sort_key(Evaluation::FIELD_DATASET)
        .sort_key(Evaluation::FIELD_MODEL)
        .sort_key(Evaluation::FIELD_METRIC)
        .sort_key(Evaluation::FIELD_SCORE)
        .sort_key(Evaluation::FIELD_CREATED_AT)
        .search_field(Evaluation::FIELD_DATASET)
        .search_field(Evaluation::FIELD_MODEL)
        .search_field(Evaluation::FIELD_METRIC)
        .default_sort(Evaluation::FIELD_CREATED_AT, SortDirection::Desc)
        .build()
}
