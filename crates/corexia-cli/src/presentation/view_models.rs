//! Serializable view models. Plain output comes from their `Display`
//! impls, JSON from serde, so both formats render the same data.

use super::formatters;
use serde::Serialize;
use std::fmt;

/// A row that knows how to lay itself out as table cells.
pub trait TableRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

#[derive(Debug, Serialize)]
pub struct FilterSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub sort: String,
    pub page_size: usize,
}

#[derive(Debug, Serialize)]
pub struct ListViewModel<Row: Serialize> {
    pub resource: &'static str,
    pub items: Vec<Row>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub origin: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub applied: FilterSummary,
}

impl<Row: Serialize + TableRow> fmt::Display for ListViewModel<Row> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            writeln!(f, "No {} found.", self.resource)?;
            if let Some(ref search) = self.applied.search {
                writeln!(f, "Search filter: {:?}", search)?;
            }
            return Ok(());
        }

        let headers = Row::headers();
        let rows: Vec<Vec<String>> = self.items.iter().map(TableRow::cells).collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        write_row(f, headers.iter().map(|h| h.to_uppercase()), &widths)?;
        for row in &rows {
            write_row(f, row.iter().cloned(), &widths)?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Page {} of {} ({} {})",
            self.current_page, self.total_pages, self.total_items, self.resource
        )?;
        if let Some(ref search) = self.applied.search {
            writeln!(f, "Search: {:?}", search)?;
        }
        writeln!(f, "Sorted by {}", self.applied.sort)?;

        Ok(())
    }
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    cells: impl Iterator<Item = String>,
    widths: &[usize],
) -> fmt::Result {
    let cells: Vec<String> = cells.collect();
    let last = cells.len().saturating_sub(1);
    for (i, cell) in cells.iter().enumerate() {
        if i == last {
            // No trailing padding on the last column
            write!(f, "{}", cell)?;
        } else {
            write!(f, "{:<width$}  ", cell, width = widths[i])?;
        }
    }
    writeln!(f)
}

// Resource rows

#[derive(Debug, Serialize)]
pub struct DatasetRow {
    pub id: String,
    pub name: String,
    pub samples: u64,
    pub size_mb: f64,
    pub created_at: String,
}

impl TableRow for DatasetRow {
    fn headers() -> &'static [&'static str] {
        &["id", "name", "samples", "size", "created"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            formatters::group_thousands(self.samples),
            formatters::format_size_mb(self.size_mb),
            self.created_at.clone(),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct FinetuneRow {
    pub id: String,
    pub base_model: String,
    pub status: String,
    pub updated_at: String,
}

impl TableRow for FinetuneRow {
    fn headers() -> &'static [&'static str] {
        &["id", "base model", "status", "updated"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.base_model.clone(),
            self.status.clone(),
            self.updated_at.clone(),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct ModelRow {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub version: String,
    pub tags: Vec<String>,
}

impl TableRow for ModelRow {
    fn headers() -> &'static [&'static str] {
        &["id", "name", "kind", "version", "tags"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.kind.clone(),
            self.version.clone(),
            // Tag lists are open-ended; keep the column bounded
            formatters::truncate(&self.tags.join(", "), 24),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct EvaluationRow {
    pub id: String,
    pub dataset: String,
    pub model: String,
    pub metric: String,
    pub score: f64,
    pub created_at: String,
}

impl TableRow for EvaluationRow {
    fn headers() -> &'static [&'static str] {
        &["id", "dataset", "model", "metric", "score", "created"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.dataset.clone(),
            self.model.clone(),
            self.metric.clone(),
            formatters::format_score(self.score),
            self.created_at.clone(),
        ]
    }
}

/// Result of a mock inference run.
#[derive(Debug, Serialize)]
pub struct InferenceViewModel {
    pub model: String,
    pub version: String,
    pub temperature: f64,
    pub origin: &'static str,
    pub output: String,
}

impl fmt::Display for InferenceViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.output)?;
        writeln!(f)?;
        writeln!(f, "Model {} ({})", self.model, self.version)
    }
}

// Auth and config

#[derive(Debug, Serialize)]
pub struct SessionViewModel {
    pub signed_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl fmt::Display for SessionViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, &self.email) {
            (Some(name), Some(email)) => writeln!(f, "Signed in as {} <{}>", name, email),
            _ => writeln!(f, "Not signed in."),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageViewModel {
    pub message: String,
}

impl MessageViewModel {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for MessageViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message)
    }
}

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub page_size: usize,
    pub locale: String,
}

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Config: {}", self.path)?;
        writeln!(f, "  api.base_url     = {}", self.base_url)?;
        writeln!(f, "  api.timeout_secs = {}", self.timeout_secs)?;
        writeln!(f, "  ui.page_size     = {}", self.page_size)?;
        writeln!(f, "  locale           = {}", self.locale)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_view_model() -> ListViewModel<DatasetRow> {
        ListViewModel {
            resource: "datasets",
            items: vec![DatasetRow {
                id: "ds_1".to_string(),
                name: "Chat QA".to_string(),
                samples: 120_000,
                size_mb: 850.0,
                created_at: "2025-08-12".to_string(),
            }],
            total_items: 3,
            total_pages: 2,
            current_page: 1,
            origin: "fixture",
            notice: None,
            applied: FilterSummary {
                search: None,
                sort: "name asc".to_string(),
                page_size: 2,
            },
        }
    }

    #[test]
    fn test_list_display_has_header_and_footer() {
        let rendered = sample_view_model().to_string();
        assert!(rendered.contains("NAME"));
        assert!(rendered.contains("120,000"));
        assert!(rendered.contains("Page 1 of 2 (3 datasets)"));
        assert!(rendered.contains("Sorted by name asc"));
    }

    #[test]
    fn test_empty_list_display() {
        let mut vm = sample_view_model();
        vm.items.clear();
        vm.applied.search = Some("missing".to_string());
        let rendered = vm.to_string();
        assert!(rendered.contains("No datasets found."));
        assert!(rendered.contains("missing"));
    }

    #[test]
    fn test_model_row_bounds_the_tags_column() {
        let row = ModelRow {
            id: "m_1".to_string(),
            name: "Llama3".to_string(),
            kind: "base".to_string(),
            version: "8B".to_string(),
            tags: vec![
                "meta".to_string(),
                "chat".to_string(),
                "english".to_string(),
                "instruction-following".to_string(),
            ],
        };

        let tags_cell = row.cells().pop().unwrap();
        assert!(tags_cell.chars().count() <= 24);
        assert!(tags_cell.ends_with("..."));

        let short = ModelRow { tags: vec!["meta".to_string()], ..row };
        assert_eq!(short.cells().pop().unwrap(), "meta");
    }

    #[test]
    fn test_list_json_skips_empty_notice() {
        let json = serde_json::to_value(sample_view_model()).unwrap();
        assert!(json.get("notice").is_none());
        assert_eq!(json["items"][0]["samples"], 120_000);
        assert_eq!(json["origin"], "fixture");
    }
}
