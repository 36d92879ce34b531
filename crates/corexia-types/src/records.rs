use crate::field::{FieldValue, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A training dataset registered on the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: String,
    pub name: String,
    pub samples: u64,
    pub size_mb: f64,
    pub created_at: NaiveDate,
}

impl Dataset {
    pub const FIELD_NAME: &'static str = "name";
    pub const FIELD_SAMPLES: &'static str = "samples";
    pub const FIELD_SIZE_MB: &'static str = "size_mb";
    pub const FIELD_CREATED_AT: &'static str = "created_at";
}

impl Record for Dataset {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            Self::FIELD_NAME => Some(self.name.as_str().into()),
            Self::FIELD_SAMPLES => Some(self.samples.into()),
            Self::FIELD_SIZE_MB => Some(self.size_mb.into()),
            Self::FIELD_CREATED_AT => Some(self.created_at.into()),
            _ => None,
        }
    }
}

/// Base or finetuned model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Base,
    Finetuned,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Base => "base",
            ModelKind::Finetuned => "finetuned",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A model available for inference or as a finetune base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub name: String,
    pub kind: ModelKind,
    pub version: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Model {
    pub const FIELD_NAME: &'static str = "name";
    pub const FIELD_KIND: &'static str = "kind";
    pub const FIELD_VERSION: &'static str = "version";
}

impl Record for Model {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            Self::FIELD_NAME => Some(self.name.as_str().into()),
            Self::FIELD_KIND => Some(self.kind.as_str().into()),
            Self::FIELD_VERSION => Some(self.version.as_str().into()),
            _ => None,
        }
    }
}

/// Lifecycle state of a finetune job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Running => "running",
            JobStatus::Succeeded => "succeeded",
            JobStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A finetune job tracked by the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinetuneJob {
    pub id: String,
    pub base_model: String,
    pub status: JobStatus,
    pub updated_at: NaiveDate,
}

impl FinetuneJob {
    pub const FIELD_BASE_MODEL: &'static str = "base_model";
    pub const FIELD_STATUS: &'static str = "status";
    pub const FIELD_UPDATED_AT: &'static str = "updated_at";
}

impl Record for FinetuneJob {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(self.id.as_str().into()),
            Self::FIELD_BASE_MODEL => Some(self.base_model.as_str().into()),
            Self::FIELD_STATUS => Some(self.status.as_str().into()),
            Self::FIELD_UPDATED_AT => Some(self.updated_at.into()),
            _ => None,
        }
    }
}

/// One evaluation run: a model scored on a dataset under a metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub id: String,
    pub dataset: String,
    pub model: String,
    pub metric: String,
    pub score: f64,
    pub created_at: NaiveDate,
}

impl Evaluation {
    pub const FIELD_DATASET: &'static str = "dataset";
    pub const FIELD_MODEL: &'static str = "model";
    pub const FIELD_METRIC: &'static str = "metric";
    pub const FIELD_SCORE: &'static str = "score";
    pub const FIELD_CREATED_AT: &'static str = "created_at";
}

impl Record for Evaluation {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(self.id.as_str().into()),
            Self::FIELD_DATASET => Some(self.dataset.as_str().into()),
            Self::FIELD_MODEL => Some(self.model.as_str().into()),
            Self::FIELD_METRIC => Some(self.metric.as_str().into()),
            Self::FIELD_SCORE => Some(self.score.into()),
            Self::FIELD_CREATED_AT => Some(self.created_at.into()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> Dataset {
        Dataset {
            id: "ds_1".to_string(),
            name: "Chat QA".to_string(),
            samples: 120_000,
            size_mb: 850.0,
            created_at: NaiveDate::from_ymd_opt(2025, 8, 12).unwrap(),
        }
    }

    #[test]
    fn test_dataset_exposes_declared_fields() {
        let ds = sample_dataset();
        assert_eq!(
            ds.field(Dataset::FIELD_NAME),
            Some(FieldValue::Text("Chat QA".to_string()))
        );
        assert_eq!(
            ds.field(Dataset::FIELD_SAMPLES),
            Some(FieldValue::Number(120_000.0))
        );
        assert_eq!(ds.field("no_such_field"), None);
    }

    #[test]
    fn test_status_round_trips_through_serde() {
        let json = serde_json::to_string(&JobStatus::Succeeded).unwrap();
        assert_eq!(json, "\"succeeded\"");
        let back: JobStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, JobStatus::Succeeded);
    }

    #[test]
    fn test_dataset_date_serializes_as_plain_date() {
        let ds = sample_dataset();
        let value = serde_json::to_value(&ds).unwrap();
        assert_eq!(value["created_at"], "2025-08-12");
    }
}
