//! Static sample data.
//!
//! The console falls back to these records when the platform API is
//! unreachable, and serves them directly in offline mode. They mirror
//! the platform's seed data.

use chrono::NaiveDate;
use corexia_types::{Dataset, Evaluation, FinetuneJob, JobStatus, Model, ModelKind};
use once_cell::sync::Lazy;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("static fixture date")
}

static DATASETS: Lazy<Vec<Dataset>> = Lazy::new(|| {
    vec![
        Dataset {
            id: "ds_1".to_string(),
            name: "Chat QA".to_string(),
            samples: 120_000,
            size_mb: 850.0,
            created_at: date(2025, 8, 12),
        },
        Dataset {
            id: "ds_2".to_string(),
            name: "Customer Support".to_string(),
            samples: 54_000,
            size_mb: 320.0,
            created_at: date(2025, 7, 3),
        },
        Dataset {
            id: "ds_3".to_string(),
            name: "Code Instruct".to_string(),
            samples: 20_000,
            size_mb: 210.0,
            created_at: date(2025, 6, 20),
        },
    ]
});

static MODELS: Lazy<Vec<Model>> = Lazy::new(|| {
    vec![
        Model {
            id: "m_llama3_8b".to_string(),
            name: "Llama3".to_string(),
            kind: ModelKind::Base,
            version: "8B".to_string(),
            tags: vec!["meta".to_string()],
        },
        Model {
            id: "m_qwen2_7b".to_string(),
            name: "Qwen2.5".to_string(),
            kind: ModelKind::Base,
            version: "7B".to_string(),
            tags: vec!["alibaba".to_string()],
        },
        Model {
            id: "m_ft_101".to_string(),
            name: "Chat QA Custom".to_string(),
            kind: ModelKind::Finetuned,
            version: "v1".to_string(),
            tags: vec!["chat".to_string(), "english".to_string()],
        },
    ]
});

static FINETUNES: Lazy<Vec<FinetuneJob>> = Lazy::new(|| {
    vec![
        FinetuneJob {
            id: "ft_101".to_string(),
            base_model: "Llama3-8B".to_string(),
            status: JobStatus::Succeeded,
            updated_at: date(2025, 9, 1),
        },
        FinetuneJob {
            id: "ft_102".to_string(),
            base_model: "Qwen2.5-7B".to_string(),
            status: JobStatus::Running,
            updated_at: date(2025, 9, 6),
        },
        FinetuneJob {
            id: "ft_103".to_string(),
            base_model: "Mistral-7B".to_string(),
            status: JobStatus::Pending,
            updated_at: date(2025, 9, 5),
        },
    ]
});

static EVALUATIONS: Lazy<Vec<Evaluation>> = Lazy::new(|| {
    vec![
        Evaluation {
            id: "ev_1".to_string(),
            dataset: "Chat QA".to_string(),
            model: "Chat QA Custom".to_string(),
            metric: "Accuracy".to_string(),
            score: 0.86,
            created_at: date(2025, 9, 1),
        },
        Evaluation {
            id: "ev_2".to_string(),
            dataset: "Customer Support".to_string(),
            model: "Llama3".to_string(),
            metric: "BERScore".to_string(),
            score: 0.73,
            created_at: date(2025, 9, 3),
        },
    ]
});

pub fn datasets() -> Vec<Dataset> {
    DATASETS.clone()
}

pub fn models() -> Vec<Model> {
    MODELS.clone()
}

pub fn finetunes() -> Vec<FinetuneJob> {
    FINETUNES.clone()
}

pub fn evaluations() -> Vec<Evaluation> {
    EVALUATIONS.clone()
}

/// Mock per-day inference request counts, oldest first.
pub fn inference_last7() -> [u64; 7] {
    [120, 98, 143, 110, 180, 165, 152]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_counts() {
        assert_eq!(datasets().len(), 3);
        assert_eq!(models().len(), 3);
        assert_eq!(finetunes().len(), 3);
        assert_eq!(evaluations().len(), 2);
        assert_eq!(inference_last7().len(), 7);
    }

    #[test]
    fn test_fixture_ids_are_unique() {
        let ids: Vec<_> = datasets().iter().map(|d| d.id.clone()).collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
    }
}
