//! Schema validation at the data-source boundary.
//!
//! Wire payloads from the platform API are validated field by field into
//! typed records. A missing or ill-typed field yields a [`DecodeError`]
//! naming the record, the field, and the reason; numeric fields are
//! never silently defaulted.

use crate::error::{DecodeError, DecodeReason, Result};
use crate::records::Dataset;
use chrono::{DateTime, NaiveDate};
use serde_json::Value;

const RECORD_DATASET: &str = "dataset";

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Decode one dataset from the API wire shape.
///
/// The API reports `samples_count`, `size_bytes` and an RFC3339
/// `created_at`; the console works in samples, megabytes (one decimal,
/// clamped at zero) and plain dates.
pub fn decode_dataset(value: &Value) -> std::result::Result<Dataset, DecodeError> {
    let id = str_field(value, RECORD_DATASET, "id")?;
    let name = str_field(value, RECORD_DATASET, "name")?;
    let samples = u64_field(value, RECORD_DATASET, "samples_count")?;
    let size_bytes = i64_field(value, RECORD_DATASET, "size_bytes")?;
    let created_at = date_field(value, RECORD_DATASET, "created_at")?;

    Ok(Dataset {
        id,
        name,
        samples,
        size_mb: bytes_to_mb(size_bytes),
        created_at,
    })
}

/// Decode a `GET /datasets` response body (a JSON array).
pub fn decode_datasets(body: &str) -> Result<Vec<Dataset>> {
    let value: Value = serde_json::from_str(body)?;
    let items = value
        .as_array()
        .ok_or_else(|| DecodeError::new(RECORD_DATASET, "(root)", DecodeReason::ExpectedArray))?;

    let mut datasets = Vec::with_capacity(items.len());
    for item in items {
        datasets.push(decode_dataset(item)?);
    }
    Ok(datasets)
}

/// Megabytes with one decimal, clamped at zero.
fn bytes_to_mb(bytes: i64) -> f64 {
    let mb = bytes as f64 / BYTES_PER_MB;
    (mb.max(0.0) * 10.0).round() / 10.0
}

fn str_field(
    value: &Value,
    record: &'static str,
    field: &'static str,
) -> std::result::Result<String, DecodeError> {
    match value.get(field) {
        None | Some(Value::Null) => Err(DecodeError::new(record, field, DecodeReason::Missing)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(DecodeError::new(record, field, DecodeReason::ExpectedString)),
    }
}

fn i64_field(
    value: &Value,
    record: &'static str,
    field: &'static str,
) -> std::result::Result<i64, DecodeError> {
    match value.get(field) {
        None | Some(Value::Null) => Err(DecodeError::new(record, field, DecodeReason::Missing)),
        Some(v) => v
            .as_i64()
            .ok_or_else(|| DecodeError::new(record, field, DecodeReason::ExpectedNumber)),
    }
}

fn u64_field(
    value: &Value,
    record: &'static str,
    field: &'static str,
) -> std::result::Result<u64, DecodeError> {
    let n = i64_field(value, record, field)?;
    u64::try_from(n).map_err(|_| DecodeError::new(record, field, DecodeReason::ExpectedNumber))
}

fn date_field(
    value: &Value,
    record: &'static str,
    field: &'static str,
) -> std::result::Result<NaiveDate, DecodeError> {
    let raw = str_field(value, record, field)?;

    // Full RFC3339 timestamp, or an already-truncated plain date.
    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(dt.date_naive());
    }
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| DecodeError::new(record, field, DecodeReason::InvalidDate(raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wire_dataset() -> Value {
        json!({
            "id": "1f0f7a1e-9f6a-4a3e-9f11-6f1a2b3c4d5e",
            "name": "Chat QA",
            "description": "QA pairs",
            "tags": ["chat"],
            "samples_count": 120000,
            "size_bytes": 891289600i64,
            "created_at": "2025-08-12T09:30:00Z",
            "updated_at": "2025-08-12T09:30:00Z"
        })
    }

    #[test]
    fn test_decode_dataset_maps_wire_fields() {
        let ds = decode_dataset(&wire_dataset()).unwrap();
        assert_eq!(ds.name, "Chat QA");
        assert_eq!(ds.samples, 120_000);
        assert_eq!(ds.size_mb, 850.0);
        assert_eq!(ds.created_at.to_string(), "2025-08-12");
    }

    #[test]
    fn test_missing_samples_count_is_an_error_not_zero() {
        let mut value = wire_dataset();
        value.as_object_mut().unwrap().remove("samples_count");

        let err = decode_dataset(&value).unwrap_err();
        assert_eq!(err.field, "samples_count");
        assert_eq!(err.reason, DecodeReason::Missing);
    }

    #[test]
    fn test_ill_typed_size_is_an_error() {
        let mut value = wire_dataset();
        value["size_bytes"] = json!("huge");

        let err = decode_dataset(&value).unwrap_err();
        assert_eq!(err.field, "size_bytes");
        assert_eq!(err.reason, DecodeReason::ExpectedNumber);
    }

    #[test]
    fn test_negative_size_clamps_to_zero_mb() {
        let mut value = wire_dataset();
        value["size_bytes"] = json!(-5);

        let ds = decode_dataset(&value).unwrap();
        assert_eq!(ds.size_mb, 0.0);
    }

    #[test]
    fn test_invalid_date_is_reported_with_raw_value() {
        let mut value = wire_dataset();
        value["created_at"] = json!("yesterday");

        let err = decode_dataset(&value).unwrap_err();
        assert_eq!(
            err.reason,
            DecodeReason::InvalidDate("yesterday".to_string())
        );
    }

    #[test]
    fn test_decode_datasets_rejects_non_array_body() {
        assert!(decode_datasets("{\"not\": \"an array\"}").is_err());
    }

    #[test]
    fn test_decode_datasets_propagates_first_bad_record() {
        let body = json!([wire_dataset(), {"id": "x"}]).to_string();
        assert!(decode_datasets(&body).is_err());
    }
}
