pub mod decode;
pub mod error;
pub mod field;
pub mod records;

pub use decode::{decode_dataset, decode_datasets};
pub use error::{DecodeError, DecodeReason, Error, Result};
pub use field::{FieldValue, Record};
pub use records::{Dataset, Evaluation, FinetuneJob, JobStatus, Model, ModelKind};
