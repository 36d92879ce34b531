pub mod error;
pub mod pipeline;
pub mod query;
pub mod schema;

pub use error::{Error, Result};
pub use pipeline::{filter, paginate, run, sort, Page};
pub use query::{QueryState, SortDirection, DEFAULT_PAGE_SIZE};
pub use schema::{ListSchema, ListSchemaBuilder};
