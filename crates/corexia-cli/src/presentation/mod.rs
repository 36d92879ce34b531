pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;

pub use renderers::ConsoleRenderer;
pub use view_models::{
    ConfigViewModel, FilterSummary, InferenceViewModel, ListViewModel, MessageViewModel,
    SessionViewModel, TableRow,
};
