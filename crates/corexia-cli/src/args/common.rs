use clap::{Args, ValueEnum};
use corexia_engine::SortDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortDirection {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Asc => SortDirection::Asc,
            OrderArg::Desc => SortDirection::Desc,
        }
    }
}

/// Flags shared by every `<resource> list` command. They map directly
/// onto the list query: search resets to page 1, page size changes
/// reset to page 1, out-of-range pages are clamped.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    #[arg(long, help = "Case-insensitive substring filter")]
    pub search: Option<String>,

    #[arg(long, help = "Sort key (see the resource's columns)")]
    pub sort: Option<String>,

    #[arg(long, value_enum, help = "Sort direction")]
    pub order: Option<OrderArg>,

    #[arg(long, default_value = "1")]
    pub page: usize,

    #[arg(long, help = "Rows per page (defaults to ui.page_size)")]
    pub page_size: Option<usize>,
}
