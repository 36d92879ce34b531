use crate::error::Result;
use crate::schema::ListSchema;
use corexia_types::Record;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("invalid sort order '{}' (asc|desc)", other)),
        }
    }
}

/// User-controlled parameters governing which subset, order and page of
/// records a list view shows.
///
/// Created with the schema's defaults on view mount and mutated by input
/// events; never persisted. `page` stores the requested page and is
/// clamped against the collection by the paginate stage, so the stages
/// stay pure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search_term: String,
    pub sort_key: &'static str,
    pub sort_direction: SortDirection,
    pub page: usize,
    pub page_size: usize,
}

impl QueryState {
    pub fn new<R: Record>(schema: &ListSchema<R>) -> Self {
        Self {
            search_term: String::new(),
            sort_key: schema.default_sort_key(),
            sort_direction: schema.default_direction(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Change the search term. Resets the page to 1: the filtered
    /// collection shrinks, so a stale page number could point past the
    /// new last page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
    }

    /// Change the sort key. The page is left untouched; the window keeps
    /// its position over the re-ordered collection.
    pub fn set_sort<R: Record>(&mut self, schema: &ListSchema<R>, key: &str) -> Result<()> {
        self.sort_key = schema.resolve_sort_key(key)?;
        Ok(())
    }

    pub fn set_direction(&mut self, direction: SortDirection) {
        self.sort_direction = direction;
    }

    pub fn toggle_direction(&mut self) {
        self.sort_direction = self.sort_direction.toggled();
    }

    /// Request a page. Saturates at 1; the upper bound is enforced by
    /// the paginate stage, which knows the collection size.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Change the page size. Resets the page to 1 like a filter change.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corexia_types::Dataset;

    fn schema() -> ListSchema<Dataset> {
        ListSchema::builder()
            .sort_key(Dataset::FIELD_CREATED_AT)
            .sort_key(Dataset::FIELD_NAME)
            .search_field(Dataset::FIELD_NAME)
            .default_sort(Dataset::FIELD_CREATED_AT, SortDirection::Desc)
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_takes_schema_defaults() {
        let query = QueryState::new(&schema());
        assert_eq!(query.sort_key, Dataset::FIELD_CREATED_AT);
        assert_eq!(query.sort_direction, SortDirection::Desc);
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_set_search_resets_page() {
        let mut query = QueryState::new(&schema());
        query.set_page(4);
        query.set_search("chat");
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_set_sort_keeps_page() {
        let s = schema();
        let mut query = QueryState::new(&s);
        query.set_page(3);
        query.set_sort(&s, "name").unwrap();
        assert_eq!(query.page, 3);
        assert_eq!(query.sort_key, "name");
    }

    #[test]
    fn test_set_sort_rejects_unknown_key() {
        let s = schema();
        let mut query = QueryState::new(&s);
        assert!(query.set_sort(&s, "samples").is_err());
        // Query is unchanged after the rejection
        assert_eq!(query.sort_key, Dataset::FIELD_CREATED_AT);
    }

    #[test]
    fn test_set_page_size_resets_page_and_clamps() {
        let mut query = QueryState::new(&schema());
        query.set_page(9);
        query.set_page_size(0);
        assert_eq!(query.page_size, 1);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_set_page_saturates_at_one() {
        let mut query = QueryState::new(&schema());
        query.set_page(0);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_toggle_direction() {
        let mut query = QueryState::new(&schema());
        query.toggle_direction();
        assert_eq!(query.sort_direction, SortDirection::Asc);
        query.toggle_direction();
        assert_eq!(query.sort_direction, SortDirection::Desc);
    }
}
