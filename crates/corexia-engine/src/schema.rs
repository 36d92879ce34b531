use crate::error::{Error, Result};
use crate::query::SortDirection;
use corexia_types::Record;
use std::marker::PhantomData;

/// Per-resource list configuration: which keys a view may sort by,
/// which text fields a search term matches against, and the default
/// sort. Validated when built, so an unknown sort key is rejected at
/// configuration time rather than silently mis-sorting.
#[derive(Debug, Clone)]
pub struct ListSchema<R: Record> {
    sort_keys: Vec<&'static str>,
    search_fields: Vec<&'static str>,
    default_sort_key: &'static str,
    default_direction: SortDirection,
    _record: PhantomData<R>,
}

impl<R: Record> ListSchema<R> {
    pub fn builder() -> ListSchemaBuilder<R> {
        ListSchemaBuilder {
            sort_keys: Vec::new(),
            search_fields: Vec::new(),
            default_sort: None,
            _record: PhantomData,
        }
    }

    pub fn sort_keys(&self) -> &[&'static str] {
        &self.sort_keys
    }

    pub fn search_fields(&self) -> &[&'static str] {
        &self.search_fields
    }

    pub fn default_sort_key(&self) -> &'static str {
        self.default_sort_key
    }

    pub fn default_direction(&self) -> SortDirection {
        self.default_direction
    }

    /// Resolve a user-supplied sort key against the declared set.
    pub fn resolve_sort_key(&self, key: &str) -> Result<&'static str> {
        self.sort_keys
            .iter()
            .find(|k| **k == key)
            .copied()
            .ok_or_else(|| Error::UnknownSortKey {
                key: key.to_string(),
                valid: self.sort_keys.iter().map(|k| k.to_string()).collect(),
            })
    }
}

pub struct ListSchemaBuilder<R: Record> {
    sort_keys: Vec<&'static str>,
    search_fields: Vec<&'static str>,
    default_sort: Option<(&'static str, SortDirection)>,
    _record: PhantomData<R>,
}

impl<R: Record> ListSchemaBuilder<R> {
    pub fn sort_key(mut self, key: &'static str) -> Self {
        self.sort_keys.push(key);
        self
    }

    pub fn search_field(mut self, field: &'static str) -> Self {
        self.search_fields.push(field);
        self
    }

    pub fn default_sort(mut self, key: &'static str, direction: SortDirection) -> Self {
        self.default_sort = Some((key, direction));
        self
    }

    pub fn build(self) -> Result<ListSchema<R>> {
        if self.sort_keys.is_empty() {
            return Err(Error::NoSortKeys);
        }
        if self.search_fields.is_empty() {
            return Err(Error::NoSearchFields);
        }

        let (default_sort_key, default_direction) = self
            .default_sort
            .unwrap_or((self.sort_keys[0], SortDirection::Asc));

        if !self.sort_keys.contains(&default_sort_key) {
            return Err(Error::UnknownSortKey {
                key: default_sort_key.to_string(),
                valid: self.sort_keys.iter().map(|k| k.to_string()).collect(),
            });
        }

        Ok(ListSchema {
            sort_keys: self.sort_keys,
            search_fields: self.search_fields,
            default_sort_key,
            default_direction,
            _record: PhantomData,
        })
    }
}
