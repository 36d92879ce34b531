use crate::args::ListArgs;
use crate::context::CliContext;
use crate::presentation::{presenters, ConsoleRenderer};
use crate::schemas;
use anyhow::Result;
use corexia_engine::{ListSchema, QueryState};
use corexia_types::Record;

/// Map list flags onto a query. Page size is applied before the page
/// number since changing the page size resets to page 1.
fn query_from_args<R: Record>(
    schema: &ListSchema<R>,
    args: &ListArgs,
    default_page_size: usize,
) -> Result<QueryState> {
    let mut query = QueryState::new(schema);
    if let Some(ref term) = args.search {
        query.set_search(term.clone());
    }
    if let Some(ref key) = args.sort {
        query.set_sort(schema, key)?;
    }
    if let Some(order) = args.order {
        query.set_direction(order.into());
    }
    query.set_page_size(args.page_size.unwrap_or(default_page_size));
    query.set_page(args.page);
    Ok(query)
}

pub fn datasets(
    ctx: &CliContext,
    args: &ListArgs,
    offline: bool,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    let schema = schemas::datasets()?;
    let query = query_from_args(&schema, args, ctx.config.ui.page_size)?;
    let snapshot = ctx.data_source(offline)?.datasets();
    let page = corexia_engine::run(&snapshot.data, &schema, &query);
    renderer.render_list(&presenters::dataset_list(
        page,
        &query,
        snapshot.origin,
        snapshot.notice,
    ))
}

pub fn finetunes(
    ctx: &CliContext,
    args: &ListArgs,
    offline: bool,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    let schema = schemas::finetunes()?;
    let query = query_from_args(&schema, args, ctx.config.ui.page_size)?;
    let snapshot = ctx.data_source(offline)?.finetunes();
    let page = corexia_engine::run(&snapshot.data, &schema, &query);
    renderer.render_list(&presenters::finetune_list(
        page,
        &query,
        snapshot.origin,
        snapshot.notice,
    ))
}

pub fn models(
    ctx: &CliContext,
    args: &ListArgs,
    offline: bool,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    let schema = schemas::models()?;
    let query = query_from_args(&schema, args, ctx.config.ui.page_size)?;
    let snapshot = ctx.data_source(offline)?.models();
    let page = corexia_engine::run(&snapshot.data, &schema, &query);
    renderer.render_list(&presenters::model_list(
        page,
        &query,
        snapshot.origin,
        snapshot.notice,
    ))
}

pub fn evaluations(
    ctx: &CliContext,
    args: &ListArgs,
    offline: bool,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    let schema = schemas::evaluations()?;
    let query = query_from_args(&schema, args, ctx.config.ui.page_size)?;
    let snapshot = ctx.data_source(offline)?.evaluations();
    let page = corexia_engine::run(&snapshot.data, &schema, &query);
    renderer.render_list(&presenters::evaluation_list(
        page,
        &query,
        snapshot.origin,
        snapshot.notice,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::OrderArg;

    #[test]
    fn test_query_from_args_applies_flags_in_order() {
        let schema = schemas::datasets().unwrap();
        let args = ListArgs {
            search: Some("chat".to_string()),
            sort: Some("samples".to_string()),
            order: Some(OrderArg::Desc),
            page: 3,
            page_size: Some(2),
        };

        let query = query_from_args(&schema, &args, 10).unwrap();
        assert_eq!(query.search_term, "chat");
        assert_eq!(query.sort_key, "samples");
        assert_eq!(query.page_size, 2);
        // Page is applied last, so the page-size reset does not clobber it
        assert_eq!(query.page, 3);
    }

    #[test]
    fn test_query_from_args_rejects_unknown_sort_key() {
        let schema = schemas::datasets().unwrap();
        let args = ListArgs {
            sort: Some("flavor".to_string()),
            page: 1,
            ..Default::default()
        };
        assert!(query_from_args(&schema, &args, 10).is_err());
    }
}
