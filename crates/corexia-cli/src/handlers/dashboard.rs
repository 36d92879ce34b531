use crate::context::CliContext;
use crate::tui;
use anyhow::Result;

pub fn handle(ctx: CliContext, offline: bool) -> Result<()> {
    let source = ctx.data_source(offline)?;
    tui::run(ctx.store, source, ctx.config)
}
