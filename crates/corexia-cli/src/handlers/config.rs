use crate::context::CliContext;
use crate::presentation::{ConfigViewModel, ConsoleRenderer, MessageViewModel};
use anyhow::{Context, Result};
use corexia_runtime::Config;

pub fn show(ctx: &CliContext, renderer: &ConsoleRenderer) -> Result<()> {
    let view = ConfigViewModel {
        path: Config::path_in(&ctx.data_dir).display().to_string(),
        base_url: ctx.config.api.base_url.clone(),
        timeout_secs: ctx.config.api.timeout_secs,
        page_size: ctx.config.ui.page_size,
        locale: ctx.store.locale().as_str().to_string(),
    };
    renderer.render(&view)
}

pub fn set(
    ctx: &mut CliContext,
    key: &str,
    value: &str,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    match key {
        "api.base_url" => ctx.config.api.base_url = value.to_string(),
        "api.timeout_secs" => {
            ctx.config.api.timeout_secs = value
                .parse()
                .with_context(|| format!("'{}' is not a valid timeout in seconds", value))?;
        }
        "ui.page_size" => {
            let page_size: usize = value
                .parse()
                .with_context(|| format!("'{}' is not a valid page size", value))?;
            anyhow::ensure!(page_size >= 1, "page size must be at least 1");
            ctx.config.ui.page_size = page_size;
        }
        other => anyhow::bail!(
            "unknown config key '{}' (expected api.base_url, api.timeout_secs or ui.page_size)",
            other
        ),
    }

    ctx.config.save_to(&Config::path_in(&ctx.data_dir))?;
    renderer.render(&MessageViewModel::new(format!("Set {} = {}", key, value)))
}
