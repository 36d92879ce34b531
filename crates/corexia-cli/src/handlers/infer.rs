use crate::context::CliContext;
use crate::presentation::{ConsoleRenderer, InferenceViewModel};
use anyhow::Result;
use corexia_runtime::inference;

pub fn handle(
    ctx: &CliContext,
    model: &str,
    prompt: &str,
    temperature: f64,
    offline: bool,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    let snapshot = ctx.data_source(offline)?.models();
    let run = inference::run(&snapshot.data, model, prompt, temperature)?;

    renderer.render(&InferenceViewModel {
        model: run.model,
        version: run.version,
        temperature: run.temperature,
        origin: snapshot.origin.as_str(),
        output: run.output,
    })
}
