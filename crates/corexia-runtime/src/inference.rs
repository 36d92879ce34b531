//! Mock inference runs.
//!
//! The platform has no serving backend yet; a run resolves the model
//! against the loaded collection and produces a deterministic response
//! so the flow can be exercised end to end.

use crate::{Error, Result};
use corexia_types::Model;

/// A completed mock run.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceRun {
    pub model: String,
    pub version: String,
    pub temperature: f64,
    pub output: String,
}

/// Run a prompt against a model from the loaded collection.
///
/// The model is matched by name; an unknown name is rejected listing
/// the available models. Temperature uses the platform's `0..=1`
/// range.
pub fn run(
    models: &[Model],
    model_name: &str,
    prompt: &str,
    temperature: f64,
) -> Result<InferenceRun> {
    if prompt.trim().is_empty() {
        return Err(Error::Inference("prompt must not be empty".to_string()));
    }
    if !(0.0..=1.0).contains(&temperature) {
        return Err(Error::Inference(format!(
            "temperature {} is out of range (expected 0 to 1)",
            temperature
        )));
    }

    let model = models
        .iter()
        .find(|m| m.name == model_name)
        .ok_or_else(|| {
            let available: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
            Error::Inference(format!(
                "unknown model '{}' (available: {})",
                model_name,
                available.join(", ")
            ))
        })?;

    let reversed: String = prompt.chars().rev().collect();
    let output = format!(
        "Mock response (model={}, temp={}):\n{}",
        model.name, temperature, reversed
    );

    Ok(InferenceRun {
        model: model.name.clone(),
        version: model.version.clone(),
        temperature,
        output,
    })
}
