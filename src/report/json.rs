use serde::Serialize;

use crate::report::analysis::AnalysisView;
use crate::report::prediction::PredictionView;

#[derive(Debug, Serialize)]
struct Envelope<'a, T> {
    tool: &'static str,
    version: &'static str,
    kind: &'static str,
    view: &'a T,
}

pub fn render_analysis_json(view: &AnalysisView) -> serde_json::Result<String> {
    render("analysis", view)
}

pub fn render_prediction_json(view: &PredictionView) -> serde_json::Result<String> {
    render("prediction", view)
}

fn render<T: Serialize>(kind: &'static str, view: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Envelope {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        kind,
        view,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
