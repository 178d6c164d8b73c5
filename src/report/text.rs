use std::fmt::Write;

use crate::report::analysis::AnalysisView;
use crate::report::prediction::PredictionView;
use crate::report::format_f64_4;
use crate::report::risk::tone_marker;

const BAR_WIDTH: usize = 40;

pub fn render_analysis_text(view: &AnalysisView) -> String {
    let mut out = String::new();

    out.push_str("Correlation Analysis\n");
    out.push_str("====================\n");
    for cell in &view.correlations {
        let _ = writeln!(out, "{:<16}{}", cell.label, cell.value);
    }
    out.push('\n');

    for model in &view.models {
        let _ = writeln!(out, "{}", model.name);
        let _ = writeln!(out, "{}", "-".repeat(model.name.chars().count()));
        out.push_str("Performance Metrics\n");
        for row in &model.metrics {
            let _ = writeln!(out, "  {:<14}{}", format!("{}:", row.label), row.value);
        }
        let _ = writeln!(out, "  {:<14}{}", "AUC:", model.auc);

        match &model.roc {
            Some(points) => {
                let _ = writeln!(out, "ROC Curve ({} points, reference 0,0 -> 1,1)", points.len());
                out.push_str("  fpr\ttpr\n");
                for p in points {
                    let _ = writeln!(out, "  {}\t{}", format_f64_4(p.fpr), format_f64_4(p.tpr));
                }
            }
            None => out.push_str("ROC Curve: unavailable (fpr/tpr length mismatch)\n"),
        }
        out.push('\n');
    }

    push_issues(&mut out, &view.issues);
    out
}

pub fn render_prediction_text(view: &PredictionView) -> String {
    let mut out = String::new();
    let risk = &view.risk;

    out.push_str("Risk Assessment\n");
    out.push_str("===============\n");
    let _ = writeln!(out, "{} {}", tone_marker(risk.tone), risk.risk_level);
    let _ = writeln!(out, "Mortality Probability: {}", risk.mortality);
    let _ = writeln!(out, "Survival Probability:  {}", risk.survival);
    let _ = writeln!(out, "Confidence Score:      {}%", risk.confidence);
    let _ = writeln!(out, "Clinical Recommendation: {}\n", risk.recommendation);

    out.push_str("Ensemble Model Analysis\n");
    out.push_str("-----------------------\n");
    let _ = writeln!(out, "{}", view.ensemble.headline);
    let _ = writeln!(out, "Model Agreement: {}", view.ensemble.agreement);
    for member in &view.ensemble.members {
        let _ = writeln!(
            out,
            "  {:<24}{:>7}  {} {}",
            member.model,
            member.probability,
            tone_marker(member.tone),
            member.prediction
        );
    }
    out.push('\n');

    if !view.biomarkers.is_empty() {
        out.push_str("Patient Biomarkers\n");
        out.push_str("------------------\n");
        for tile in &view.biomarkers {
            let _ = writeln!(out, "  {:<24}{}", tile.label, tile.value);
        }
        out.push('\n');
    }

    if !view.importance.is_empty() {
        out.push_str("Feature Importance Analysis\n");
        out.push_str("---------------------------\n");
        for bar in &view.importance {
            let filled = ((bar.width_percent / 100.0) * BAR_WIDTH as f64).round() as usize;
            let filled = filled.min(BAR_WIDTH);
            let _ = writeln!(
                out,
                "  {:<10}{}{} {}",
                format!("{}:", bar.feature),
                "#".repeat(filled),
                ".".repeat(BAR_WIDTH - filled),
                bar.percent
            );
        }
        out.push('\n');
    }

    push_issues(&mut out, &view.issues);
    let _ = writeln!(out, "Clinical Disclaimer: {}", view.disclaimer);
    out
}

pub fn render_error_banner(message: &str) -> String {
    format!("Error: {}\n", message)
}

fn push_issues(out: &mut String, issues: &[String]) {
    if issues.is_empty() {
        return;
    }
    out.push_str("Payload warnings\n");
    for issue in issues {
        let _ = writeln!(out, "  - {}", issue);
    }
    out.push('\n');
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
