use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::model::AnalysisResult;
use crate::report::analysis::{AnalysisView, RocPoint};
use crate::report::text::render_analysis_text;

/// Writes `analysis.json`, `report.txt` and one `roc_<model>.tsv` per
/// renderable curve. Returns the paths written.
pub fn write_analysis_outputs(
    result: &AnalysisResult,
    view: &AnalysisView,
    out_dir: &Path,
) -> std::io::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();

    let json_path = out_dir.join("analysis.json");
    let json = serde_json::to_string_pretty(result).map_err(std::io::Error::other)?;
    write_text(&json_path, &json)?;
    written.push(json_path);

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_analysis_text(view))?;
    written.push(report_path);

    let mut stems = HashSet::new();
    for model in &view.models {
        let Some(points) = &model.roc else {
            continue;
        };
        let stem = unique_stem(&mut stems, file_stem(&model.name));
        let path = out_dir.join(format!("roc_{}.tsv", stem));
        write_roc_tsv(points, &path)?;
        written.push(path);
    }

    info!(dir = %out_dir.display(), files = written.len(), "analysis outputs written");
    Ok(written)
}

fn write_roc_tsv(points: &[RocPoint], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "fpr\ttpr")?;
    for p in points {
        writeln!(w, "{}\t{}", p.fpr, p.tpr)?;
    }
    w.flush()
}

fn write_text(path: &Path, text: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(text.as_bytes())?;
    w.flush()
}

/// Distinct names can collapse to one stem; later ones get `_2`, `_3`, ...
fn unique_stem(used: &mut HashSet<String>, stem: String) -> String {
    if used.insert(stem.clone()) {
        return stem;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{}_{}", stem, n);
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

/// Lowercase file-name-safe form of a model name.
pub fn file_stem(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_sep = true;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_sep = false;
        } else if !last_sep {
            out.push('_');
            last_sep = true;
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    if out.is_empty() {
        out.push_str("model");
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/outputs.rs"]
mod tests;
