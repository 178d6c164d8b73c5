use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::model::PatientInput;

#[derive(Debug, Parser)]
#[command(
    name = "kira-sepsisrisk",
    version,
    about = "Sepsis cohort analysis and mortality-risk prediction client"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "SEPSIS_API_URL",
        help = "Base URL of the analysis service"
    )]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Upload a cohort CSV and render the biomarker/outcome analysis.
    Analyze(AnalyzeArgs),
    /// Submit one patient's biomarkers and render the risk assessment.
    Predict(PredictArgs),
    /// Render a saved analysis payload without contacting the service.
    RenderAnalysis(RenderArgs),
    /// Render a saved prediction payload without contacting the service.
    RenderPrediction(RenderArgs),
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[arg(long, help = "Cohort CSV file")]
    pub file: Option<PathBuf>,

    #[arg(long, help = "Directory for analysis.json, report.txt and ROC tables")]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    #[arg(long, help = "Lactate (0hr), mmol/L")]
    pub lactate: Option<String>,

    #[arg(long, help = "Albumin (0hr), g/dL")]
    pub albumin: Option<String>,

    #[arg(long, help = "CRP (0hr), mg/L")]
    pub crp: Option<String>,

    #[arg(long, help = "NLR (0hr), neutrophil-lymphocyte ratio")]
    pub nlr: Option<String>,

    #[arg(long, help = "PCT (0hr), ng/mL")]
    pub pct: Option<String>,

    #[arg(long, help = "APACHE II score, 0-71")]
    pub apache: Option<String>,

    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,
}

impl PredictArgs {
    /// Omitted flags are sent as empty strings so the service imputes them.
    pub fn patient_input(&self) -> PatientInput {
        PatientInput {
            lactate: self.lactate.clone().unwrap_or_default(),
            albumin: self.albumin.clone().unwrap_or_default(),
            crp: self.crp.clone().unwrap_or_default(),
            nlr: self.nlr.clone().unwrap_or_default(),
            pct: self.pct.clone().unwrap_or_default(),
            apache: self.apache.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[arg(long, help = "JSON payload previously returned by the service")]
    pub input: PathBuf,

    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

#[cfg(test)]
#[path = "../tests/src_inline/cli.rs"]
mod tests;
