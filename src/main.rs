use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use kira_sepsisrisk::cli::{Cli, Commands, FormatArg};
use kira_sepsisrisk::client::{Client, CohortUpload};
use kira_sepsisrisk::config::ApiConfig;
use kira_sepsisrisk::logging::init_tracing;
use kira_sepsisrisk::model::{AnalysisResult, PredictionResult, check_analysis, check_prediction};
use kira_sepsisrisk::report::analysis::{AnalysisView, build_analysis_view};
use kira_sepsisrisk::report::json::{render_analysis_json, render_prediction_json};
use kira_sepsisrisk::report::outputs::write_analysis_outputs;
use kira_sepsisrisk::report::prediction::{PredictionView, build_prediction_view};
use kira_sepsisrisk::report::text::{
    render_analysis_text, render_error_banner, render_prediction_text,
};
use kira_sepsisrisk::state::{
    PredictionFormState, UploadEvent, UploadState, submit_prediction, submit_upload,
};

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => {
            let client = connect(cli.api_url.as_deref())?;

            let mut state = UploadState::new();
            if let Some(path) = &args.file {
                let upload = CohortUpload::from_path(path)
                    .with_context(|| format!("failed reading {}", path.display()))?;
                state = state.apply(UploadEvent::SelectFile(upload))?;
            }
            let state = submit_upload(&client, &state)?;
            if let Some(message) = state.error() {
                eprint!("{}", render_error_banner(message));
                std::process::exit(1);
            }

            let Some(result) = state.analysis() else {
                return Ok(());
            };
            let Some(view) = build_analysis_view(Some(result)) else {
                return Ok(());
            };
            print_analysis(&view, args.format)?;
            if let Some(out) = &args.out {
                write_analysis_outputs(result, &view, out)
                    .with_context(|| format!("failed writing outputs to {}", out.display()))?;
            }
        }
        Commands::Predict(args) => {
            let client = connect(cli.api_url.as_deref())?;

            let state = PredictionFormState::with_input(args.patient_input());
            let state = submit_prediction(&client, &state)?;
            if let Some(message) = state.error() {
                eprint!("{}", render_error_banner(message));
                std::process::exit(1);
            }
            if let Some(result) = state.prediction() {
                print_prediction(&build_prediction_view(result), args.format)?;
            }
        }
        Commands::RenderAnalysis(args) => {
            let result: AnalysisResult = read_payload(&args.input)?;
            for issue in check_analysis(&result) {
                tracing::warn!(issue = %issue, "analysis payload outside contract");
            }
            if let Some(view) = build_analysis_view(Some(&result)) {
                print_analysis(&view, args.format)?;
            }
        }
        Commands::RenderPrediction(args) => {
            let result: PredictionResult = read_payload(&args.input)?;
            for issue in check_prediction(&result) {
                tracing::warn!(issue = %issue, "prediction payload outside contract");
            }
            print_prediction(&build_prediction_view(&result), args.format)?;
        }
    }

    Ok(())
}

fn connect(api_url: Option<&str>) -> Result<Client> {
    let config = ApiConfig::new(api_url.unwrap_or_default())?;
    tracing::info!(base_url = %config.base_url(), "using analysis service");
    Ok(Client::new(config)?)
}

fn read_payload<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid payload in {}", path.display()))
}

fn print_analysis(view: &AnalysisView, format: FormatArg) -> Result<()> {
    match format {
        FormatArg::Text => print!("{}", render_analysis_text(view)),
        FormatArg::Json => println!("{}", render_analysis_json(view)?),
    }
    Ok(())
}

fn print_prediction(view: &PredictionView, format: FormatArg) -> Result<()> {
    match format {
        FormatArg::Text => print!("{}", render_prediction_text(view)),
        FormatArg::Json => println!("{}", render_prediction_json(view)?),
    }
    Ok(())
}
