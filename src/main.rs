mod input;
mod logging;
mod model;
mod report;
mod scoring;
mod store;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser, Subcommand};

use crate::input::{load_scored_jsonl, load_text, parse_assignment};
use crate::model::weights::WeightProfile;
use crate::report::AssessmentView;
use crate::report::json::{CompareOutput, ExtractOutput, SavedOutput, render_json};
use crate::report::text::{
    render_assessment_text, render_comparison_text, render_comprehensive_text,
    render_history_text, render_summary_text,
};
use crate::scoring::aggregator::ScoringSession;
use crate::scoring::comparator::{ComparisonVector, compare};
use crate::scoring::comprehensive::comprehensive_scores;
use crate::scoring::extract::extract_scores;
use crate::scoring::summary::summarize;
use crate::store::export::render_csv;
use crate::store::{FileStore, HistoryStore};

#[derive(Parser, Debug)]
#[command(name = "seqeval")]
#[command(
    version,
    about = "Weighted human scoring and human/AI agreement for image sequences"
)]
struct Cli {
    /// History file
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        default_value = "seqeval-history.json"
    )]
    store: PathBuf,

    /// Weight profile (JSON); the 4:4:2 reference profile when omitted
    #[arg(long, global = true, value_name = "FILE")]
    weights: Option<PathBuf>,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one sequence and print dimension totals and the overall score
    Rate {
        /// Sub-metric rating, `key=value` or `dimension.key=value`
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Append the assessment to the history
        #[arg(long)]
        save: bool,

        /// Sequence label for the saved record
        #[arg(long, value_name = "NAME")]
        label: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Compare human dimension totals with AI scores
    Compare {
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// AI dimension scores in order consistency,aesthetic,physicality
        #[arg(long, value_name = "C,A,P")]
        ai: String,

        #[arg(long)]
        json: bool,
    },

    /// Parse sub-metric scores out of an evaluator response
    Extract {
        #[arg(long, value_name = "FILE")]
        input: PathBuf,

        /// Human dimension scores to compare against the extracted totals
        #[arg(long, value_name = "C,A,P")]
        human: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Aggregate statistics over scored sequences (JSON lines)
    Summary {
        #[arg(long, value_name = "FILE")]
        input: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// List saved assessments, newest first
    History {
        #[arg(long)]
        json: bool,
    },

    /// Write the history as CSV
    Export {
        /// Output file; stdout when omitted
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Remove every saved assessment
    Clear,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let weights = load_weights(cli.weights.as_deref())?;
    let mut history = HistoryStore::new(FileStore::new(&cli.store));

    match cli.command {
        Commands::Rate {
            set,
            save,
            label,
            json,
        } => {
            let session = build_session(weights, &set)?;
            let view = AssessmentView::from_session(&session);
            let saved = if save {
                let now = Utc::now();
                let label = label.unwrap_or_else(|| default_label(now));
                Some(
                    history
                        .save_session(&label, &session, now)
                        .map_err(|e| e.to_string())?,
                )
            } else {
                None
            };

            if json {
                let out = SavedOutput {
                    assessment: &view,
                    saved: saved.as_ref(),
                };
                print!("{}", render_json(&out).map_err(|e| e.to_string())?);
            } else {
                print!("{}", render_assessment_text(&view));
                if let Some(record) = &saved {
                    println!("Saved assessment {} ({})", record.id(), record.label());
                }
            }
        }
        Commands::Compare { set, ai, json } => {
            let session = build_session(weights, &set)?;
            let ai = ComparisonVector::parse(&ai).map_err(|e| e.to_string())?;
            let view = AssessmentView::from_session(&session);
            let report = compare(&session.totals_vector(), &ai);

            if json {
                let out = CompareOutput {
                    assessment: &view,
                    comparison: &report,
                };
                print!("{}", render_json(&out).map_err(|e| e.to_string())?);
            } else {
                print!("{}", render_assessment_text(&view));
                println!();
                print!("{}", render_comparison_text(&report));
            }
        }
        Commands::Extract { input, human, json } => {
            let text = load_text(&input).map_err(|e| e.to_string())?;
            let extracted = extract_scores(&text);
            let scores = comprehensive_scores(&extracted, &weights);

            let comparison = match human {
                Some(raw) => {
                    let human = ComparisonVector::parse(&raw).map_err(|e| e.to_string())?;
                    let mut session = ScoringSession::new(weights);
                    session.apply(&extracted).map_err(|e| e.to_string())?;
                    Some(compare(&human, &session.totals_vector()))
                }
                None => None,
            };

            if json {
                let out = ExtractOutput {
                    scores: &scores,
                    comparison: comparison.as_ref(),
                };
                print!("{}", render_json(&out).map_err(|e| e.to_string())?);
            } else {
                print!("{}", render_comprehensive_text(&scores));
                if let Some(report) = &comparison {
                    println!();
                    print!("{}", render_comparison_text(report));
                }
            }
        }
        Commands::Summary { input, json } => {
            let sequences = load_scored_jsonl(&input, &weights).map_err(|e| e.to_string())?;
            let summary = summarize(&sequences, &weights).map_err(|e| e.to_string())?;
            if json {
                print!("{}", render_json(&summary).map_err(|e| e.to_string())?);
            } else {
                print!("{}", render_summary_text(&summary));
            }
        }
        Commands::History { json } => {
            let records = history.load().map_err(|e| e.to_string())?;
            if json {
                print!("{}", render_json(&records).map_err(|e| e.to_string())?);
            } else {
                print!("{}", render_history_text(&records));
            }
        }
        Commands::Export { out } => {
            let records = history.load().map_err(|e| e.to_string())?;
            if records.is_empty() {
                return Err("No assessment records to export".to_string());
            }
            let csv = render_csv(&records);
            match out {
                Some(path) => {
                    std::fs::write(&path, csv.as_bytes())
                        .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
                    tracing::info!(
                        path = %path.display(),
                        records = records.len(),
                        "history exported"
                    );
                }
                None => println!("{csv}"),
            }
        }
        Commands::Clear => {
            history.clear().map_err(|e| e.to_string())?;
            println!("History cleared");
        }
    }

    Ok(())
}

fn load_weights(path: Option<&Path>) -> Result<WeightProfile, String> {
    match path {
        Some(path) => WeightProfile::load(path).map_err(|e| e.to_string()),
        None => Ok(WeightProfile::reference()),
    }
}

/// Applies `--set` assignments in order. The first invalid one aborts.
fn build_session(weights: WeightProfile, assignments: &[String]) -> Result<ScoringSession, String> {
    let mut session = ScoringSession::new(weights);
    for raw in assignments {
        let assignment = parse_assignment(raw).map_err(|e| e.to_string())?;
        let result = match assignment.dimension.as_deref() {
            Some(dimension) => session.set_sub_metric(dimension, &assignment.key, assignment.value),
            None => session.set_by_key(&assignment.key, assignment.value),
        };
        result.map_err(|e| format!("--set {raw}: {e}"))?;
    }
    Ok(session)
}

fn default_label(now: DateTime<Utc>) -> String {
    format!("Sequence {}", now.format("%H:%M:%S"))
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
