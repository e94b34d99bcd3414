use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use posgrammar::dictionary::load_dictionary;
use posgrammar::{
    analyze_document, normalize_line_endings, Algorithm, DocumentReport, DocumentStats, RunStats,
    SentenceRuleChecker, SentenceRuleConfig, WordValidator,
};

#[derive(Parser, Debug)]
#[command(name = "posgrammar")]
#[command(about = "Check documents against a part-of-speech dictionary")]
#[command(version)]
struct Args {
    /// Documents to check
    #[arg(required = true)]
    documents: Vec<PathBuf>,

    /// CSV dictionary with an `ID,Word,POS` header
    #[arg(long, short = 'd')]
    dictionary: PathBuf,

    /// Search algorithm for the noun/verb check (KMP or BoyerMoore)
    #[arg(long, short = 'a', default_value = "KMP")]
    algorithm: Algorithm,

    /// Do not count plural nouns (NNS) as verbs
    #[arg(long)]
    strict_verb_tags: bool,

    /// Print reports as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Abort on the first unreadable document
    #[arg(long)]
    fail_fast: bool,

    /// Write per-document timing stats to this JSON file
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: structured JSON logs on stderr keep stdout free for the report itself
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let run_start = Instant::now();
    let dictionary = Arc::new(load_dictionary(&args.dictionary).await?);
    if dictionary.is_empty() {
        warn!("Dictionary {} contains no words", args.dictionary.display());
    }

    let config = if args.strict_verb_tags {
        SentenceRuleConfig::strict_verb_tags()
    } else {
        SentenceRuleConfig::default()
    };
    let checker = Arc::new(SentenceRuleChecker::new(config, args.algorithm)?);
    let validator = Arc::new(WordValidator::new()?);

    // WHY: documents are independent; each runs on the blocking pool against the shared read-only dictionary
    let mut handles = Vec::with_capacity(args.documents.len());
    for path in &args.documents {
        let name = path.display().to_string();
        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => normalize_line_endings(&text),
            Err(e) => {
                let err = anyhow::Error::new(e).context(format!("Failed to read document {name}"));
                if args.fail_fast {
                    return Err(err);
                }
                warn!("{:#}", err);
                handles.push((name, None, Err(err)));
                continue;
            }
        };

        let dictionary = Arc::clone(&dictionary);
        let checker = Arc::clone(&checker);
        let validator = Arc::clone(&validator);
        let task_name = name.clone();
        let chars = text.chars().count();
        let handle = tokio::task::spawn_blocking(move || {
            analyze_document(&task_name, &text, &dictionary, &validator, &checker)
        });
        handles.push((name, Some(chars), Ok(handle)));
    }

    let mut stats = RunStats {
        algorithm: args.algorithm.to_string(),
        dictionary_words: dictionary.word_count() as u64,
        dictionary_tags: dictionary.tag_count() as u64,
        ..RunStats::default()
    };
    let mut reports: Vec<DocumentReport> = Vec::new();

    for (name, chars, outcome) in handles {
        match outcome {
            Ok(handle) => {
                let report = handle
                    .await
                    .with_context(|| format!("Analysis task for {name} did not complete"))?;
                stats.documents.push(DocumentStats::success(&report, chars.unwrap_or_default()));
                reports.push(report);
            }
            Err(err) => stats.documents.push(DocumentStats::failure(&name, &err)),
        }
    }
    stats.total_processing_time_ms = run_start.elapsed().as_millis() as u64;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            if reports.len() > 1 {
                println!("== {}", report.document);
            }
            println!();
            print!("{}", report.render_text());
            println!();
        }
    }

    if let Some(stats_path) = &args.stats_out {
        let content = stats.to_json()?;
        tokio::fs::write(stats_path, content)
            .await
            .with_context(|| format!("Failed to write stats file {}", stats_path.display()))?;
        info!("Wrote run stats to {}", stats_path.display());
    }

    info!(
        documents = reports.len(),
        elapsed_ms = stats.total_processing_time_ms,
        "Run complete"
    );
    Ok(())
}
