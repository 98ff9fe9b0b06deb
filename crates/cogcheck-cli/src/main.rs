//! Console front end for the cogcheck screening questionnaire.

mod render;
mod session;
mod share;
mod speech;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use cogcheck_core::{ScreeningResult, prompts};
use cogcheck_eval::Evaluator;
use cogcheck_remote::HttpScorer;

use speech::{ConsoleEars, ConsoleVoice};

#[derive(Parser)]
#[command(name = "cogcheck", version, about = "MMSE-style cognitive screening questionnaire")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run an interactive screening session on the console.
    Run {
        /// Remote evaluation endpoint; scoring is local-only when absent.
        #[arg(long, env = "COGCHECK_ENDPOINT")]
        endpoint: Option<String>,
        /// Remote call timeout in seconds.
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,
        /// Write the result JSON to this file.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Print a shareable payload after the result card.
        #[arg(long)]
        share: bool,
    },
    /// Score answers from a file (one answer per line, question order).
    Score {
        answers: PathBuf,
        #[arg(long, env = "COGCHECK_ENDPOINT")]
        endpoint: Option<String>,
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Decode a shared result payload and render it.
    Decode { payload: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            endpoint,
            timeout_secs,
            output,
            share,
        } => run(endpoint, timeout_secs, output, share).await,
        Command::Score {
            answers,
            endpoint,
            timeout_secs,
            output,
        } => score(&answers, endpoint, timeout_secs, output).await,
        Command::Decode { payload } => {
            let decoded = share::decode(&payload).context("decoding shared payload")?;
            render::print_share_card(&decoded);
            Ok(())
        }
    }
}

async fn run(
    endpoint: Option<String>,
    timeout_secs: u64,
    output: Option<PathBuf>,
    share: bool,
) -> anyhow::Result<()> {
    let evaluator = build_evaluator(endpoint, timeout_secs)?;

    println!("認知機能チェックを始めます。全{}問、約3分です。", prompts().len());
    println!();

    let transcript = session::run_session(&mut ConsoleVoice, &mut ConsoleEars);

    let mut result = evaluator
        .evaluate(&transcript.questions, &transcript.responses)
        .await?;
    transcript.attach_to(&mut result);

    println!();
    render::print_result_card(&result);

    if share {
        println!();
        println!("共有用データ: {}", share::encode(&result)?);
    }
    if let Some(path) = output {
        write_result(&path, &result)?;
    }
    Ok(())
}

async fn score(
    answers: &Path,
    endpoint: Option<String>,
    timeout_secs: u64,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let evaluator = build_evaluator(endpoint, timeout_secs)?;

    let text = std::fs::read_to_string(answers)
        .with_context(|| format!("reading answers from {}", answers.display()))?;
    let responses: Vec<String> = text.lines().map(|l| l.to_string()).collect();

    let result = evaluator.evaluate(&prompts(), &responses).await?;
    render::print_result_card(&result);

    if let Some(path) = output {
        write_result(&path, &result)?;
    }
    Ok(())
}

fn build_evaluator(endpoint: Option<String>, timeout_secs: u64) -> anyhow::Result<Evaluator> {
    match endpoint {
        Some(url) => {
            let scorer = HttpScorer::with_timeout(url, Duration::from_secs(timeout_secs))
                .context("building remote scorer")?;
            Ok(Evaluator::with_scorer(Box::new(scorer)))
        }
        None => Ok(Evaluator::local()),
    }
}

fn write_result(path: &Path, result: &ScreeningResult) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    std::fs::write(path, json).with_context(|| format!("writing result to {}", path.display()))?;
    tracing::info!(path = %path.display(), "result saved");
    Ok(())
}
