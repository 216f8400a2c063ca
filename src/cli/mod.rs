// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// The entry point for all user interaction. It uses the `clap`
// crate to parse arguments, wires the model cache into the
// answer service, and formats results and failures. All
// answering logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `ask`   — one question, one context, one answer
//   2. `shell` — interactive loop; submissions are serialized
//                one at a time, the model loads on the first
//                submission and is reused for the rest
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Parser;
use commands::{AskArgs, Commands};

use crate::application::answer_service::AnswerService;
use crate::application::model_cache::ModelCache;
use crate::domain::answer::AnswerResult;
use crate::engine::extractor::SpanExtractor;
use crate::engine::MODEL_DIR;

#[derive(Parser, Debug)]
#[command(
    name = "span-qa",
    version = "0.1.0",
    about = "Ask a question against a context passage; get back the answer span."
)]
pub struct Cli {
    /// The subcommand to run (ask or shell)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch. This layer only
    /// routes and formats — it never computes answers.
    pub fn run(self) -> Result<()> {
        // The loader is deferred: nothing is read from disk
        // until the first answer is requested.
        let cache   = ModelCache::new(|| SpanExtractor::load(MODEL_DIR));
        let service = AnswerService::new(cache);

        match self.command {
            Commands::Ask(args) => run_ask(&service, args),
            Commands::Shell     => run_shell(&service),
        }
    }
}

fn run_ask(service: &AnswerService<SpanExtractor>, args: AskArgs) -> Result<()> {
    let context = args.context_text()?;
    let result  = service.answer(&args.question, &context)?;
    print_result(&result);
    Ok(())
}

/// Interactive loop. One submission in flight at a time; an
/// inference failure is displayed and the loop continues — the
/// loaded model stays valid for the next round.
fn run_shell(service: &AnswerService<SpanExtractor>) -> Result<()> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let Some(question) = prompt_line(&mut lines, "Question (empty to quit): ")? else {
            return Ok(());
        };
        if question.is_empty() {
            return Ok(());
        }

        println!("Context (finish with a blank line):");
        let mut context = String::new();
        while let Some(line) = lines.next().transpose()? {
            if line.is_empty() {
                break;
            }
            if !context.is_empty() {
                context.push('\n');
            }
            context.push_str(&line);
        }

        match service.answer(&question, &context) {
            Ok(result) => print_result(&result),
            Err(e)     => eprintln!("Error: {e}"),
        }
        println!();
    }
}

fn prompt_line(
    lines:  &mut impl Iterator<Item = std::io::Result<String>>,
    prompt: &str,
) -> Result<Option<String>> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    Ok(lines.next().transpose()?)
}

fn print_result(result: &AnswerResult) {
    println!(
        "Answer: '{}', score: {}, start: {}, end: {}",
        result.answer, result.score, result.start, result.end
    );
}
