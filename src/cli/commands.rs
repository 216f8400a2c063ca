// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `ask` and `shell`,
// and their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion
//
// Note what is deliberately NOT here: a model flag. The model
// identity is fixed at build time (engine::MODEL_DIR) and is
// not user-configurable.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer a single question against a context passage
    Ask(AskArgs),

    /// Interactive loop: repeated question/context submissions
    /// against the one model loaded for this process
    Shell,
}

/// All arguments for the `ask` command.
#[derive(Args, Debug)]
pub struct AskArgs {
    /// The natural language question to answer
    #[arg(long)]
    pub question: String,

    /// The context passage containing the answer
    #[arg(long, conflicts_with = "context_file")]
    pub context: Option<String>,

    /// Read the context passage from a file instead
    #[arg(long)]
    pub context_file: Option<String>,
}

impl AskArgs {
    /// Resolve the context from whichever flag was given.
    pub fn context_text(&self) -> anyhow::Result<String> {
        match (&self.context, &self.context_file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("cannot read context file '{path}': {e}")),
            (None, None) => anyhow::bail!("provide --context or --context-file"),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_context_wins() {
        let args = AskArgs {
            question:     "q".to_string(),
            context:      Some("inline text".to_string()),
            context_file: None,
        };
        assert_eq!(args.context_text().unwrap(), "inline text");
    }

    #[test]
    fn test_missing_context_is_an_error() {
        let args = AskArgs {
            question:     "q".to_string(),
            context:      None,
            context_file: None,
        };
        assert!(args.context_text().is_err());
    }
}
