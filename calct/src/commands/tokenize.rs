//! Tokenize command implementation.
//!
//! Reads calc expressions from arguments, a file, or stdin, and prints the
//! tokens of each one.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use calc_lex::{tokenize_spanned, SpannedToken};
use tracing::debug;

use crate::commands::common::{error_messages, OutputFormat};
use crate::error::{CalctError, Result};

/// Arguments for the tokenize command.
#[derive(Debug, Clone, Default)]
pub struct TokenizeArgs {
    /// Expressions given on the command line.
    pub expressions: Vec<String>,
    /// File holding one expression per line.
    pub file: Option<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Print byte spans in text output.
    pub show_spans: bool,
    /// Fail if any unknown token is found.
    pub fail_on_unknown: bool,
}

/// Counts gathered over one run of the command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizeSummary {
    /// Number of expressions tokenized.
    pub expressions: usize,
    /// Total number of tokens produced.
    pub tokens: usize,
    /// Number of unknown tokens among them.
    pub unknown: usize,
}

/// An unknown token and where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
struct UnknownReport {
    expression: usize,
    token: SpannedToken,
}

/// Tokenize command handler.
pub struct TokenizeCommand {
    args: TokenizeArgs,
}

impl TokenizeCommand {
    /// Create a new TokenizeCommand.
    pub fn new(args: TokenizeArgs) -> Self {
        Self { args }
    }

    /// Execute the command against the process's stdin and stdout.
    pub fn run(&self) -> Result<TokenizeSummary> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with(stdin.lock(), &mut out)
    }

    /// Execute the command with explicit input and output streams.
    ///
    /// `stdin` is only read when neither expressions nor a file were given.
    pub fn run_with<R: BufRead, W: Write>(&self, stdin: R, out: &mut W) -> Result<TokenizeSummary> {
        let inputs = self.collect_inputs(stdin)?;
        debug!(
            expressions = inputs.len(),
            format = self.args.format.name(),
            "tokenizing"
        );
        let mut summary = TokenizeSummary::default();
        let mut unknown = Vec::new();

        for (index, input) in inputs.iter().enumerate() {
            let tokens = tokenize_spanned(input);
            debug!(expression = index + 1, tokens = tokens.len(), "tokenized expression");

            match self.args.format {
                OutputFormat::Text => self.write_text(out, index, &tokens)?,
                OutputFormat::Json => Self::write_json(out, &tokens)?,
            }

            summary.expressions += 1;
            summary.tokens += tokens.len();
            unknown.extend(
                tokens
                    .into_iter()
                    .filter(|t| t.token.is_unknown())
                    .map(|token| UnknownReport {
                        expression: index + 1,
                        token,
                    }),
            );
        }
        out.flush()?;

        summary.unknown = unknown.len();
        debug!(
            expressions = summary.expressions,
            tokens = summary.tokens,
            unknown = summary.unknown,
            "tokenize finished"
        );

        if self.args.fail_on_unknown && !unknown.is_empty() {
            for report in &unknown {
                eprintln!(
                    "expression {}, bytes {}: {}",
                    report.expression,
                    report.token.span,
                    report.token.token.describe()
                );
            }
            return Err(CalctError::Validation(format!(
                "{} {}",
                error_messages::UNKNOWN_TOKENS,
                unknown.len()
            )));
        }

        Ok(summary)
    }

    /// Gather the expressions to tokenize, skipping blank lines.
    fn collect_inputs<R: BufRead>(&self, stdin: R) -> Result<Vec<String>> {
        let lines: Vec<String> = if let Some(path) = &self.args.file {
            if !path.exists() {
                return Err(CalctError::Validation(format!(
                    "{} {}",
                    error_messages::INPUT_PATH_NOT_EXIST,
                    path.display()
                )));
            }
            if !path.is_file() {
                return Err(CalctError::Validation(format!(
                    "{} {}",
                    error_messages::INPUT_PATH_NOT_FILE,
                    path.display()
                )));
            }
            let content = std::fs::read_to_string(path).map_err(|e| {
                CalctError::FileOperation(format!("Failed to read {}: {}", path.display(), e))
            })?;
            content.lines().map(str::to_string).collect()
        } else if !self.args.expressions.is_empty() {
            self.args.expressions.clone()
        } else {
            stdin.lines().collect::<io::Result<Vec<_>>>()?
        };

        Ok(lines
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect())
    }

    fn write_text<W: Write>(
        &self,
        out: &mut W,
        index: usize,
        tokens: &[SpannedToken],
    ) -> Result<()> {
        if index > 0 {
            writeln!(out)?;
        }
        for spanned in tokens {
            if self.args.show_spans {
                writeln!(out, "{} @ {}", spanned.token.describe(), spanned.span)?;
            } else {
                writeln!(out, "{}", spanned.token.describe())?;
            }
        }
        Ok(())
    }

    fn write_json<W: Write>(out: &mut W, tokens: &[SpannedToken]) -> Result<()> {
        serde_json::to_writer(&mut *out, tokens)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Run the tokenize command.
pub fn run_tokenize(args: TokenizeArgs) -> Result<()> {
    TokenizeCommand::new(args).run().map(|_| ())
}
