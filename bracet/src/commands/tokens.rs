//! Tokens command implementation.
//!
//! Lexes each input file and prints its tokens, either as text lines or as
//! JSON.

use std::io::Write;
use std::path::PathBuf;

use brace_lex::Token;
use brace_util::SourceFile;

use crate::commands::common::{format_token_line, read_source, render_lex_error};
use crate::commands::traits::{Command, CommandResult};
use crate::config::OutputFormat;
use crate::error::{BracetError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Files to lex.
    pub files: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Include whitespace, linebreak and comment tokens.
    pub show_trivia: bool,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Lexes every file and writes the tokens to `out`.
    ///
    /// With several files, text output puts a `==> path <==` header before
    /// each file and JSON output writes one array per line.
    pub fn write_all(&self, out: &mut impl Write) -> Result<CommandResult> {
        let many = self.args.files.len() > 1;
        for (id, path) in self.args.files.iter().enumerate() {
            let source = read_source(path)?;
            let tokens = match brace_lex::tokenize(&source) {
                Ok(tokens) => tokens,
                Err(err) => {
                    let file = SourceFile::new(id, path.display().to_string(), source);
                    eprintln!("{}", render_lex_error(&file, &err));
                    return Err(BracetError::Lex {
                        path: path.clone(),
                        source: err,
                    });
                },
            };
            tracing::debug!("{}: {} tokens", path.display(), tokens.len());

            let shown: Vec<&Token> = tokens
                .iter()
                .filter(|t| self.args.show_trivia || !t.is_whitespace_or_comment_or_linebreak())
                .collect();
            match self.args.format {
                OutputFormat::Text => {
                    if many {
                        writeln!(out, "==> {} <==", path.display())?;
                    }
                    for token in shown {
                        writeln!(out, "{}", format_token_line(token))?;
                    }
                },
                OutputFormat::Json => {
                    serde_json::to_writer(&mut *out, &shown)?;
                    writeln!(out)?;
                },
            }
        }
        Ok(CommandResult::default().with_items_processed(self.args.files.len()))
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = CommandResult;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_all(&mut out)
    }

    fn name() -> &'static str {
        "tokens"
    }
}
