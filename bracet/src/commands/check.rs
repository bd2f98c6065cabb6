//! Check command implementation.
//!
//! Lexes each input file and verifies that the token stream reproduces the
//! source and that its scopes are balanced. Problems are reported as
//! diagnostics with a snippet of the offending line.

use std::path::{Path, PathBuf};

use brace_lex::validate::{is_lossless, scope_issues, ScopeIssue};
use brace_util::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceFile, SourceMap, Span,
};

use crate::commands::common::{read_source, render_lex_error, token_offsets, token_span};
use crate::commands::traits::{Command, CommandResult};
use crate::error::{BracetError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files to check.
    pub files: Vec<PathBuf>,
    /// Fail files whose scopes do not balance.
    pub require_balanced: bool,
}

/// Outcome of checking one file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub token_count: usize,
    /// Already rendered against the file's source.
    pub messages: Vec<String>,
    pub errors: usize,
    pub warnings: usize,
    pub failed: bool,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Checks every file, collecting one report per file.
    pub fn check_all(&self) -> Result<CommandResult<Vec<FileReport>>> {
        let mut sources = SourceMap::new();
        let mut reports = Vec::with_capacity(self.args.files.len());
        for path in &self.args.files {
            let content = read_source(path)?;
            let id = sources.add_file(path.display().to_string(), content);
            let file = sources.get(id)?;
            reports.push(self.check_file(path, &file));
        }

        let failed = reports.iter().filter(|r| r.failed).count();
        let mut result = CommandResult::success(Vec::new())
            .with_items_processed(reports.len())
            .with_items_failed(failed);
        for report in reports.iter().filter(|r| !r.failed && r.warnings > 0) {
            result = result.with_warning(format!(
                "{}: {} unbalanced scope(s)",
                report.path.display(),
                report.warnings
            ));
        }
        result.data = reports;
        Ok(result)
    }

    /// Lexes and validates a single file.
    pub fn check_file(&self, path: &Path, file: &SourceFile) -> FileReport {
        let handler = Handler::new();
        let mut token_count = 0;
        let mut messages = Vec::new();

        match brace_lex::tokenize(file.content()) {
            Err(err) => {
                messages.push(render_lex_error(file, &err));
                handler.emit(err.to_diagnostic());
            },
            Ok(tokens) => {
                token_count = tokens.len();
                if !is_lossless(file.content(), &tokens) {
                    DiagnosticBuilder::error("token stream does not reproduce the source")
                        .code(DiagnosticCode::E_LEXER_INTERNAL)
                        .span(Span::point(0, 1, 1).with_file_id(file.id()))
                        .emit(&handler);
                }
                let offsets = token_offsets(&tokens);
                for issue in scope_issues(&tokens) {
                    let span = token_span(file, &offsets, issue.index());
                    let text = &tokens[issue.index()].text;
                    let level = if self.args.require_balanced {
                        Level::Error
                    } else {
                        Level::Warning
                    };
                    handler.emit(unbalanced_scope(level, issue, text, span));
                }
                for diagnostic in handler.diagnostics() {
                    messages.push(diagnostic.render(Some(file)));
                }
            },
        }

        let report = FileReport {
            path: path.to_path_buf(),
            token_count,
            messages,
            errors: handler.error_count(),
            warnings: handler.warning_count(),
            failed: handler.has_errors(),
        };
        tracing::debug!(
            "{}: {} tokens, {} error(s), {} warning(s)",
            path.display(),
            report.token_count,
            report.errors,
            report.warnings
        );
        report
    }
}

fn unbalanced_scope(level: Level, issue: ScopeIssue, text: &str, span: Span) -> Diagnostic {
    let message = match issue {
        ScopeIssue::Unclosed { .. } => format!("`{text}` is never closed"),
        ScopeIssue::Unmatched { .. } => format!("`{text}` does not close any open scope"),
    };
    DiagnosticBuilder::new(level, message)
        .code(DiagnosticCode::W_UNBALANCED_SCOPE)
        .span(span)
        .build()
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CommandResult<Vec<FileReport>>;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let result = self.check_all()?;
        for report in &result.data {
            for message in &report.messages {
                eprintln!("{message}\n");
            }
            let status = if report.failed { "FAIL" } else { "ok" };
            println!("{status:<4} {} ({} tokens)", report.path.display(), report.token_count);
        }
        for warning in &result.warnings {
            tracing::warn!("{warning}");
        }
        println!(
            "checked {} file(s): {} failed",
            result.items_processed, result.items_failed
        );

        if !result.is_success() {
            return Err(BracetError::CheckFailed {
                failed: result.items_failed,
                total: result.items_processed,
            });
        }
        Ok(result)
    }

    fn name() -> &'static str {
        "check"
    }
}
