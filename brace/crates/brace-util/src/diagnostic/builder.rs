//! Fluent construction of diagnostics and the source excerpts they carry.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::{SourceFile, Span};

/// One source line with a caret underline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    pub line: String,
    pub line_number: usize,
    /// 1-based, inclusive
    pub start_column: usize,
    /// 1-based, exclusive
    pub end_column: usize,
    pub label: Option<String>,
}

impl SourceSnippet {
    pub fn new(line: impl Into<String>, line_number: usize, start_column: usize, end_column: usize) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: None,
        }
    }

    /// Excerpt for `span` from `file`. A span that runs past the end of its
    /// first line is underlined to the end of that line.
    pub fn from_span(file: &SourceFile, span: Span) -> Option<Self> {
        let line_number = span.line as usize;
        let line = file.line_at(line_number)?;
        let start_column = span.column.max(1) as usize;
        let width = file
            .content()
            .get(span.start..span.end)
            .map_or(0, |text| text.chars().take_while(|c| !matches!(c, '\r' | '\n')).count());
        let line_len = line.chars().count();
        let end_column = (start_column + width).min(line_len + 1).max(start_column + 1);
        Some(Self::new(line, line_number, start_column, end_column))
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Renders with a line-number gutter, e.g.
    ///
    /// ```text
    ///   3 | let x = §
    ///     |         ^ here
    /// ```
    pub fn format(&self) -> String {
        let gutter = self.line_number.to_string().len().max(3);
        let pad = " ".repeat(self.start_column.saturating_sub(1));
        let carets = "^".repeat(self.end_column.saturating_sub(self.start_column).max(1));
        let mut out = format!(
            "{:>gutter$} | {}\n{:>gutter$} | {pad}{carets}",
            self.line_number, self.line, ""
        );
        if let Some(label) = &self.label {
            out.push(' ');
            out.push_str(label);
        }
        out
    }
}

/// Builds a [`Diagnostic`] step by step.
///
/// ```
/// use brace_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
///
/// let diag = DiagnosticBuilder::error("unexpected character `§`")
///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
///     .help("remove the character or place it inside a string")
///     .build();
/// assert_eq!(diag.helps.len(), 1);
/// ```
#[must_use]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::new(level, message, Span::DUMMY),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.diagnostic.notes.push(note.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.diagnostic.helps.push(help.into());
        self
    }

    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.diagnostic.snippets.push(snippet);
        self
    }

    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    pub fn emit(self, handler: &Handler) {
        handler.emit(self.build());
    }
}
