//! Source files and the map that owns them.
//!
//! Line boundaries follow the lexer's rules: `\r\n`, a lone `\r` and `\n`
//! each end one line, so line numbers computed here agree with the ones
//! stored in lexer spans.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::{FileId, Span};
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with precomputed line starts.
#[derive(Clone)]
pub struct SourceFile {
    id: FileId,
    name: String,
    content: Arc<str>,
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::compute_line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn compute_line_starts(content: &str) -> Arc<[usize]> {
        let bytes = content.as_bytes();
        let mut starts = vec![0];
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    starts.push(i + 2);
                    i += 2;
                    continue;
                },
                b'\r' | b'\n' => starts.push(i + 1),
                _ => {},
            }
            i += 1;
        }
        starts.into()
    }

    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Converts a byte offset to 1-based (line, column). Columns count
    /// characters, not bytes.
    ///
    /// ```
    /// use brace_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "a.swift", "let x\r\nlet é = 1");
    /// assert_eq!(file.offset_to_line_col(7), (2, 1));
    /// assert_eq!(file.offset_to_line_col(13), (2, 7));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        let end = offset.min(self.content.len());
        let column = self
            .content
            .get(line_start..end)
            .map_or(end.saturating_sub(line_start), |text| text.chars().count());
        (line + 1, column + 1)
    }

    /// Text of a 1-based line, without its terminator.
    pub fn line_at(&self, line: usize) -> Option<&str> {
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());
        self.content
            .get(start..end)
            .map(|text| text.trim_end_matches(['\n', '\r']))
    }

    /// Bounds-checked slice of the content.
    pub fn extract(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        self.content
            .get(start..end)
            .ok_or(SourceMapError::NotCharBoundary { start, end })
    }

    pub fn span_text(&self, span: Span) -> SourceMapResult<&str> {
        self.extract(span.start, span.end)
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

/// Owns every source file seen in one run, addressable by [`FileId`] or by
/// name.
#[derive(Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
    by_name: FxHashMap<String, FileId>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a file. Adding the same name twice replaces the name
    /// lookup but keeps the older file reachable by its id.
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let name = name.into();
        let id = FileId(self.files.len());
        self.by_name.insert(name.clone(), id);
        self.files.push(Arc::new(SourceFile::new(id.0, name, content)));
        id
    }

    pub fn get(&self, id: FileId) -> SourceMapResult<Arc<SourceFile>> {
        self.files
            .get(id.0)
            .cloned()
            .ok_or_else(|| SourceMapError::FileNotFound(format!("FileId({})", id.0)))
    }

    pub fn find(&self, name: &str) -> SourceMapResult<Arc<SourceFile>> {
        let id = self
            .by_name
            .get(name)
            .copied()
            .ok_or_else(|| SourceMapError::FileNotFound(name.to_string()))?;
        self.get(id)
    }

    #[inline]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_starts_all_terminators() {
        let file = SourceFile::new(0, "t", "a\nb\r\nc\rd");
        assert_eq!(file.line_count(), 4);
        assert_eq!(file.line_at(1), Some("a"));
        assert_eq!(file.line_at(2), Some("b"));
        assert_eq!(file.line_at(3), Some("c"));
        assert_eq!(file.line_at(4), Some("d"));
        assert_eq!(file.line_at(5), None);
        assert_eq!(file.line_at(0), None);
    }

    #[test]
    fn test_offset_to_line_col() {
        let file = SourceFile::new(0, "t", "ab\ncd");
        assert_eq!(file.offset_to_line_col(0), (1, 1));
        assert_eq!(file.offset_to_line_col(1), (1, 2));
        assert_eq!(file.offset_to_line_col(3), (2, 1));
        assert_eq!(file.offset_to_line_col(4), (2, 2));
    }

    #[test]
    fn test_extract_errors() {
        let file = SourceFile::new(0, "t", "héllo");
        assert_eq!(file.extract(0, 1), Ok("h"));
        assert_eq!(
            file.extract(3, 1),
            Err(SourceMapError::InvalidSpan { start: 3, end: 1 })
        );
        assert!(matches!(
            file.extract(0, 99),
            Err(SourceMapError::SpanOutOfBounds { .. })
        ));
        assert_eq!(
            file.extract(0, 2),
            Err(SourceMapError::NotCharBoundary { start: 0, end: 2 })
        );
    }

    #[test]
    fn test_source_map_lookup() {
        let mut map = SourceMap::new();
        let a = map.add_file("a.swift", "let a = 1");
        let b = map.add_file("b.swift", "let b = 2");
        assert_eq!(map.file_count(), 2);
        assert_eq!(map.get(a).map(|f| f.name().to_string()), Ok("a.swift".to_string()));
        assert_eq!(map.find("b.swift").map(|f| f.id()), Ok(b));
        assert!(map.find("c.swift").is_err());
        assert!(map.get(FileId(9)).is_err());
    }
}
