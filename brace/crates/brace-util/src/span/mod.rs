//! Source locations.
//!
//! A [`Span`] is a byte range plus the 1-based line/column where it starts.
//! Line and column are stored rather than recomputed because the lexer
//! already tracks them while scanning, and error reporting wants them
//! without a second pass over the text.
//!
//! ```
//! use brace_util::span::Span;
//!
//! let span = Span::new(4, 9, 2, 1);
//! assert_eq!(span.len(), 5);
//! ```

mod source_map;

pub use source_map::{SourceFile, SourceMap};

/// Identifies a file registered in a [`SourceMap`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

impl FileId {
    /// Placeholder for spans that do not belong to a registered file.
    pub const DUMMY: FileId = FileId(0);

    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// A byte range in a source file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Line of `start`, 1-based
    pub line: u32,
    /// Column of `start` in characters, 1-based
    pub column: u32,
    /// Owning file
    pub file_id: FileId,
}

impl Span {
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
        file_id: FileId::DUMMY,
    };

    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id: FileId::DUMMY,
        }
    }

    /// An empty span at `offset`.
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    #[inline]
    pub fn with_file_id(mut self, file_id: FileId) -> Self {
        self.file_id = file_id;
        self
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}
