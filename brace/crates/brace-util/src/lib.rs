//! brace-util - Foundation types shared by the brace crates.
//!
//! This crate carries the small pieces every phase of the toolchain needs
//! and none of them owns:
//!
//! - [`span`] - byte-offset spans with line/column info, and [`SourceFile`]
//!   for turning offsets back into lines when rendering errors
//! - [`index_vec`] - [`IndexVec`], a vector addressed by a typed index, with
//!   bounds-checked in-place edits
//! - [`diagnostic`] - [`Diagnostic`], [`DiagnosticBuilder`] and [`Handler`]
//!   for reporting problems against source text
//! - [`error`] - error enums for the above
//!
//! # Example
//!
//! ```
//! use brace_util::{define_idx, IndexVec};
//!
//! define_idx!(NodeIdx);
//!
//! let mut nodes: IndexVec<NodeIdx, &str> = IndexVec::new();
//! let root = nodes.push("root");
//! assert_eq!(nodes[root], "root");
//! ```

pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{IndexVecError, IndexVecResult, SourceMapError, SourceMapResult};
pub use index_vec::{Idx, IndexVec};
pub use span::{FileId, SourceFile, SourceMap, Span};

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
