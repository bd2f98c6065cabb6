//! Lexer module.
//!
//! The lexer is split by concern:
//! - `core` - the [`Lexer`] context, the driver loop and classifier dispatch
//! - `identifier` - identifiers, backtick identifiers and `#if`/`#endif`
//! - `number` - number literals
//! - `operator` - operator runs and `:` `;` `,`
//! - `comment` - comment openers, line comments and block comment bodies
//! - `string` - string bodies and interpolation
//! - `scope` - the per-token scope state machine
//! - `generic` - resolving `<` `>` between generic lists and operators

mod comment;
mod core;
mod generic;
mod identifier;
mod number;
mod operator;
mod scope;
mod string;

pub use self::core::Lexer;
