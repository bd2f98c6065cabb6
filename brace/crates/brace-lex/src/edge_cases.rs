//! Edge case tests for brace-lex
