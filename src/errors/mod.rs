//! Error types for the tokenizer binary.
//!
//! The lexical pipeline itself never fails: a lexeme that matches no
//! shape or table is recorded as an unrecognized token, not raised as
//! an error. The variants here cover the failure modes around the
//! pipeline:
//!
//! - Reading the source file handed to the binary
//! - Bad command-line usage

pub mod errors;
