#![allow(clippy::module_inception)]

pub mod classifier;
pub mod errors;
pub mod macros;
pub mod scanner;

extern crate regex;

use classifier::classifier::classify;
use classifier::tokens::{ClassificationResult, Token};
use scanner::scanner::tokenize;

/// Runs the full pipeline over one source text: scan into lexemes, then
/// classify each lexeme in scan order. Every lexeme lands in exactly one
/// category, and each category keeps its tokens in discovery order.
pub fn process_code(source: &str) -> ClassificationResult {
    let mut result = ClassificationResult::new();

    for lexeme in tokenize(source) {
        let category = classify(&lexeme);
        result.push(Token { lexeme, category });
    }

    result
}
