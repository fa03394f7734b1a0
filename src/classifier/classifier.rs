use lazy_static::lazy_static;
use regex::Regex;

use super::tables::{OPERATORS, RESERVED_WORDS, SEPARATORS};
use super::tokens::Category;

lazy_static! {
    // Full-lexeme shapes, anchored on both ends.
    static ref NUMBER_SHAPE: Regex =
        Regex::new(r"^[0-9]+(\.[0-9]+)?([eE][-+]?[0-9]+)?$").unwrap();
    static ref HEX_NUMBER_SHAPE: Regex = Regex::new(r"^&[Hh][0-9A-Fa-f]+$").unwrap();
    static ref STRING_SHAPE: Regex = Regex::new("^\"[^\"]*\"$").unwrap();
    static ref CHAR_SHAPE: Regex = Regex::new(r"^'[^']*'$").unwrap();
    static ref DIRECTIVE_SHAPE: Regex = Regex::new(r"^#\w+$").unwrap();
    static ref COMMENT_SHAPE: Regex = Regex::new(r"^'[^\n]*$").unwrap();
    static ref IDENTIFIER_SHAPE: Regex = Regex::new(r"^[A-Za-z_]\w*$").unwrap();
}

/// Assigns a lexeme to exactly one category. First matching rule wins:
/// literal shapes, then table membership, then the identifier fallback.
pub fn classify(lexeme: &str) -> Category {
    if NUMBER_SHAPE.is_match(lexeme) || HEX_NUMBER_SHAPE.is_match(lexeme) {
        Category::Number
    } else if STRING_SHAPE.is_match(lexeme) {
        Category::StringConstant
    } else if CHAR_SHAPE.is_match(lexeme) {
        Category::CharConstant
    } else if DIRECTIVE_SHAPE.is_match(lexeme) {
        Category::PreprocessorDirective
    } else if COMMENT_SHAPE.is_match(lexeme) {
        Category::Comment
    } else if RESERVED_WORDS.contains(lexeme) {
        Category::ReservedWord
    } else if OPERATORS.contains(lexeme) {
        Category::Operator
    } else if SEPARATORS.contains(lexeme) {
        Category::Separator
    } else if IDENTIFIER_SHAPE.is_match(lexeme) {
        Category::Identifier
    } else {
        Category::UnrecognizedToken
    }
}
