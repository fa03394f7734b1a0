//! Integration tests for the end-to-end pipeline.
//!
//! These tests verify that scanning and classification compose correctly:
//! a source text goes in, and every lexeme comes back out in exactly one
//! category, in scan order.

use tokenizer::classifier::tokens::Category;
use tokenizer::process_code;
use tokenizer::scanner::scanner::tokenize;

fn lexemes_of(result: &tokenizer::classifier::tokens::ClassificationResult, category: Category) -> Vec<&str> {
    result
        .tokens(category)
        .iter()
        .map(|token| token.lexeme.as_str())
        .collect()
}

#[test]
fn test_assignment_statement() {
    let result = process_code("x = 10.6");

    assert_eq!(lexemes_of(&result, Category::Identifier), ["x"]);
    assert_eq!(lexemes_of(&result, Category::Operator), ["="]);
    assert_eq!(lexemes_of(&result, Category::Number), ["10.6"]);
    assert_eq!(result.len(), 3);
}

#[test]
fn test_declaration_with_capitalized_keyword() {
    // The reserved-word table is lowercase and case-sensitive, so `Dim`
    // lands with the identifiers.
    let result = process_code("Dim y As Float");

    assert_eq!(
        lexemes_of(&result, Category::Identifier),
        ["Dim", "y", "As", "Float"]
    );
    assert!(result.tokens(Category::ReservedWord).is_empty());
}

#[test]
fn test_preprocessor_directive_line() {
    let result = process_code("#define MAX 100");

    assert_eq!(
        lexemes_of(&result, Category::PreprocessorDirective),
        ["#define"]
    );
    assert_eq!(lexemes_of(&result, Category::Identifier), ["MAX"]);
    assert_eq!(lexemes_of(&result, Category::Number), ["100"]);
}

#[test]
fn test_comment_line() {
    let result = process_code("' a comment");

    assert_eq!(lexemes_of(&result, Category::Comment), ["' a comment"]);
    assert_eq!(result.len(), 1);
}

#[test]
fn test_foreign_characters_are_unrecognized() {
    let result = process_code("@@@");

    assert_eq!(
        lexemes_of(&result, Category::UnrecognizedToken),
        ["@", "@", "@"]
    );
}

#[test]
fn test_comparison_operator() {
    let result = process_code("<=");

    assert_eq!(lexemes_of(&result, Category::Operator), ["<="]);
}

#[test]
fn test_whitespace_transparency() {
    let spaced = process_code("  x  =\n\t10.6 ");
    let compact = process_code("x=10.6");

    for category in Category::ALL {
        assert_eq!(
            lexemes_of(&spaced, category),
            lexemes_of(&compact, category)
        );
    }
}

#[test]
fn test_every_lexeme_is_classified_once() {
    let source = "dim x = &H1F + 'c' ' rest [a] @";
    let result = process_code(source);

    assert_eq!(result.len(), tokenize(source).len());
}

#[test]
fn test_sample_program() {
    let source = r#" 'x' As String
                        x = "Hello"
                        Dim y As Float
                        y = 10.6
                         y > 0 Then ) (
                            y = y + 1
                        end if
                        #define MAX 100
                        ' comment"#;

    let result = process_code(source);

    assert_eq!(
        lexemes_of(&result, Category::Number),
        ["10.6", "0", "1", "100"]
    );
    assert_eq!(
        lexemes_of(&result, Category::StringConstant),
        [r#""Hello""#]
    );
    assert_eq!(lexemes_of(&result, Category::CharConstant), ["'x'"]);
    assert_eq!(
        lexemes_of(&result, Category::PreprocessorDirective),
        ["#define"]
    );
    assert_eq!(lexemes_of(&result, Category::Comment), ["' comment"]);
    assert_eq!(lexemes_of(&result, Category::ReservedWord), ["end", "if"]);
    assert_eq!(
        lexemes_of(&result, Category::Operator),
        ["=", "=", ">", "=", "+"]
    );
    assert_eq!(lexemes_of(&result, Category::Separator), [")", "("]);
    assert_eq!(
        lexemes_of(&result, Category::Identifier),
        ["As", "String", "x", "Dim", "y", "As", "Float", "y", "y", "Then", "y", "y", "MAX"]
    );
    assert!(result.tokens(Category::UnrecognizedToken).is_empty());
    assert_eq!(result.len(), 30);
}
