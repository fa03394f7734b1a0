use regex::Regex;

use crate::MK_PATTERN;

/// Which lexical alternative fired for a given span of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Whitespace,
    Word,
    Number,
    HexNumber,
    StringLit,
    CharLit,
    Directive,
    Bracketed,
    Comment,
    TwoCharOperator,
    Punctuation,
    Foreign,
}

#[derive(Clone)]
pub struct ShapePattern {
    shape: Shape,
    regex: Regex,
}

pub struct Scanner {
    patterns: Vec<ShapePattern>,
    lexemes: Vec<String>,
    source: String,
    pos: usize,
}

impl Scanner {
    pub fn new(source: String) -> Scanner {
        Scanner {
            pos: 0,
            lexemes: vec![],
            // Tried in order; the first shape that matches at the cursor
            // wins, each taking its own greedy extent. Quoted and bracketed
            // shapes never cross a line boundary, so an unclosed quote
            // falls through to the comment alternative.
            patterns: vec![
                MK_PATTERN!(Shape::Whitespace, r"^[ \t\r\n]+"),
                MK_PATTERN!(Shape::Word, r"^[A-Za-z_]\w*"),
                MK_PATTERN!(Shape::Number, r"^[0-9]+(\.[0-9]+)?([eE][-+]?[0-9]+)?"),
                MK_PATTERN!(Shape::HexNumber, r"^&[Hh][0-9A-Fa-f]+"),
                MK_PATTERN!(Shape::StringLit, "^\"[^\"]*\""),
                MK_PATTERN!(Shape::CharLit, r"^'[^'\n]*'"),
                MK_PATTERN!(Shape::Directive, r"^#\w+"),
                MK_PATTERN!(Shape::Bracketed, r"^\[[^\n]*?\]"),
                MK_PATTERN!(Shape::Comment, r"^'[^\n]*"),
                MK_PATTERN!(Shape::TwoCharOperator, r"^(\+\+|--|&&|\|\||==|!=|<=|>=)"),
                MK_PATTERN!(Shape::Punctuation, r"^[+\-*/=<>:;,()\[\]{}]"),
                MK_PATTERN!(Shape::Foreign, r"^."),
            ],
            source,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, lexeme: String) {
        self.lexemes.push(lexeme);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn scan_step(&self) -> (Shape, usize) {
        let rest = self.remainder();

        for pattern in self.patterns.iter() {
            if let Some(matched) = pattern.regex.find(rest) {
                return (pattern.shape, matched.end());
            }
        }

        // Whitespace covers newlines and Foreign covers every other
        // character, so the loop returns for any non-empty remainder.
        (Shape::Foreign, rest.chars().next().map_or(0, char::len_utf8))
    }
}

pub fn tokenize(source: &str) -> Vec<String> {
    let mut scanner = Scanner::new(String::from(source));

    while !scanner.at_eof() {
        let (shape, len) = scanner.scan_step();
        let lexeme = String::from(&scanner.remainder()[..len]);

        if shape != Shape::Whitespace {
            scanner.push(lexeme);
        }

        scanner.advance_n(len);
    }

    scanner.lexemes
}
