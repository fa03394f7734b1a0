use std::{collections::HashMap, fmt::Display};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    Number,
    StringConstant,
    CharConstant,
    PreprocessorDirective,
    Comment,
    ReservedWord,
    Operator,
    Separator,
    Identifier,
    UnrecognizedToken,
}

impl Category {
    /// Canonical report order.
    pub const ALL: [Category; 10] = [
        Category::Number,
        Category::StringConstant,
        Category::CharConstant,
        Category::PreprocessorDirective,
        Category::Comment,
        Category::ReservedWord,
        Category::Operator,
        Category::Separator,
        Category::Identifier,
        Category::UnrecognizedToken,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Number => "Number",
            Category::StringConstant => "String Constant",
            Category::CharConstant => "Char Constant",
            Category::PreprocessorDirective => "Preprocessor Directive",
            Category::Comment => "Comment",
            Category::ReservedWord => "Reserved Word",
            Category::Operator => "Operator",
            Category::Separator => "Separator",
            Category::Identifier => "Identifier",
            Category::UnrecognizedToken => "Unrecognized Token",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub lexeme: String,
    pub category: Category,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<20}{}", self.lexeme, self.category)
    }
}

/// Per-run category collections. Tokens are appended in classification
/// order and never reordered, deduplicated or removed.
#[derive(Debug, Default)]
pub struct ClassificationResult {
    categories: HashMap<Category, Vec<Token>>,
}

impl ClassificationResult {
    pub fn new() -> ClassificationResult {
        ClassificationResult {
            categories: HashMap::new(),
        }
    }

    pub fn push(&mut self, token: Token) {
        self.categories
            .entry(token.category)
            .or_default()
            .push(token);
    }

    pub fn tokens(&self, category: Category) -> &[Token] {
        self.categories
            .get(&category)
            .map_or(&[], Vec::as_slice)
    }

    /// Total token count across all categories.
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
