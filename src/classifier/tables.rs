use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    /// Reserved words, matched case-sensitively. `Dim` is not `dim`.
    pub static ref RESERVED_WORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("dim");
        set.insert("if");
        set.insert("then");
        set.insert("else");
        set.insert("end");
        set.insert("for");
        set.insert("next");
        set.insert("do");
        set.insert("loop");
        set.insert("while");
        set.insert("wend");
        set.insert("function");
        set.insert("sub");
        set.insert("return");
        set.insert("true");
        set.insert("false");
        set.insert("and");
        set.insert("or");
        set.insert("not");
        set.insert("new");
        set
    };

    /// The capitalized `And`/`Or`/`Not` entries are operators; their
    /// lowercase spellings live in the reserved-word table.
    pub static ref OPERATORS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("+");
        set.insert("-");
        set.insert("*");
        set.insert("/");
        set.insert("=");
        set.insert("<>");
        set.insert("<");
        set.insert(">");
        set.insert("<=");
        set.insert(">=");
        set.insert("And");
        set.insert("Or");
        set.insert("Not");
        set
    };

    pub static ref SEPARATORS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("(");
        set.insert(")");
        set.insert(",");
        set.insert(";");
        set.insert(".");
        set.insert(":");
        set.insert("\n");
        set
    };
}
