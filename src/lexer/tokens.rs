use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,

    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Equals,     // ==
    NotEquals,  // !=
    Assignment, // =
    Not,        // !

    LessEqual,
    Less,
    GreaterEqual,
    Greater,

    Or,
    And,

    DotDot,
    Dot,
    SemiColon,
    Colon,
    Question,
    Comma,

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Number => "NUMBER",
            TokenKind::CloseBracket => "CLOSE_BRACKET",
            TokenKind::OpenCurly => "OPEN_CURLY",
            TokenKind::CloseCurly => "CLOSE_CURLY",
            TokenKind::OpenParen => "OPEN_PAREN",
            TokenKind::CloseParen => "CLOSE_PAREN",
            TokenKind::Equals => "EQUALS",
            TokenKind::NotEquals => "NOT_EQUALS",
            TokenKind::Assignment => "ASSIGNMENT",
            TokenKind::Not => "NOT",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::Or => "OR",
            TokenKind::And => "AND",
            TokenKind::DotDot => "DOT_DOT",
            TokenKind::Dot => "DOT",
            TokenKind::SemiColon => "SEMI_COLON",
            TokenKind::Colon => "COLON",
            TokenKind::Question => "QUESTION",
            TokenKind::Comma => "COMMA",
            TokenKind::PlusPlus => "PLUS_PLUS",
            TokenKind::MinusMinus => "MINUS_MINUS",
            TokenKind::PlusEquals => "PLUS_EQUALS",
            TokenKind::MinusEquals => "MINUS_EQUALS",
            TokenKind::Plus => "PLUS",
            TokenKind::Dash => "DASH",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Percent => "PERCENT",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value carried by the end-of-input token.
pub const EOF_VALUE: &str = "EOF";

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Renders the token the way the driver prints it: literals show their
    /// text, fixed symbols show an empty pair of parentheses.
    pub fn debug_string(&self) -> String {
        if self.is_one_of_many(&[TokenKind::Number]) {
            format!("{} ({})", self.kind, self.value)
        } else {
            format!("{} ()", self.kind)
        }
    }

    pub fn debug(&self) {
        println!("{}", self.debug_string());
    }
}
