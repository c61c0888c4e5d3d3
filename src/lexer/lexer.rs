use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{errors::errors::LexError, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{TokenKind, Token, EOF_VALUE};

/// Receives the text matched by its rule and must advance the lexer past it.
pub type RegexHandler = fn(&mut Lexer<'_>, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// Compiles `pattern` so that it only matches at the start of the haystack.
fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{})", pattern)).expect("lexer patterns are valid regular expressions")
}

lazy_static! {
    // Order is precedence: the first rule matching at the cursor wins, so every
    // multi-character symbol sits above its one-character prefix.
    pub static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: anchored("[\\t\\n\\f\\r ]+"), handler: skip_handler },
        RegexPattern { regex: anchored("[0-9]+(\\.[0-9]+)?"), handler: number_handler },

        RegexPattern { regex: anchored("\\]"), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
        RegexPattern { regex: anchored("\\{"), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: anchored("\\}"), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: anchored("\\("), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: anchored("\\)"), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: anchored("=="), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: anchored("!="), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: anchored("="), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: anchored("!"), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
        RegexPattern { regex: anchored("<="), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEqual, "<=") },
        RegexPattern { regex: anchored("<"), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: anchored(">="), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEqual, ">=") },
        RegexPattern { regex: anchored(">"), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: anchored("\\|\\|"), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "||") },
        RegexPattern { regex: anchored("&&"), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&&") },
        RegexPattern { regex: anchored("\\.\\."), handler: MK_DEFAULT_HANDLER!(TokenKind::DotDot, "..") },
        RegexPattern { regex: anchored("\\."), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
        RegexPattern { regex: anchored(";"), handler: MK_DEFAULT_HANDLER!(TokenKind::SemiColon, ";") },
        RegexPattern { regex: anchored(":"), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: anchored("\\?"), handler: MK_DEFAULT_HANDLER!(TokenKind::Question, "?") },
        RegexPattern { regex: anchored(","), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: anchored("\\+\\+"), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusPlus, "++") },
        RegexPattern { regex: anchored("--"), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusMinus, "--") },
        RegexPattern { regex: anchored("\\+="), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusEquals, "+=") },
        RegexPattern { regex: anchored("-="), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusEquals, "-=") },
        RegexPattern { regex: anchored("\\+"), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: anchored("-"), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: anchored("/"), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: anchored("\\*"), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: anchored("%"), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
    ];
}

/// Scanning state for a single source text.
///
/// The rule table is shared by every lexer; the cursor and the output
/// belong to this instance alone.
pub struct Lexer<'a> {
    patterns: &'static [RegexPattern],
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    file: Arc<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: Option<String>) -> Lexer<'a> {
        let file_name = Arc::new(file.unwrap_or_else(|| String::from("shell")));

        Lexer {
            patterns: PATTERNS.as_slice(),
            tokens: vec![],
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Span covering the next `len` bytes from the cursor.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position(self.pos + len, Arc::clone(&self.file)),
        }
    }

    pub fn position(&self) -> Position {
        Position(self.pos, Arc::clone(&self.file))
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Runs the rule table over the whole source.
    ///
    /// Stops at the first position no rule matches; the tokens produced up
    /// to that point are dropped along with the lexer.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        debug!(file = %self.file, bytes = self.source.len(), "tokenizing");

        while !self.at_eof() {
            let remainder = self.remainder();
            let patterns = self.patterns;
            let found = patterns.iter().enumerate().find_map(|(index, pattern)| {
                pattern
                    .regex
                    .find(remainder)
                    .map(|matched| (index, pattern.handler, matched.as_str()))
            });

            match found {
                Some((index, handler, matched)) => {
                    trace!(rule = index, pos = self.pos, matched, "rule matched");
                    handler(&mut self, matched);
                }
                None => {
                    let error = LexError::unrecognized_token(remainder, self.position());
                    debug!(pos = self.pos, %error, "tokenizing failed");
                    return Err(error);
                }
            }
        }

        let span = self.span_of(0);
        self.push(MK_TOKEN!(TokenKind::EOF, String::from(EOF_VALUE), span));

        debug!(file = %self.file, tokens = self.tokens.len(), "tokenized");
        Ok(self.tokens)
    }
}

fn number_handler(lexer: &mut Lexer<'_>, matched: &str) {
    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Number, matched.to_string(), span));
    lexer.advance_n(matched.len());
}

fn skip_handler(lexer: &mut Lexer<'_>, matched: &str) {
    lexer.advance_n(matched.len());
}

pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, LexError> {
    Lexer::new(source, file).tokenize()
}
