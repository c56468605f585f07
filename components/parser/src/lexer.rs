//! Trio Lexer - tokenizes source code into tokens
//!
//! The lexer is a single left-to-right pass over the source characters.
//! It does not scan string contents: a quote character becomes a
//! [`TokenKind::Quote`] token and the parser re-stitches the tokens that
//! follow it into the string value.

use crate::error::lex_error;
use core_types::{SourcePosition, TrioError};
use std::fmt;

/// Kind of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of digits
    Number,
    /// Run of letters that is not a keyword
    Identifier,
    /// Reserved for string tokens; strings are assembled by the parser
    String,
    /// `"` or `'`
    Quote,
    /// `\`, starts an escape sequence inside a string
    Backslash,
    /// `=`
    Equals,
    /// `;`
    SemiColon,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `+ - * / %`
    BinaryOperator,
    /// `< <= > >= == === !=`
    ComparisonOperator,
    /// `let`
    Let,
    /// `const`
    Const,
    /// `fn`
    Fn,
    /// `if`
    If,
    /// `else`
    Else,
    /// `for`
    For,
    /// `new`
    New,
    /// End of input
    EOF,
}

impl TokenKind {
    /// Whether tokens of this kind are words (identifiers, numbers and
    /// keywords). Adjacent words inside a string literal are separated by
    /// a space when the parser re-stitches it.
    pub fn is_word(self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::Identifier
                | TokenKind::Let
                | TokenKind::Const
                | TokenKind::Fn
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::For
                | TokenKind::New
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Look up a keyword. Matching is exact and case-sensitive.
pub fn keyword(word: &str) -> Option<TokenKind> {
    match word {
        "let" => Some(TokenKind::Let),
        "const" => Some(TokenKind::Const),
        "fn" => Some(TokenKind::Fn),
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        "for" => Some(TokenKind::For),
        "new" => Some(TokenKind::New),
        _ => None,
    }
}

/// Token produced by the lexer
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token kind
    pub kind: TokenKind,
    /// Source text of the token (empty for EOF)
    pub lexeme: String,
    /// Position of the first character
    pub position: SourcePosition,
}

impl Token {
    /// Create a token
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == TokenKind::EOF {
            write!(f, "EOF")
        } else {
            write!(f, "{} {:?}", self.kind, self.lexeme)
        }
    }
}

/// Lexer for Trio source code
pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    /// Create a new lexer for the given source code
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the whole source.
    ///
    /// The returned stream always ends with an EOF token. The first
    /// unknown character aborts tokenization.
    pub fn tokenize(mut self) -> Result<Vec<Token>, TrioError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan_token()?;
            let at_end = token.kind == TokenKind::EOF;
            tokens.push(token);
            if at_end {
                break;
            }
        }
        tracing::trace!(count = tokens.len(), "tokenized source");
        Ok(tokens)
    }

    fn scan_token(&mut self) -> Result<Token, TrioError> {
        self.skip_whitespace();

        let start = self.current_position();
        if self.is_at_end() {
            return Ok(Token::new(TokenKind::EOF, "", start));
        }

        let ch = self.peek();
        if ch.is_ascii_digit() {
            let digits = self.take_while(|c| c.is_ascii_digit());
            return Ok(Token::new(TokenKind::Number, digits, start));
        }
        if ch.is_ascii_alphabetic() {
            let word = self.take_while(|c| c.is_ascii_alphabetic());
            let kind = keyword(&word).unwrap_or(TokenKind::Identifier);
            return Ok(Token::new(kind, word, start));
        }

        self.advance();
        let kind = match ch {
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '{' => TokenKind::OpenBrace,
            '}' => TokenKind::CloseBrace,
            '[' => TokenKind::OpenBracket,
            ']' => TokenKind::CloseBracket,
            ';' => TokenKind::SemiColon,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            ':' => TokenKind::Colon,
            '"' | '\'' => TokenKind::Quote,
            '\\' => TokenKind::Backslash,
            '+' | '-' | '*' | '/' | '%' => TokenKind::BinaryOperator,
            '<' | '>' => {
                if self.match_char('=') {
                    return Ok(Token::new(
                        TokenKind::ComparisonOperator,
                        format!("{}=", ch),
                        start,
                    ));
                }
                TokenKind::ComparisonOperator
            }
            '=' => {
                if self.match_char('=') {
                    let lexeme = if self.match_char('=') { "===" } else { "==" };
                    return Ok(Token::new(TokenKind::ComparisonOperator, lexeme, start));
                }
                TokenKind::Equals
            }
            '!' if self.match_char('=') => {
                return Ok(Token::new(TokenKind::ComparisonOperator, "!=", start));
            }
            other => return Err(lex_error(other, start)),
        };
        Ok(Token::new(kind, ch.to_string(), start))
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && matches!(self.peek(), ' ' | '\t' | '\n' | '\r' | '\x0C') {
            self.advance();
        }
    }

    fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while !self.is_at_end() && predicate(self.peek()) {
            text.push(self.advance());
        }
        text
    }

    fn current_position(&self) -> SourcePosition {
        SourcePosition {
            line: self.line,
            column: self.column,
            offset: self.position,
        }
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    fn peek(&self) -> char {
        self.chars[self.position]
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.position];
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        ch
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }
}

/// Tokenize a source string.
///
/// ```
/// use parser::{tokenize, TokenKind};
///
/// let tokens = tokenize("let x = 42;").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Let,
///         TokenKind::Identifier,
///         TokenKind::Equals,
///         TokenKind::Number,
///         TokenKind::SemiColon,
///         TokenKind::EOF,
///     ]
/// );
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, TrioError> {
    Lexer::new(source).tokenize()
}
