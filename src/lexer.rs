use crate::symbols::*;
use std::fmt;
use std::iter::{FusedIterator, Peekable};
use std::str::Chars;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    EndOfInput,
    Identifier,
    Operator,
    BooleanLiteral,
    OpenParen,
    CloseParen,
    Illegal,
}

/// A lexical unit of a formula.
///
/// `position` is the 1-based character offset of the first character of the token in
/// the source. For boolean literals this is the offset of the opening `[`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    literal: String,
    position: usize,
    kind: TokenKind,
}

impl Token {
    pub fn new<S: Into<String>>(literal: S, position: usize, kind: TokenKind) -> Self {
        Self {
            literal: literal.into(),
            position,
            kind,
        }
    }

    /// Boolean literal token carrying the textual form of `value`.
    pub fn boolean(value: bool, position: usize) -> Self {
        Self::new(value.to_string(), position, TokenKind::BooleanLiteral)
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }

    /// The value of a boolean literal, `None` for any other token.
    pub fn as_bool(&self) -> Option<bool> {
        match (self.kind, self.literal.as_str()) {
            (TokenKind::BooleanLiteral, "true") => Some(true),
            (TokenKind::BooleanLiteral, "false") => Some(false),
            _ => None,
        }
    }

    /// The connective of an operator token, `None` for any other token.
    pub fn as_operator(&self) -> Option<Operator> {
        match self.kind {
            TokenKind::Operator => Operator::from_literal(&self.literal),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::BooleanLiteral => write!(f, "[{}]", self.literal),
            TokenKind::EndOfInput => write!(f, "<eof>"),
            _ => f.pad(&self.literal),
        }
    }
}

/// Pull-based tokenizer over a formula string.
///
/// Iterating a `Lexer` yields every token followed by exactly one
/// [`TokenKind::EndOfInput`] token, after which the iterator is exhausted. A lexer
/// cannot be rewound; lex the source again to restart.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    // number of characters consumed so far
    position: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            chars: src.chars().peekable(),
            position: 0,
            finished: false,
        }
    }

    /// Produces the next token. Once the input is exhausted every call returns an
    /// `EndOfInput` token positioned one past the last character.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(c) = self.bump() else {
            return Token::new("", self.position + 1, TokenKind::EndOfInput);
        };

        let position = self.position;

        let kind = if is_identifier(c) {
            TokenKind::Identifier
        } else if is_operator(c) {
            TokenKind::Operator
        } else {
            match c {
                '(' => TokenKind::OpenParen,
                ')' => TokenKind::CloseParen,
                '[' => return self.read_boolean(position),
                _ => TokenKind::Illegal,
            }
        };

        Token::new(c, position, kind)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.position += 1;
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|&c| is_whitespace(c)).is_some() {
            self.position += 1;
        }
    }

    // the opening bracket has already been consumed
    fn read_boolean(&mut self, position: usize) -> Token {
        let mut literal = String::new();

        while let Some(c) = self.chars.next_if(|&c| c != ']') {
            self.position += 1;
            literal.push(c);
        }

        if self.chars.next_if_eq(&']').is_some() {
            self.position += 1;

            if literal == "true" || literal == "false" {
                return Token::new(literal, position, TokenKind::BooleanLiteral);
            }
        }

        Token::new(format!("[{literal}"), position, TokenKind::Illegal)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        self.finished = token.kind() == TokenKind::EndOfInput;

        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}

/// Lexes `src` completely, including the trailing `EndOfInput` token.
pub fn tokenize(src: &str) -> Vec<Token> {
    Lexer::new(src).collect()
}
