use std::{iter::Peekable, str::CharIndices};

use crate::token::{Span, Token, TokenKind};

mod error;

pub use error::{LexError, LexResult};

pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            line: 1,
            column: 0,
        }
    }

    pub fn next_token(&mut self) -> LexResult<Token<'a>> {
        self.skip_whitespace();

        let (start_idx, ch) = match self.chars.peek() {
            Some(&(idx, c)) => (idx, c),
            None => {
                let index = self.input.len();
                return Ok(Token::new(
                    TokenKind::EOF,
                    Span {
                        start: index,
                        end: index,
                        line: self.line,
                        column: self.column,
                    },
                ));
            }
        };

        let start_line = self.line;
        let start_column = self.column;
        match ch {
            '=' => Ok(self.single_char_token(TokenKind::Equal, start_idx, start_line, start_column)),
            '+' => Ok(self.single_char_token(TokenKind::Plus, start_idx, start_line, start_column)),
            '-' => Ok(self.single_char_token(TokenKind::Minus, start_idx, start_line, start_column)),
            '*' => Ok(self.single_char_token(TokenKind::Star, start_idx, start_line, start_column)),
            '/' => Ok(self.single_char_token(TokenKind::Slash, start_idx, start_line, start_column)),
            '>' => Ok(self.single_char_token(
                TokenKind::Greater,
                start_idx,
                start_line,
                start_column,
            )),
            '<' => Ok(self.single_char_token(TokenKind::Less, start_idx, start_line, start_column)),
            '!' => Ok(self.single_char_token(TokenKind::Bang, start_idx, start_line, start_column)),
            ';' => Ok(self.single_char_token(
                TokenKind::Semicolon,
                start_idx,
                start_line,
                start_column,
            )),
            '(' => Ok(self.single_char_token(TokenKind::LParen, start_idx, start_line, start_column)),
            ')' => Ok(self.single_char_token(TokenKind::RParen, start_idx, start_line, start_column)),
            '{' => Ok(self.single_char_token(TokenKind::LBrace, start_idx, start_line, start_column)),
            '}' => Ok(self.single_char_token(TokenKind::RBrace, start_idx, start_line, start_column)),
            '&' => self.double_char_token('&', TokenKind::AndAnd, start_idx, start_line, start_column),
            '|' => self.double_char_token('|', TokenKind::OrOr, start_idx, start_line, start_column),
            c if c.is_ascii_alphabetic() || c == '_' => {
                Ok(self.read_identifier(start_idx, start_line, start_column))
            }
            c if c.is_ascii_digit() => Ok(self.read_number(start_idx, start_line, start_column)),
            _ => Err(LexError::UnexpectedCharacter {
                character: ch,
                line: start_line,
                column: start_column,
            }),
        }
    }

    fn single_char_token(
        &mut self,
        kind: TokenKind<'a>,
        start: usize,
        line: usize,
        column: usize,
    ) -> Token<'a> {
        self.advance_char();
        Token::new(
            kind,
            Span {
                start,
                end: start + 1,
                line,
                column,
            },
        )
    }

    fn double_char_token(
        &mut self,
        second: char,
        kind: TokenKind<'a>,
        start: usize,
        line: usize,
        column: usize,
    ) -> LexResult<Token<'a>> {
        self.advance_char();
        match self.chars.peek() {
            Some(&(_, c)) if c == second => {
                self.advance_char();
                Ok(Token::new(
                    kind,
                    Span {
                        start,
                        end: start + 2,
                        line,
                        column,
                    },
                ))
            }
            _ => Err(LexError::UnexpectedCharacter {
                character: second,
                line,
                column,
            }),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if c == ' ' || c == '\t' || c == '\r' || c == '\n' {
                self.advance_char();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self, start: usize, line: usize, column: usize) -> Token<'a> {
        self.advance_char(); // Consume first char
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                self.advance_char();
            } else {
                break;
            }
        }

        let end_idx = self.current_index();
        let ident = &self.input[start..end_idx];
        let kind = match ident {
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            _ => TokenKind::Identifier(ident),
        };
        Token::new(
            kind,
            Span {
                start,
                end: end_idx,
                line,
                column,
            },
        )
    }

    fn read_number(&mut self, start: usize, line: usize, column: usize) -> Token<'a> {
        self.advance_char(); // Consume first digit
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_ascii_digit() {
                self.advance_char();
            } else {
                break;
            }
        }

        // A dot only belongs to the literal when a digit follows it.
        let mut lookahead = self.chars.clone();
        if let Some((_, '.')) = lookahead.next()
            && let Some((_, c)) = lookahead.next()
            && c.is_ascii_digit()
        {
            self.advance_char(); // Consume '.'
            while let Some(&(_, c)) = self.chars.peek() {
                if c.is_ascii_digit() {
                    self.advance_char();
                } else {
                    break;
                }
            }
        }

        let end_idx = self.current_index();
        Token::new(
            TokenKind::Number(&self.input[start..end_idx]),
            Span {
                start,
                end: end_idx,
                line,
                column,
            },
        )
    }

    fn advance_char(&mut self) -> Option<(usize, char)> {
        let next = self.chars.next();
        if let Some((_, c)) = next {
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
        next
    }

    fn current_index(&mut self) -> usize {
        self.chars
            .peek()
            .map(|(idx, _)| *idx)
            .unwrap_or(self.input.len())
    }
}

pub fn tokenize(input: &str) -> LexResult<Vec<Token<'_>>> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let is_eof = matches!(token.kind, TokenKind::EOF);
        tokens.push(token);
        if is_eof {
            break;
        }
    }
    Ok(tokens)
}
