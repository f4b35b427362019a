// Dotlanth
// Copyright (C) 2025 Synerthink

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Line tokenizer for the trading script language
//!
//! Every analyzable line is turned into a typed token stream before any check
//! runs. Keywords, call sites and identifiers are therefore never recognized
//! inside string literals, and characters inside strings are never reported
//! as invalid.

pub mod token;

pub use token::{Delimiter, Keyword, Operator, Token, TokenKind};

use crate::scanner::SourceLine;

/// Check if a character is a valid identifier start
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character is a valid identifier continuation
pub fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Check if a string is a valid identifier
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_continue),
        _ => false,
    }
}

/// Cursor over the characters of one line
struct LineCursor<'a> {
    line: &'a SourceLine,
    chars: Vec<char>,
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> LineCursor<'a> {
    fn new(line: &'a SourceLine) -> Self {
        Self {
            line,
            chars: line.text.chars().collect(),
            pos: 0,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Token> {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.pos += 1;
                continue;
            }
            self.scan_token(ch);
        }
        self.tokens
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn text(&self, start: usize) -> String {
        self.chars[start..self.pos].iter().collect()
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        let lexeme = self.text(start);
        let column = self.line.column_of(start);
        self.tokens.push(Token::new(kind, lexeme, column));
    }

    /// Scan the token starting at the current character
    fn scan_token(&mut self, ch: char) {
        let start = self.pos;
        self.pos += 1;

        let kind = match ch {
            '(' => TokenKind::Delimiter(Delimiter::LeftParen),
            ')' => TokenKind::Delimiter(Delimiter::RightParen),
            '[' => TokenKind::Delimiter(Delimiter::LeftBracket),
            ']' => TokenKind::Delimiter(Delimiter::RightBracket),
            '{' => TokenKind::Delimiter(Delimiter::LeftBrace),
            '}' => TokenKind::Delimiter(Delimiter::RightBrace),
            ',' => TokenKind::Delimiter(Delimiter::Comma),
            '.' if self.peek().is_some_and(|c| c.is_ascii_digit()) => self.scan_number(),
            '.' => TokenKind::Delimiter(Delimiter::Dot),
            ':' => TokenKind::Delimiter(Delimiter::Colon),
            ';' => TokenKind::Delimiter(Delimiter::Semicolon),
            '\\' => TokenKind::Delimiter(Delimiter::Backslash),

            '+' => TokenKind::Operator(Operator::Plus),
            '-' => TokenKind::Operator(Operator::Minus),
            '*' => TokenKind::Operator(Operator::Multiply),
            '/' => TokenKind::Operator(Operator::Divide),
            '%' => TokenKind::Operator(Operator::Modulo),
            '^' => TokenKind::Operator(Operator::Power),
            '~' => TokenKind::Operator(Operator::Tilde),
            '?' => TokenKind::Operator(Operator::Question),
            '=' => self.scan_operator_pair('=', Operator::Equal, Operator::Assign),
            '!' => self.scan_operator_pair('=', Operator::NotEqual, Operator::Not),
            '>' => self.scan_operator_pair('=', Operator::GreaterEqual, Operator::Greater),
            '&' => self.scan_operator_pair('&', Operator::And, Operator::BitAnd),
            '|' => self.scan_operator_pair('|', Operator::Or, Operator::BitOr),
            '<' => match self.peek() {
                Some('=') => {
                    self.pos += 1;
                    TokenKind::Operator(Operator::LessEqual)
                }
                Some('>') => {
                    self.pos += 1;
                    TokenKind::Operator(Operator::NotEqual)
                }
                _ => TokenKind::Operator(Operator::Less),
            },

            '"' | '\'' => self.scan_string(ch),
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_identifier_start(c) => self.scan_identifier_or_keyword(start),

            other => TokenKind::Invalid(other),
        };

        self.push(kind, start);

        // `5abc` is a malformed number, not a number followed by a name
        if kind == TokenKind::Number && self.peek().is_some_and(is_identifier_start) {
            let tail = self.pos;
            while self.peek().is_some_and(is_identifier_continue) {
                self.pos += 1;
            }
            self.push(TokenKind::Invalid(self.chars[tail]), tail);
        }
    }

    /// Two-character operator if `second` follows, else the single form
    fn scan_operator_pair(&mut self, second: char, double: Operator, single: Operator) -> TokenKind {
        if self.peek() == Some(second) {
            self.pos += 1;
            TokenKind::Operator(double)
        } else {
            TokenKind::Operator(single)
        }
    }

    fn scan_number(&mut self) -> TokenKind {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.pos += 1;
            }
        }
        TokenKind::Number
    }

    fn scan_string(&mut self, quote: char) -> TokenKind {
        while let Some(c) = self.peek() {
            self.pos += 1;
            if c == '\\' {
                // Skip the escaped character
                if self.peek().is_some() {
                    self.pos += 1;
                }
            } else if c == quote {
                return TokenKind::Str { terminated: true };
            }
        }
        TokenKind::Str { terminated: false }
    }

    fn scan_identifier_or_keyword(&mut self, start: usize) -> TokenKind {
        while self.peek().is_some_and(is_identifier_continue) {
            self.pos += 1;
        }
        match Keyword::from_word(&self.text(start)) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Identifier,
        }
    }
}

/// Tokenize one analyzable line; comments are already blanked by the scanner
pub fn tokenize(line: &SourceLine) -> Vec<Token> {
    LineCursor::new(line).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> SourceLine {
        SourceLine {
            number: 1,
            text: text.to_string(),
            indent: 0,
        }
    }

    fn kinds(text: &str) -> Vec<TokenKind> {
        tokenize(&line(text)).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_declaration_line() {
        let tokens = tokenize(&line("var x = 5"));
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Var));
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].lexeme, "x");
        assert_eq!(tokens[1].column, 5);
        assert_eq!(tokens[2].kind, TokenKind::Operator(Operator::Assign));
        assert_eq!(tokens[3].kind, TokenKind::Number);
    }

    #[test]
    fn test_multi_character_operators() {
        assert_eq!(
            kinds("a <= b && c <> d || !e"),
            vec![
                TokenKind::Identifier,
                TokenKind::Operator(Operator::LessEqual),
                TokenKind::Identifier,
                TokenKind::Operator(Operator::And),
                TokenKind::Identifier,
                TokenKind::Operator(Operator::NotEqual),
                TokenKind::Identifier,
                TokenKind::Operator(Operator::Or),
                TokenKind::Operator(Operator::Not),
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_string_literals_hide_content() {
        let tokens = tokenize(&line(r#"Print("if (x @ y", 'it\'s')"#));
        let strings: Vec<_> = tokens.iter().filter(|t| matches!(t.kind, TokenKind::Str { .. })).collect();
        assert_eq!(strings.len(), 2);
        assert!(tokens.iter().all(|t| !matches!(t.kind, TokenKind::Invalid(_) | TokenKind::Keyword(_))));
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(kinds("Print(\"oops"), vec![
            TokenKind::Identifier,
            TokenKind::Delimiter(Delimiter::LeftParen),
            TokenKind::Str { terminated: false },
        ]);
    }

    #[test]
    fn test_invalid_character() {
        let tokens = tokenize(&line("x = $y"));
        assert_eq!(tokens[2].kind, TokenKind::Invalid('$'));
        assert_eq!(tokens[2].column, 5);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(kinds("1.25 .5 42"), vec![TokenKind::Number, TokenKind::Number, TokenKind::Number]);
        assert_eq!(kinds("Close.length"), vec![TokenKind::Identifier, TokenKind::Delimiter(Delimiter::Dot), TokenKind::Identifier]);
    }

    #[test]
    fn test_malformed_number() {
        let tokens = tokenize(&line("var y = 5abc"));
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[3].kind, TokenKind::Number);
        assert_eq!(tokens[3].lexeme, "5");
        assert_eq!(tokens[4].kind, TokenKind::Invalid('a'));
        assert_eq!(tokens[4].lexeme, "abc");
        assert_eq!(tokens[4].column, 10);

        assert_eq!(kinds("2.5x1"), vec![TokenKind::Number, TokenKind::Invalid('x')]);
        assert_eq!(kinds("x1 + 2"), vec![TokenKind::Identifier, TokenKind::Operator(Operator::Plus), TokenKind::Number]);
    }

    #[test]
    fn test_columns_include_indent() {
        let indented = SourceLine {
            number: 3,
            text: "Buy()".to_string(),
            indent: 2,
        };
        let tokens = tokenize(&indented);
        assert_eq!(tokens[0].column, 3);
        assert_eq!(tokens[1].column, 6);
    }

    #[test]
    fn test_identifier_validation() {
        assert!(is_valid_identifier("valid_name"));
        assert!(is_valid_identifier("_private"));
        assert!(!is_valid_identifier("123invalid"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("with-dash"));
    }
}
