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

//! Token definitions for the trading script language

use std::fmt;

/// A token on one script line
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// The source text that produced this token
    pub lexeme: String,
    /// Column of the first character in the physical line (1-based)
    pub column: usize,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, column: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            column,
        }
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self.kind, TokenKind::Identifier)
    }

    /// Get the keyword if this token is a keyword
    pub fn as_keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// Check if this token is the given keyword
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.as_keyword() == Some(keyword)
    }

    /// Check if this token is the given delimiter
    pub fn is_delimiter(&self, delimiter: Delimiter) -> bool {
        self.kind == TokenKind::Delimiter(delimiter)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.lexeme)
    }
}

/// Types of tokens
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Identifier,
    Keyword(Keyword),
    Number,
    /// Quoted string literal; `terminated` is false when the line ends first
    Str { terminated: bool },
    Operator(Operator),
    Delimiter(Delimiter),
    /// Character outside the language's alphabet
    Invalid(char),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Keyword(kw) => write!(f, "keyword '{}'", kw),
            TokenKind::Number => write!(f, "number"),
            TokenKind::Str { .. } => write!(f, "string"),
            TokenKind::Operator(op) => write!(f, "operator '{}'", op),
            TokenKind::Delimiter(delim) => write!(f, "delimiter '{}'", delim),
            TokenKind::Invalid(ch) => write!(f, "invalid character '{}'", ch),
        }
    }
}

/// Reserved words of the script language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    If,
    Then,
    Else,
    ElseIf,
    EndIf,
    While,
    Do,
    EndWhile,
    For,
    To,
    Step,
    In,
    EndFor,
    Function,
    EndFunction,
    Return,
    Break,
    Continue,
    Var,
    And,
    Or,
    Not,
}

impl Keyword {
    /// Every keyword, in a stable order
    pub const ALL: [Keyword; 22] = [
        Keyword::If,
        Keyword::Then,
        Keyword::Else,
        Keyword::ElseIf,
        Keyword::EndIf,
        Keyword::While,
        Keyword::Do,
        Keyword::EndWhile,
        Keyword::For,
        Keyword::To,
        Keyword::Step,
        Keyword::In,
        Keyword::EndFor,
        Keyword::Function,
        Keyword::EndFunction,
        Keyword::Return,
        Keyword::Break,
        Keyword::Continue,
        Keyword::Var,
        Keyword::And,
        Keyword::Or,
        Keyword::Not,
    ];

    /// Canonical spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Then => "then",
            Keyword::Else => "else",
            Keyword::ElseIf => "elseif",
            Keyword::EndIf => "endif",
            Keyword::While => "while",
            Keyword::Do => "do",
            Keyword::EndWhile => "endwhile",
            Keyword::For => "for",
            Keyword::To => "to",
            Keyword::Step => "step",
            Keyword::In => "in",
            Keyword::EndFor => "endfor",
            Keyword::Function => "function",
            Keyword::EndFunction => "endfunction",
            Keyword::Return => "return",
            Keyword::Break => "break",
            Keyword::Continue => "continue",
            Keyword::Var => "var",
            Keyword::And => "and",
            Keyword::Or => "or",
            Keyword::Not => "not",
        }
    }

    /// Look up a word, ignoring case
    pub fn from_word(word: &str) -> Option<Keyword> {
        Keyword::ALL.into_iter().find(|kw| kw.as_str().eq_ignore_ascii_case(word))
    }

    /// Keywords that branch or loop
    pub fn is_branch_or_loop(&self) -> bool {
        matches!(self, Keyword::If | Keyword::While | Keyword::For)
    }

    pub fn is_loop(&self) -> bool {
        matches!(self, Keyword::While | Keyword::For)
    }

    /// `and`, `or`, `not`
    pub fn is_logical(&self) -> bool {
        matches!(self, Keyword::And | Keyword::Or | Keyword::Not)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // Arithmetic
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    Power,

    // Assignment and comparison
    Assign,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // Logical
    And,
    Or,
    Not,

    // Bitwise and misc
    BitAnd,
    BitOr,
    Tilde,
    Question,
}

impl Operator {
    /// `+ - * / %`
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, Operator::Plus | Operator::Minus | Operator::Multiply | Operator::Divide | Operator::Modulo)
    }

    /// `&& || !`
    pub fn is_logical(&self) -> bool {
        matches!(self, Operator::And | Operator::Or | Operator::Not)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Modulo => "%",
            Operator::Power => "^",
            Operator::Assign => "=",
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::Less => "<",
            Operator::LessEqual => "<=",
            Operator::Greater => ">",
            Operator::GreaterEqual => ">=",
            Operator::And => "&&",
            Operator::Or => "||",
            Operator::Not => "!",
            Operator::BitAnd => "&",
            Operator::BitOr => "|",
            Operator::Tilde => "~",
            Operator::Question => "?",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Colon,
    Semicolon,
    Backslash,
}

impl Delimiter {
    pub fn as_char(&self) -> char {
        match self {
            Delimiter::LeftParen => '(',
            Delimiter::RightParen => ')',
            Delimiter::LeftBracket => '[',
            Delimiter::RightBracket => ']',
            Delimiter::LeftBrace => '{',
            Delimiter::RightBrace => '}',
            Delimiter::Comma => ',',
            Delimiter::Dot => '.',
            Delimiter::Colon => ':',
            Delimiter::Semicolon => ';',
            Delimiter::Backslash => '\\',
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
