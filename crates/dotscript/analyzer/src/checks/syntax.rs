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

//! Delimiter balance and character set checks

use super::LineCheck;
use crate::diagnostics::{Issue, IssueCode};
use crate::lexer::{Delimiter, Token, TokenKind};
use crate::position::Position;
use crate::scanner::SourceLine;

/// Stateless per-line syntax checks
#[derive(Debug, Default)]
pub struct SyntaxChecker;

impl SyntaxChecker {
    pub fn new() -> Self {
        Self
    }

    /// Compare the counts of an opening and closing delimiter
    ///
    /// On mismatch the issue points at the first occurrence of the delimiter
    /// that appears more often.
    fn check_balance(line: &SourceLine, tokens: &[Token], open: Delimiter, close: Delimiter, code: IssueCode, issues: &mut Vec<Issue>) {
        let opens = tokens.iter().filter(|t| t.is_delimiter(open)).count();
        let closes = tokens.iter().filter(|t| t.is_delimiter(close)).count();
        if opens == closes {
            return;
        }

        let excess = if opens > closes { open } else { close };
        let column = tokens.iter().find(|t| t.is_delimiter(excess)).map_or(line.column_of(0), |t| t.column);
        issues.push(Issue::new(
            code,
            Position::new(line.number, column),
            format!("Unmatched '{}': {} opening vs {} closing", excess, opens, closes),
        ));
    }
}

impl LineCheck for SyntaxChecker {
    fn check_line(&mut self, line: &SourceLine, tokens: &[Token], issues: &mut Vec<Issue>) {
        Self::check_balance(line, tokens, Delimiter::LeftParen, Delimiter::RightParen, IssueCode::UnmatchedParens, issues);
        Self::check_balance(line, tokens, Delimiter::LeftBracket, Delimiter::RightBracket, IssueCode::UnmatchedBrackets, issues);

        let invalid = tokens.iter().find_map(|t| match t.kind {
            TokenKind::Invalid(ch) => Some((ch, t.column)),
            _ => None,
        });
        if let Some((ch, column)) = invalid {
            issues.push(Issue::new(IssueCode::InvalidCharacter, Position::new(line.number, column), format!("Invalid character '{}'", ch)));
        }
    }

    fn name(&self) -> &'static str {
        "SyntaxChecker"
    }
}
