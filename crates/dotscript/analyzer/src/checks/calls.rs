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

//! Function call resolution and loop style checks
//!
//! Unknown calls are warnings, never errors: the built-in catalogue is known
//! to be incomplete.

use super::{LineCheck, call_sites, function_header};
use crate::diagnostics::{Issue, IssueCode};
use crate::lexer::{Delimiter, Keyword, Token, TokenKind};
use crate::position::Position;
use crate::scanner::SourceLine;
use crate::symbols::BuiltinCatalog;
use std::collections::HashSet;

/// Resolves call sites against built-ins and script-defined functions
#[derive(Debug, Default)]
pub struct FunctionCallChecker {
    builtins: BuiltinCatalog,
    /// Functions defined by `function NAME(...)` so far
    defined: HashSet<String>,
}

impl FunctionCallChecker {
    pub fn new(builtins: BuiltinCatalog) -> Self {
        Self {
            builtins,
            defined: HashSet::new(),
        }
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.builtins.is_reserved(name) || self.defined.contains(name)
    }

    /// `while true`, `while 1`, `while (true) do` and similar
    fn is_unconditional_loop(tokens: &[Token]) -> bool {
        if !tokens.first().is_some_and(|t| t.is_keyword(Keyword::While)) {
            return false;
        }

        let mut condition: Vec<&Token> = tokens[1..]
            .iter()
            .filter(|t| !t.is_delimiter(Delimiter::LeftParen) && !t.is_delimiter(Delimiter::RightParen))
            .collect();
        if condition.last().is_some_and(|t| t.is_keyword(Keyword::Do)) {
            condition.pop();
        }

        match condition.as_slice() {
            [only] => match only.kind {
                TokenKind::Identifier => only.lexeme.eq_ignore_ascii_case("true"),
                TokenKind::Number => only.lexeme == "1",
                _ => false,
            },
            _ => false,
        }
    }
}

impl LineCheck for FunctionCallChecker {
    fn check_line(&mut self, line: &SourceLine, tokens: &[Token], issues: &mut Vec<Issue>) {
        if let Some(header) = function_header(tokens) {
            self.defined.insert(header.name.lexeme.clone());
        }

        for call in call_sites(tokens) {
            if !self.is_known(&call.lexeme) {
                issues.push(Issue::new(
                    IssueCode::UnknownFunction,
                    Position::new(line.number, call.column),
                    format!("Unknown function '{}'", call.lexeme),
                ));
            }
        }

        if Self::is_unconditional_loop(tokens) {
            issues.push(Issue::new(
                IssueCode::InfiniteLoop,
                Position::new(line.number, tokens[0].column),
                "Loop condition is always true; the loop can only end through 'break' or 'return'",
            ));
        }
    }

    fn name(&self) -> &'static str {
        "FunctionCallChecker"
    }
}
