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

//! Declaration and use tracking
//!
//! Names live in two flat, file-wide sets that only ever grow. Blocks do not
//! introduce scopes: a name declared inside an `if` stays declared after its
//! `endif`. Ordering is textual, so a declaration covers every later line and
//! the rest of its own line.

use super::{LineCheck, function_header, is_call_site, is_function_name, is_member_access};
use crate::diagnostics::{Issue, IssueCode};
use crate::lexer::{Keyword, Token};
use crate::position::Position;
use crate::scanner::SourceLine;
use crate::symbols::{BuiltinCatalog, is_literal};
use std::collections::HashSet;

/// Tracks declared and used names across a script
#[derive(Debug, Default)]
pub struct DeclarationTracker {
    builtins: BuiltinCatalog,
    declared: HashSet<String>,
    used: HashSet<String>,
    /// `var` declarations in source order, reported if never used
    explicit: Vec<(String, Position)>,
}

impl DeclarationTracker {
    pub fn new(builtins: BuiltinCatalog) -> Self {
        Self {
            builtins,
            ..Self::default()
        }
    }

    /// Declare a name introduced by `var`
    fn declare_explicit(&mut self, token: &Token, line: usize, issues: &mut Vec<Issue>) {
        let position = Position::new(line, token.column);
        if self.declared.insert(token.lexeme.clone()) {
            self.explicit.push((token.lexeme.clone(), position));
        } else {
            issues.push(Issue::new(IssueCode::RedeclaredVariable, position, format!("Variable '{}' is already declared", token.lexeme)));
        }
    }

    /// Declare a loop variable or parameter; never warns
    fn declare_implicit(&mut self, token: &Token) {
        self.declared.insert(token.lexeme.clone());
    }

    fn record_use(&mut self, token: &Token, line: usize, issues: &mut Vec<Issue>) {
        let name = token.lexeme.as_str();
        if self.builtins.contains(name) {
            return;
        }

        self.used.insert(name.to_string());
        if !self.declared.contains(name) && !is_literal(name) {
            issues.push(Issue::new(
                IssueCode::UndeclaredVariable,
                Position::new(line, token.column),
                format!("Variable '{}' is used before declaration", name),
            ));
        }
    }
}

impl LineCheck for DeclarationTracker {
    fn check_line(&mut self, line: &SourceLine, tokens: &[Token], issues: &mut Vec<Issue>) {
        let mut skip = vec![false; tokens.len()];

        if let Some(header) = function_header(tokens) {
            for index in header.params {
                self.declare_implicit(&tokens[index]);
                skip[index] = true;
            }
        }

        if tokens.first().is_some_and(|t| t.is_keyword(Keyword::For)) && tokens.get(1).is_some_and(Token::is_identifier) {
            self.declare_implicit(&tokens[1]);
            skip[1] = true;
        }

        for (index, token) in tokens.iter().enumerate() {
            if token.is_keyword(Keyword::Var) {
                if let Some(target) = tokens.get(index + 1).filter(|t| t.is_identifier()) {
                    self.declare_explicit(target, line.number, issues);
                    skip[index + 1] = true;
                }
                continue;
            }

            if !token.is_identifier() || skip[index] {
                continue;
            }
            if is_call_site(tokens, index) || is_function_name(tokens, index) || is_member_access(tokens, index) {
                continue;
            }

            self.record_use(token, line.number, issues);
        }
    }

    fn finish(&mut self, issues: &mut Vec<Issue>) {
        for (name, position) in &self.explicit {
            if !self.used.contains(name) {
                issues.push(Issue::new(IssueCode::UnusedVariable, *position, format!("Variable '{}' is declared but never used", name)));
            }
        }
    }

    fn name(&self) -> &'static str {
        "DeclarationTracker"
    }
}
