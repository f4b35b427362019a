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

//! Control-flow nesting validation
//!
//! A single stack of open block constructs. Openers push a frame, closers pop
//! the top frame and must match its kind. Frames left on the stack at the end
//! of the script are reported as unclosed, each exactly once.

use super::LineCheck;
use crate::diagnostics::{Issue, IssueCode};
use crate::lexer::{Keyword, Token};
use crate::position::Position;
use crate::scanner::SourceLine;
use std::fmt;
use tracing::trace;

/// Kinds of block constructs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    If,
    While,
    For,
    Function,
}

impl ControlKind {
    /// Kind opened by a line-leading keyword
    pub fn from_opener(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::If => Some(ControlKind::If),
            Keyword::While => Some(ControlKind::While),
            Keyword::For => Some(ControlKind::For),
            Keyword::Function => Some(ControlKind::Function),
            _ => None,
        }
    }

    /// Kind closed by a closing keyword
    pub fn from_closer(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::EndIf => Some(ControlKind::If),
            Keyword::EndWhile => Some(ControlKind::While),
            Keyword::EndFor => Some(ControlKind::For),
            Keyword::EndFunction => Some(ControlKind::Function),
            _ => None,
        }
    }

    pub fn opener(&self) -> Keyword {
        match self {
            ControlKind::If => Keyword::If,
            ControlKind::While => Keyword::While,
            ControlKind::For => Keyword::For,
            ControlKind::Function => Keyword::Function,
        }
    }

    pub fn closer(&self) -> Keyword {
        match self {
            ControlKind::If => Keyword::EndIf,
            ControlKind::While => Keyword::EndWhile,
            ControlKind::For => Keyword::EndFor,
            ControlKind::Function => Keyword::EndFunction,
        }
    }

    /// Code reported for a closer of this kind that matches nothing
    pub fn unmatched_code(&self) -> IssueCode {
        match self {
            ControlKind::If => IssueCode::UnmatchedEndif,
            ControlKind::While => IssueCode::UnmatchedEndwhile,
            ControlKind::For => IssueCode::UnmatchedEndfor,
            ControlKind::Function => IssueCode::UnmatchedEndfunction,
        }
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.opener())
    }
}

/// One currently-open block construct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlFrame {
    pub kind: ControlKind,
    /// Position of the opening keyword
    pub opened_at: Position,
}

/// Stack machine over block constructs
#[derive(Debug, Default)]
pub struct ControlFlowValidator {
    stack: Vec<ControlFrame>,
}

impl ControlFlowValidator {
    pub fn new() -> Self {
        Self::default()
    }

    fn close(&mut self, kind: ControlKind, position: Position, issues: &mut Vec<Issue>) {
        match self.stack.pop() {
            Some(frame) if frame.kind == kind => {
                trace!(kind = %kind, opened_at = %frame.opened_at, closed_at = %position, "closed control frame");
            }
            Some(frame) => {
                issues.push(Issue::new(
                    kind.unmatched_code(),
                    position,
                    format!("'{}' does not match '{}' opened at line {}", kind.closer(), frame.kind, frame.opened_at.line),
                ));
            }
            None => {
                issues.push(Issue::new(kind.unmatched_code(), position, format!("'{}' without matching '{}'", kind.closer(), kind)));
            }
        }
    }
}

impl LineCheck for ControlFlowValidator {
    fn check_line(&mut self, line: &SourceLine, tokens: &[Token], issues: &mut Vec<Issue>) {
        let Some(keyword) = tokens.first().and_then(Token::as_keyword) else {
            return;
        };
        let position = Position::new(line.number, tokens[0].column);

        if let Some(kind) = ControlKind::from_opener(keyword) {
            if tokens.len() > 1 {
                trace!(kind = %kind, opened_at = %position, depth = self.stack.len() + 1, "opened control frame");
                self.stack.push(ControlFrame { kind, opened_at: position });
            }
        } else if let Some(kind) = ControlKind::from_closer(keyword) {
            if tokens.len() == 1 {
                self.close(kind, position, issues);
            }
        }
    }

    fn finish(&mut self, issues: &mut Vec<Issue>) {
        for frame in self.stack.drain(..) {
            issues.push(Issue::new(
                IssueCode::UnclosedControl,
                frame.opened_at,
                format!("'{}' opened at line {} is never closed with '{}'", frame.kind, frame.opened_at.line, frame.kind.closer()),
            ));
        }
    }

    fn name(&self) -> &'static str {
        "ControlFlowValidator"
    }
}
