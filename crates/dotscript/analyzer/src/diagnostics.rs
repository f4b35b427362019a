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

//! Diagnostic types produced by the script checks

use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an issue affects the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocking: the script is not valid
    Error,
    /// Advisory only
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Stable identifiers for every kind of issue the analyzer reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    UnmatchedParens,
    UnmatchedBrackets,
    InvalidCharacter,
    UnclosedControl,
    UnmatchedEndif,
    UnmatchedEndwhile,
    UnmatchedEndfor,
    UnmatchedEndfunction,
    RedeclaredVariable,
    UndeclaredVariable,
    UnusedVariable,
    UnknownFunction,
    InfiniteLoop,
}

impl IssueCode {
    /// Get the stable code string for this kind
    pub fn code(&self) -> &'static str {
        match self {
            IssueCode::UnmatchedParens => "UNMATCHED_PARENS",
            IssueCode::UnmatchedBrackets => "UNMATCHED_BRACKETS",
            IssueCode::InvalidCharacter => "INVALID_CHARACTER",
            IssueCode::UnclosedControl => "UNCLOSED_CONTROL",
            IssueCode::UnmatchedEndif => "UNMATCHED_ENDIF",
            IssueCode::UnmatchedEndwhile => "UNMATCHED_ENDWHILE",
            IssueCode::UnmatchedEndfor => "UNMATCHED_ENDFOR",
            IssueCode::UnmatchedEndfunction => "UNMATCHED_ENDFUNCTION",
            IssueCode::RedeclaredVariable => "REDECLARED_VARIABLE",
            IssueCode::UndeclaredVariable => "UNDECLARED_VARIABLE",
            IssueCode::UnusedVariable => "UNUSED_VARIABLE",
            IssueCode::UnknownFunction => "UNKNOWN_FUNCTION",
            IssueCode::InfiniteLoop => "INFINITE_LOOP",
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            IssueCode::UnmatchedParens => "Unmatched parentheses",
            IssueCode::UnmatchedBrackets => "Unmatched brackets",
            IssueCode::InvalidCharacter => "Invalid character",
            IssueCode::UnclosedControl => "Unclosed control structure",
            IssueCode::UnmatchedEndif => "Unmatched endif",
            IssueCode::UnmatchedEndwhile => "Unmatched endwhile",
            IssueCode::UnmatchedEndfor => "Unmatched endfor",
            IssueCode::UnmatchedEndfunction => "Unmatched endfunction",
            IssueCode::RedeclaredVariable => "Variable redeclared",
            IssueCode::UndeclaredVariable => "Undeclared variable",
            IssueCode::UnusedVariable => "Unused variable",
            IssueCode::UnknownFunction => "Unknown function",
            IssueCode::InfiniteLoop => "Possible infinite loop",
        }
    }

    /// Get the fixed severity of this kind
    pub fn severity(&self) -> Severity {
        match self {
            IssueCode::UnmatchedParens | IssueCode::UnmatchedBrackets | IssueCode::InvalidCharacter => Severity::Error,

            IssueCode::UnclosedControl
            | IssueCode::UnmatchedEndif
            | IssueCode::UnmatchedEndwhile
            | IssueCode::UnmatchedEndfor
            | IssueCode::UnmatchedEndfunction => Severity::Error,

            IssueCode::UndeclaredVariable => Severity::Error,

            IssueCode::RedeclaredVariable | IssueCode::UnusedVariable | IssueCode::UnknownFunction | IssueCode::InfiniteLoop => Severity::Warning,
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single finding reported by one of the checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based, best effort)
    pub column: usize,
    /// Human-readable message
    pub message: String,
    /// Error or warning, always the severity of `code`
    pub severity: Severity,
    /// Stable identifier
    pub code: IssueCode,
}

impl Issue {
    /// Create a new issue; the severity follows from the code
    pub fn new(code: IssueCode, position: Position, message: impl Into<String>) -> Self {
        Self {
            line: position.line,
            column: position.column,
            message: message.into(),
            severity: code.severity(),
            code,
        }
    }

    /// Position of this issue
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Get a user-friendly message
    pub fn user_message(&self) -> String {
        format!("{} at line {}, column {}: {}", self.code.description(), self.line, self.column, self.message)
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}[{}]: {}", self.line, self.column, self.severity, self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_severity_follows_code() {
        let error = Issue::new(IssueCode::UndeclaredVariable, Position::new(1, 4), "Variable 'x' is used before declaration");
        assert!(error.is_error());

        let warning = Issue::new(IssueCode::UnknownFunction, Position::new(2, 1), "Unknown function 'foo'");
        assert_eq!(warning.severity, Severity::Warning);
    }

    #[test]
    fn test_issue_codes() {
        assert_eq!(IssueCode::UnmatchedParens.code(), "UNMATCHED_PARENS");
        assert_eq!(IssueCode::UnmatchedEndfunction.code(), "UNMATCHED_ENDFUNCTION");
        assert_eq!(IssueCode::InfiniteLoop.to_string(), "INFINITE_LOOP");
    }

    #[test]
    fn test_serde_codes_match_stable_strings() {
        for code in [
            IssueCode::UnmatchedParens,
            IssueCode::UnmatchedBrackets,
            IssueCode::InvalidCharacter,
            IssueCode::UnclosedControl,
            IssueCode::UnmatchedEndif,
            IssueCode::UnmatchedEndwhile,
            IssueCode::UnmatchedEndfor,
            IssueCode::UnmatchedEndfunction,
            IssueCode::RedeclaredVariable,
            IssueCode::UndeclaredVariable,
            IssueCode::UnusedVariable,
            IssueCode::UnknownFunction,
            IssueCode::InfiniteLoop,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.code()));
        }
    }

    #[test]
    fn test_issue_messages() {
        let issue = Issue::new(IssueCode::InvalidCharacter, Position::new(10, 5), "Invalid character '@'");

        let user_msg = issue.user_message();
        assert!(user_msg.contains("line 10"));
        assert!(user_msg.contains("column 5"));
        assert_eq!(issue.to_string(), "10:5: error[INVALID_CHARACTER]: Invalid character '@'");
    }
}
