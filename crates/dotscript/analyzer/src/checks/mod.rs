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

//! Per-line checks
//!
//! Each check sees every analyzable line once, in file order, and may report
//! more issues once the whole script has been seen. The analyzer runs them in
//! a fixed order: syntax, control flow, declarations, calls.

pub mod calls;
pub mod control_flow;
pub mod declarations;
pub mod syntax;

pub use calls::FunctionCallChecker;
pub use control_flow::{ControlFlowValidator, ControlFrame, ControlKind};
pub use declarations::DeclarationTracker;
pub use syntax::SyntaxChecker;

use crate::diagnostics::Issue;
use crate::lexer::{Delimiter, Keyword, Token};
use crate::scanner::SourceLine;

/// A check driven line by line over a script
pub trait LineCheck {
    /// Inspect one analyzable line
    fn check_line(&mut self, line: &SourceLine, tokens: &[Token], issues: &mut Vec<Issue>);

    /// Report issues that need the whole script; called once after the last line
    fn finish(&mut self, _issues: &mut Vec<Issue>) {}

    /// Check name for debugging
    fn name(&self) -> &'static str;
}

/// Identifier immediately followed by `(`
pub(crate) fn is_call_site(tokens: &[Token], index: usize) -> bool {
    tokens[index].is_identifier() && tokens.get(index + 1).is_some_and(|next| next.is_delimiter(Delimiter::LeftParen)) && !is_function_name(tokens, index)
}

/// Name in a `function NAME(...)` header
pub(crate) fn is_function_name(tokens: &[Token], index: usize) -> bool {
    index > 0 && tokens[index - 1].is_keyword(Keyword::Function)
}

/// Identifier written as `.member`
pub(crate) fn is_member_access(tokens: &[Token], index: usize) -> bool {
    index > 0 && tokens[index - 1].is_delimiter(Delimiter::Dot)
}

/// Call sites on a line, in textual order
pub(crate) fn call_sites(tokens: &[Token]) -> impl Iterator<Item = &Token> {
    (0..tokens.len()).filter(|&index| is_call_site(tokens, index)).map(|index| &tokens[index])
}

/// A `function NAME(PARAMS)` header
#[derive(Debug)]
pub(crate) struct FunctionHeader<'t> {
    pub name: &'t Token,
    /// Indices of the parameter names in the line's tokens
    pub params: Vec<usize>,
}

/// Parse a function header from a line starting with `function`
pub(crate) fn function_header(tokens: &[Token]) -> Option<FunctionHeader<'_>> {
    if !tokens.first().is_some_and(|t| t.is_keyword(Keyword::Function)) {
        return None;
    }
    let name = tokens.get(1).filter(|t| t.is_identifier())?;

    let mut params = Vec::new();
    if tokens.get(2).is_some_and(|t| t.is_delimiter(Delimiter::LeftParen)) {
        let mut depth = 0usize;
        for (index, token) in tokens.iter().enumerate().skip(2) {
            if token.is_delimiter(Delimiter::LeftParen) {
                depth += 1;
            } else if token.is_delimiter(Delimiter::RightParen) {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    break;
                }
            } else if depth == 1 && token.is_identifier() {
                params.push(index);
            }
        }
    }

    Some(FunctionHeader { name, params })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn tokens(text: &str) -> Vec<Token> {
        tokenize(&SourceLine {
            number: 1,
            text: text.to_string(),
            indent: 0,
        })
    }

    #[test]
    fn test_call_sites() {
        let tokens = tokens("x = foo (a, Max(b, c)) + y.len()");
        let names: Vec<_> = call_sites(&tokens).map(|t| t.lexeme.as_str()).collect();
        assert_eq!(names, vec!["foo", "Max", "len"]);
    }

    #[test]
    fn test_function_header() {
        let line = tokens("function Score(fast, slow)");
        let header = function_header(&line).unwrap();
        assert_eq!(header.name.lexeme, "Score");
        let params: Vec<_> = header.params.iter().map(|&i| line[i].lexeme.as_str()).collect();
        assert_eq!(params, vec!["fast", "slow"]);
        assert_eq!(header.params, vec![3, 5]);
        assert_eq!(call_sites(&line).count(), 0);

        assert!(function_header(&tokens("var f = 1")).is_none());
        assert!(function_header(&tokens("function")).is_none());
    }
}
