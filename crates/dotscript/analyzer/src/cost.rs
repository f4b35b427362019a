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

//! Heuristic cost model
//!
//! Scores are relative units summed over analyzable lines. They are not
//! calibrated against real execution time or memory.

use crate::checks::call_sites;
use crate::lexer::{Delimiter, Keyword, Token, TokenKind};
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Aggregate cost of a script
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostMetrics {
    pub complexity: f64,
    pub estimated_execution_time: f64,
    pub estimated_memory_usage: f64,
}

impl CostMetrics {
    pub fn new(complexity: f64, estimated_execution_time: f64, estimated_memory_usage: f64) -> Self {
        Self {
            complexity,
            estimated_execution_time,
            estimated_memory_usage,
        }
    }
}

impl AddAssign for CostMetrics {
    fn add_assign(&mut self, rhs: Self) {
        self.complexity += rhs.complexity;
        self.estimated_execution_time += rhs.estimated_execution_time;
        self.estimated_memory_usage += rhs.estimated_memory_usage;
    }
}

/// Per-line scoring weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostWeights {
    /// Complexity every line adds
    pub complexity_base: f64,
    /// Complexity of a line with `if`, `while` or `for`
    pub branch: f64,
    /// Complexity of a line with `else` or `elseif`
    pub else_branch: f64,
    /// Complexity per logical operator
    pub logical_operator: f64,
    /// Complexity per call site
    pub call_complexity: f64,
    /// Execution time every line adds
    pub time_base: f64,
    /// Execution time per call site
    pub call_time: f64,
    /// Execution time per arithmetic operator
    pub arithmetic: f64,
    /// Execution time of a line with `while` or `for`
    pub loop_time: f64,
    /// Memory every line adds
    pub memory_base: f64,
    /// Memory of a line with a `var` declaration
    pub declaration: f64,
    /// Memory of a line with an array literal
    pub array_literal: f64,
    /// Memory of a line with a string literal
    pub string_literal: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            complexity_base: 1.0,
            branch: 2.0,
            else_branch: 1.0,
            logical_operator: 1.0,
            call_complexity: 0.5,
            time_base: 1.0,
            call_time: 2.0,
            arithmetic: 0.5,
            loop_time: 10.0,
            memory_base: 1.0,
            declaration: 4.0,
            array_literal: 8.0,
            string_literal: 2.0,
        }
    }
}

impl CostWeights {
    /// Every weight with its name
    pub fn entries(&self) -> [(&'static str, f64); 13] {
        [
            ("complexity_base", self.complexity_base),
            ("branch", self.branch),
            ("else_branch", self.else_branch),
            ("logical_operator", self.logical_operator),
            ("call_complexity", self.call_complexity),
            ("time_base", self.time_base),
            ("call_time", self.call_time),
            ("arithmetic", self.arithmetic),
            ("loop_time", self.loop_time),
            ("memory_base", self.memory_base),
            ("declaration", self.declaration),
            ("array_literal", self.array_literal),
            ("string_literal", self.string_literal),
        ]
    }
}

/// Features of one line that the cost model looks at
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct LineFeatures {
    branch_or_loop: bool,
    has_loop: bool,
    has_else: bool,
    logical_ops: usize,
    calls: usize,
    arithmetic_ops: usize,
    declares: bool,
    array_literal: bool,
    string_literal: bool,
}

impl LineFeatures {
    fn collect(tokens: &[Token]) -> Self {
        let mut features = LineFeatures {
            calls: call_sites(tokens).count(),
            ..Self::default()
        };

        for (index, token) in tokens.iter().enumerate() {
            match token.kind {
                TokenKind::Keyword(kw) => {
                    features.branch_or_loop |= kw.is_branch_or_loop();
                    features.has_loop |= kw.is_loop();
                    features.has_else |= matches!(kw, Keyword::Else | Keyword::ElseIf);
                    features.declares |= kw == Keyword::Var;
                    if kw.is_logical() {
                        features.logical_ops += 1;
                    }
                }
                TokenKind::Operator(op) => {
                    if op.is_logical() {
                        features.logical_ops += 1;
                    }
                    if op.is_arithmetic() {
                        features.arithmetic_ops += 1;
                    }
                }
                TokenKind::Delimiter(Delimiter::LeftBracket) => {
                    features.array_literal |= index == 0 || !is_indexable(&tokens[index - 1]);
                }
                TokenKind::Str { .. } => features.string_literal = true,
                _ => {}
            }
        }

        features
    }
}

/// Whether `[` after this token indexes it rather than opening an array literal
fn is_indexable(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::Identifier | TokenKind::Str { .. } | TokenKind::Delimiter(Delimiter::RightParen) | TokenKind::Delimiter(Delimiter::RightBracket)
    )
}

fn flag(on: bool, weight: f64) -> f64 {
    if on { weight } else { 0.0 }
}

/// Score a single line
pub fn line_cost(tokens: &[Token], weights: &CostWeights) -> CostMetrics {
    let f = LineFeatures::collect(tokens);

    let complexity =
        weights.complexity_base + flag(f.branch_or_loop, weights.branch) + flag(f.has_else, weights.else_branch) + f.logical_ops as f64 * weights.logical_operator + f.calls as f64 * weights.call_complexity;

    let time = weights.time_base + f.calls as f64 * weights.call_time + f.arithmetic_ops as f64 * weights.arithmetic + flag(f.has_loop, weights.loop_time);

    let memory = weights.memory_base + flag(f.declares, weights.declaration) + flag(f.array_literal, weights.array_literal) + flag(f.string_literal, weights.string_literal);

    CostMetrics::new(complexity, time, memory)
}

/// Running cost totals over a script
#[derive(Debug, Default)]
pub struct CostEstimator {
    weights: CostWeights,
    totals: CostMetrics,
    lines: usize,
}

impl CostEstimator {
    pub fn new(weights: CostWeights) -> Self {
        Self {
            weights,
            totals: CostMetrics::default(),
            lines: 0,
        }
    }

    /// Add the cost of one analyzable line
    pub fn add_line(&mut self, tokens: &[Token]) {
        self.totals += line_cost(tokens, &self.weights);
        self.lines += 1;
    }

    pub fn totals(&self) -> CostMetrics {
        self.totals
    }

    /// Number of lines scored so far
    pub fn lines(&self) -> usize {
        self.lines
    }
}
