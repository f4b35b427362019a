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

//! Static analyzer for the DotScript trading language
//!
//! The analyzer reads script source and returns an [`AnalysisVerdict`]: syntax
//! errors, semantic warnings and a heuristic cost estimate. It never executes
//! the script and never fails on malformed input.
//!
//! # Architecture
//!
//! A single pass over the script:
//! - **Scanner**: splits the source into analyzable lines, dropping blanks and comments
//! - **Lexer**: turns every line into typed tokens
//! - **Checks**: syntax, control-flow nesting, declaration/use and call resolution,
//!   run in that order on each line
//! - **Cost**: per-line complexity, execution time and memory scores
//! - **Verdict**: issues split into errors and warnings, plus suggestions
//!
//! # Example Usage
//!
//! ```rust
//! use dotscript_analyzer::analyze;
//!
//! let verdict = analyze("var x = 5\nPrint(x)");
//! assert!(verdict.is_valid);
//! assert!(verdict.warnings.is_empty());
//! ```

pub mod analyzer;
pub mod checks;
pub mod config;
pub mod cost;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod position;
pub mod report;
pub mod scanner;
pub mod symbols;
pub mod verdict;

// Re-export commonly used types
pub use analyzer::ScriptAnalyzer;
pub use config::AnalyzerConfig;
pub use cost::{CostMetrics, CostWeights};
pub use diagnostics::{Issue, IssueCode, Severity};
pub use error::{ConfigError, ConfigResult, ReportError};
pub use position::Position;
pub use report::{ReportFormat, render};
pub use verdict::AnalysisVerdict;

/// Analyze a script with the default configuration
pub fn analyze(source: &str) -> AnalysisVerdict {
    ScriptAnalyzer::default().analyze(source)
}
