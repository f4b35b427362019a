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

//! Rendering of verdicts for people and machines

use crate::diagnostics::Issue;
use crate::error::ReportError;
use crate::verdict::AnalysisVerdict;
use std::fmt::Write;

/// Output formats for a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Render a verdict for the script named `source_name`
pub fn render(verdict: &AnalysisVerdict, source_name: &str, format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Text => render_text(verdict, source_name),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(verdict)?),
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 { format!("{} {}", count, word) } else { format!("{} {}s", count, word) }
}

fn write_issue(out: &mut String, source_name: &str, issue: &Issue) -> std::fmt::Result {
    writeln!(out, "  {}:{}", source_name, issue)
}

fn render_text(verdict: &AnalysisVerdict, source_name: &str) -> Result<String, ReportError> {
    let mut out = String::new();

    writeln!(
        out,
        "{}: {} ({}, {})",
        source_name,
        if verdict.is_valid { "valid" } else { "invalid" },
        plural(verdict.errors.len(), "error"),
        plural(verdict.warnings.len(), "warning")
    )?;

    for issue in verdict.issues() {
        write_issue(&mut out, source_name, issue)?;
    }

    for suggestion in &verdict.suggestions {
        writeln!(out, "  suggestion: {}", suggestion)?;
    }

    let perf = &verdict.performance;
    writeln!(
        out,
        "  cost: complexity {:.1}, execution time {:.1}, memory {:.1}",
        perf.complexity, perf.estimated_execution_time, perf.estimated_memory_usage
    )?;

    Ok(out)
}
