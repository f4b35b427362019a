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

//! Analysis verdict

use crate::cost::CostMetrics;
use crate::diagnostics::{Issue, Severity};
use serde::{Deserialize, Serialize};

/// Complete result of analyzing one script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisVerdict {
    /// True exactly when `errors` is empty
    pub is_valid: bool,
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
    pub suggestions: Vec<String>,
    pub performance: CostMetrics,
}

impl AnalysisVerdict {
    /// Split issues by severity, keeping their order, and derive validity
    pub fn from_issues(issues: Vec<Issue>, suggestions: Vec<String>, performance: CostMetrics) -> Self {
        let (errors, warnings): (Vec<Issue>, Vec<Issue>) = issues.into_iter().partition(|issue| issue.severity == Severity::Error);

        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            suggestions,
            performance,
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Errors followed by warnings
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.errors.iter().chain(&self.warnings)
    }
}

/// Suggestion thresholds over aggregate cost
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestionThresholds {
    pub complexity: f64,
    pub execution_time: f64,
}

impl SuggestionThresholds {
    /// Advice for metrics over the thresholds
    pub fn suggest(&self, metrics: &CostMetrics) -> Vec<String> {
        let mut suggestions = Vec::new();

        if metrics.complexity > self.complexity {
            suggestions.push(format!(
                "Script complexity is high ({:.1} > {:.1}); consider splitting the logic into smaller functions",
                metrics.complexity, self.complexity
            ));
        }

        if metrics.estimated_execution_time > self.execution_time {
            suggestions.push(format!(
                "Estimated execution time is high ({:.1} > {:.1}); consider optimizing loops and repeated calculations",
                metrics.estimated_execution_time, self.execution_time
            ));
        }

        suggestions
    }
}
