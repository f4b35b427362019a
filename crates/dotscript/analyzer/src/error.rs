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

//! Error types for analyzer setup and reporting
//!
//! Analysis itself never fails: every defect in a script is reported as an
//! [`Issue`](crate::diagnostics::Issue). The errors here only cover building an
//! analyzer from an invalid configuration and rendering verdicts.

use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Rejected analyzer configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A suggestion threshold is negative or not finite
    #[error("threshold '{name}' must be a finite, non-negative number (got {value})")]
    InvalidThreshold { name: &'static str, value: f64 },

    /// A cost weight is negative or not finite
    #[error("cost weight '{name}' must be a finite, non-negative number (got {value})")]
    InvalidWeight { name: &'static str, value: f64 },

    /// An extra built-in is not a valid identifier
    #[error("extra built-in '{0}' is not a valid identifier")]
    InvalidBuiltin(String),

    /// A comment marker is empty
    #[error("comment marker '{0}' must not be empty")]
    EmptyCommentMarker(&'static str),
}

/// Failure to render a verdict
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to serialize verdict: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to format report: {0}")]
    Format(#[from] std::fmt::Error),
}
