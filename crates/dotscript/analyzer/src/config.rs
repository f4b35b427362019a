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

//! Analyzer configuration

use crate::cost::CostWeights;
use crate::error::{ConfigError, ConfigResult};
use crate::lexer::is_valid_identifier;
use serde::{Deserialize, Serialize};

/// Aggregate complexity above which decomposition is suggested
pub const DEFAULT_COMPLEXITY_THRESHOLD: f64 = 50.0;

/// Aggregate execution time above which optimization is suggested
pub const DEFAULT_EXECUTION_TIME_THRESHOLD: f64 = 1000.0;

/// Configuration for a [`ScriptAnalyzer`](crate::analyzer::ScriptAnalyzer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Complexity score that triggers the decomposition suggestion
    pub complexity_threshold: f64,
    /// Execution time score that triggers the optimization suggestion
    pub execution_time_threshold: f64,
    /// Built-in names added on top of the static catalogue
    pub extra_builtins: Vec<String>,
    /// Line comment marker
    pub line_comment: String,
    /// Block comment opener
    pub block_comment_open: String,
    /// Block comment closer
    pub block_comment_close: String,
    /// Per-line cost weights
    pub weights: CostWeights,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            complexity_threshold: DEFAULT_COMPLEXITY_THRESHOLD,
            execution_time_threshold: DEFAULT_EXECUTION_TIME_THRESHOLD,
            extra_builtins: Vec::new(),
            line_comment: "//".to_string(),
            block_comment_open: "/*".to_string(),
            block_comment_close: "*/".to_string(),
            weights: CostWeights::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Create a new analyzer configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the complexity suggestion threshold
    pub fn with_complexity_threshold(mut self, threshold: f64) -> Self {
        self.complexity_threshold = threshold;
        self
    }

    /// Set the execution time suggestion threshold
    pub fn with_execution_time_threshold(mut self, threshold: f64) -> Self {
        self.execution_time_threshold = threshold;
        self
    }

    /// Add a built-in name
    pub fn with_builtin(mut self, name: impl Into<String>) -> Self {
        self.extra_builtins.push(name.into());
        self
    }

    /// Add several built-in names
    pub fn with_builtins<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_builtins.extend(names.into_iter().map(Into::into));
        self
    }

    /// Replace the cost weights
    pub fn with_weights(mut self, weights: CostWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set the comment markers
    pub fn with_comment_markers(mut self, line: impl Into<String>, block_open: impl Into<String>, block_close: impl Into<String>) -> Self {
        self.line_comment = line.into();
        self.block_comment_open = block_open.into();
        self.block_comment_close = block_close.into();
        self
    }

    /// Check that every value is usable
    pub fn validate(&self) -> ConfigResult<()> {
        check_threshold("complexity_threshold", self.complexity_threshold)?;
        check_threshold("execution_time_threshold", self.execution_time_threshold)?;

        for (name, value) in self.weights.entries() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }

        if let Some(bad) = self.extra_builtins.iter().find(|name| !is_valid_identifier(name)) {
            return Err(ConfigError::InvalidBuiltin(bad.clone()));
        }

        for (name, marker) in [
            ("line_comment", &self.line_comment),
            ("block_comment_open", &self.block_comment_open),
            ("block_comment_close", &self.block_comment_close),
        ] {
            if marker.trim().is_empty() {
                return Err(ConfigError::EmptyCommentMarker(name));
            }
        }

        Ok(())
    }
}

fn check_threshold(name: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 { Ok(()) } else { Err(ConfigError::InvalidThreshold { name, value }) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = AnalyzerConfig::new()
            .with_complexity_threshold(20.0)
            .with_execution_time_threshold(300.0)
            .with_builtin("VWAP")
            .with_builtins(["Stochastic", "Ichimoku"]);

        assert_eq!(config.complexity_threshold, 20.0);
        assert_eq!(config.execution_time_threshold, 300.0);
        assert_eq!(config.extra_builtins, vec!["VWAP", "Stochastic", "Ichimoku"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.complexity_threshold, DEFAULT_COMPLEXITY_THRESHOLD);
        assert_eq!(config.execution_time_threshold, DEFAULT_EXECUTION_TIME_THRESHOLD);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_threshold() {
        let config = AnalyzerConfig::new().with_complexity_threshold(f64::NAN);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidThreshold { name: "complexity_threshold", .. })));

        let config = AnalyzerConfig::new().with_execution_time_threshold(-5.0);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidThreshold { name: "execution_time_threshold", .. })));
    }

    #[test]
    fn test_invalid_weight() {
        let weights = CostWeights { call_time: -2.0, ..CostWeights::default() };
        let config = AnalyzerConfig::new().with_weights(weights);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidWeight { name: "call_time", .. })));
    }

    #[test]
    fn test_invalid_builtin_and_marker() {
        let config = AnalyzerConfig::new().with_builtin("my-func");
        assert_eq!(config.validate(), Err(ConfigError::InvalidBuiltin("my-func".to_string())));

        let config = AnalyzerConfig::new().with_comment_markers("#", "", "*/");
        assert_eq!(config.validate(), Err(ConfigError::EmptyCommentMarker("block_comment_open")));
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: AnalyzerConfig = serde_json::from_str(r#"{ "complexity_threshold": 10.0 }"#).unwrap();
        assert_eq!(config.complexity_threshold, 10.0);
        assert_eq!(config.execution_time_threshold, DEFAULT_EXECUTION_TIME_THRESHOLD);
        assert_eq!(config.line_comment, "//");
    }
}
