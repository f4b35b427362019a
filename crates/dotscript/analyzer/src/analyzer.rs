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

//! Script analyzer: runs every check over a script and builds the verdict

use crate::checks::{ControlFlowValidator, DeclarationTracker, FunctionCallChecker, LineCheck, SyntaxChecker};
use crate::config::AnalyzerConfig;
use crate::cost::CostEstimator;
use crate::error::ConfigResult;
use crate::lexer::tokenize;
use crate::scanner::Scanner;
use crate::symbols::BuiltinCatalog;
use crate::verdict::{AnalysisVerdict, SuggestionThresholds};
use tracing::{debug, instrument};

/// Static analyzer for trading scripts
///
/// The analyzer holds only configuration. Each call to [`analyze`](Self::analyze)
/// builds fresh checker state, so one instance can be shared between threads
/// and repeated calls on the same source give identical verdicts.
#[derive(Debug, Clone)]
pub struct ScriptAnalyzer {
    config: AnalyzerConfig,
    builtins: BuiltinCatalog,
}

impl ScriptAnalyzer {
    /// Create an analyzer from a validated configuration
    pub fn new(config: AnalyzerConfig) -> ConfigResult<Self> {
        config.validate()?;
        let builtins = BuiltinCatalog::with_extra(&config.extra_builtins);
        Ok(Self { config, builtins })
    }

    /// Check whether a name resolves as a built-in for this analyzer
    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtins.contains(name)
    }

    /// Checks in the order their issues are reported within a line
    fn checks(&self) -> Vec<Box<dyn LineCheck>> {
        vec![
            Box::new(SyntaxChecker::new()),
            Box::new(ControlFlowValidator::new()),
            Box::new(DeclarationTracker::new(self.builtins.clone())),
            Box::new(FunctionCallChecker::new(self.builtins.clone())),
        ]
    }

    /// Analyze a script; never fails, every defect ends up in the verdict
    #[instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn analyze(&self, source: &str) -> AnalysisVerdict {
        let lines = Scanner::new(&self.config).scan(source);
        let mut checks = self.checks();
        let mut cost = CostEstimator::new(self.config.weights);
        let mut issues = Vec::new();

        for line in &lines {
            let tokens = tokenize(line);
            for check in checks.iter_mut() {
                check.check_line(line, &tokens, &mut issues);
            }
            cost.add_line(&tokens);
        }

        for check in checks.iter_mut() {
            let before = issues.len();
            check.finish(&mut issues);
            if issues.len() > before {
                debug!(check = check.name(), count = issues.len() - before, "end-of-script issues");
            }
        }

        let performance = cost.totals();
        let thresholds = SuggestionThresholds {
            complexity: self.config.complexity_threshold,
            execution_time: self.config.execution_time_threshold,
        };
        let verdict = AnalysisVerdict::from_issues(issues, thresholds.suggest(&performance), performance);

        debug!(
            lines = cost.lines(),
            errors = verdict.errors.len(),
            warnings = verdict.warnings.len(),
            complexity = performance.complexity,
            valid = verdict.is_valid,
            "script analyzed"
        );

        verdict
    }
}

impl Default for ScriptAnalyzer {
    fn default() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            builtins: BuiltinCatalog::default(),
        }
    }
}
