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

//! `check` command: analyze script files and report verdicts

use crate::config::{OutputFormat, ToolConfig};
use anyhow::{Context, Result};
use clap::Args;
use dotscript_analyzer::{AnalysisVerdict, ReportFormat, ScriptAnalyzer, render};
use serde::Serialize;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Script files to analyze (`-` reads standard input)
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Fail when any script has warnings
    #[arg(long)]
    pub deny_warnings: bool,
}

/// Verdict of one input, as emitted in JSON output
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub file: String,
    pub verdict: AnalysisVerdict,
}

impl FileReport {
    /// Whether this report passes the gate
    pub fn passes(&self, deny_warnings: bool) -> bool {
        self.verdict.is_valid && !(deny_warnings && self.verdict.has_warnings())
    }
}

fn display_name(path: &Path) -> String {
    if path == Path::new("-") { "<stdin>".to_string() } else { path.display().to_string() }
}

fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source).context("failed to read script from stdin")?;
        Ok(source)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read script {}", path.display()))
    }
}

/// Analyze every input with one analyzer
pub fn analyze_files(analyzer: &ScriptAnalyzer, files: &[PathBuf]) -> Result<Vec<FileReport>> {
    files
        .iter()
        .map(|path| {
            let source = read_source(path)?;
            let verdict = analyzer.analyze(&source);
            info!(file = %path.display(), valid = verdict.is_valid, errors = verdict.errors.len(), warnings = verdict.warnings.len(), "analyzed script");
            Ok(FileReport { file: display_name(path), verdict })
        })
        .collect()
}

/// Render all reports in one output document
pub fn render_reports(reports: &[FileReport], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
        ReportFormat::Text => {
            let mut out = String::new();
            for report in reports {
                out.push_str(&render(&report.verdict, &report.file, ReportFormat::Text)?);
            }
            Ok(out)
        }
    }
}

/// Execute the check command; returns whether every script passed
pub fn run_check(args: CheckArgs, config: &ToolConfig) -> Result<bool> {
    let analyzer = ScriptAnalyzer::new(config.analyzer.clone()).context("invalid analyzer configuration")?;
    let format = args.format.unwrap_or(config.output.format);
    let deny_warnings = args.deny_warnings || config.output.deny_warnings;
    debug!(?format, deny_warnings, files = args.files.len(), "running check");

    let reports = analyze_files(&analyzer, &args.files)?;
    let output = render_reports(&reports, format.into())?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        writeln!(stdout)?;
    }

    Ok(reports.iter().all(|report| report.passes(deny_warnings)))
}
