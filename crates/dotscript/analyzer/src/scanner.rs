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

//! Line scanner
//!
//! Splits a script into analyzable lines. Blank lines and comment lines are
//! dropped but still consume a line number.

use crate::config::AnalyzerConfig;

/// One non-blank, non-comment physical line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// Line number (1-based)
    pub number: usize,
    /// Line text with surrounding whitespace removed
    pub text: String,
    /// Number of characters trimmed from the start of the physical line
    pub indent: usize,
}

impl SourceLine {
    /// Column in the physical line of the character at `index` (0-based, in chars) of `text`
    pub fn column_of(&self, index: usize) -> usize {
        self.indent + index + 1
    }
}

/// Line scanner honouring the configured comment markers
///
/// Comment text anywhere in a line is blanked out before the line is handed
/// on, so a `/* ... */` opened mid-line is dropped and one left open carries
/// over to the following lines. Markers inside string literals are text.
#[derive(Debug, Clone)]
pub struct Scanner {
    line_comment: Vec<char>,
    block_open: Vec<char>,
    block_close: Vec<char>,
}

impl Scanner {
    /// Create a scanner for the given configuration
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            line_comment: config.line_comment.chars().collect(),
            block_open: config.block_comment_open.chars().collect(),
            block_close: config.block_comment_close.chars().collect(),
        }
    }

    /// Scan the whole source into analyzable lines
    pub fn scan(&self, source: &str) -> Vec<SourceLine> {
        let normalized = normalize_line_endings(source);
        let mut lines = Vec::new();
        let mut in_block_comment = false;

        for (index, raw) in normalized.split('\n').enumerate() {
            let chars: Vec<char> = raw.trim().chars().collect();

            // A line starting with a comment marker is skipped as a whole
            if !in_block_comment && (chars.is_empty() || starts_at(&chars, 0, &self.line_comment)) {
                continue;
            }
            if !in_block_comment && starts_at(&chars, 0, &self.block_open) {
                self.strip_comments(raw, &mut in_block_comment);
                continue;
            }

            let stripped = self.strip_comments(raw, &mut in_block_comment);
            let text = stripped.trim();
            if text.is_empty() {
                continue;
            }

            let indent = stripped.chars().count() - stripped.trim_start().chars().count();
            lines.push(SourceLine {
                number: index + 1,
                text: text.to_string(),
                indent,
            });
        }

        lines
    }

    /// Replace comment text with spaces, keeping every other character in place
    fn strip_comments(&self, raw: &str, in_block_comment: &mut bool) -> String {
        let chars: Vec<char> = raw.chars().collect();
        let mut out = String::with_capacity(raw.len());
        let mut quote: Option<char> = None;
        let mut pos = 0;

        while pos < chars.len() {
            let ch = chars[pos];

            if *in_block_comment {
                if starts_at(&chars, pos, &self.block_close) {
                    out.extend(std::iter::repeat_n(' ', self.block_close.len()));
                    pos += self.block_close.len();
                    *in_block_comment = false;
                } else {
                    out.push(' ');
                    pos += 1;
                }
                continue;
            }

            if let Some(q) = quote {
                out.push(ch);
                pos += 1;
                if ch == '\\' {
                    if let Some(&escaped) = chars.get(pos) {
                        out.push(escaped);
                        pos += 1;
                    }
                } else if ch == q {
                    quote = None;
                }
                continue;
            }

            if starts_at(&chars, pos, &self.line_comment) {
                break;
            }
            if starts_at(&chars, pos, &self.block_open) {
                out.extend(std::iter::repeat_n(' ', self.block_open.len()));
                pos += self.block_open.len();
                *in_block_comment = true;
                continue;
            }

            if ch == '"' || ch == '\'' {
                quote = Some(ch);
            }
            out.push(ch);
            pos += 1;
        }

        out
    }
}

/// Check if a non-empty marker occurs at `pos`
fn starts_at(chars: &[char], pos: usize, marker: &[char]) -> bool {
    !marker.is_empty() && chars[pos..].starts_with(marker)
}

/// Convert `\r\n` and lone `\r` line endings to `\n`
pub fn normalize_line_endings(source: &str) -> String {
    source.replace("\r\n", "\n").replace('\r', "\n")
}

/// Scan with the default comment markers
pub fn scan_lines(source: &str) -> Vec<SourceLine> {
    let config = AnalyzerConfig::default();
    Scanner::new(&config).scan(source)
}
