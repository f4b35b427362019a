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

//! Property tests over generated scripts

use dotscript_analyzer::{IssueCode, Severity, analyze};
use proptest::prelude::*;

/// Lines drawn from the script language, valid or not
fn script_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("var x = 1".to_string()),
        Just("var y = x + 2".to_string()),
        Just("if x > y".to_string()),
        Just("while true".to_string()),
        Just("for i = 1 to 10".to_string()),
        Just("function f(a, b)".to_string()),
        Just("endif".to_string()),
        Just("endwhile".to_string()),
        Just("endfor".to_string()),
        Just("endfunction".to_string()),
        Just("Print(x, y)".to_string()),
        Just("foo(z)".to_string()),
        Just("x = (1 + [2".to_string()),
        Just("// comment".to_string()),
        Just("".to_string()),
        "[a-z ()\\[\\]=+@#\"]{0,20}",
    ]
}

fn script() -> impl Strategy<Value = String> {
    prop::collection::vec(script_line(), 0..40).prop_map(|lines| lines.join("\n"))
}

const OPENERS: [(&str, &str); 4] = [("if x", "endif"), ("while x", "endwhile"), ("for i = 0 to 3", "endfor"), ("function f(x)", "endfunction")];

proptest! {
    #[test]
    fn validity_iff_no_errors(source in script()) {
        let verdict = analyze(&source);
        prop_assert_eq!(verdict.is_valid, verdict.errors.is_empty());
    }

    #[test]
    fn severities_match_lists(source in script()) {
        let verdict = analyze(&source);
        prop_assert!(verdict.errors.iter().all(|i| i.severity == Severity::Error));
        prop_assert!(verdict.warnings.iter().all(|i| i.severity == Severity::Warning));
    }

    #[test]
    fn analysis_is_idempotent(source in script()) {
        prop_assert_eq!(analyze(&source), analyze(&source));
    }

    #[test]
    fn arbitrary_text_never_panics(source in "\\PC{0,200}") {
        let verdict = analyze(&source);
        let line_count = source.split(['\n', '\r']).count();
        prop_assert!(verdict.errors.iter().chain(&verdict.warnings).all(|i| i.line >= 1 && i.line <= line_count));
        prop_assert!(verdict.performance.complexity >= 0.0);
    }

    #[test]
    fn every_frame_closed_or_reported_once(kinds in prop::collection::vec(0usize..4, 0..12), closed in 0usize..12) {
        let closed = closed.min(kinds.len());
        let mut lines: Vec<&str> = kinds.iter().map(|&k| OPENERS[k].0).collect();
        lines.extend(kinds.iter().rev().take(closed).map(|&k| OPENERS[k].1));

        let verdict = analyze(&lines.join("\n"));
        let unclosed: Vec<usize> = verdict.errors.iter().filter(|i| i.code == IssueCode::UnclosedControl).map(|i| i.line).collect();
        let expected: Vec<usize> = (1..=kinds.len() - closed).collect();

        prop_assert_eq!(unclosed, expected);
        prop_assert!(!verdict.errors.iter().any(|i| i.code.code().starts_with("UNMATCHED_END")));
    }
}
