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

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use test_case::test_case;

const CLEAN: &str = "var fast = SMA(Close, 10)\nvar slow = SMA(Close, 30)\nif fast > slow\n    Buy()\nendif\n";

fn dotscript() -> Command {
    let mut cmd = Command::cargo_bin("dotscript").unwrap();
    cmd.env_remove("DOTSCRIPT_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn write_script(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_clean_script_passes() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "clean.ds", CLEAN);

    dotscript()
        .arg("check")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("clean.ds: valid (0 errors, 0 warnings)"))
        .stdout(predicate::str::contains("cost: complexity"));
}

#[test_case("if x > 1\n    Print(x)\n", "UNCLOSED_CONTROL" ; "unclosed block")]
#[test_case("var a = (1 + 2\n", "UNMATCHED_PARENS" ; "open paren")]
#[test_case("endwhile\n", "UNMATCHED_ENDWHILE" ; "stray closer")]
#[test_case("var p = 1 # 2\nPrint(p)\n", "INVALID_CHARACTER" ; "invalid character")]
fn test_errors_fail_with_exit_code_one(source: &str, code: &str) {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "broken.ds", source);

    dotscript()
        .arg("check")
        .arg(&script)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("invalid"))
        .stdout(predicate::str::contains(code));
}

#[test]
fn test_warnings_gate_only_with_deny_warnings() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "unused.ds", "var spare = 1\n");

    dotscript()
        .arg("check")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("warning[UNUSED_VARIABLE]"));

    dotscript().args(["check", "--deny-warnings"]).arg(&script).assert().code(1);
}

#[test]
fn test_json_output_for_multiple_files() {
    let dir = TempDir::new().unwrap();
    let clean = write_script(&dir, "clean.ds", CLEAN);
    let broken = write_script(&dir, "broken.ds", "Foo(1)\n");

    let output = dotscript().args(["check", "--format", "json"]).arg(&clean).arg(&broken).output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let reports = json.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["verdict"]["isValid"], true);
    assert_eq!(reports[1]["verdict"]["warnings"][0]["code"], "UNKNOWN_FUNCTION");
    assert!(reports[1]["verdict"]["performance"]["estimatedExecutionTime"].is_number());
}

#[test]
fn test_reads_stdin() {
    dotscript()
        .args(["check", "-"])
        .write_stdin("while true\n    Print(1)\nendwhile\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<stdin>"))
        .stdout(predicate::str::contains("INFINITE_LOOP"));
}

#[test]
fn test_missing_file_exits_with_two() {
    dotscript()
        .args(["check", "does-not-exist.ds"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read script"));
}

#[test]
fn test_config_file_extends_builtins() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "vwap.ds", "var v = VWAP(Close)\nPrint(v)\n");
    let config = write_script(&dir, "dotscript.toml", "[analyzer]\nextra_builtins = [\"VWAP\"]\n\n[output]\ndeny_warnings = true\n");

    dotscript().arg("check").arg(&script).assert().success().stdout(predicate::str::contains("UNKNOWN_FUNCTION"));

    dotscript()
        .arg("--config")
        .arg(&config)
        .arg("check")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("UNKNOWN_FUNCTION").not());

    dotscript()
        .env("DOTSCRIPT_CONFIG", &config)
        .arg("check")
        .arg(&script)
        .assert()
        .success();
}

#[test]
fn test_invalid_config_exits_with_two() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "clean.ds", CLEAN);
    let config = write_script(&dir, "bad.toml", "[analyzer]\ncomplexity_threshold = -1.0\n");

    dotscript()
        .arg("--config")
        .arg(&config)
        .arg("check")
        .arg(&script)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("complexity_threshold"));
}

#[test]
fn test_builtins_lists_catalogue_and_extras() {
    let dir = TempDir::new().unwrap();
    let config = write_script(&dir, "dotscript.toml", "[analyzer]\nextra_builtins = [\"Notify\"]\n");

    dotscript()
        .arg("--config")
        .arg(&config)
        .arg("builtins")
        .assert()
        .success()
        .stdout(predicate::str::contains("SMA"))
        .stdout(predicate::str::contains("Notify (configured)"));
}

#[test]
fn test_requires_file_argument() {
    dotscript().arg("check").assert().failure();
}
