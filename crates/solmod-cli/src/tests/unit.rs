//! Unit tests for the CLI runtime.

use std::ffi::OsString;
use std::fs;
use std::process::ExitCode;

use rstest::{fixture, rstest};
use tempfile::TempDir;

use solmod_config::Config;
use solmod_engine::OperatorSpacing;

use super::support::{StaticLoader, invoke, write_file};

const LEGACY: &str = "pragma solidity ^0.5.0;\nimport \"./SafeMath.sol\";\nusing SafeMath for uint256;\nuint256 c = a.add(b);\n";
const MODERN: &str = "pragma solidity ^0.8.0;\ncontract Modern {}\n";

#[fixture]
fn project() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    write_file(dir.path(), "contracts/Token.sol", LEGACY);
    write_file(dir.path(), "contracts/Modern.sol", MODERN);
    write_file(dir.path(), "README.md", "pragma solidity ^0.4.0;\n");
    dir
}

fn arg(dir: &TempDir) -> String {
    dir.path().to_string_lossy().into_owned()
}

#[rstest]
fn rewrites_outdated_files_and_reports(project: TempDir) {
    let loader = StaticLoader::new(Config::default());
    let root = arg(&project);

    let result = invoke(&["solmod", &root], &loader);

    assert_eq!(result.exit_code, ExitCode::SUCCESS, "stderr: {}", result.stderr);
    let token = project.path().join("contracts/Token.sol");
    assert_eq!(
        fs::read_to_string(&token).expect("read token"),
        "pragma solidity ^0.8.0;\nusing SafeMath for uint256;\nuint256 c = a+(b);\n"
    );
    assert_eq!(
        fs::read_to_string(project.path().join("README.md")).expect("read readme"),
        "pragma solidity ^0.4.0;\n"
    );

    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(lines.len(), 3, "stdout: {}", result.stdout);
    assert!(lines[0].starts_with("no changes needed: "));
    assert!(lines[0].ends_with("Modern.sol"));
    assert!(lines[1].starts_with("updated: "));
    assert!(lines[1].ends_with("updated pragma, removed SafeMath)"));
    assert_eq!(lines[2], "2 file(s) scanned, 1 updated, 1 unchanged");
}

#[rstest]
fn dry_run_reports_without_writing(project: TempDir) {
    let loader = StaticLoader::new(Config::default());
    let root = arg(&project);

    let result = invoke(&["solmod", &root, "--dry-run"], &loader);

    assert_eq!(result.exit_code, ExitCode::SUCCESS);
    assert!(result.stdout.contains("would update: "));
    assert_eq!(
        fs::read_to_string(project.path().join("contracts/Token.sol")).expect("read token"),
        LEGACY
    );
}

#[rstest]
fn configured_options_reach_the_engine(project: TempDir) {
    let config = Config {
        target_version: String::from(">=0.8.20 <0.9.0"),
        operator_spacing: OperatorSpacing::Spaced,
        ..Config::default()
    };
    let loader = StaticLoader::new(config);
    let root = arg(&project);

    let result = invoke(&["solmod", &root], &loader);

    assert_eq!(result.exit_code, ExitCode::SUCCESS);
    assert_eq!(
        fs::read_to_string(project.path().join("contracts/Token.sol")).expect("read token"),
        "pragma solidity >=0.8.20 <0.9.0;\nusing SafeMath for uint256;\nuint256 c = a + (b);\n"
    );
}

#[rstest]
fn second_run_changes_nothing(project: TempDir) {
    let loader = StaticLoader::new(Config::default());
    let root = arg(&project);

    let first = invoke(&["solmod", &root], &loader);
    let second = invoke(&["solmod", &root], &loader);

    assert_eq!(first.exit_code, ExitCode::SUCCESS);
    assert_eq!(second.exit_code, ExitCode::SUCCESS);
    assert!(second.stdout.ends_with("2 file(s) scanned, 0 updated, 2 unchanged\n"));
}

#[rstest]
fn config_flags_are_routed_to_loader(project: TempDir) {
    let loader = StaticLoader::new(Config::default());
    let root = arg(&project);

    let result = invoke(
        &["solmod", "--target-version", "^0.8.0", &root, "--dry-run"],
        &loader,
    );

    assert_eq!(result.exit_code, ExitCode::SUCCESS, "stderr: {}", result.stderr);
    let seen = loader.seen.borrow();
    assert_eq!(
        *seen,
        vec![
            OsString::from("solmod"),
            OsString::from("--target-version"),
            OsString::from("^0.8.0"),
        ]
    );
}

#[rstest]
fn invalid_target_fails_before_touching_files(project: TempDir) {
    let config = Config {
        target_version: String::from("^0.8.0;"),
        ..Config::default()
    };
    let loader = StaticLoader::new(config);
    let root = arg(&project);

    let result = invoke(&["solmod", &root], &loader);

    assert_eq!(result.exit_code, ExitCode::FAILURE);
    assert!(result.stderr.contains("invalid configuration"), "stderr: {}", result.stderr);
    assert_eq!(
        fs::read_to_string(project.path().join("contracts/Token.sol")).expect("read token"),
        LEGACY
    );
}

#[test]
fn missing_directory_argument_is_a_usage_error() {
    let loader = StaticLoader::new(Config::default());

    let result = invoke(&["solmod"], &loader);

    assert_eq!(result.exit_code, ExitCode::FAILURE);
    assert!(result.stderr.contains("DIRECTORY"), "stderr: {}", result.stderr);
    assert!(loader.seen.borrow().is_empty());
}

#[test]
fn nonexistent_directory_fails() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("nowhere");
    let loader = StaticLoader::new(Config::default());

    let result = invoke(&["solmod", &missing.to_string_lossy()], &loader);

    assert_eq!(result.exit_code, ExitCode::FAILURE);
    assert!(result.stderr.contains("is not a directory"));
}

#[test]
fn help_is_written_to_stdout() {
    let loader = StaticLoader::new(Config::default());

    let result = invoke(&["solmod", "--help"], &loader);

    assert_eq!(result.exit_code, ExitCode::SUCCESS);
    assert!(result.stdout.contains("--dry-run"));
}
