//! Integration tests for the `solmod` binary entry point.
//!
//! Runs the compiled binary against a temporary contracts directory and
//! checks user-facing output, exit codes, and the rewritten files.

use std::fs;

use anyhow::Result;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;
use tempfile::TempDir;

const LEGACY: &str = "pragma solidity ^0.6.0;\nimport \"./SafeMath.sol\";\nusing SafeMath for uint256;\nfunction f(uint256 a, uint256 b) pure returns (uint256) { return a.add(b).mul(2); }\n";

#[test]
fn rewrites_contract_directory() -> Result<()> {
    let dir = TempDir::new()?;
    let contract = dir.path().join("Token.sol");
    fs::write(&contract, LEGACY)?;

    let mut command = cargo_bin_cmd!("solmod");
    command
        .env("SOLMOD_LOG_FILTER", "warn")
        .arg(dir.path());
    command
        .assert()
        .success()
        .stdout(contains("update Token.sol: updated pragma, removed SafeMath"));

    assert_eq!(
        fs::read_to_string(&contract)?,
        "pragma solidity ^0.8.0;\nusing SafeMath for uint256;\nfunction f(uint256 a, uint256 b) pure returns (uint256) { return a+(b)*(2); }\n"
    );
    Ok(())
}

#[test]
fn target_version_flag_overrides_default() -> Result<()> {
    let dir = TempDir::new()?;
    let contract = dir.path().join("Token.sol");
    fs::write(&contract, "pragma solidity ^0.4.24;\n")?;

    let mut command = cargo_bin_cmd!("solmod");
    command
        .env("SOLMOD_LOG_FILTER", "warn")
        .args(["--target-version", "0.8.26"])
        .arg(dir.path());
    command.assert().success();

    assert_eq!(fs::read_to_string(&contract)?, "pragma solidity 0.8.26;\n");
    Ok(())
}

#[test]
fn missing_directory_exits_with_failure() {
    let mut command = cargo_bin_cmd!("solmod");
    command.arg("definitely/not/a/real/path");
    command
        .assert()
        .failure()
        .stderr(contains("is not a directory"));
}
