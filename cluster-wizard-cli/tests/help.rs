use std::fs;

use assert_cmd::cargo::{self};
use predicates::str::contains;

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!("cluster-wizard");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("--cluster-id"))
        .stdout(contains("--cluster-file"));
}

#[test]
fn requires_a_cluster_source() {
    let mut cmd = cargo::cargo_bin_cmd!("cluster-wizard");
    cmd.assert().failure().stderr(contains("--cluster-id"));
}

#[test]
fn rejects_missing_cluster_file() {
    let mut cmd = cargo::cargo_bin_cmd!("cluster-wizard");
    cmd.args(["--cluster-file", "/definitely/not/here.json"])
        .assert()
        .failure()
        .stderr(contains("does not exist"));
}

#[test]
fn rejects_snapshot_without_id() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("cluster.json");
    fs::write(&path, r#"{"id": "", "name": "demo"}"#).expect("write snapshot");

    let mut cmd = cargo::cargo_bin_cmd!("cluster-wizard");
    cmd.current_dir(dir.path())
        .arg("--cluster-file")
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("no id"));
}

#[test]
fn logs_to_working_directory_without_log_file_flag() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("cluster.json");
    fs::write(&path, r#"{"id": "", "name": "demo"}"#).expect("write snapshot");

    let mut cmd = cargo::cargo_bin_cmd!("cluster-wizard");
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg("--cluster-file")
        .arg(&path)
        .assert()
        .failure();

    let log = fs::read_to_string(dir.path().join("cluster-wizard.log")).expect("default log file");
    assert!(log.contains("using inventory API"));
}
