//! Manifest command integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn manifest_lists_files_and_entrypoints() {
  let env = TestEnv::standard();

  env
    .assetlink_cmd()
    .arg("manifest")
    .assert()
    .success()
    .stdout(predicate::str::contains("6 files"))
    .stdout(predicate::str::contains("options.js"))
    .stdout(predicate::str::contains("/static/js/runtime-options.7a8b9c0d.bundle.js"))
    .stdout(predicate::str::contains("Entrypoints"));
}

#[test]
fn manifest_json_output() {
  let env = TestEnv::standard();

  let output = env.assetlink_cmd().args(["manifest", "-o", "json"]).output().unwrap();
  assert!(output.status.success());

  let manifest: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(manifest["files"]["main.js"], "/static/js/main.1a2b3c4d.bundle.js");
  assert_eq!(manifest["entrypoints"].as_array().unwrap().len(), 2);
}

#[test]
fn manifest_without_files_fails() {
  let env = TestEnv::from_fixtures("no-files.json", None);

  env
    .assetlink_cmd()
    .arg("manifest")
    .assert()
    .failure()
    .stderr(predicate::str::contains("no \"files\" property"));
}
