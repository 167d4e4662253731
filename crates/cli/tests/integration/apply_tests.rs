//! Apply command integration tests.

use predicates::prelude::*;

use super::common::{TestEnv, fixture_content};

#[test]
fn apply_replaces_placeholders() {
  let env = TestEnv::standard();

  env
    .assetlink_cmd()
    .arg("apply")
    .assert()
    .success()
    .stderr(predicate::str::contains(
      "inserting runtime-options.js path: /static/js/runtime-options.7a8b9c0d.bundle.js",
    ))
    .stderr(predicate::str::contains(
      "inserting options.js path: /static/js/options.4d5e6f70.bundle.js",
    ))
    .stdout(predicate::str::contains("2 placeholders replaced"))
    .stdout(predicate::str::contains("inserting").not());

  assert_eq!(env.template(), fixture_content("options.expected.html"));
}

#[test]
fn apply_is_idempotent() {
  let env = TestEnv::standard();

  env.assetlink_cmd().arg("apply").assert().success();
  let first = env.template();

  env
    .assetlink_cmd()
    .arg("apply")
    .assert()
    .success()
    .stdout(predicate::str::contains("already up to date"));

  assert_eq!(env.template(), first);
}

#[test]
fn apply_missing_asset_leaves_template_untouched() {
  let env = TestEnv::from_fixtures("missing-runtime.json", Some("options.html"));

  env
    .assetlink_cmd()
    .arg("apply")
    .assert()
    .failure()
    .stderr(predicate::str::contains("runtime-options.js"));

  assert_eq!(env.template(), fixture_content("options.html"));
}

#[test]
fn apply_missing_files_property_fails() {
  let env = TestEnv::from_fixtures("no-files.json", None);

  env
    .assetlink_cmd()
    .arg("apply")
    .assert()
    .failure()
    .stderr(predicate::str::contains("no \"files\" property"))
    .stderr(predicate::str::contains("template not found").not());
}

#[test]
fn apply_missing_manifest_fails() {
  let env = TestEnv::empty();
  env.write_file("build/options.html", &fixture_content("options.html"));

  env
    .assetlink_cmd()
    .arg("apply")
    .assert()
    .failure()
    .stderr(predicate::str::contains("asset manifest not found"));
}

#[test]
fn apply_missing_template_fails() {
  let env = TestEnv::from_fixtures("asset-manifest.json", None);

  env
    .assetlink_cmd()
    .arg("apply")
    .assert()
    .failure()
    .stderr(predicate::str::contains("template not found"));
}

#[test]
fn apply_honors_build_dir_env_var() {
  let env = TestEnv::empty();
  env.write_file("dist/asset-manifest.json", &fixture_content("asset-manifest.json"));
  env.write_file("dist/options.html", &fixture_content("options.html"));

  env
    .assetlink_cmd()
    .env("ASSETLINK_BUILD_DIR", "dist")
    .arg("apply")
    .assert()
    .success();

  assert_eq!(env.read_file("dist/options.html"), fixture_content("options.expected.html"));
}

#[test]
fn apply_build_dir_flag_beats_env_var() {
  let env = TestEnv::empty();
  env.write_file("out/asset-manifest.json", &fixture_content("asset-manifest.json"));
  env.write_file("out/options.html", &fixture_content("options.html"));

  env
    .assetlink_cmd()
    .env("ASSETLINK_BUILD_DIR", "does-not-exist")
    .args(["apply", "--build-dir", "out"])
    .assert()
    .success();

  assert_eq!(env.read_file("out/options.html"), fixture_content("options.expected.html"));
}

#[test]
fn apply_custom_rule_and_template() {
  let env = TestEnv::from_fixtures("asset-manifest.json", None);
  env.write_file("build/index.html", "<script src=\"{{main}}\"></script>\n");

  env
    .assetlink_cmd()
    .args(["apply", "--template", "index.html", "-s", "{{main}}=main.js"])
    .assert()
    .success();

  assert_eq!(
    env.read_file("build/index.html"),
    "<script src=\"./static/js/main.1a2b3c4d.bundle.js\"></script>\n"
  );
}

#[test]
fn apply_rejects_malformed_rule() {
  let env = TestEnv::standard();

  env
    .assetlink_cmd()
    .args(["apply", "-s", "no-separator"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("expected PLACEHOLDER=ASSET"));

  assert_eq!(env.template(), fixture_content("options.html"));
}

#[test]
fn apply_json_output() {
  let env = TestEnv::standard();

  let output = env.assetlink_cmd().args(["apply", "-o", "json"]).output().unwrap();
  assert!(output.status.success());

  let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(report["written"], true);
  assert_eq!(report["replacements"][0]["asset"], "runtime-options.js");
  assert_eq!(
    report["replacements"][1]["path"],
    "./static/js/options.4d5e6f70.bundle.js"
  );
  assert_eq!(report["replacements"][1]["occurrences"], 1);
}
