//! Log level selection: default, `--verbose`, and `RUST_LOG`.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn default_level_shows_info() {
  let env = TestEnv::standard();

  env
    .assetlink_cmd()
    .arg("apply")
    .assert()
    .success()
    .stderr(predicate::str::contains("INFO"))
    .stderr(predicate::str::contains("inserting options.js path"))
    .stderr(predicate::str::contains("template rewritten"))
    .stderr(predicate::str::contains("DEBUG").not());
}

#[test]
fn verbose_enables_debug() {
  let env = TestEnv::standard();

  env
    .assetlink_cmd()
    .args(["apply", "--verbose"])
    .assert()
    .success()
    .stderr(predicate::str::contains("DEBUG"))
    .stderr(predicate::str::contains("apply options resolved"))
    .stderr(predicate::str::contains("loaded asset manifest"));
}

#[test]
fn rust_log_overrides_default() {
  let env = TestEnv::standard();

  env
    .assetlink_cmd()
    .env("RUST_LOG", "warn")
    .arg("apply")
    .assert()
    .success()
    .stderr(predicate::str::contains("inserting").not());
}

#[test]
fn rust_log_overrides_verbose() {
  let env = TestEnv::standard();

  env
    .assetlink_cmd()
    .env("RUST_LOG", "error")
    .args(["plan", "-v"])
    .assert()
    .success()
    .stderr(predicate::str::is_empty());
}
