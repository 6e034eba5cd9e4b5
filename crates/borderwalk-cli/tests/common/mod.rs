#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub fn fixture_dataset() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/borders.json")
        .canonicalize()
        .expect("fixture dataset present")
}

/// Binary under test with colours and logging noise switched off.
pub fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("borderwalk");
    cmd.env("NO_COLOR", "1").env("RUST_LOG", "error");
    cmd
}
