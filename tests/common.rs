use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for routemap, isolated from any ambient map setting
pub fn routemap() -> Command {
    let mut cmd = cargo_bin_cmd!("routemap");
    cmd.env_remove("ROUTEMAP_MAP")
        .env_remove("ROUTEMAP_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a JSON adjacency map into `dir` and return its path
#[allow(dead_code)]
pub fn write_map(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, json).unwrap();
    path
}

/// Parse a command's stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
