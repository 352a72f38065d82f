#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pbk() -> Command {
    cargo_bin_cmd!("promptbank")
}

/// Create a unique workbook directory inside the system temp dir and
/// remove any leftover from a previous run
pub fn setup_workbook(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_promptbank_wb", name));
    let wb_path = path.to_string_lossy().to_string();
    fs::remove_dir_all(&wb_path).ok();
    wb_path
}

/// Initialize a workbook (creates the three sheets, no config file update)
pub fn init_workbook(wb_path: &str) {
    pbk()
        .args(["--workbook", wb_path, "--test", "init"])
        .assert()
        .success();
}

/// Store a prompt via the CLI
pub fn add_prompt(wb_path: &str, kind: &str, code: &str, prompt: &str, password: &str) {
    pbk()
        .args([
            "--workbook",
            wb_path,
            "add",
            kind,
            "--code",
            code,
            "--prompt",
            prompt,
            "--password",
            password,
        ])
        .assert()
        .success();
}
