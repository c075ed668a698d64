//! Test harness for filelister integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;

pub use filelister::test_utils::TestTree;

pub fn run_filelister(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_filelister");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("FILELISTER_LOG")
        .output()
        .expect("Failed to run filelister");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Lines of the output file, without terminators.
pub fn output_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("Failed to read output file")
        .lines()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_file("nested/test.txt", "content");
        assert!(file_path.exists());
    }
}
