/*!
 * Integration tests for the folder-to-llm binary
 */

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn folder_to_llm() -> Command {
    Command::cargo_bin("folder-to-llm").expect("binary exists")
}

fn sample_project() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::create_dir(dir.path().join("node_modules")).unwrap();
    fs::write(dir.path().join("src").join("lib.rs"), "pub fn answer() -> u32 { 42 }\n").unwrap();
    fs::write(dir.path().join("node_modules").join("dep.js"), "module.exports = 1;\n").unwrap();
    fs::write(dir.path().join("README.md"), "# Sample\n").unwrap();
    dir
}

#[test]
fn test_xml_to_stdout() {
    let dir = sample_project();

    folder_to_llm()
        .arg(dir.path())
        .arg("-y")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<folder_structure>\n"))
        .stdout(predicate::str::contains("<source>src/lib.rs</source>"))
        .stdout(predicate::str::contains("      pub fn answer() -> u32 { 42 }"))
        .stdout(predicate::str::ends_with("</documents>\n"));
}

#[test]
fn test_content_exclusion_flag() {
    let dir = sample_project();

    folder_to_llm()
        .arg(dir.path())
        .args(["-y", "-f", "markdown", "-e", "node_modules/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("├── node_modules/"))
        .stdout(predicate::str::contains("dep.js").not())
        .stdout(predicate::str::contains("## README.md"));
}

#[test]
fn test_json_output_file() {
    let dir = sample_project();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("context.json");

    folder_to_llm()
        .arg(dir.path())
        .args(["-y", "-s", "-f", "json", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Output written to "));

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert!(value.get("folder_structure").is_none());
    assert_eq!(value["documents"].as_array().unwrap().len(), 3);
}

#[test]
fn test_openai_delimited_output() {
    let dir = sample_project();
    let root_name = dir.path().file_name().unwrap().to_string_lossy().into_owned();

    folder_to_llm()
        .arg(dir.path())
        .args(["-y", "-l", "openai"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Project Structure:\n```\n"))
        .stdout(predicate::str::contains(format!("{}/README.md\n---\n# Sample\n\n---\n", root_name)));
}

#[test]
fn test_confirmation_declined() {
    let dir = sample_project();

    folder_to_llm()
        .arg(dir.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project Structure:"))
        .stdout(predicate::str::contains("Operation cancelled."))
        .stdout(predicate::str::contains("<documents>").not());
}

#[test]
fn test_confirmation_adds_exclusions() {
    let dir = sample_project();

    folder_to_llm()
        .arg(dir.path())
        .write_stdin("exclude: node_modules/\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated Project Structure:"))
        .stdout(predicate::str::contains("<source>node_modules/dep.js</source>").not())
        .stdout(predicate::str::contains("<source>README.md</source>"));
}

#[test]
fn test_invalid_directory() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");

    folder_to_llm()
        .arg(&missing)
        .arg("-y")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("is not a valid directory"));
}

#[test]
fn test_version_flag() {
    folder_to_llm()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_generate_completions() {
    folder_to_llm()
        .args(["--generate", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("folder-to-llm"));
}
