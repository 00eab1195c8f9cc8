//! Runs the `pdftext` binary and checks its single status line.
//!
//! Each invocation gets a scratch working directory and config home so no
//! `.env`, `.pdftext.toml` or platform config from the host leaks in.

use std::path::Path;
use std::process::{Command, Output};

use pdftext_core::fixture;

fn pdftext(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pdftext"))
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .env("HOME", dir)
        .env_remove("PDFTEXT_INPUT")
        .env_remove("PDFTEXT_OUTPUT")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn write_pdf(path: &Path, pages: &[&str]) {
    fixture::write_pdf(path, pages).unwrap();
}

#[test]
fn extracts_to_default_txt_sibling() {
    let dir = tempfile::tempdir().unwrap();
    write_pdf(&dir.path().join("report.pdf"), &["Hello", "World"]);

    let out = pdftext(dir.path(), &["report.pdf", "--no-color"]);

    assert!(out.status.success());
    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("PDF content extracted successfully!"));
    assert!(lines[0].contains("2 pages"));

    let text = std::fs::read_to_string(dir.path().join("report.txt")).unwrap();
    assert!(text.starts_with("Hello"));
    assert!(text.contains("World"));
    assert!(text.ends_with("\n\n"));
}

#[test]
fn explicit_output_path_is_used() {
    let dir = tempfile::tempdir().unwrap();
    write_pdf(&dir.path().join("in.pdf"), &["Only page"]);

    let out = pdftext(dir.path(), &["in.pdf", "-o", "custom.txt", "--no-color"]);

    assert!(out.status.success());
    assert!(dir.path().join("custom.txt").exists());
    assert!(!dir.path().join("in.txt").exists());
}

#[test]
fn paths_can_come_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    write_pdf(&dir.path().join("cfg.pdf"), &["Configured"]);
    std::fs::write(
        dir.path().join(".pdftext.toml"),
        "[paths]\ninput_path = \"cfg.pdf\"\noutput_path = \"from_config.txt\"\n",
    )
    .unwrap();

    let out = pdftext(dir.path(), &["--no-color"]);

    assert!(out.status.success());
    let text = std::fs::read_to_string(dir.path().join("from_config.txt")).unwrap();
    assert!(text.contains("Configured"));
}

#[test]
fn missing_input_prints_one_error_line() {
    let dir = tempfile::tempdir().unwrap();

    let out = pdftext(dir.path(), &["absent.pdf", "--no-color"]);

    assert!(!out.status.success());
    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Error extracting PDF: "));
    assert!(lines[0].contains("absent.pdf"));
    assert!(!dir.path().join("absent.txt").exists());
}

#[test]
fn corrupt_input_leaves_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bad.pdf"), "not a pdf").unwrap();
    std::fs::write(dir.path().join("bad.txt"), "previous").unwrap();

    let out = pdftext(dir.path(), &["bad.pdf", "--no-color"]);

    assert!(!out.status.success());
    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Error extracting PDF: malformed PDF"));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("bad.txt")).unwrap(),
        "previous"
    );
}

#[test]
fn no_input_anywhere_is_reported() {
    let dir = tempfile::tempdir().unwrap();

    let out = pdftext(dir.path(), &["--no-color"]);

    assert!(!out.status.success());
    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("no input PDF given"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write_pdf(&dir.path().join("dry.pdf"), &["One", "Two", "Three"]);

    let out = pdftext(dir.path(), &["dry.pdf", "--dry-run", "--no-color"]);

    assert!(out.status.success());
    let lines = stdout_lines(&out);
    assert_eq!(lines[0], "DRY RUN: dry.pdf (3 pages)");
    assert!(lines[1].starts_with("  Page 1: "));
    assert!(lines.last().unwrap().starts_with("Total: "));
    assert!(!dir.path().join("dry.txt").exists());
}

#[test]
fn explicit_config_replaces_cwd_config() {
    let dir = tempfile::tempdir().unwrap();
    write_pdf(&dir.path().join("chosen.pdf"), &["Chosen"]);
    std::fs::write(
        dir.path().join(".pdftext.toml"),
        "[paths]\ninput_path = \"ignored.pdf\"\noutput_path = \"ignored.txt\"\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("good.toml"),
        "[paths]\ninput_path = \"chosen.pdf\"\noutput_path = \"chosen_out.txt\"\n",
    )
    .unwrap();

    let out = pdftext(dir.path(), &["-c", "good.toml", "--no-color"]);

    assert!(out.status.success());
    let text = std::fs::read_to_string(dir.path().join("chosen_out.txt")).unwrap();
    assert!(text.contains("Chosen"));
    assert!(!dir.path().join("ignored.txt").exists());
}

#[test]
fn unparsable_explicit_config_names_the_parse_failure() {
    let dir = tempfile::tempdir().unwrap();
    write_pdf(&dir.path().join("in.pdf"), &["Text"]);
    std::fs::write(dir.path().join("bad.toml"), "[paths\ninput_path = ").unwrap();

    let out = pdftext(dir.path(), &["in.pdf", "-c", "bad.toml", "--no-color"]);

    assert!(!out.status.success());
    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Error extracting PDF: cannot parse config file"));
    assert!(lines[0].contains("bad.toml"));
    assert!(!dir.path().join("in.txt").exists());
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write_pdf(&dir.path().join("in.pdf"), &["Text"]);

    let out = pdftext(dir.path(), &["in.pdf", "-c", "nowhere.toml", "--no-color"]);

    assert!(!out.status.success());
    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Error extracting PDF: cannot read config file"));
}
