use std::io::Write;
use std::path::Path;

use owo_colors::OwoColorize;
use pdftext_core::{ExtractedText, RunSummary};

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print the single success status line.
pub fn print_success(
    w: &mut dyn Write,
    summary: &RunSummary,
    output: &Path,
    color: ColorMode,
) -> std::io::Result<()> {
    let detail = format!(
        "({} {} -> {})",
        summary.pages,
        pages_word(summary.pages),
        output.display()
    );
    if color.enabled() {
        writeln!(
            w,
            "{} {}",
            "PDF content extracted successfully!".green(),
            detail.dimmed()
        )
    } else {
        writeln!(w, "PDF content extracted successfully! {}", detail)
    }
}

/// Print the single failure status line.
pub fn print_error(
    w: &mut dyn Write,
    err: &dyn std::fmt::Display,
    color: ColorMode,
) -> std::io::Result<()> {
    let message = err.to_string().trim().replace('\n', " ");
    if color.enabled() {
        writeln!(w, "{} {}", "Error extracting PDF:".red(), message)
    } else {
        writeln!(w, "Error extracting PDF: {}", message)
    }
}

/// Print a per-page length report for `--dry-run`.
pub fn print_dry_run_report(
    w: &mut dyn Write,
    pdf_name: &str,
    text: &ExtractedText,
    color: ColorMode,
) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(
            w,
            "{} {} ({} {})",
            "DRY RUN:".bold().cyan(),
            pdf_name.bold(),
            text.page_count(),
            pages_word(text.page_count())
        )?;
    } else {
        writeln!(
            w,
            "DRY RUN: {} ({} {})",
            pdf_name,
            text.page_count(),
            pages_word(text.page_count())
        )?;
    }

    for (i, len) in text.page_lengths().iter().enumerate() {
        if *len == 0 && color.enabled() {
            writeln!(w, "  Page {}: {}", i + 1, "0 chars (empty)".yellow())?;
        } else if *len == 0 {
            writeln!(w, "  Page {}: 0 chars (empty)", i + 1)?;
        } else {
            writeln!(w, "  Page {}: {} chars", i + 1, len)?;
        }
    }

    writeln!(w, "Total: {} bytes would be written", text.len())?;
    Ok(())
}

fn pages_word(n: usize) -> &'static str {
    if n == 1 { "page" } else { "pages" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn success_is_one_plain_line() {
        let summary = RunSummary {
            pages: 1,
            bytes_written: 7,
        };
        let out = render(|w| print_success(w, &summary, Path::new("out.txt"), ColorMode(false)));
        assert_eq!(out, "PDF content extracted successfully! (1 page -> out.txt)\n");
    }

    #[test]
    fn error_is_one_plain_line() {
        let out = render(|w| print_error(w, &"cannot read in.pdf: gone", ColorMode(false)));
        assert_eq!(out, "Error extracting PDF: cannot read in.pdf: gone\n");
    }

    #[test]
    fn multi_line_error_is_flattened() {
        let out = render(|w| print_error(w, &"bad config\nexpected `]`\n", ColorMode(false)));
        assert_eq!(out, "Error extracting PDF: bad config expected `]`\n");
    }

    #[test]
    fn dry_run_lists_every_page() {
        let text = ExtractedText::from_pages(["Hello", "", "World!"]);
        let out = render(|w| print_dry_run_report(w, "doc.pdf", &text, ColorMode(false)));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "DRY RUN: doc.pdf (3 pages)");
        assert_eq!(lines[1], "  Page 1: 5 chars");
        assert_eq!(lines[2], "  Page 2: 0 chars (empty)");
        assert_eq!(lines[3], "  Page 3: 6 chars");
        assert_eq!(lines[4], "Total: 17 bytes would be written");
    }

    #[test]
    fn colored_error_still_carries_message() {
        let out = render(|w| print_error(w, &"boom", ColorMode(true)));
        assert!(out.contains("Error extracting PDF:"));
        assert!(out.ends_with("boom\n"));
    }
}
