//! Colored diagnostic reporting (spec §7 CLI rendering): fatal errors in
//! red, non-fatal diagnostics grouped per file, a trailing summary line.

use colored::Colorize;
use dtsroll_common::{Diagnostic, DiagnosticCategory};

pub fn report_fatal(error: &anyhow::Error) {
    eprintln!("{} {error:#}", "error:".red().bold());
}

pub fn report_diagnostics(diagnostics: &[Diagnostic]) {
    let mut by_file: Vec<(&str, Vec<&Diagnostic>)> = Vec::new();
    for diagnostic in diagnostics {
        if let Some(group) = by_file.iter_mut().find(|(file, _)| *file == diagnostic.file) {
            group.1.push(diagnostic);
        } else {
            by_file.push((&diagnostic.file, vec![diagnostic]));
        }
    }

    for (file, group) in &by_file {
        eprintln!("{}", file.bold());
        for diagnostic in group {
            let label = match diagnostic.category {
                DiagnosticCategory::Error => "error".red(),
                DiagnosticCategory::Warning => "warning".yellow(),
            };
            eprintln!("  {label}: {}", diagnostic.message);
        }
    }
}

pub fn summary_line(errors: usize, files_emitted: usize) -> String {
    format!("{errors} errors, {files_emitted} files emitted")
}
