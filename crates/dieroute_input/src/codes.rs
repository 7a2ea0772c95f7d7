//! Diagnostic codes and constructors for input problems.
//!
//! `E101`..`E104` are input errors that stop the run, `W101`..`W104` are
//! input warnings, and `E201`..`E202` are structural errors found when the
//! files are combined.

use dieroute_diagnostics::{Category, Diagnostic, DiagnosticCode, Location};

/// A capacity matrix entry is not a non-negative integer.
pub const E101: DiagnosticCode = DiagnosticCode::new(Category::Error, 101);

/// The position file declares no dies.
pub const E102: DiagnosticCode = DiagnosticCode::new(Category::Error, 102);

/// The network file holds no matrix rows.
pub const E103: DiagnosticCode = DiagnosticCode::new(Category::Error, 103);

/// The net file holds no endpoint declarations.
pub const E104: DiagnosticCode = DiagnosticCode::new(Category::Error, 104);

/// A position line has no `:` separator and was skipped.
pub const W101: DiagnosticCode = DiagnosticCode::new(Category::Warning, 101);

/// A net declaration line is malformed and was skipped.
pub const W102: DiagnosticCode = DiagnosticCode::new(Category::Warning, 102);

/// A net declaration names an unknown endpoint type and was skipped.
pub const W103: DiagnosticCode = DiagnosticCode::new(Category::Warning, 103);

/// Declared nodes with undecodable names were left off their dies.
pub const W104: DiagnosticCode = DiagnosticCode::new(Category::Warning, 104);

/// The capacity matrix is not square.
pub const E201: DiagnosticCode = DiagnosticCode::new(Category::Error, 201);

/// The number of dies differs from the capacity matrix size.
pub const E202: DiagnosticCode = DiagnosticCode::new(Category::Error, 202);

pub(crate) fn error_bad_capacity(token: &str, at: Location) -> Diagnostic {
    Diagnostic::error(E101, format!("invalid capacity `{token}`"))
        .at(at)
        .with_help("capacities must be non-negative integers")
}

pub(crate) fn error_empty(code: DiagnosticCode, file: &str, what: &str) -> Diagnostic {
    Diagnostic::error(code, format!("{file} contains no {what}"))
}

pub(crate) fn warn_missing_separator(at: Location) -> Diagnostic {
    Diagnostic::warning(W101, "position line has no `:` separator, skipped")
        .at(at)
        .with_help("expected `<label>: <node> <node> ...`")
}

pub(crate) fn warn_malformed_declaration(reason: &str, at: Location) -> Diagnostic {
    Diagnostic::warning(W102, format!("malformed declaration: {reason}"))
        .at(at)
        .with_help("expected `<node> s [<weight>]` or `<node> l`")
}

pub(crate) fn warn_unknown_type(kind: &str, at: Location) -> Diagnostic {
    Diagnostic::warning(W103, format!("unknown endpoint type `{kind}`"))
        .at(at)
        .with_note("`s` declares a source endpoint, `l` a relay endpoint")
}

pub(crate) fn note_suppressed(code: DiagnosticCode, file: &str, hidden: usize) -> Diagnostic {
    Diagnostic::note(code, format!("... and {hidden} more in {file}"))
}

pub(crate) fn warn_invalid_nodes(count: usize, first: &str) -> Diagnostic {
    Diagnostic::warning(
        W104,
        format!("{count} declared node(s) have invalid names and were skipped"),
    )
    .with_note(format!("first: {first}"))
    .with_help("node names must be `g<digits>` or `gp<digits>`")
}

pub(crate) fn error_not_square(file: &str, row: usize, expected: usize, found: usize) -> Diagnostic {
    Diagnostic::error(
        E201,
        format!("capacity matrix is not square: row {row} has {found} entries, expected {expected}"),
    )
    .with_note(format!("in {file}"))
}

pub(crate) fn error_die_count(dies: usize, matrix: usize) -> Diagnostic {
    Diagnostic::error(
        E202,
        format!("die count mismatch: {dies} dies declared but capacity matrix is {matrix}x{matrix}"),
    )
    .with_help("the position file and the network file must describe the same dies")
}
