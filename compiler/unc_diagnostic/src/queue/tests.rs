#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::DiagnosticQueue;
use crate::{Diagnostic, ErrorCode};

#[test]
fn counts_errors_and_warnings_separately() {
    let mut queue = DiagnosticQueue::new();
    assert!(!queue.has_errors());

    queue.push(Diagnostic::error(ErrorCode::U1001).at(1, 1));
    queue.push(Diagnostic::warning(ErrorCode::U3001).at(2, 1));
    queue.push(Diagnostic::error(ErrorCode::U0001).at(3, 7));

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.error_count(), 2);
    assert_eq!(queue.warning_count(), 1);
    assert!(queue.has_errors());
}

#[test]
fn keeps_report_order() {
    let mut queue = DiagnosticQueue::new();
    queue.push(Diagnostic::error(ErrorCode::U1006).at(9, 1));
    queue.push(Diagnostic::error(ErrorCode::U1001).at(2, 1));
    let codes: Vec<_> = queue.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::U1006, ErrorCode::U1001]);
}

#[test]
fn append_moves_counts() {
    let mut first = DiagnosticQueue::new();
    let mut second = DiagnosticQueue::new();
    first.push(Diagnostic::warning(ErrorCode::U3001));
    second.push(Diagnostic::error(ErrorCode::U1003));

    first.append(&mut second);
    assert_eq!(first.error_count(), 1);
    assert_eq!(first.len(), 2);
    assert!(second.is_empty());
    assert_eq!(second.error_count(), 0);
}

#[test]
fn emit_all_prefixes_the_file() {
    let mut queue = DiagnosticQueue::new();
    queue.push(
        Diagnostic::error(ErrorCode::U1001)
            .at(4, 2)
            .with_message("unexpected `]`"),
    );
    let mut out = Vec::new();
    queue.emit_all(&mut out, "a.c").unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "a.c:4:2: error[U1001]: unexpected `]`\n"
    );
}
