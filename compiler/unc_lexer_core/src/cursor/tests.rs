use super::{next_tab_column, Cursor, EOF_CHAR};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

// === Basic Navigation ===

#[test]
fn peek_and_bump() {
    let src = chars("ab");
    let mut cursor = Cursor::new(&src, 8);
    assert_eq!(cursor.peek(), 'a');
    assert_eq!(cursor.peek_at(1), 'b');
    assert_eq!(cursor.peek_at(2), EOF_CHAR);
    assert_eq!(cursor.bump(), 'a');
    assert_eq!(cursor.bump(), 'b');
    assert!(cursor.is_eof());
    assert_eq!(cursor.bump(), EOF_CHAR);
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn interior_nul_is_not_eof() {
    let src = chars("a\0b");
    let mut cursor = Cursor::new(&src, 8);
    cursor.bump();
    assert_eq!(cursor.peek(), '\0');
    assert!(cursor.more());
}

#[test]
fn eat_only_matching() {
    let src = chars("=>");
    let mut cursor = Cursor::new(&src, 8);
    assert!(!cursor.eat('>'));
    assert!(cursor.eat('='));
    assert!(cursor.eat('>'));
    assert!(!cursor.eat('\0'));
}

#[test]
fn peek_str_matches_prefix() {
    let src = chars("/* x */");
    let cursor = Cursor::new(&src, 8);
    assert!(cursor.peek_str("/*"));
    assert!(!cursor.peek_str("//"));
    assert!(!cursor.peek_str("/* x */ y"));
}

// === Position Tracking ===

#[test]
fn tab_advances_to_next_stop() {
    let src = chars("a\tb");
    let mut cursor = Cursor::new(&src, 4);
    cursor.bump();
    assert_eq!(cursor.col(), 2);
    cursor.bump();
    assert_eq!(cursor.col(), 5);
    cursor.bump();
    assert_eq!(cursor.col(), 6);
}

#[test]
fn next_tab_column_values() {
    assert_eq!(next_tab_column(1, 8), 9);
    assert_eq!(next_tab_column(8, 8), 9);
    assert_eq!(next_tab_column(9, 8), 17);
    assert_eq!(next_tab_column(3, 0), 4);
}

#[test]
fn every_line_ending_counts_once() {
    let src = chars("a\nb\r\nc\rd");
    let mut cursor = Cursor::new(&src, 8);
    let mut rows = Vec::new();
    while cursor.more() {
        let ch = cursor.bump();
        if ch.is_alphabetic() {
            rows.push((ch, cursor.row()));
        }
    }
    assert_eq!(rows, vec![('a', 1), ('b', 2), ('c', 3), ('d', 4)]);
    assert_eq!(cursor.col(), 2);
}

#[test]
fn save_and_restore() {
    let src = chars("R\"x(\n)x\"");
    let mut cursor = Cursor::new(&src, 8);
    let mark = cursor.save();
    cursor.bump_n(5);
    assert_eq!(cursor.row(), 2);
    assert_eq!(cursor.slice_from(mark.pos()).len(), 5);
    cursor.restore(mark);
    assert_eq!(cursor.row(), 1);
    assert_eq!(cursor.col(), 1);
    assert_eq!(cursor.peek(), 'R');
    assert_eq!(cursor.last(), EOF_CHAR);
}

// === Property tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_cursor {
    use super::super::Cursor;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rows_match_line_breaks(text in "[a\t\r\n ]{0,64}") {
            let src: Vec<char> = text.chars().collect();
            let mut cursor = Cursor::new(&src, 4);
            cursor.bump_n(src.len());
            let expected = text.replace("\r\n", "\n").matches(['\n', '\r']).count();
            prop_assert_eq!(cursor.row() as usize, expected + 1);
            prop_assert!(cursor.is_eof());
        }

        #[test]
        fn restore_is_exact(text in "[ -~\t\n]{0,48}", split in 0usize..48) {
            let src: Vec<char> = text.chars().collect();
            let mut cursor = Cursor::new(&src, 8);
            cursor.bump_n(split.min(src.len()));
            let mark = cursor.save();
            let (row, col) = (cursor.row(), cursor.col());
            cursor.bump_n(src.len());
            cursor.restore(mark);
            prop_assert_eq!((cursor.row(), cursor.col()), (row, col));
            prop_assert_eq!(cursor.pos(), split.min(src.len()));
        }
    }
}
