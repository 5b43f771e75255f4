use pretty_assertions::assert_eq;

use super::ChunkText;

#[test]
fn compare_with_str() {
    let text = ChunkText::from("while");
    assert!(text.eq_str("while"));
    assert!(!text.eq_str("whil"));
    assert!(!text.eq_str("whiles"));
    assert!(text.starts_with("wh"));
    assert!(text.ends_with("le"));
    assert!(!text.ends_with("xwhile"));
}

#[test]
fn slice_is_clamped() {
    let text = ChunkText::from("abcdef");
    assert_eq!(text.slice(1..3).to_string(), "bc");
    assert_eq!(text.slice(4..99).to_string(), "ef");
    assert!(text.slice(10..12).is_empty());
}

#[test]
fn append_and_push() {
    let mut text = ChunkText::from("/* a */");
    text.push(' ');
    text.append(&ChunkText::from("/* b */"));
    text.push_str("!");
    assert_eq!(text.to_string(), "/* a */ /* b */!");
    assert_eq!(text.len(), 16);
}

#[test]
fn trim_end_blanks_keeps_escaped_blank() {
    let mut text = ChunkText::from("// x \t ");
    text.trim_end_blanks();
    assert_eq!(text.to_string(), "// x");

    let mut escaped = ChunkText::from("#define A \\   ");
    escaped.trim_end_blanks();
    assert_eq!(escaped.to_string(), "#define A \\ ");
}

#[test]
fn non_ascii_counts_code_points() {
    let text = ChunkText::from("größe");
    assert_eq!(text.len(), 5);
    assert_eq!(text.char_at(3), Some('ß'));
    assert!(text.contains_str("öß"));
}
