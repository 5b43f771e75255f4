#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write as _;

use pretty_assertions::assert_eq;
use unc_ir::{LangFlags, OptionKey};

use super::*;

fn apply(text: &str) -> (Settings, KeywordTable, DiagnosticQueue) {
    let mut settings = Settings::new();
    let mut keywords = KeywordTable::new();
    let problems = apply_config(text, &mut settings, &mut keywords);
    (settings, keywords, problems)
}

fn problem_lines(queue: &DiagnosticQueue) -> Vec<(ErrorCode, u32)> {
    queue.iter().map(|d| (d.code, d.line)).collect()
}

#[test]
fn options_with_and_without_equals() {
    let (settings, _, problems) = apply("indent_else_if = true\ninput_tab_size 4\nmod_pawn_semicolon=yes\n");
    assert!(problems.is_empty());
    assert!(settings.get_bool(OptionKey::IndentElseIf));
    assert_eq!(settings.get_num(OptionKey::InputTabSize), 4);
    assert!(settings.get_bool(OptionKey::ModPawnSemicolon));
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    let (settings, _, problems) = apply("# header\n\n   \nindent_else_if = true # trailing\n");
    assert!(problems.is_empty());
    assert!(settings.get_bool(OptionKey::IndentElseIf));
}

#[test]
fn hash_inside_quotes_is_kept() {
    let (settings, _, problems) = apply("disable_processing_cmt = \"#off\"\n");
    assert!(problems.is_empty());
    assert_eq!(settings.get_text(OptionKey::DisableProcessingCmt), "#off");
}

#[test]
fn type_and_macro_lines_add_keywords() {
    let (_, keywords, problems) =
        apply("type size_t, ssize_t\nmacro-open BEGIN_MAP\nmacro-close END_MAP\nmacro-else ELSE_MAP\n");
    assert!(problems.is_empty());
    assert_eq!(keywords.dynamic_len(), 5);
    assert_eq!(keywords.lookup("ssize_t", LangFlags::C, false), TokenKind::Type);
    assert_eq!(keywords.lookup("BEGIN_MAP", LangFlags::C, false), TokenKind::MacroOpen);
    assert_eq!(keywords.lookup("END_MAP", LangFlags::C, false), TokenKind::MacroClose);
    assert_eq!(keywords.lookup("ELSE_MAP", LangFlags::C, false), TokenKind::MacroElse);
}

#[test]
fn set_line_takes_any_token_name() {
    let (_, keywords, problems) = apply("set MACRO_OPEN BEGIN_MESSAGE_MAP\nset type u8 u16\n");
    assert!(problems.is_empty());
    assert_eq!(keywords.lookup("BEGIN_MESSAGE_MAP", LangFlags::C, false), TokenKind::MacroOpen);
    assert_eq!(keywords.lookup("u16", LangFlags::C, false), TokenKind::Type);
}

#[test]
fn bad_lines_are_reported_and_skipped() {
    let text = "\
indent_else_if = true
no_such_option = 1
input_tab_size = wide
set NOT_A_TOKEN foo
set
indent_using_block
type good_t
";
    let (settings, keywords, problems) = apply(text);
    assert_eq!(
        problem_lines(&problems),
        vec![
            (ErrorCode::U3001, 2),
            (ErrorCode::U3001, 3),
            (ErrorCode::U3001, 4),
            (ErrorCode::U3001, 5),
            (ErrorCode::U3001, 6),
        ]
    );
    assert!(problems.has_errors());
    assert!(settings.get_bool(OptionKey::IndentElseIf));
    assert_eq!(keywords.lookup("good_t", LangFlags::C, false), TokenKind::Type);

    let messages: Vec<&str> = problems.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages[0], "unknown option `no_such_option`");
    assert_eq!(messages[2], "unknown token name `NOT_A_TOKEN`");
    assert_eq!(messages[3], "`set` needs a token name");
    assert_eq!(messages[4], "option `indent_using_block` has no value");
}

#[test]
fn load_config_reads_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "indent_else_if = true").unwrap();
    writeln!(file, "type my_t").unwrap();

    let mut settings = Settings::new();
    let mut keywords = KeywordTable::new();
    let problems = load_config(file.path(), &mut settings, &mut keywords).unwrap();
    assert!(problems.is_empty());
    assert!(settings.get_bool(OptionKey::IndentElseIf));
    assert_eq!(keywords.dynamic_len(), 1);
}

#[test]
fn missing_config_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.cfg");
    let err = load_config(&path, &mut Settings::new(), &mut KeywordTable::new()).unwrap_err();
    assert!(matches!(err, CliError::Io { .. }));
    assert!(err.to_string().starts_with("cannot read '"));
}
