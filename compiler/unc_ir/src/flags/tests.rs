use std::path::Path;

use pretty_assertions::assert_eq;

use super::{ChunkFlags, LangFlags};

#[test]
fn copy_on_insert_is_exactly_the_context_half() {
    assert_eq!(ChunkFlags::COPY_ON_INSERT.bits(), 0xffff);
    assert!(ChunkFlags::COPY_ON_INSERT.contains(ChunkFlags::IN_PREPROC | ChunkFlags::IN_OC_MSG));
    assert!(!ChunkFlags::COPY_ON_INSERT.intersects(ChunkFlags::STMT_START));
    assert!(!ChunkFlags::COPY_ON_INSERT.intersects(ChunkFlags::PUNCTUATOR));
}

#[test]
fn inherited_drops_role_flags() {
    let flags = ChunkFlags::IN_ENUM | ChunkFlags::IN_SPAREN | ChunkFlags::EXPR_START;
    assert_eq!(flags.inherited(), ChunkFlags::IN_ENUM | ChunkFlags::IN_SPAREN);
}

#[test]
fn high_bits_fit() {
    assert_eq!(ChunkFlags::IN_QT_MACRO.bits(), 1 << 40);
    assert_eq!(ChunkFlags::PUNCTUATOR.bits(), 1 << 32);
}

#[test]
fn language_names() {
    assert_eq!(LangFlags::from_lang_name("CPP"), Some(LangFlags::CPP));
    assert_eq!(LangFlags::from_lang_name("c#"), Some(LangFlags::CS));
    assert_eq!(LangFlags::from_lang_name("objc++"), Some(LangFlags::OC | LangFlags::CPP));
    assert_eq!(LangFlags::from_lang_name("cobol"), None);
}

#[test]
fn language_by_extension() {
    assert_eq!(LangFlags::from_extension("hpp"), Some(LangFlags::CPP));
    assert_eq!(LangFlags::from_extension("di"), Some(LangFlags::D));
    assert_eq!(LangFlags::from_extension("sma"), Some(LangFlags::PAWN));
    assert_eq!(LangFlags::from_extension("mm"), Some(LangFlags::OC | LangFlags::CPP));
    assert_eq!(LangFlags::from_extension("rs"), None);
}

#[test]
fn language_by_filename_defaults_to_c() {
    assert_eq!(LangFlags::from_filename(Path::new("src/a.cs")), LangFlags::CS);
    assert_eq!(LangFlags::from_filename(Path::new("Makefile")), LangFlags::C);
    assert_eq!(LangFlags::from_filename(Path::new("x.unknown")), LangFlags::C);
}

#[test]
fn applies_to_ignores_markers() {
    let entry = LangFlags::C | LangFlags::CPP | LangFlags::PP_ONLY;
    assert!(entry.applies_to(LangFlags::CPP));
    assert!(!entry.applies_to(LangFlags::JAVA));
    assert!(entry.is_pp_only());
    assert!(!LangFlags::PP_ONLY.applies_to(LangFlags::PP_ONLY));
    assert!(LangFlags::ALL.applies_to(LangFlags::ECMA));
}
