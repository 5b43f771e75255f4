use pretty_assertions::assert_eq;

use super::{OptionKey, OptionValue, Settings, SettingsError};

#[test]
fn defaults() {
    let settings = Settings::new();
    assert!(!settings.get_bool(OptionKey::EnableDigraphs));
    assert!(settings.get_bool(OptionKey::IndentUsingBlock));
    assert_eq!(settings.get_num(OptionKey::InputTabSize), 8);
    assert_eq!(settings.get_char(OptionKey::StringEscapeChar), Some('\\'));
    assert_eq!(settings.get_char(OptionKey::StringEscapeChar2), None);
    assert_eq!(
        settings.get_text(OptionKey::DisableProcessingCmt),
        " *INDENT-OFF*"
    );
}

#[test]
fn names_round_trip() {
    for &key in OptionKey::ALL {
        assert_eq!(OptionKey::from_name(key.name()), Some(key));
    }
    assert_eq!(OptionKey::from_name("indent_columns"), None);
}

#[test]
fn set_parses_by_type() {
    let mut settings = Settings::new();
    assert_eq!(settings.set(OptionKey::EnableDigraphs, "TRUE"), Ok(()));
    assert_eq!(settings.set(OptionKey::InputTabSize, " 4 "), Ok(()));
    assert_eq!(settings.set(OptionKey::StringEscapeChar2, "96"), Ok(()));
    assert_eq!(settings.set(OptionKey::StringEscapeChar, "'^'"), Ok(()));
    assert_eq!(
        settings.set(OptionKey::EnableProcessingCmt, "\"FMT-ON\""),
        Ok(())
    );

    assert!(settings.get_bool(OptionKey::EnableDigraphs));
    assert_eq!(settings.get_num(OptionKey::InputTabSize), 4);
    assert_eq!(settings.get_char(OptionKey::StringEscapeChar2), Some('`'));
    assert_eq!(settings.get_char(OptionKey::StringEscapeChar), Some('^'));
    assert_eq!(settings.get_text(OptionKey::EnableProcessingCmt), "FMT-ON");
}

#[test]
fn bad_values_are_rejected() {
    let mut settings = Settings::new();
    assert_eq!(
        settings.set(OptionKey::InputTabSize, "wide"),
        Err(SettingsError::BadValue {
            key: OptionKey::InputTabSize,
            value: "wide".to_owned(),
            expected: "a number",
        })
    );
    assert!(settings.set(OptionKey::IndentElseIf, "maybe").is_err());
    assert_eq!(settings.get_num(OptionKey::InputTabSize), 8);
    assert!(settings
        .set_value(OptionKey::InputTabSize, OptionValue::Bool(true))
        .is_err());
}

#[test]
fn unknown_names_are_rejected() {
    let mut settings = Settings::new();
    assert_eq!(
        settings.set_by_name("sp_arith", "add"),
        Err(SettingsError::UnknownOption("sp_arith".to_owned()))
    );
    assert_eq!(settings.set_by_name("mod_pawn_semicolon", "yes"), Ok(()));
    assert!(settings.get_bool(OptionKey::ModPawnSemicolon));
}
