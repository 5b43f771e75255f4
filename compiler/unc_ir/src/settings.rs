//! The options table read by the tokenizer and the resolver.
//!
//! Populated by configuration loading before a run and read-only while a
//! file is analyzed. Every option has a fixed value type; `set` parses a
//! raw string into that type and rejects anything else.

use std::fmt;

use rustc_hash::FxHashMap;
use thiserror::Error;

macro_rules! define_options {
    ($($(#[$meta:meta])* $variant:ident => $name:literal = $default:expr,)*) => {
        /// Key of a single option.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        pub enum OptionKey {
            $($(#[$meta])* $variant,)*
        }

        impl OptionKey {
            pub const ALL: &'static [OptionKey] = &[$(OptionKey::$variant,)*];

            /// Name used in configuration files.
            pub const fn name(self) -> &'static str {
                match self {
                    $(OptionKey::$variant => $name,)*
                }
            }

            /// Value used when the configuration does not mention the option.
            pub fn default_value(self) -> OptionValue {
                match self {
                    $(OptionKey::$variant => $default,)*
                }
            }
        }
    };
}

define_options! {
    /// Recognize digraph and trigraph punctuators.
    EnableDigraphs => "enable_digraphs" = OptionValue::Bool(false),
    /// `else if` stays on one level instead of opening a nested `if`.
    IndentElseIf => "indent_else_if" = OptionValue::Bool(false),
    /// C# `using (...)` without braces opens a virtual block.
    IndentUsingBlock => "indent_using_block" = OptionValue::Bool(true),
    /// Escape character inside string literals.
    StringEscapeChar => "string_escape_char" = OptionValue::Char('\\'),
    /// Alternate escape character, only escaping the closing quote. NUL disables it.
    StringEscapeChar2 => "string_escape_char2" = OptionValue::Char('\0'),
    /// Tab stop width of the input.
    InputTabSize => "input_tab_size" = OptionValue::Num(8),
    /// Virtual semicolons in Pawn get a real `;` text.
    ModPawnSemicolon => "mod_pawn_semicolon" = OptionValue::Bool(false),
    /// Comment text that suspends processing.
    DisableProcessingCmt => "disable_processing_cmt" = OptionValue::Text(String::from(" *INDENT-OFF*")),
    /// Comment text that resumes processing.
    EnableProcessingCmt => "enable_processing_cmt" = OptionValue::Text(String::from(" *INDENT-ON*")),
}

impl OptionKey {
    pub fn from_name(name: &str) -> Option<OptionKey> {
        OptionKey::ALL.iter().copied().find(|key| key.name() == name)
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Typed value of an option.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum OptionValue {
    Bool(bool),
    Num(u32),
    Char(char),
    Text(String),
}

impl OptionValue {
    fn type_name(&self) -> &'static str {
        match self {
            OptionValue::Bool(_) => "a boolean",
            OptionValue::Num(_) => "a number",
            OptionValue::Char(_) => "a character",
            OptionValue::Text(_) => "a string",
        }
    }
}

/// Error from setting an option.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum SettingsError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("option `{key}` expects {expected}, got `{value}`")]
    BadValue {
        key: OptionKey,
        value: String,
        expected: &'static str,
    },
}

/// The options table.
#[derive(Clone, Debug)]
pub struct Settings {
    values: FxHashMap<OptionKey, OptionValue>,
}

impl Default for Settings {
    fn default() -> Self {
        let values = OptionKey::ALL
            .iter()
            .map(|&key| (key, key.default_value()))
            .collect();
        Settings { values }
    }
}

impl Settings {
    pub fn new() -> Self {
        Settings::default()
    }

    fn value(&self, key: OptionKey) -> OptionValue {
        self.values
            .get(&key)
            .cloned()
            .unwrap_or_else(|| key.default_value())
    }

    pub fn get_bool(&self, key: OptionKey) -> bool {
        matches!(self.value(key), OptionValue::Bool(true))
    }

    pub fn get_num(&self, key: OptionKey) -> u32 {
        match self.value(key) {
            OptionValue::Num(n) => n,
            _ => 0,
        }
    }

    /// Character option. `None` when the option is NUL (disabled).
    pub fn get_char(&self, key: OptionKey) -> Option<char> {
        match self.value(key) {
            OptionValue::Char(ch) if ch != '\0' => Some(ch),
            _ => None,
        }
    }

    pub fn get_text(&self, key: OptionKey) -> String {
        match self.value(key) {
            OptionValue::Text(text) => text,
            _ => String::new(),
        }
    }

    /// Store a typed value. The value must have the option's type.
    pub fn set_value(&mut self, key: OptionKey, value: OptionValue) -> Result<(), SettingsError> {
        let expected = key.default_value();
        if std::mem::discriminant(&expected) != std::mem::discriminant(&value) {
            return Err(SettingsError::BadValue {
                key,
                value: format!("{value:?}"),
                expected: expected.type_name(),
            });
        }
        self.values.insert(key, value);
        Ok(())
    }

    /// Parse `raw` into the option's type and store it.
    pub fn set(&mut self, key: OptionKey, raw: &str) -> Result<(), SettingsError> {
        let expected = key.default_value();
        let expected_name = expected.type_name();
        let bad = || SettingsError::BadValue {
            key,
            value: raw.to_owned(),
            expected: expected_name,
        };
        let raw = raw.trim();
        let value = match expected {
            OptionValue::Bool(_) => OptionValue::Bool(parse_bool(raw).ok_or_else(bad)?),
            OptionValue::Num(_) => OptionValue::Num(raw.parse().map_err(|_| bad())?),
            OptionValue::Char(_) => OptionValue::Char(parse_char(raw).ok_or_else(bad)?),
            OptionValue::Text(_) => OptionValue::Text(unquote(raw).to_owned()),
        };
        self.values.insert(key, value);
        Ok(())
    }

    /// `set` by option name.
    pub fn set_by_name(&mut self, name: &str, raw: &str) -> Result<(), SettingsError> {
        let key =
            OptionKey::from_name(name).ok_or_else(|| SettingsError::UnknownOption(name.to_owned()))?;
        self.set(key, raw)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// A single character, optionally quoted, or its decimal code point.
fn parse_char(raw: &str) -> Option<char> {
    let inner = unquote(raw);
    let mut chars = inner.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if !ch.is_ascii_digit() => Some(ch),
        _ => inner.parse::<u32>().ok().and_then(char::from_u32),
    }
}

fn unquote(raw: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = raw
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    raw
}

#[cfg(test)]
mod tests;
