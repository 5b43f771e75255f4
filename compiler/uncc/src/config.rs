//! Configuration files.
//!
//! One entry per line, `#` to the end of the line is a comment:
//!
//! ```text
//! indent_else_if = true          # option = value
//! type size_t ssize_t            # words that are types
//! set MACRO_OPEN BEGIN_MESSAGE   # words of any token kind
//! macro-open  BEGIN_EVENT_MAP
//! macro-close END_EVENT_MAP
//! macro-else  ELSE_EVENT_MAP
//! ```
//!
//! A bad line is reported as `U3001` and skipped; the rest of the file
//! still applies.

use std::fs;
use std::path::Path;

use unc_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use unc_ir::{Settings, TokenKind};
use unc_lexer::KeywordTable;

use crate::CliError;

/// Read and apply the config file at `path`.
pub fn load_config(path: &Path, settings: &mut Settings, keywords: &mut KeywordTable) -> Result<DiagnosticQueue, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::io(path, source))?;
    let diagnostics = apply_config(&text, settings, keywords);
    tracing::debug!(
        path = %path.display(),
        keywords = keywords.dynamic_len(),
        problems = diagnostics.len(),
        "config loaded"
    );
    Ok(diagnostics)
}

/// Apply config `text` to `settings` and `keywords`.
pub fn apply_config(text: &str, settings: &mut Settings, keywords: &mut KeywordTable) -> DiagnosticQueue {
    let mut diagnostics = DiagnosticQueue::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = u32::try_from(idx + 1).unwrap_or(u32::MAX);
        if let Err(message) = apply_line(strip_comment(raw), settings, keywords) {
            diagnostics.push(Diagnostic::error(ErrorCode::U3001).at(line, 1).with_message(message));
        }
    }
    diagnostics
}

fn apply_line(line: &str, settings: &mut Settings, keywords: &mut KeywordTable) -> Result<(), String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(());
    }
    let (head, rest) = split_head(line);

    let kind = match head.to_ascii_lowercase().as_str() {
        "type" => Some(TokenKind::Type),
        "macro-open" => Some(TokenKind::MacroOpen),
        "macro-close" => Some(TokenKind::MacroClose),
        "macro-else" => Some(TokenKind::MacroElse),
        "set" => {
            let (name, words) = split_head(rest);
            if name.is_empty() {
                return Err("`set` needs a token name".to_owned());
            }
            let kind = TokenKind::from_name(name).ok_or_else(|| format!("unknown token name `{name}`"))?;
            add_words(keywords, kind, words);
            return Ok(());
        }
        _ => None,
    };
    if let Some(kind) = kind {
        add_words(keywords, kind, rest);
        return Ok(());
    }

    if rest.is_empty() {
        return Err(format!("option `{head}` has no value"));
    }
    settings.set_by_name(head, rest).map_err(|err| err.to_string())
}

fn add_words(keywords: &mut KeywordTable, kind: TokenKind, words: &str) {
    for word in words.split(|c: char| c.is_whitespace() || c == ',').filter(|w| !w.is_empty()) {
        keywords.add(word, kind);
    }
}

/// First word of `line` and the rest, with an optional `=` after the
/// first word dropped.
fn split_head(line: &str) -> (&str, &str) {
    let end = line
        .find(|c: char| c.is_whitespace() || c == '=')
        .unwrap_or(line.len());
    let (head, rest) = line.split_at(end);
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('=').unwrap_or(rest);
    (head, rest.trim())
}

/// Drop a `#` comment, leaving quoted text alone.
fn strip_comment(line: &str) -> &str {
    let mut quote = None;
    for (idx, ch) in line.char_indices() {
        match (quote, ch) {
            (None, '"' | '\'') => quote = Some(ch),
            (Some(q), c) if c == q => quote = None,
            (None, '#') => return &line[..idx],
            _ => {}
        }
    }
    line
}

#[cfg(test)]
mod tests;
