//! Pawn virtual semicolons.
//!
//! Pawn lets a statement end at the end of its line. Where a virtual brace
//! is open and the line does not continue, a `VSEMICOLON` chunk is added so
//! the statement closes like one ended by `;`.

use unc_ir::{ChunkFlags, ChunkId, ChunkList, OptionKey, Settings, TokenKind};

/// Called on a newline while a virtual brace is open. Returns the chunk the
/// resolver continues with: the new virtual semicolon, or `newline`.
pub(crate) fn check_vsemicolon(list: &mut ChunkList, newline: ChunkId, settings: &Settings) -> ChunkId {
    let vb_open = list.prev_of_kind(newline, TokenKind::VBraceOpen);
    let Some(prev) = list.prev_ncnl(newline) else {
        return newline;
    };
    let Some(vb_open) = vb_open else {
        return newline;
    };
    if prev == vb_open || list[prev].in_preproc() || is_continued(list, prev, list[vb_open].level + 1) {
        tracing::trace!(line = list[prev].orig_line, prev = %list[prev].kind, "no vsemicolon");
        return newline;
    }
    add_vsemi_after(list, prev, settings)
}

/// Insert a virtual semicolon after `pc` unless one is already there.
pub(crate) fn add_vsemi_after(list: &mut ChunkList, pc: ChunkId, settings: &Settings) -> ChunkId {
    if list[pc].kind.is_semicolon() {
        return pc;
    }
    if list.kind_of(list.next_nc(pc)).is_semicolon() {
        return pc;
    }

    let mut chunk = list[pc].clone();
    chunk.kind = TokenKind::VSemicolon;
    chunk.parent_kind = TokenKind::None;
    chunk.text.clear();
    if settings.get_bool(OptionKey::ModPawnSemicolon) {
        chunk.text.push(';');
    }
    chunk.column += u32::try_from(list[pc].text.len()).unwrap_or(0);
    chunk.orig_col = chunk.orig_col_end;
    chunk.flags = list[pc].flags.inherited() | ChunkFlags::INSERTED;
    tracing::trace!(line = list[pc].orig_line, after = %list[pc].kind, "vsemicolon");
    list.add_after(pc, chunk)
}

/// The statement ending at `pc` carries on onto the next line.
fn is_continued(list: &ChunkList, pc: ChunkId, br_level: u32) -> bool {
    let chunk = &list[pc];
    chunk.level > br_level
        || matches!(
            chunk.kind,
            TokenKind::Arith
                | TokenKind::Caret
                | TokenKind::Question
                | TokenKind::BraceOpen
                | TokenKind::Bool
                | TokenKind::Assign
                | TokenKind::Comma
                | TokenKind::VBraceOpen
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Compare
                | TokenKind::FParenOpen
                | TokenKind::Do
                | TokenKind::While
                | TokenKind::Switch
        )
        || matches!(
            chunk.parent_kind,
            TokenKind::If
                | TokenKind::Else
                | TokenKind::ElseIf
                | TokenKind::Function
                | TokenKind::For
                | TokenKind::While
                | TokenKind::Switch
                | TokenKind::Do
                | TokenKind::Enum
        )
        || chunk.flags.intersects(ChunkFlags::IN_ENUM | ChunkFlags::IN_STRUCT)
        || chunk.is_str(":")
        || chunk.is_str("+")
        || chunk.is_str("-")
}

/// With `mod_pawn_semicolon` on, drop the text of virtual semicolons that
/// follow the closing brace of a block statement, where a real `;` would be
/// wrong.
pub fn scrub_vsemicolons(list: &mut ChunkList, settings: &Settings) {
    if !settings.get_bool(OptionKey::ModPawnSemicolon) {
        return;
    }
    for id in list.ids() {
        if !list[id].is(TokenKind::VSemicolon) {
            continue;
        }
        let Some(prev) = list.prev_ncnl(id) else {
            continue;
        };
        let after_block = list[prev].is(TokenKind::BraceClose)
            && matches!(
                list[prev].parent_kind,
                TokenKind::If | TokenKind::Else | TokenKind::Switch | TokenKind::Case | TokenKind::WhileOfDo
            );
        if after_block {
            list[id].text.clear();
        }
    }
}

#[cfg(test)]
mod tests;
