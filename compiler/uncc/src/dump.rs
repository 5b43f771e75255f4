//! Chunk dump for `--dump`.

use std::io::{self, Write};

use unc_ir::{ChunkList, TokenKind};

const RULE: &str = "# -=====-";

/// Write one line per chunk: line, kind, parent, columns, levels, flags,
/// newline count, and the text placed at its column.
pub fn dump_chunks(list: &ChunkList, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    write!(
        out,
        "# Line              Tag           Parent          Columns Br/Lvl/pp     Flag   Nl  Text"
    )?;
    for (_, chunk) in list.iter() {
        write!(
            out,
            "\n# {:>3}> {:>16.16}[{:>16.16}][{:>3}/{:>3}/{:>3}/{:>3}][{}/{}/{}][{:>10x}][{}-{}]",
            chunk.orig_line,
            chunk.kind.name(),
            chunk.parent_kind.name(),
            chunk.column,
            chunk.orig_col,
            chunk.orig_col_end,
            chunk.orig_prev_sp,
            chunk.brace_level,
            chunk.level,
            chunk.pp_level,
            chunk.flags.bits(),
            chunk.nl_count,
            u8::from(chunk.after_tab),
        )?;
        if chunk.is(TokenKind::Newline) || chunk.text.is_empty() {
            continue;
        }
        let indent = usize::try_from(chunk.column).unwrap_or(0);
        write!(out, "{:indent$}", "")?;
        if chunk.is(TokenKind::NlCont) {
            write!(out, "\\")?;
        } else {
            write!(out, "{}", chunk.text)?;
        }
    }
    writeln!(out, "\n{RULE}")
}
