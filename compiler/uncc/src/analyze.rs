//! One source file through the whole pipeline.

use unc_diagnostic::DiagnosticQueue;
use unc_ir::{ChunkList, LangFlags, Settings};
use unc_lexer::{tokenize, tokenize_cleanup, KeywordTable, LexerContext, LineEndings};
use unc_lexer_core::{Encoding, SourceText};
use unc_resolve::{brace_cleanup, scrub_vsemicolons, ResolveError, ResolverContext};

/// Everything learned about one source.
#[derive(Debug)]
pub struct Analysis {
    pub list: ChunkList,
    pub diagnostics: DiagnosticQueue,
    pub encoding: Encoding,
    pub has_bom: bool,
    pub line_endings: LineEndings,
}

/// The resolver hit an unmatched `}`. Diagnostics counted up to that point
/// are kept so they can still be reported.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct FatalError {
    #[source]
    pub error: ResolveError,
    pub diagnostics: DiagnosticQueue,
}

/// Decode, tokenize, clean up and resolve `bytes`.
#[tracing::instrument(level = "debug", skip_all, fields(len = bytes.len(), lang = ?lang))]
pub fn analyze_source(
    bytes: &[u8],
    lang: LangFlags,
    settings: &Settings,
    keywords: &KeywordTable,
) -> Result<Analysis, FatalError> {
    let source = SourceText::decode(bytes);
    tracing::debug!(encoding = ?source.encoding(), bom = source.has_bom(), "decoded");

    let mut lexer = LexerContext::new(lang, settings, keywords);
    let mut list = tokenize(source.chars(), &mut lexer);
    tokenize_cleanup(&mut list, lang);

    let mut ctx = ResolverContext::new(lang, settings).with_suppression_used(lexer.suppression_used());
    let result = brace_cleanup(&mut list, &mut ctx);

    let line_endings = lexer.line_endings();
    let mut diagnostics = lexer.diagnostics;
    diagnostics.append(&mut ctx.diagnostics);
    if let Err(error) = result {
        return Err(FatalError { error, diagnostics });
    }
    if lang.intersects(LangFlags::PAWN) {
        scrub_vsemicolons(&mut list, settings);
    }
    Ok(Analysis {
        list,
        diagnostics,
        encoding: source.encoding(),
        has_bom: source.has_bom(),
        line_endings,
    })
}
