//! Side channels shared between the tokenizer and its recognizers.

use unc_diagnostic::DiagnosticQueue;
use unc_ir::{LangFlags, OptionKey, Settings, TokenKind};

use crate::KeywordTable;

/// Suppression marker used when the configured one is empty.
const DEFAULT_OFF_TEXT: &str = "*INDENT-OFF*";
const DEFAULT_ON_TEXT: &str = "*INDENT-ON*";

/// Counts of each line ending style seen in the input.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LineEndings {
    pub lf: u32,
    pub crlf: u32,
    pub cr: u32,
}

impl LineEndings {
    /// The dominant line ending. Ties prefer LF, then CRLF.
    pub fn dominant(&self) -> &'static str {
        if self.lf >= self.crlf && self.lf >= self.cr {
            "\n"
        } else if self.crlf >= self.cr {
            "\r\n"
        } else {
            "\r"
        }
    }
}

/// State threaded through one tokenizer run.
///
/// Created per file. The settings and keyword table are shared and
/// read-only; everything else is owned by the run.
pub struct LexerContext<'a> {
    pub lang: LangFlags,
    pub settings: &'a Settings,
    pub keywords: &'a KeywordTable,
    /// Kind of the preprocessor directive of the current line, or
    /// `PREPROC` right after the `#`, or `NONE` outside directives.
    pub(crate) is_preproc: TokenKind,
    /// Non-comment, non-newline chunks seen since the directive started.
    pub(crate) preproc_ncnl_count: u32,
    /// Inside a region where processing is disabled.
    pub(crate) suppressed: bool,
    /// A disable marker was seen at least once.
    pub(crate) suppression_used: bool,
    pub(crate) line_endings: LineEndings,
    pub(crate) off_text: String,
    pub(crate) on_text: String,
    pub diagnostics: DiagnosticQueue,
}

impl<'a> LexerContext<'a> {
    pub fn new(lang: LangFlags, settings: &'a Settings, keywords: &'a KeywordTable) -> Self {
        LexerContext {
            lang,
            settings,
            keywords,
            is_preproc: TokenKind::None,
            preproc_ncnl_count: 0,
            suppressed: false,
            suppression_used: false,
            line_endings: LineEndings::default(),
            off_text: marker_text(settings, OptionKey::DisableProcessingCmt, DEFAULT_OFF_TEXT),
            on_text: marker_text(settings, OptionKey::EnableProcessingCmt, DEFAULT_ON_TEXT),
            diagnostics: DiagnosticQueue::new(),
        }
    }

    #[inline]
    pub fn is_lang(&self, lang: LangFlags) -> bool {
        self.lang.intersects(lang)
    }

    /// Whether a suppression marker was ever seen.
    #[inline]
    pub fn suppression_used(&self) -> bool {
        self.suppression_used
    }

    /// Whether the run ended inside a suppressed region.
    #[inline]
    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    #[inline]
    pub fn line_endings(&self) -> LineEndings {
        self.line_endings
    }

    /// On a preprocessor line other than a `#define` body.
    #[inline]
    pub(crate) fn in_preproc(&self) -> bool {
        !matches!(self.is_preproc, TokenKind::None | TokenKind::PpDefine)
    }

    pub(crate) fn suppress(&mut self) {
        self.suppressed = true;
        self.suppression_used = true;
    }

    pub(crate) fn end_preproc(&mut self) {
        self.is_preproc = TokenKind::None;
        self.preproc_ncnl_count = 0;
    }
}

fn marker_text(settings: &Settings, key: OptionKey, fallback: &str) -> String {
    let text = settings.get_text(key);
    if text.is_empty() {
        fallback.to_owned()
    } else {
        text
    }
}
