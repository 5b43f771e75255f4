//! State threaded through one resolver run.

use unc_diagnostic::DiagnosticQueue;
use unc_ir::{LangFlags, Settings};

/// Per-file resolver inputs and the diagnostics it produces.
pub struct ResolverContext<'a> {
    pub lang: LangFlags,
    pub settings: &'a Settings,
    /// The tokenizer saw a disable-processing marker. An unmatched `}` is
    /// then not fatal, since the source is known to hide some structure.
    pub suppression_used: bool,
    pub diagnostics: DiagnosticQueue,
}

impl<'a> ResolverContext<'a> {
    pub fn new(lang: LangFlags, settings: &'a Settings) -> Self {
        ResolverContext {
            lang,
            settings,
            suppression_used: false,
            diagnostics: DiagnosticQueue::new(),
        }
    }

    #[must_use]
    pub fn with_suppression_used(mut self, used: bool) -> Self {
        self.suppression_used = used;
        self
    }

    #[inline]
    pub fn is_lang(&self, lang: LangFlags) -> bool {
        self.lang.intersects(lang)
    }
}
