//! Keyword lookup.
//!
//! Two tables are consulted in order:
//! 1. **Dynamic keywords** added by configuration (`type`, `set`,
//!    `macro-open`, ...). These win over everything and ignore language.
//! 2. **Static keywords**, sorted by text. One word may have several
//!    entries for different languages or for preprocessor lines (`if` is
//!    `IF` in code and `PP_IF` after `#`).
//!
//! A static entry matches when its language tag intersects the active
//! language and its `PP_ONLY` marker agrees with whether the word sits on a
//! preprocessor line other than a `#define` body.

use rustc_hash::FxHashMap;
use unc_ir::{LangFlags, TokenKind};

/// One entry of the static keyword table.
#[derive(Copy, Clone, Debug)]
pub struct Keyword {
    pub text: &'static str,
    pub kind: TokenKind,
    pub lang: LangFlags,
}

const fn kw(text: &'static str, kind: TokenKind, lang: LangFlags) -> Keyword {
    Keyword { text, kind, lang }
}

/// Static keywords, sorted by byte order of `text`.
static KEYWORDS: &[Keyword] = &[
    kw("@catch", TokenKind::Catch, lang!(C | CPP | OC)),
    kw("@dynamic", TokenKind::OcDynamic, lang!(C | CPP | OC)),
    kw("@end", TokenKind::OcEnd, lang!(C | CPP | OC)),
    kw("@finally", TokenKind::Finally, lang!(C | CPP | OC)),
    kw("@implementation", TokenKind::OcImpl, lang!(C | CPP | OC)),
    kw("@interface", TokenKind::OcIntf, lang!(C | CPP | OC)),
    kw("@interface", TokenKind::Class, lang!(JAVA)),
    kw("@private", TokenKind::Private, lang!(C | CPP | OC)),
    kw("@property", TokenKind::OcProperty, lang!(C | CPP | OC)),
    kw("@protocol", TokenKind::OcProtocol, lang!(C | CPP | OC)),
    kw("@selector", TokenKind::OcSel, lang!(C | CPP | OC)),
    kw("@synthesize", TokenKind::OcDynamic, lang!(C | CPP | OC)),
    kw("@throw", TokenKind::Throw, lang!(OC)),
    kw("@try", TokenKind::Try, lang!(C | CPP | OC)),
    kw("NS_ENUM", TokenKind::Enum, lang!(OC)),
    kw("NS_OPTIONS", TokenKind::Enum, lang!(OC)),
    kw("Q_EMIT", TokenKind::QEmit, lang!(CPP)),
    kw("Q_FOREACH", TokenKind::For, lang!(CPP)),
    kw("Q_FOREVER", TokenKind::QForever, lang!(CPP)),
    kw("Q_GADGET", TokenKind::QGadget, lang!(CPP)),
    kw("Q_OBJECT", TokenKind::CommentEmbed, lang!(CPP)),
    kw("_Bool", TokenKind::Type, lang!(CPP)),
    kw("_Complex", TokenKind::Type, lang!(CPP)),
    kw("_Imaginary", TokenKind::Type, lang!(CPP)),
    kw("__DI__", TokenKind::Di, lang!(C | CPP)),
    kw("__HI__", TokenKind::Hi, lang!(C | CPP)),
    kw("__QI__", TokenKind::Qi, lang!(C | CPP)),
    kw("__SI__", TokenKind::Si, lang!(C | CPP)),
    kw("__asm__", TokenKind::Asm, lang!(C | CPP)),
    kw("__attribute__", TokenKind::Attribute, lang!(C | CPP)),
    kw("__block", TokenKind::Qualifier, lang!(OC)),
    kw("__const__", TokenKind::Qualifier, lang!(C | CPP)),
    kw("__except", TokenKind::Catch, lang!(C | CPP)),
    kw("__finally", TokenKind::Finally, lang!(C | CPP)),
    kw("__inline__", TokenKind::Qualifier, lang!(C | CPP)),
    kw("__nothrow__", TokenKind::Nothrow, lang!(C | CPP)),
    kw("__restrict", TokenKind::Qualifier, lang!(C | CPP)),
    kw("__signed__", TokenKind::Type, lang!(C | CPP)),
    kw("__thread", TokenKind::Qualifier, lang!(C | CPP)),
    kw("__traits", TokenKind::Qualifier, lang!(D)),
    kw("__try", TokenKind::Try, lang!(C | CPP)),
    kw("__typeof__", TokenKind::Sizeof, lang!(C | CPP)),
    kw("__volatile__", TokenKind::Qualifier, lang!(C | CPP)),
    kw("abstract", TokenKind::Qualifier, lang!(D | CS | JAVA | VALA | ECMA)),
    kw("add", TokenKind::GetSet, lang!(CS)),
    kw("alias", TokenKind::Qualifier, lang!(D)),
    kw("align", TokenKind::Align, lang!(D)),
    kw("alignof", TokenKind::Sizeof, lang!(C | CPP)),
    kw("and", TokenKind::SBool, lang!(C | CPP | PP_ONLY)),
    kw("and_eq", TokenKind::SAssign, lang!(C | CPP)),
    kw("as", TokenKind::As, lang!(CS | VALA)),
    kw("asm", TokenKind::Asm, lang!(C | CPP | D)),
    kw("asm", TokenKind::PpAsm, lang!(ALL | PP_ONLY)),
    kw("assert", TokenKind::Assert, lang!(JAVA)),
    kw("assert", TokenKind::Function, lang!(D | PAWN)),
    kw("assert", TokenKind::PpAssert, lang!(PAWN | PP_ONLY)),
    kw("auto", TokenKind::Type, lang!(C | CPP | D)),
    kw("base", TokenKind::Base, lang!(CS | VALA)),
    kw("bit", TokenKind::Type, lang!(D)),
    kw("bitand", TokenKind::Arith, lang!(C | CPP)),
    kw("bitor", TokenKind::Arith, lang!(C | CPP)),
    kw("body", TokenKind::Body, lang!(D)),
    kw("bool", TokenKind::Type, lang!(CPP | CS | VALA)),
    kw("boolean", TokenKind::Type, lang!(JAVA | ECMA)),
    kw("break", TokenKind::Break, lang!(ALL)),
    kw("byte", TokenKind::Type, lang!(D | CS | JAVA | ECMA)),
    kw("callback", TokenKind::Qualifier, lang!(VALA)),
    kw("case", TokenKind::Case, lang!(ALL)),
    kw("cast", TokenKind::DCast, lang!(D)),
    kw("catch", TokenKind::Catch, lang!(CPP | D | CS | JAVA | VALA | ECMA)),
    kw("cdouble", TokenKind::Type, lang!(D)),
    kw("cent", TokenKind::Type, lang!(D)),
    kw("cfloat", TokenKind::Type, lang!(D)),
    kw("char", TokenKind::Char, lang!(PAWN)),
    kw("char", TokenKind::Type, lang!(C | CPP | D | CS | JAVA | OC | VALA | ECMA)),
    kw("checked", TokenKind::Qualifier, lang!(CS)),
    kw("class", TokenKind::Class, lang!(CPP | D | CS | JAVA | VALA | ECMA)),
    kw("compl", TokenKind::Arith, lang!(C | CPP)),
    kw("const", TokenKind::Qualifier, lang!(ALL)),
    kw("const_cast", TokenKind::TypeCast, lang!(CPP)),
    kw("constexpr", TokenKind::Qualifier, lang!(CPP)),
    kw("construct", TokenKind::Construct, lang!(VALA)),
    kw("continue", TokenKind::Continue, lang!(ALL)),
    kw("creal", TokenKind::Type, lang!(D)),
    kw("dchar", TokenKind::Type, lang!(D)),
    kw("debug", TokenKind::Debug, lang!(D)),
    kw("debugger", TokenKind::Debugger, lang!(ECMA)),
    kw("decltype", TokenKind::Sizeof, lang!(CPP)),
    kw("default", TokenKind::Default, lang!(ALL)),
    kw("define", TokenKind::PpDefine, lang!(ALL | PP_ONLY)),
    kw("defined", TokenKind::Defined, lang!(PAWN)),
    kw("defined", TokenKind::PpDefined, lang!(C | CPP | D | CS | JAVA | OC | VALA | ECMA | PP_ONLY)),
    kw("delegate", TokenKind::Delegate, lang!(D | CS | VALA)),
    kw("delete", TokenKind::Delete, lang!(CPP | D | VALA | ECMA)),
    kw("deprecated", TokenKind::Qualifier, lang!(D)),
    kw("do", TokenKind::Do, lang!(ALL)),
    kw("double", TokenKind::Type, lang!(C | CPP | D | CS | JAVA | OC | VALA | ECMA)),
    kw("dynamic_cast", TokenKind::TypeCast, lang!(CPP)),
    kw("elif", TokenKind::PpElse, lang!(C | CPP | D | CS | JAVA | OC | VALA | ECMA | PP_ONLY)),
    kw("else", TokenKind::Else, lang!(ALL)),
    kw("else", TokenKind::PpElse, lang!(ALL | PP_ONLY)),
    kw("elseif", TokenKind::PpElse, lang!(PAWN | PP_ONLY)),
    kw("emit", TokenKind::PpEmit, lang!(PAWN | PP_ONLY)),
    kw("endif", TokenKind::PpEndif, lang!(ALL | PP_ONLY)),
    kw("endinput", TokenKind::PpEndinput, lang!(PAWN | PP_ONLY)),
    kw("endregion", TokenKind::PpEndregion, lang!(ALL | PP_ONLY)),
    kw("endscript", TokenKind::PpEndinput, lang!(PAWN | PP_ONLY)),
    kw("enum", TokenKind::Enum, lang!(ALL)),
    kw("error", TokenKind::PpError, lang!(PAWN | PP_ONLY)),
    kw("event", TokenKind::Type, lang!(CS)),
    kw("exit", TokenKind::Function, lang!(PAWN)),
    kw("explicit", TokenKind::Type, lang!(C | CPP | CS)),
    kw("export", TokenKind::Export, lang!(C | CPP | D | ECMA)),
    kw("extends", TokenKind::Qualifier, lang!(JAVA | ECMA)),
    kw("extern", TokenKind::Extern, lang!(C | CPP | D | CS | VALA)),
    kw("false", TokenKind::Word, lang!(CPP | D | CS | JAVA | VALA)),
    kw("file", TokenKind::PpFile, lang!(PAWN | PP_ONLY)),
    kw("final", TokenKind::Qualifier, lang!(CPP | D | ECMA)),
    kw("finally", TokenKind::Finally, lang!(D | CS | JAVA | VALA | ECMA)),
    kw("flags", TokenKind::Type, lang!(VALA)),
    kw("float", TokenKind::Type, lang!(C | CPP | D | CS | JAVA | OC | VALA | ECMA)),
    kw("for", TokenKind::For, lang!(ALL)),
    kw("foreach", TokenKind::For, lang!(D | CS | VALA)),
    kw("foreach_reverse", TokenKind::For, lang!(D)),
    kw("forward", TokenKind::Forward, lang!(PAWN)),
    kw("friend", TokenKind::Friend, lang!(CPP)),
    kw("function", TokenKind::Function, lang!(D | ECMA)),
    kw("get", TokenKind::GetSet, lang!(CS | VALA)),
    kw("goto", TokenKind::Goto, lang!(ALL)),
    kw("idouble", TokenKind::Type, lang!(D)),
    kw("if", TokenKind::If, lang!(ALL)),
    kw("if", TokenKind::PpIf, lang!(ALL | PP_ONLY)),
    kw("ifdef", TokenKind::PpIf, lang!(C | CPP | D | CS | JAVA | OC | VALA | ECMA | PP_ONLY)),
    kw("ifloat", TokenKind::Type, lang!(D)),
    kw("ifndef", TokenKind::PpIf, lang!(C | CPP | D | CS | JAVA | OC | VALA | ECMA | PP_ONLY)),
    kw("implements", TokenKind::Qualifier, lang!(JAVA | ECMA)),
    kw("implicit", TokenKind::Qualifier, lang!(CS)),
    kw("import", TokenKind::Import, lang!(D | JAVA | ECMA)),
    kw("import", TokenKind::PpInclude, lang!(OC | PP_ONLY)),
    kw("in", TokenKind::In, lang!(D | CS | OC | VALA | ECMA)),
    kw("include", TokenKind::PpInclude, lang!(C | CPP | PAWN | PP_ONLY)),
    kw("inline", TokenKind::Qualifier, lang!(C | CPP)),
    kw("inout", TokenKind::Qualifier, lang!(D)),
    kw("instanceof", TokenKind::Sizeof, lang!(JAVA | ECMA)),
    kw("int", TokenKind::Type, lang!(C | CPP | D | CS | JAVA | OC | VALA | ECMA)),
    kw("interface", TokenKind::Class, lang!(C | CPP | D | CS | JAVA | VALA | ECMA)),
    kw("internal", TokenKind::Qualifier, lang!(CS)),
    kw("invariant", TokenKind::Invariant, lang!(D)),
    kw("ireal", TokenKind::Type, lang!(D)),
    kw("is", TokenKind::SCompare, lang!(D | CS | VALA)),
    kw("lazy", TokenKind::Lazy, lang!(D)),
    kw("line", TokenKind::PpLine, lang!(PAWN | PP_ONLY)),
    kw("lock", TokenKind::Lock, lang!(CS | VALA)),
    kw("long", TokenKind::Type, lang!(C | CPP | D | CS | JAVA | OC | VALA | ECMA)),
    kw("macro", TokenKind::DMacro, lang!(D)),
    kw("mixin", TokenKind::Class, lang!(D)),
    kw("module", TokenKind::DModule, lang!(D)),
    kw("mutable", TokenKind::Qualifier, lang!(C | CPP)),
    kw("namespace", TokenKind::Namespace, lang!(CPP | CS | VALA)),
    kw("native", TokenKind::Native, lang!(PAWN)),
    kw("native", TokenKind::Qualifier, lang!(JAVA | ECMA)),
    kw("new", TokenKind::New, lang!(CPP | D | CS | JAVA | VALA | ECMA | PAWN)),
    kw("not", TokenKind::SArith, lang!(C | CPP)),
    kw("not_eq", TokenKind::SCompare, lang!(C | CPP)),
    kw("null", TokenKind::Type, lang!(D | CS | JAVA | VALA)),
    kw("object", TokenKind::Type, lang!(CS)),
    kw("operator", TokenKind::Operator, lang!(CPP | CS | PAWN)),
    kw("or", TokenKind::SBool, lang!(C | CPP | PP_ONLY)),
    kw("or_eq", TokenKind::SAssign, lang!(C | CPP)),
    kw("out", TokenKind::Qualifier, lang!(D | CS | VALA)),
    kw("override", TokenKind::Qualifier, lang!(D | CS | VALA)),
    kw("package", TokenKind::Private, lang!(D)),
    kw("package", TokenKind::Package, lang!(JAVA | ECMA)),
    kw("params", TokenKind::Type, lang!(CS | VALA)),
    kw("pragma", TokenKind::PpPragma, lang!(ALL | PP_ONLY)),
    kw("private", TokenKind::Private, lang!(C | CPP | D | CS | JAVA | OC | VALA | ECMA)),
    kw("property", TokenKind::PpProperty, lang!(CS | PP_ONLY)),
    kw("protected", TokenKind::Private, lang!(C | CPP | D | CS | JAVA | OC | VALA | ECMA)),
    kw("public", TokenKind::Private, lang!(ALL)),
    kw("readonly", TokenKind::Qualifier, lang!(CS)),
    kw("real", TokenKind::Type, lang!(D)),
    kw("ref", TokenKind::Qualifier, lang!(CS | VALA)),
    kw("region", TokenKind::PpRegion, lang!(ALL | PP_ONLY)),
    kw("register", TokenKind::Qualifier, lang!(C | CPP)),
    kw("reinterpret_cast", TokenKind::TypeCast, lang!(C | CPP)),
    kw("remove", TokenKind::GetSet, lang!(CS)),
    kw("restrict", TokenKind::Qualifier, lang!(C | CPP)),
    kw("return", TokenKind::Return, lang!(ALL)),
    kw("sbyte", TokenKind::Type, lang!(CS)),
    kw("scope", TokenKind::DScope, lang!(D)),
    kw("sealed", TokenKind::Qualifier, lang!(CS)),
    kw("section", TokenKind::PpSection, lang!(PAWN | PP_ONLY)),
    kw("set", TokenKind::GetSet, lang!(CS | VALA)),
    kw("short", TokenKind::Type, lang!(C | CPP | D | CS | JAVA | OC | VALA | ECMA)),
    kw("signal", TokenKind::Private, lang!(VALA)),
    kw("signals", TokenKind::Private, lang!(CPP)),
    kw("signed", TokenKind::Type, lang!(C | CPP)),
    kw("sizeof", TokenKind::Sizeof, lang!(C | CPP | CS | VALA | PAWN)),
    kw("sleep", TokenKind::Sizeof, lang!(PAWN)),
    kw("stackalloc", TokenKind::New, lang!(CS)),
    kw("state", TokenKind::State, lang!(PAWN)),
    kw("static", TokenKind::Qualifier, lang!(ALL)),
    kw("static_cast", TokenKind::TypeCast, lang!(CPP)),
    kw("stock", TokenKind::Stock, lang!(PAWN)),
    kw("strictfp", TokenKind::Qualifier, lang!(JAVA)),
    kw("string", TokenKind::Type, lang!(CS | VALA)),
    kw("struct", TokenKind::Struct, lang!(C | CPP | D | CS | VALA)),
    kw("super", TokenKind::Super, lang!(D | JAVA | ECMA)),
    kw("switch", TokenKind::Switch, lang!(ALL)),
    kw("synchronized", TokenKind::Qualifier, lang!(D | ECMA)),
    kw("synchronized", TokenKind::Synchronized, lang!(JAVA)),
    kw("tagof", TokenKind::Tagof, lang!(PAWN)),
    kw("template", TokenKind::Template, lang!(CPP | D)),
    kw("this", TokenKind::This, lang!(CPP | D | CS | JAVA | VALA | ECMA)),
    kw("throw", TokenKind::Throw, lang!(CPP | D | CS | JAVA | VALA | ECMA)),
    kw("throws", TokenKind::Qualifier, lang!(JAVA | VALA | ECMA)),
    kw("transient", TokenKind::Qualifier, lang!(JAVA | ECMA)),
    kw("true", TokenKind::Word, lang!(CPP | D | CS | JAVA | VALA)),
    kw("try", TokenKind::Try, lang!(CPP | D | CS | JAVA | VALA | ECMA)),
    kw("tryinclude", TokenKind::PpInclude, lang!(PAWN | PP_ONLY)),
    kw("typedef", TokenKind::Typedef, lang!(C | CPP | D | OC)),
    kw("typeid", TokenKind::Sizeof, lang!(C | CPP | D)),
    kw("typename", TokenKind::Typename, lang!(CPP)),
    kw("typeof", TokenKind::Sizeof, lang!(C | CPP | D | CS | VALA | ECMA)),
    kw("ubyte", TokenKind::Type, lang!(D)),
    kw("ucent", TokenKind::Type, lang!(D)),
    kw("uint", TokenKind::Type, lang!(D | CS | VALA)),
    kw("ulong", TokenKind::Type, lang!(D | CS | VALA)),
    kw("unchecked", TokenKind::Qualifier, lang!(CS)),
    kw("undef", TokenKind::PpUndef, lang!(ALL | PP_ONLY)),
    kw("union", TokenKind::Union, lang!(C | CPP | D)),
    kw("unittest", TokenKind::Unittest, lang!(D)),
    kw("unsafe", TokenKind::Unsafe, lang!(CS)),
    kw("unsigned", TokenKind::Type, lang!(C | CPP)),
    kw("ushort", TokenKind::Type, lang!(D | CS | VALA)),
    kw("using", TokenKind::Using, lang!(CPP | CS | VALA)),
    kw("var", TokenKind::Type, lang!(VALA | ECMA)),
    kw("version", TokenKind::DVersion, lang!(D)),
    kw("virtual", TokenKind::Qualifier, lang!(CPP | CS | VALA)),
    kw("void", TokenKind::Type, lang!(C | CPP | D | CS | JAVA | OC | VALA | ECMA)),
    kw("volatile", TokenKind::Qualifier, lang!(C | CPP | CS | JAVA | ECMA)),
    kw("volatile", TokenKind::Volatile, lang!(D)),
    kw("wchar", TokenKind::Type, lang!(D)),
    kw("wchar_t", TokenKind::Type, lang!(C | CPP)),
    kw("weak", TokenKind::Qualifier, lang!(VALA)),
    kw("when", TokenKind::When, lang!(CS)),
    kw("while", TokenKind::While, lang!(ALL)),
    kw("with", TokenKind::DWith, lang!(D | ECMA)),
    kw("xor", TokenKind::SArith, lang!(C | CPP)),
    kw("xor_eq", TokenKind::SAssign, lang!(C | CPP)),
];

/// Keyword lookup with a user-extensible part.
#[derive(Clone, Debug, Default)]
pub struct KeywordTable {
    dynamic: FxHashMap<String, TokenKind>,
}

impl KeywordTable {
    pub fn new() -> Self {
        KeywordTable::default()
    }

    /// Add a dynamic keyword, replacing an earlier kind for the same word.
    pub fn add(&mut self, word: &str, kind: TokenKind) {
        match self.dynamic.insert(word.to_owned(), kind) {
            Some(old) if old != kind => {
                tracing::debug!(word, from = %old, to = %kind, "keyword changed");
            }
            Some(_) => {}
            None => tracing::debug!(word, %kind, "keyword added"),
        }
    }

    /// Number of dynamic keywords.
    pub fn dynamic_len(&self) -> usize {
        self.dynamic.len()
    }

    /// Dynamic keywords in no particular order.
    pub fn dynamic(&self) -> impl Iterator<Item = (&str, TokenKind)> {
        self.dynamic.iter().map(|(word, kind)| (word.as_str(), *kind))
    }

    /// Drop every dynamic keyword.
    pub fn clear_dynamic(&mut self) {
        self.dynamic.clear();
    }

    /// Kind of `word`, or `WORD` when it is not a keyword.
    ///
    /// `in_preproc` is true on a preprocessor line that is not a `#define`
    /// body.
    pub fn lookup(&self, word: &str, lang: LangFlags, in_preproc: bool) -> TokenKind {
        if word.is_empty() {
            return TokenKind::None;
        }
        if let Some(&kind) = self.dynamic.get(word) {
            return kind;
        }
        lookup_static(word, lang, in_preproc).unwrap_or(TokenKind::Word)
    }
}

/// Search the static table only.
pub fn lookup_static(word: &str, lang: LangFlags, in_preproc: bool) -> Option<TokenKind> {
    let first = KEYWORDS.partition_point(|entry| entry.text.as_bytes() < word.as_bytes());
    KEYWORDS[first..]
        .iter()
        .take_while(|entry| entry.text == word)
        .find(|entry| entry.lang.applies_to(lang) && entry.lang.is_pp_only() == in_preproc)
        .map(|entry| entry.kind)
}

/// The static table, for diagnostics and tests.
pub fn static_keywords() -> &'static [Keyword] {
    KEYWORDS
}

/// Whether the static table is in byte order.
pub fn is_sorted() -> bool {
    KEYWORDS
        .windows(2)
        .all(|pair| pair[0].text.as_bytes() <= pair[1].text.as_bytes())
}
