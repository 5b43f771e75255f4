//! Token kinds for chunks.
//!
//! One closed enum covers every discriminant the tokenizer, the keyword and
//! punctuator tables, and the structural resolver can produce. The same enum
//! is used for a chunk's own kind and for its parent kind.
//!
//! # Invariant
//!
//! Every opener has exactly one closer and `inverse()` maps between them in
//! both directions. Kinds that are not brackets map to themselves.

use std::fmt;

macro_rules! define_token_kinds {
    ($($(#[$meta:meta])* $variant:ident => $name:literal,)*) => {
        /// Category of a chunk.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
        pub enum TokenKind {
            /// No kind assigned. Also the "no parent" marker.
            #[default]
            None,
            $($(#[$meta])* $variant,)*
        }

        impl TokenKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [TokenKind] = &[TokenKind::None, $(TokenKind::$variant,)*];

            /// Stable upper-snake name used in dumps and configuration files.
            pub const fn name(self) -> &'static str {
                match self {
                    TokenKind::None => "NONE",
                    $(TokenKind::$variant => $name,)*
                }
            }
        }
    };
}

define_token_kinds! {
    // ─── Layout ───
    /// A run of blanks. Never stored in a built chunk list.
    Whitespace => "WHITESPACE",
    /// One or more line breaks.
    Newline => "NEWLINE",
    /// Backslash followed by a line break.
    NlCont => "NL_CONT",

    // ─── Comments ───
    /// `// ...`
    CommentCpp => "COMMENT_CPP",
    /// `/* ... */` or D `/+ ... +/` on one line.
    Comment => "COMMENT",
    /// Block comment spanning lines.
    CommentMulti => "COMMENT_MULTI",
    /// Word treated as an embedded comment (`Q_OBJECT`).
    CommentEmbed => "COMMENT_EMBED",
    /// Text passed through untouched while processing is disabled.
    Ignored => "IGNORED",
    /// Character nothing recognized.
    Unknown => "UNKNOWN",

    // ─── Literals and words ───
    Word => "WORD",
    Number => "NUMBER",
    NumberFp => "NUMBER_FP",
    String => "STRING",
    StringMulti => "STRING_MULTI",
    Type => "TYPE",
    PtrType => "PTR_TYPE",
    Qualifier => "QUALIFIER",
    Function => "FUNCTION",
    FuncCall => "FUNC_CALL",
    Annotation => "ANNOTATION",
    Char => "CHAR",

    // ─── Macros ───
    Macro => "MACRO",
    MacroFunc => "MACRO_FUNC",
    MacroOpen => "MACRO_OPEN",
    MacroClose => "MACRO_CLOSE",
    MacroElse => "MACRO_ELSE",

    // ─── Preprocessor ───
    Pound => "POUND",
    Preproc => "PREPROC",
    PreprocBody => "PREPROC_BODY",
    /// `##` token paste.
    Pp => "PP",
    PpDefine => "PP_DEFINE",
    PpDefined => "PP_DEFINED",
    PpInclude => "PP_INCLUDE",
    PpIf => "PP_IF",
    PpElse => "PP_ELSE",
    PpEndif => "PP_ENDIF",
    PpAssert => "PP_ASSERT",
    PpEmit => "PP_EMIT",
    PpEndinput => "PP_ENDINPUT",
    PpError => "PP_ERROR",
    PpFile => "PP_FILE",
    PpLine => "PP_LINE",
    PpSection => "PP_SECTION",
    PpAsm => "PP_ASM",
    PpUndef => "PP_UNDEF",
    PpProperty => "PP_PROPERTY",
    PpRegion => "PP_REGION",
    PpEndregion => "PP_ENDREGION",
    PpPragma => "PP_PRAGMA",
    PpOther => "PP_OTHER",

    // ─── Punctuators ───
    Semicolon => "SEMICOLON",
    /// Statement terminator the source omitted.
    VSemicolon => "VSEMICOLON",
    Comma => "COMMA",
    Colon => "COLON",
    Question => "QUESTION",
    Assign => "ASSIGN",
    SAssign => "SASSIGN",
    Compare => "COMPARE",
    SCompare => "SCOMPARE",
    Arith => "ARITH",
    SArith => "SARITH",
    Bool => "BOOL",
    SBool => "SBOOL",
    Not => "NOT",
    Inv => "INV",
    Caret => "CARET",
    Amp => "AMP",
    Star => "STAR",
    Plus => "PLUS",
    Minus => "MINUS",
    IncDecAfter => "INCDEC_AFTER",
    Member => "MEMBER",
    DcMember => "DC_MEMBER",
    Dot => "DOT",
    Ellipsis => "ELLIPSIS",
    Range => "RANGE",
    Lambda => "LAMBDA",
    NullCond => "NULLCOND",
    /// `[]` with nothing between.
    TSquare => "TSQUARE",
    OcAt => "OC_AT",
    PrivateColon => "PRIVATE_COLON",
    OperatorVal => "OPERATOR_VAL",

    // ─── Brackets (each opener directly followed by its closer) ───
    ParenOpen => "PAREN_OPEN",
    ParenClose => "PAREN_CLOSE",
    /// Paren of a statement keyword (`if (`).
    SParenOpen => "SPAREN_OPEN",
    SParenClose => "SPAREN_CLOSE",
    /// Paren of a function call or definition.
    FParenOpen => "FPAREN_OPEN",
    FParenClose => "FPAREN_CLOSE",
    BraceOpen => "BRACE_OPEN",
    BraceClose => "BRACE_CLOSE",
    /// Brace the source omitted.
    VBraceOpen => "VBRACE_OPEN",
    VBraceClose => "VBRACE_CLOSE",
    AngleOpen => "ANGLE_OPEN",
    AngleClose => "ANGLE_CLOSE",
    SquareOpen => "SQUARE_OPEN",
    SquareClose => "SQUARE_CLOSE",

    // ─── Statement keywords ───
    If => "IF",
    ElseIf => "ELSEIF",
    Else => "ELSE",
    Switch => "SWITCH",
    For => "FOR",
    While => "WHILE",
    WhileOfDo => "WHILE_OF_DO",
    Do => "DO",
    Try => "TRY",
    Catch => "CATCH",
    When => "WHEN",
    Finally => "FINALLY",
    Return => "RETURN",
    Break => "BREAK",
    Continue => "CONTINUE",
    Goto => "GOTO",
    Throw => "THROW",
    Case => "CASE",
    Default => "DEFAULT",
    Synchronized => "SYNCHRONIZED",
    Lock => "LOCK",
    Using => "USING",
    UsingStmt => "USING_STMT",
    Unsafe => "UNSAFE",
    Volatile => "VOLATILE",
    GetSet => "GETSET",
    GetSetEmpty => "GETSET_EMPTY",
    Body => "BODY",
    Unittest => "UNITTEST",
    Invariant => "INVARIANT",
    Debug => "DEBUG",
    Debugger => "DEBUGGER",
    Namespace => "NAMESPACE",

    // ─── Declaration keywords ───
    Class => "CLASS",
    Struct => "STRUCT",
    Union => "UNION",
    Enum => "ENUM",
    EnumClass => "ENUM_CLASS",
    Typedef => "TYPEDEF",
    Typename => "TYPENAME",
    Template => "TEMPLATE",
    Operator => "OPERATOR",
    Private => "PRIVATE",
    Extern => "EXTERN",
    Export => "EXPORT",
    Import => "IMPORT",
    Package => "PACKAGE",
    Friend => "FRIEND",
    Delegate => "DELEGATE",
    Construct => "CONSTRUCT",
    Attribute => "ATTRIBUTE",
    Nothrow => "NOTHROW",
    Asm => "ASM",
    Align => "ALIGN",
    Lazy => "LAZY",

    // ─── Expression keywords ───
    Sizeof => "SIZEOF",
    New => "NEW",
    Delete => "DELETE",
    This => "THIS",
    Super => "SUPER",
    Base => "BASE",
    In => "IN",
    As => "AS",
    Assert => "ASSERT",
    TypeCast => "TYPE_CAST",
    Defined => "DEFINED",
    Tagof => "TAGOF",

    // ─── D ───
    DVersion => "D_VERSION",
    DVersionIf => "D_VERSION_IF",
    DScope => "D_SCOPE",
    DScopeIf => "D_SCOPE_IF",
    DWith => "D_WITH",
    DCast => "D_CAST",
    DMacro => "D_MACRO",
    DModule => "D_MODULE",

    // ─── Pawn ───
    Native => "NATIVE",
    Forward => "FORWARD",
    Stock => "STOCK",
    State => "STATE",

    // ─── Qt ───
    QEmit => "Q_EMIT",
    QForever => "Q_FOREVER",
    QGadget => "Q_GADGET",

    // ─── Objective-C ───
    OcDynamic => "OC_DYNAMIC",
    OcEnd => "OC_END",
    OcImpl => "OC_IMPL",
    OcIntf => "OC_INTF",
    OcProperty => "OC_PROPERTY",
    OcProtocol => "OC_PROTOCOL",
    OcSel => "OC_SEL",
    OcClass => "OC_CLASS",

    // ─── GCC machine modes ───
    Di => "DI",
    Hi => "HI",
    Qi => "QI",
    Si => "SI",
}

impl TokenKind {
    /// Parse a name produced by [`TokenKind::name`].
    pub fn from_name(name: &str) -> Option<TokenKind> {
        TokenKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// The matching closer of an opener, the matching opener of a closer,
    /// or `self` for anything else.
    pub const fn inverse(self) -> TokenKind {
        match self {
            TokenKind::ParenOpen => TokenKind::ParenClose,
            TokenKind::ParenClose => TokenKind::ParenOpen,
            TokenKind::SParenOpen => TokenKind::SParenClose,
            TokenKind::SParenClose => TokenKind::SParenOpen,
            TokenKind::FParenOpen => TokenKind::FParenClose,
            TokenKind::FParenClose => TokenKind::FParenOpen,
            TokenKind::BraceOpen => TokenKind::BraceClose,
            TokenKind::BraceClose => TokenKind::BraceOpen,
            TokenKind::VBraceOpen => TokenKind::VBraceClose,
            TokenKind::VBraceClose => TokenKind::VBraceOpen,
            TokenKind::AngleOpen => TokenKind::AngleClose,
            TokenKind::AngleClose => TokenKind::AngleOpen,
            TokenKind::SquareOpen => TokenKind::SquareClose,
            TokenKind::SquareClose => TokenKind::SquareOpen,
            TokenKind::MacroOpen => TokenKind::MacroClose,
            TokenKind::MacroClose => TokenKind::MacroOpen,
            other => other,
        }
    }

    /// Kinds that push an entry on the paren stack.
    #[inline]
    pub const fn is_opener(self) -> bool {
        matches!(
            self,
            TokenKind::ParenOpen
                | TokenKind::SParenOpen
                | TokenKind::FParenOpen
                | TokenKind::BraceOpen
                | TokenKind::VBraceOpen
                | TokenKind::AngleOpen
                | TokenKind::SquareOpen
                | TokenKind::MacroOpen
        )
    }

    /// Kinds that pop an entry off the paren stack.
    #[inline]
    pub const fn is_closer(self) -> bool {
        matches!(
            self,
            TokenKind::ParenClose
                | TokenKind::SParenClose
                | TokenKind::FParenClose
                | TokenKind::BraceClose
                | TokenKind::VBraceClose
                | TokenKind::AngleClose
                | TokenKind::SquareClose
                | TokenKind::MacroClose
        )
    }

    #[inline]
    pub const fn is_paren_open(self) -> bool {
        matches!(
            self,
            TokenKind::ParenOpen | TokenKind::SParenOpen | TokenKind::FParenOpen
        )
    }

    #[inline]
    pub const fn is_paren_close(self) -> bool {
        matches!(
            self,
            TokenKind::ParenClose | TokenKind::SParenClose | TokenKind::FParenClose
        )
    }

    /// Openers and closers that change the brace level.
    #[inline]
    pub const fn is_brace_like(self) -> bool {
        matches!(
            self,
            TokenKind::BraceOpen
                | TokenKind::BraceClose
                | TokenKind::VBraceOpen
                | TokenKind::VBraceClose
                | TokenKind::MacroOpen
                | TokenKind::MacroClose
        )
    }

    #[inline]
    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            TokenKind::CommentCpp | TokenKind::Comment | TokenKind::CommentMulti
        )
    }

    #[inline]
    pub const fn is_newline(self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::NlCont)
    }

    #[inline]
    pub const fn is_comment_or_newline(self) -> bool {
        self.is_comment() || self.is_newline()
    }

    /// Real or virtual statement terminator.
    #[inline]
    pub const fn is_semicolon(self) -> bool {
        matches!(self, TokenKind::Semicolon | TokenKind::VSemicolon)
    }

    /// Chunks synthesized by the resolver rather than read from source.
    #[inline]
    pub const fn is_virtual(self) -> bool {
        matches!(
            self,
            TokenKind::VBraceOpen | TokenKind::VBraceClose | TokenKind::VSemicolon
        )
    }

    /// Preprocessor directive words (`define`, `if`, `pragma`, ...).
    pub const fn is_pp_directive(self) -> bool {
        matches!(
            self,
            TokenKind::PpDefine
                | TokenKind::PpInclude
                | TokenKind::PpIf
                | TokenKind::PpElse
                | TokenKind::PpEndif
                | TokenKind::PpAssert
                | TokenKind::PpEmit
                | TokenKind::PpEndinput
                | TokenKind::PpError
                | TokenKind::PpFile
                | TokenKind::PpLine
                | TokenKind::PpSection
                | TokenKind::PpAsm
                | TokenKind::PpUndef
                | TokenKind::PpProperty
                | TokenKind::PpRegion
                | TokenKind::PpEndregion
                | TokenKind::PpPragma
                | TokenKind::PpOther
        )
    }

    /// Directives whose remaining text is passed through as one opaque chunk.
    pub const fn has_opaque_body(self) -> bool {
        matches!(
            self,
            TokenKind::PpPragma | TokenKind::PpRegion | TokenKind::PpEndregion | TokenKind::PpOther
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
