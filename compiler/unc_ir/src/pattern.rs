//! Complex-statement patterns and their recognition stages.
//!
//! A statement keyword such as `if` or `do` is recognized by a small state
//! machine that lives on the paren stack entry the keyword pushed. The
//! [`PatternClass`] of the keyword selects the first [`BraceStage`]; each
//! following token either advances the stage or ends the construct.

use crate::TokenKind;

/// Shape of a keyword-driven construct.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum PatternClass {
    #[default]
    None,
    /// keyword + braced statement: `do`, `try`, `finally`, `unittest`, `get`.
    Braced,
    /// keyword + parens + braced statement: `if`, `for`, `while`, `switch`.
    PBraced,
    /// keyword + optional parens + braced statement: `catch`, `debug`.
    OpBraced,
    /// keyword + value + braced statement: `namespace`.
    VBraced,
    /// keyword + parens: the `while` of a `do`.
    Paren,
    /// keyword + optional parens: D `invariant`.
    OpParen,
    /// `else`, which may collapse with a following `if`.
    Else,
}

/// Position of a complex statement within its recognition pattern.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum BraceStage {
    #[default]
    None,
    /// Expecting the parens of `if`/`for`/`switch`/`while`.
    Paren1,
    /// Optional parens: `catch () {` or `catch {`.
    OpParen1,
    /// Expecting the parens of a `while` that ends a `do`.
    WodParen,
    /// Expecting the semicolon after `do ... while (...)`.
    WodSemi,
    /// Expecting the body of a `do`.
    BraceDo,
    /// Expecting the body of any other construct.
    Brace2,
    /// Expecting an `else` after an `if` body.
    Else,
    /// Expecting an `if` after an `else`.
    ElseIf,
    /// Expecting the `while` after a `do` body.
    While,
    /// Expecting `catch` or `finally` after a `try` body.
    Catch,
    /// Optional `when` filter after `catch`.
    CatchWhen,
}

impl TokenKind {
    /// Pattern class of a statement keyword.
    pub const fn pattern_class(self) -> PatternClass {
        match self {
            TokenKind::If
            | TokenKind::ElseIf
            | TokenKind::Switch
            | TokenKind::For
            | TokenKind::While
            | TokenKind::Synchronized
            | TokenKind::UsingStmt
            | TokenKind::Lock
            | TokenKind::DWith
            | TokenKind::DVersionIf
            | TokenKind::DScopeIf => PatternClass::PBraced,
            TokenKind::Else => PatternClass::Else,
            TokenKind::Do
            | TokenKind::Try
            | TokenKind::Finally
            | TokenKind::Body
            | TokenKind::Unittest
            | TokenKind::Unsafe
            | TokenKind::Volatile
            | TokenKind::GetSet => PatternClass::Braced,
            TokenKind::Catch | TokenKind::DVersion | TokenKind::Debug => PatternClass::OpBraced,
            TokenKind::Namespace => PatternClass::VBraced,
            TokenKind::WhileOfDo => PatternClass::Paren,
            TokenKind::Invariant => PatternClass::OpParen,
            TokenKind::None | TokenKind::Whitespace | TokenKind::Newline | TokenKind::NlCont
            | TokenKind::CommentCpp | TokenKind::Comment | TokenKind::CommentMulti
            | TokenKind::CommentEmbed | TokenKind::Ignored | TokenKind::Unknown
            | TokenKind::Word | TokenKind::Number | TokenKind::NumberFp | TokenKind::String
            | TokenKind::StringMulti | TokenKind::Type | TokenKind::PtrType
            | TokenKind::Qualifier | TokenKind::Function | TokenKind::FuncCall
            | TokenKind::Annotation | TokenKind::Char | TokenKind::Macro | TokenKind::MacroFunc
            | TokenKind::MacroOpen | TokenKind::MacroClose | TokenKind::MacroElse
            | TokenKind::Pound | TokenKind::Preproc | TokenKind::PreprocBody | TokenKind::Pp
            | TokenKind::PpDefine | TokenKind::PpDefined | TokenKind::PpInclude
            | TokenKind::PpIf | TokenKind::PpElse | TokenKind::PpEndif | TokenKind::PpAssert
            | TokenKind::PpEmit | TokenKind::PpEndinput | TokenKind::PpError
            | TokenKind::PpFile | TokenKind::PpLine | TokenKind::PpSection | TokenKind::PpAsm
            | TokenKind::PpUndef | TokenKind::PpProperty | TokenKind::PpRegion
            | TokenKind::PpEndregion | TokenKind::PpPragma | TokenKind::PpOther
            | TokenKind::Semicolon | TokenKind::VSemicolon | TokenKind::Comma
            | TokenKind::Colon | TokenKind::Question | TokenKind::Assign | TokenKind::SAssign
            | TokenKind::Compare | TokenKind::SCompare | TokenKind::Arith | TokenKind::SArith
            | TokenKind::Bool | TokenKind::SBool | TokenKind::Not | TokenKind::Inv
            | TokenKind::Caret | TokenKind::Amp | TokenKind::Star | TokenKind::Plus
            | TokenKind::Minus | TokenKind::IncDecAfter | TokenKind::Member
            | TokenKind::DcMember | TokenKind::Dot | TokenKind::Ellipsis | TokenKind::Range
            | TokenKind::Lambda | TokenKind::NullCond | TokenKind::TSquare | TokenKind::OcAt
            | TokenKind::PrivateColon | TokenKind::OperatorVal | TokenKind::ParenOpen
            | TokenKind::ParenClose | TokenKind::SParenOpen | TokenKind::SParenClose
            | TokenKind::FParenOpen | TokenKind::FParenClose | TokenKind::BraceOpen
            | TokenKind::BraceClose | TokenKind::VBraceOpen | TokenKind::VBraceClose
            | TokenKind::AngleOpen | TokenKind::AngleClose | TokenKind::SquareOpen
            | TokenKind::SquareClose | TokenKind::When | TokenKind::Return | TokenKind::Break
            | TokenKind::Continue | TokenKind::Goto | TokenKind::Throw | TokenKind::Case
            | TokenKind::Default | TokenKind::Using | TokenKind::GetSetEmpty
            | TokenKind::Debugger | TokenKind::Class | TokenKind::Struct | TokenKind::Union
            | TokenKind::Enum | TokenKind::EnumClass | TokenKind::Typedef | TokenKind::Typename
            | TokenKind::Template | TokenKind::Operator | TokenKind::Private
            | TokenKind::Extern | TokenKind::Export | TokenKind::Import | TokenKind::Package
            | TokenKind::Friend | TokenKind::Delegate | TokenKind::Construct
            | TokenKind::Attribute | TokenKind::Nothrow | TokenKind::Asm | TokenKind::Align
            | TokenKind::Lazy | TokenKind::Sizeof | TokenKind::New | TokenKind::Delete
            | TokenKind::This | TokenKind::Super | TokenKind::Base | TokenKind::In
            | TokenKind::As | TokenKind::Assert | TokenKind::TypeCast | TokenKind::Defined
            | TokenKind::Tagof | TokenKind::DScope | TokenKind::DCast | TokenKind::DMacro
            | TokenKind::DModule | TokenKind::Native | TokenKind::Forward | TokenKind::Stock
            | TokenKind::State | TokenKind::QEmit | TokenKind::QForever | TokenKind::QGadget
            | TokenKind::OcDynamic | TokenKind::OcEnd | TokenKind::OcImpl | TokenKind::OcIntf
            | TokenKind::OcProperty | TokenKind::OcProtocol | TokenKind::OcSel
            | TokenKind::OcClass | TokenKind::Di | TokenKind::Hi | TokenKind::Qi
            | TokenKind::Si => PatternClass::None,
        }
    }
}
