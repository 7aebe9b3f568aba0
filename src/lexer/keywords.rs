//! C/C++ reserved word table.
//!
//! Built with `logos` so lookups compile down to a single DFA instead of a
//! hash probe per identifier.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // =========================================================================
    // CONTROL FLOW
    // =========================================================================
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("for")]
    For,
    #[token("while")]
    While,
    #[token("do")]
    Do,
    #[token("switch")]
    Switch,
    #[token("case")]
    Case,
    #[token("default")]
    Default,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,
    #[token("goto")]
    Goto,
    #[token("return")]
    Return,
    #[token("try")]
    Try,
    #[token("catch")]
    Catch,
    #[token("throw")]
    Throw,
    #[token("co_await")]
    CoAwait,
    #[token("co_return")]
    CoReturn,
    #[token("co_yield")]
    CoYield,

    // =========================================================================
    // OPERATOR WORDS
    // =========================================================================
    #[token("and")]
    And,
    #[token("and_eq")]
    AndEq,
    #[token("bitand")]
    Bitand,
    #[token("bitor")]
    Bitor,
    #[token("compl")]
    Compl,
    #[token("not")]
    Not,
    #[token("not_eq")]
    NotEq,
    #[token("or")]
    Or,
    #[token("or_eq")]
    OrEq,
    #[token("xor")]
    Xor,
    #[token("xor_eq")]
    XorEq,
    #[token("new")]
    New,
    #[token("delete")]
    Delete,
    #[token("sizeof")]
    Sizeof,
    #[token("alignof")]
    Alignof,
    #[token("typeid")]
    Typeid,
    #[token("decltype")]
    Decltype,
    #[token("noexcept")]
    Noexcept,
    #[token("const_cast")]
    ConstCast,
    #[token("dynamic_cast")]
    DynamicCast,
    #[token("reinterpret_cast")]
    ReinterpretCast,
    #[token("static_cast")]
    StaticCast,

    // =========================================================================
    // LITERAL WORDS
    // =========================================================================
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("nullptr")]
    Nullptr,
    #[token("this")]
    This,

    // =========================================================================
    // TYPES
    // =========================================================================
    #[token("auto")]
    Auto,
    #[token("bool")]
    Bool,
    #[token("char")]
    Char,
    #[token("char8_t")]
    Char8,
    #[token("char16_t")]
    Char16,
    #[token("char32_t")]
    Char32,
    #[token("wchar_t")]
    Wchar,
    #[token("double")]
    Double,
    #[token("float")]
    Float,
    #[token("int")]
    Int,
    #[token("long")]
    Long,
    #[token("short")]
    Short,
    #[token("signed")]
    Signed,
    #[token("unsigned")]
    Unsigned,
    #[token("void")]
    Void,

    // =========================================================================
    // SPECIFIERS AND DECLARATIONS
    // =========================================================================
    #[token("alignas")]
    Alignas,
    #[token("const")]
    Const,
    #[token("constexpr")]
    Constexpr,
    #[token("consteval")]
    Consteval,
    #[token("constinit")]
    Constinit,
    #[token("explicit")]
    Explicit,
    #[token("export")]
    Export,
    #[token("extern")]
    Extern,
    #[token("inline")]
    Inline,
    #[token("mutable")]
    Mutable,
    #[token("register")]
    Register,
    #[token("static")]
    Static,
    #[token("static_assert")]
    StaticAssert,
    #[token("thread_local")]
    ThreadLocal,
    #[token("virtual")]
    Virtual,
    #[token("volatile")]
    Volatile,
    #[token("class")]
    Class,
    #[token("struct")]
    Struct,
    #[token("union")]
    Union,
    #[token("enum")]
    Enum,
    #[token("typedef")]
    Typedef,
    #[token("typename")]
    Typename,
    #[token("template")]
    Template,
    #[token("namespace")]
    Namespace,
    #[token("using")]
    Using,
    #[token("friend")]
    Friend,
    #[token("operator")]
    Operator,
    #[token("private")]
    Private,
    #[token("protected")]
    Protected,
    #[token("public")]
    Public,
    #[token("concept")]
    Concept,
    #[token("requires")]
    Requires,
    #[token("reflexpr")]
    Reflexpr,
    #[token("atomic_cancel")]
    AtomicCancel,
    #[token("atomic_commit")]
    AtomicCommit,
    #[token("atomic_noexcept")]
    AtomicNoexcept,

    // =========================================================================
    // INLINE ASSEMBLY
    // =========================================================================
    #[token("asm")]
    Asm,
    #[token("__asm")]
    GnuAsm,
    #[token("__asm__")]
    GnuAsmExt,
}

impl Keyword {
    /// Control statements whose body may be a single statement without braces.
    pub fn is_statement(self) -> bool {
        matches!(
            self,
            Self::If | Self::For | Self::While | Self::Do | Self::Else | Self::Try | Self::Catch
        )
    }

    /// Words that introduce an inline assembly statement or block.
    pub fn is_asm(self) -> bool {
        matches!(self, Self::Asm | Self::GnuAsm | Self::GnuAsmExt)
    }
}

/// Look up `word` as a whole; prefixes of longer identifiers never match.
pub fn lookup(word: &str) -> Option<Keyword> {
    let mut lexer = Keyword::lexer(word);
    match lexer.next() {
        Some(Ok(keyword)) if lexer.span().end == word.len() => Some(keyword),
        _ => None,
    }
}
