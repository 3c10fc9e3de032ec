//! Token definitions and the reserved-word table.

use std::borrow::Cow;
use std::fmt;

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

/// Category of a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,

    // Operators
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    /// `**`
    Power,
    /// `->` and `=>`
    Arrow,
    Assign,
    Equal,
    NotEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    Caret,
    Ampersand,
    Dollar,
    Pipe,
    /// `|>`
    PipeForward,
    Exclamation,
    Colon,
    DoubleColon,
    Dot,
    /// `..`
    ExclusiveRange,
    /// `...`
    InclusiveRange,

    // Literals
    Integer,
    Float,
    String,
    /// `true` or `false`
    Boolean,

    Identifier,

    // Reserved words
    KwConst,
    KwLet,
    KwVar,
    KwIf,
    KwElse,
    KwWhile,
    KwFor,
    KwReturn,
    KwFun,
    KwProcess,
    KwMessage,
    KwImpl,
    KwSpawn,
    KwBool,
    KwImport,
    KwAs,
    KwIn,
    KwStruct,
    KwEnum,
    KwUnion,
    KwTrait,
    KwMatch,
    KwMut,
    KwStr8,
    KwStrA,
    KwStr16,
    KwStr32,
    KwStringA,
    KwString,
    KwString16,
    KwString32,
    KwGeneric,
    KwTypealias,

    /// End of input. Always the last token and always empty.
    Eof,
    /// A run of non-ASCII bytes (lead byte plus continuation bytes).
    Unknown,
    /// A single ASCII byte that starts no token.
    Error,
}

impl TokenKind {
    /// Stable upper-snake name used in token dumps.
    pub fn name(self) -> &'static str {
        use TokenKind::*;
        match self {
            LParen => "LPAREN",
            RParen => "RPAREN",
            LBrace => "LBRACE",
            RBrace => "RBRACE",
            LBracket => "LBRACKET",
            RBracket => "RBRACKET",
            Semicolon => "SEMICOLON",
            Comma => "COMMA",
            Plus => "PLUS",
            Minus => "MINUS",
            Multiply => "MULTIPLY",
            Divide => "DIVIDE",
            Modulo => "MODULO",
            Power => "POWER",
            Arrow => "ARROW",
            Assign => "ASSIGN",
            Equal => "EQUAL",
            NotEqual => "NOT_EQUAL",
            Greater => "GREATER",
            GreaterEqual => "GREATER_EQUAL",
            Less => "LESS",
            LessEqual => "LESS_EQUAL",
            Caret => "CARET",
            Ampersand => "AMPERSAND",
            Dollar => "DOLLAR",
            Pipe => "PIPE",
            PipeForward => "PIPE_FORWARD",
            Exclamation => "EXCLAMATION",
            Colon => "COLON",
            DoubleColon => "DOUBLE_COLON",
            Dot => "DOT",
            ExclusiveRange => "EXCLUSIVE_RANGE",
            InclusiveRange => "INCLUSIVE_RANGE",
            Integer => "INTEGER",
            Float => "FLOAT",
            String => "STRING",
            Boolean => "BOOLEAN",
            Identifier => "IDENTIFIER",
            KwConst => "KW_CONST",
            KwLet => "KW_LET",
            KwVar => "KW_VAR",
            KwIf => "KW_IF",
            KwElse => "KW_ELSE",
            KwWhile => "KW_WHILE",
            KwFor => "KW_FOR",
            KwReturn => "KW_RETURN",
            KwFun => "KW_FUN",
            KwProcess => "KW_PROCESS",
            KwMessage => "KW_MESSAGE",
            KwImpl => "KW_IMPL",
            KwSpawn => "KW_SPAWN",
            KwBool => "KW_BOOL",
            KwImport => "KW_IMPORT",
            KwAs => "KW_AS",
            KwIn => "KW_IN",
            KwStruct => "KW_STRUCT",
            KwEnum => "KW_ENUM",
            KwUnion => "KW_UNION",
            KwTrait => "KW_TRAIT",
            KwMatch => "KW_MATCH",
            KwMut => "KW_MUT",
            KwStr8 => "KW_STR8",
            KwStrA => "KW_STRA",
            KwStr16 => "KW_STR16",
            KwStr32 => "KW_STR32",
            KwStringA => "KW_STRINGA",
            KwString => "KW_STRING",
            KwString16 => "KW_STRING16",
            KwString32 => "KW_STRING32",
            KwGeneric => "KW_GENERIC",
            KwTypealias => "KW_TYPEALIAS",
            Eof => "EOF",
            Unknown => "UNKNOWN",
            Error => "ERROR",
        }
    }

    /// Returns true for reserved words (not boolean literals).
    pub fn is_keyword(self) -> bool {
        (self as u8) >= (TokenKind::KwConst as u8) && (self as u8) <= (TokenKind::KwTypealias as u8)
    }

    /// Returns true for the two soft-failure kinds, `Unknown` and `Error`.
    pub fn is_soft_failure(self) -> bool {
        matches!(self, TokenKind::Unknown | TokenKind::Error)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Spellings of every reserved word, in declaration order.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("const", TokenKind::KwConst),
    ("let", TokenKind::KwLet),
    ("var", TokenKind::KwVar),
    ("if", TokenKind::KwIf),
    ("else", TokenKind::KwElse),
    ("while", TokenKind::KwWhile),
    ("for", TokenKind::KwFor),
    ("return", TokenKind::KwReturn),
    ("fun", TokenKind::KwFun),
    ("process", TokenKind::KwProcess),
    ("message", TokenKind::KwMessage),
    ("impl", TokenKind::KwImpl),
    ("spawn", TokenKind::KwSpawn),
    ("bool", TokenKind::KwBool),
    ("import", TokenKind::KwImport),
    ("as", TokenKind::KwAs),
    ("in", TokenKind::KwIn),
    ("struct", TokenKind::KwStruct),
    ("enum", TokenKind::KwEnum),
    ("union", TokenKind::KwUnion),
    ("trait", TokenKind::KwTrait),
    ("match", TokenKind::KwMatch),
    ("mut", TokenKind::KwMut),
    ("str8", TokenKind::KwStr8),
    ("strA", TokenKind::KwStrA),
    ("str16", TokenKind::KwStr16),
    ("str32", TokenKind::KwStr32),
    ("stringA", TokenKind::KwStringA),
    ("string", TokenKind::KwString),
    ("string16", TokenKind::KwString16),
    ("string32", TokenKind::KwString32),
    ("generic", TokenKind::KwGeneric),
    ("typealias", TokenKind::KwTypealias),
    ("true", TokenKind::Boolean),
    ("false", TokenKind::Boolean),
    // `self` is listed so that it never picks up a keyword kind.
    ("self", TokenKind::Identifier),
];

lazy_static! {
    static ref KEYWORD_MAP: FxHashMap<&'static [u8], TokenKind> = KEYWORDS
        .iter()
        .map(|&(spelling, kind)| (spelling.as_bytes(), kind))
        .collect();
}

/// Looks up an identifier-shaped lexeme in the reserved-word table.
///
/// Matching is exact and case-sensitive. Returns `None` for ordinary
/// identifiers.
///
/// # Example
///
/// ```
/// use kilnc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident(b"spawn"), Some(TokenKind::KwSpawn));
/// assert_eq!(keyword_from_ident(b"true"), Some(TokenKind::Boolean));
/// assert_eq!(keyword_from_ident(b"Spawn"), None);
/// ```
pub fn keyword_from_ident(text: &[u8]) -> Option<TokenKind> {
    KEYWORD_MAP.get(text).copied()
}

/// A classified lexeme borrowed from the source buffer.
///
/// `text` is always `&source[offset..offset + text.len()]`; tokens cannot
/// outlive the buffer they were scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src [u8],
    /// Byte offset of `text` in the source.
    pub offset: usize,
    /// 1-based line.
    pub line: u32,
    /// 1-based column, counted in bytes.
    pub column: u32,
}

impl<'src> Token<'src> {
    /// Returns the lexeme as UTF-8, replacing invalid sequences.
    pub fn text_lossy(&self) -> Cow<'src, str> {
        std::string::String::from_utf8_lossy(self.text)
    }

    /// Returns the byte range this token covers in the source.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.text.len()
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token<'_> {
    /// Formats as `Token: <KIND> (<lexeme>) at line <L>, col <C>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token: {} ({}) at line {}, col {}",
            self.kind,
            self.text_lossy(),
            self.line,
            self.column
        )
    }
}
