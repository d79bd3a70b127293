//! Token kinds and the tokens produced by the scanner.

use jz_core::text::TextRange;
use serde::{Serialize, Serializer};
use std::fmt;

macro_rules! token_kinds {
    (
        punctuators { $($punct:ident => $punct_name:literal, $punct_text:literal;)* }
        keywords { $($kw:ident => $kw_name:literal, $kw_text:literal;)* }
        others { $($other:ident => $other_name:literal;)* }
    ) => {
        /// The kind of a scanned token.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TokenKind {
            $($punct,)*
            $($kw,)*
            $($other,)*
        }

        impl TokenKind {
            /// Every token kind, punctuators first, then keywords, then the rest.
            pub const ALL: &'static [TokenKind] = &[
                $(TokenKind::$punct,)*
                $(TokenKind::$kw,)*
                $(TokenKind::$other,)*
            ];

            /// The upper-snake name of this kind, e.g. `GREATER_GREATER_EQUALS`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(TokenKind::$punct => $punct_name,)*
                    $(TokenKind::$kw => $kw_name,)*
                    $(TokenKind::$other => $other_name,)*
                }
            }

            /// The fixed source spelling of punctuators and keywords.
            pub const fn text(self) -> Option<&'static str> {
                match self {
                    $(TokenKind::$punct => Some($punct_text),)*
                    $(TokenKind::$kw => Some($kw_text),)*
                    _ => None,
                }
            }

            /// Look up a keyword kind from identifier text (exact, case-sensitive).
            pub fn from_keyword(text: &str) -> Option<TokenKind> {
                match text {
                    $($kw_text => Some(TokenKind::$kw),)*
                    _ => None,
                }
            }

            pub const fn is_keyword(self) -> bool {
                matches!(self, $(TokenKind::$kw)|*)
            }

            pub const fn is_punctuator(self) -> bool {
                matches!(self, $(TokenKind::$punct)|*)
            }
        }
    };
}

token_kinds! {
    punctuators {
        Ampersand => "AMPERSAND", "&";
        AmpersandAmpersand => "AMPERSAND_AMPERSAND", "&&";
        AmpersandAmpersandEquals => "AMPERSAND_AMPERSAND_EQUALS", "&&=";
        AmpersandEquals => "AMPERSAND_EQUALS", "&=";
        Arrow => "ARROW", "=>";
        Asterisk => "ASTERISK", "*";
        AsteriskAsterisk => "ASTERISK_ASTERISK", "**";
        AsteriskAsteriskEquals => "ASTERISK_ASTERISK_EQUALS", "**=";
        AsteriskEquals => "ASTERISK_EQUALS", "*=";
        BraceLeft => "BRACE_LEFT", "{";
        BraceRight => "BRACE_RIGHT", "}";
        Caret => "CARET", "^";
        CaretEquals => "CARET_EQUALS", "^=";
        Colon => "COLON", ":";
        Comma => "COMMA", ",";
        Dot => "DOT", ".";
        DotDotDot => "DOT_DOT_DOT", "...";
        Equals => "EQUALS", "=";
        EqualsEquals => "EQUALS_EQUALS", "==";
        EqualsEqualsEquals => "EQUALS_EQUALS_EQUALS", "===";
        Exclamation => "EXCLAMATION", "!";
        ExclamationEquals => "EXCLAMATION_EQUALS", "!=";
        ExclamationEqualsEquals => "EXCLAMATION_EQUALS_EQUALS", "!==";
        Greater => "GREATER", ">";
        GreaterEquals => "GREATER_EQUALS", ">=";
        GreaterGreater => "GREATER_GREATER", ">>";
        GreaterGreaterEquals => "GREATER_GREATER_EQUALS", ">>=";
        GreaterGreaterGreater => "GREATER_GREATER_GREATER", ">>>";
        GreaterGreaterGreaterEquals => "GREATER_GREATER_GREATER_EQUALS", ">>>=";
        Less => "LESS", "<";
        LessEquals => "LESS_EQUALS", "<=";
        LessLess => "LESS_LESS", "<<";
        LessLessEquals => "LESS_LESS_EQUALS", "<<=";
        Minus => "MINUS", "-";
        MinusEquals => "MINUS_EQUALS", "-=";
        MinusMinus => "MINUS_MINUS", "--";
        ParenLeft => "PAREN_LEFT", "(";
        ParenRight => "PAREN_RIGHT", ")";
        Percent => "PERCENT", "%";
        PercentEquals => "PERCENT_EQUALS", "%=";
        Plus => "PLUS", "+";
        PlusEquals => "PLUS_EQUALS", "+=";
        PlusPlus => "PLUS_PLUS", "++";
        Question => "QUESTION", "?";
        QuestionDot => "QUESTION_DOT", "?.";
        QuestionQuestion => "QUESTION_QUESTION", "??";
        QuestionQuestionEquals => "QUESTION_QUESTION_EQUALS", "??=";
        Semicolon => "SEMICOLON", ";";
        Slash => "SLASH", "/";
        SlashEquals => "SLASH_EQUALS", "/=";
        SquareLeft => "SQUARE_LEFT", "[";
        SquareRight => "SQUARE_RIGHT", "]";
        Tilde => "TILDE", "~";
        Vertical => "VERTICAL", "|";
        VerticalEquals => "VERTICAL_EQUALS", "|=";
        VerticalVertical => "VERTICAL_VERTICAL", "||";
        VerticalVerticalEquals => "VERTICAL_VERTICAL_EQUALS", "||=";
    }
    keywords {
        Async => "ASYNC", "async";
        Await => "AWAIT", "await";
        Break => "BREAK", "break";
        Case => "CASE", "case";
        Catch => "CATCH", "catch";
        Class => "CLASS", "class";
        Const => "CONST", "const";
        Continue => "CONTINUE", "continue";
        Debugger => "DEBUGGER", "debugger";
        Default => "DEFAULT", "default";
        Delete => "DELETE", "delete";
        Do => "DO", "do";
        Else => "ELSE", "else";
        Enum => "ENUM", "enum";
        Export => "EXPORT", "export";
        Extends => "EXTENDS", "extends";
        False => "FALSE", "false";
        Finally => "FINALLY", "finally";
        For => "FOR", "for";
        Function => "FUNCTION", "function";
        If => "IF", "if";
        Implements => "IMPLEMENTS", "implements";
        Import => "IMPORT", "import";
        In => "IN", "in";
        InstanceOf => "INSTANCEOF", "instanceof";
        Interface => "INTERFACE", "interface";
        Let => "LET", "let";
        New => "NEW", "new";
        Null => "NULL", "null";
        Package => "PACKAGE", "package";
        Private => "PRIVATE", "private";
        Protected => "PROTECTED", "protected";
        Public => "PUBLIC", "public";
        Return => "RETURN", "return";
        Static => "STATIC", "static";
        Super => "SUPER", "super";
        Switch => "SWITCH", "switch";
        This => "THIS", "this";
        Throw => "THROW", "throw";
        True => "TRUE", "true";
        Try => "TRY", "try";
        TypeOf => "TYPEOF", "typeof";
        Undefined => "UNDEFINED", "undefined";
        Var => "VAR", "var";
        Void => "VOID", "void";
        While => "WHILE", "while";
        With => "WITH", "with";
        Yield => "YIELD", "yield";
    }
    others {
        Identifier => "IDENTIFIER";
        StringLiteral => "STRING_LITERAL";
        NumericLiteral => "NUMERIC_LITERAL";
        BigIntLiteral => "BIGINT_LITERAL";
        RegexLiteral => "REGEX_LITERAL";
        TemplateHead => "TEMPLATE_HEAD";
        TemplateMiddle => "TEMPLATE_MIDDLE";
        TemplateTail => "TEMPLATE_TAIL";
        Eof => "EOF";
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A scanned token.
///
/// Only identifiers and string literals carry `text`, and only numeric
/// literals would carry `number`; punctuators and keywords have no payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The source bytes this token was scanned from.
    pub range: TextRange,
    /// The decoded text of identifiers and string literals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// The value of numeric literals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<f64>,
}

impl Token {
    pub fn new(kind: TokenKind, range: TextRange) -> Self {
        Self {
            kind,
            range,
            text: None,
            number: None,
        }
    }

    pub fn with_text(mut self, text: String) -> Self {
        self.text = Some(text);
        self
    }

    /// The decoded text payload, if this token carries one.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Whether this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.name())?;
        match (self.kind, &self.text, self.number) {
            (TokenKind::StringLiteral, Some(text), _) => write!(f, " \"{}\"", text.escape_debug()),
            (_, Some(text), _) => write!(f, " {}", text),
            (_, None, Some(number)) => write!(f, " {}", number),
            _ => Ok(()),
        }
    }
}
