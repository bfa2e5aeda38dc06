use super::Column;

/// Reserved words, always stored lowercase.
pub const KEYWORDS: [&str; 14] = [
    "def", "enddef", "end", "if", "then", "endif", "while", "do", "endwhile", "print", "return",
    "not", "and", "or",
];

/// Keywords that close a statement body without being part of it.
pub const END_KEYWORDS: [&str; 3] = ["endif", "enddef", "endwhile"];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Kind {
    Keyword,
    Id,
    Assign,
    Operator,
    Plus,
    Minus,
    Times,
    Divide,
    LParen,
    RParen,
    Colon,
    Semicolon,
    Comma,
    Integer,
    Real,
    String,
    /// Comment text, only emitted when remarks are kept.
    Remark,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Kind::*;
        match self {
            Keyword => write!(f, "keyword"),
            Id => write!(f, "id"),
            Assign => write!(f, "assign"),
            Operator => write!(f, "operator"),
            Plus => write!(f, "plus"),
            Minus => write!(f, "minus"),
            Times => write!(f, "times"),
            Divide => write!(f, "divide"),
            LParen => write!(f, "lparen"),
            RParen => write!(f, "rparen"),
            Colon => write!(f, "colon"),
            Semicolon => write!(f, "semicolon"),
            Comma => write!(f, "comma"),
            Integer => write!(f, "integer"),
            Real => write!(f, "real"),
            String => write!(f, "string"),
            Remark => write!(f, "remark"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: Kind,
    pub lexeme: String,
    pub column: Column,
}

impl Token {
    pub fn new(kind: Kind, lexeme: &str, column: Column) -> Token {
        Token {
            kind,
            lexeme: lexeme.to_string(),
            column,
        }
    }

    /// The token without its position.
    pub fn pair(&self) -> (Kind, &str) {
        (self.kind, &self.lexeme)
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == Kind::Keyword && self.lexeme == word
    }

    pub fn is_end_keyword(&self) -> bool {
        self.kind == Kind::Keyword && END_KEYWORDS.contains(&self.lexeme.as_str())
    }
}

/// Classifies an identifier-shaped word, normalizing keywords to lowercase.
pub fn classify_word(word: &str) -> (Kind, String) {
    let lower = word.to_ascii_lowercase();
    if KEYWORDS.contains(&lower.as_str()) {
        (Kind::Keyword, lower)
    } else {
        (Kind::Id, word.to_string())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {:?}", self.kind, self.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_word() {
        assert_eq!(classify_word("WHILE"), (Kind::Keyword, "while".to_string()));
        assert_eq!(classify_word("EndIf"), (Kind::Keyword, "endif".to_string()));
        assert_eq!(classify_word("Foo"), (Kind::Id, "Foo".to_string()));
        assert_eq!(classify_word("ifx"), (Kind::Id, "ifx".to_string()));
    }

    #[test]
    fn test_end_keyword() {
        assert!(Token::new(Kind::Keyword, "enddef", 0..6).is_end_keyword());
        assert!(!Token::new(Kind::Keyword, "end", 0..3).is_end_keyword());
        assert!(!Token::new(Kind::Id, "endif", 0..5).is_end_keyword());
    }

    #[test]
    fn test_display() {
        let t = Token::new(Kind::LParen, "(", 3..4);
        assert_eq!(t.to_string(), "lparen \"(\"");
        assert_eq!(t.pair(), (Kind::LParen, "("));
    }
}
