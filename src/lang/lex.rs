use super::{error::LexError, token::*, Error, Options};
use regex::Regex;
use tracing::{debug, trace};

/// Tokenizes with default options.
pub fn tokenize(s: &str) -> Result<Vec<Token>, Error> {
    tokenize_with(s, &Options::default())
}

pub fn tokenize_with(s: &str, options: &Options) -> Result<Vec<Token>, Error> {
    let tokens = RULES.with(|rules| {
        BasicLexer {
            source: s,
            offset: 0,
            rules,
            options,
            failed: false,
        }
        .collect::<Result<Vec<Token>, LexError>>()
    })?;
    debug!(count = tokens.len(), "tokenized");
    Ok(tokens)
}

/// Returns the kind and lexeme to emit, or `None` to consume silently.
type Action = fn(&str, &Options) -> Option<(Kind, String)>;

struct Rule {
    name: &'static str,
    pattern: Regex,
    action: Action,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, action: Action) -> Rule {
        Rule {
            name,
            pattern: Regex::new(pattern).expect("tokenizer rule pattern"),
            action,
        }
    }
}

thread_local!(
    static RULES: Vec<Rule> = rules();
);

// Order is priority: the first rule matching at the current offset wins.
fn rules() -> Vec<Rule> {
    vec![
        Rule::new("remark", r"^(?i:rem)[^\n]*", remark),
        Rule::new("word", r"^[A-Za-z][A-Za-z0-9]*", |s, _| Some(classify_word(s))),
        Rule::new("operator2", r"^(<>|><|<=|>=|:=)", |s, _| {
            let kind = if s == ":=" { Kind::Assign } else { Kind::Operator };
            Some((kind, s.to_string()))
        }),
        Rule::new("operator1", r"^[-+*/=<>():;,]", |s, _| {
            symbol(s).map(|kind| (kind, s.to_string()))
        }),
        Rule::new("real", r"^[0-9]+\.[0-9]+", |s, _| Some((Kind::Real, s.to_string()))),
        Rule::new("integer", r"^[0-9]+", |s, _| Some((Kind::Integer, s.to_string()))),
        Rule::new("string", r#"^"[^"]*""#, |s, _| {
            Some((Kind::String, s[1..s.len() - 1].to_string()))
        }),
        Rule::new("whitespace", r"^\s+", |_, _| None),
    ]
}

fn remark(s: &str, options: &Options) -> Option<(Kind, String)> {
    if !options.keep_remarks {
        return None;
    }
    let text = s.get(3..).unwrap_or("").trim();
    Some((Kind::Remark, text.to_string()))
}

fn symbol(s: &str) -> Option<Kind> {
    use Kind::*;
    Some(match s {
        "+" => Plus,
        "-" => Minus,
        "*" => Times,
        "/" => Divide,
        "=" | "<" | ">" => Operator,
        "(" => LParen,
        ")" => RParen,
        ":" => Colon,
        ";" => Semicolon,
        "," => Comma,
        _ => return None,
    })
}

struct BasicLexer<'a> {
    source: &'a str,
    offset: usize,
    rules: &'a [Rule],
    options: &'a Options,
    failed: bool,
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.failed {
            let rest = self.source.get(self.offset..)?;
            if rest.is_empty() {
                return None;
            }
            let matched = self
                .rules
                .iter()
                .find_map(|rule| rule.pattern.find(rest).map(|m| (rule, m.end())));
            let (rule, len) = match matched {
                Some(found) => found,
                None => {
                    self.failed = true;
                    return Some(Err(LexError::new(self.offset, rest)));
                }
            };
            let column = self.offset..self.offset + len;
            self.offset += len;
            if let Some((kind, lexeme)) = (rule.action)(&rest[..len], self.options) {
                trace!(rule = rule.name, %kind, lexeme = %lexeme, "token");
                return Some(Ok(Token {
                    kind,
                    lexeme,
                    column,
                }));
            }
        }
        None
    }
}
