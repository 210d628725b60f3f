use std::sync::LazyLock;

use regex::Regex;

/// ASCII word runs, ASCII whitespace runs of two or more, then single line controls.
/// Anything else (a lone space, punctuation, non-ASCII letters) is never matched
/// and so never emitted.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\w)+|(?-u:\s){2,}|\n|\r|\t").expect("token pattern must compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Word(&'a str),
    WideSpace(&'a str),
    Newline,
    CarriageReturn,
    Tab,
}

impl<'a> Token<'a> {
    /// Text covered by the token
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Word(text) | Token::WideSpace(text) => text,
            Token::Newline => "\n",
            Token::CarriageReturn => "\r",
            Token::Tab => "\t",
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }

    // `\w` and `\s` are disjoint, so the first char picks the branch.
    fn classify(span: &'a str) -> Self {
        match span {
            "\n" => Token::Newline,
            "\r" => Token::CarriageReturn,
            "\t" => Token::Tab,
            _ if span.starts_with(char::is_whitespace) => Token::WideSpace(span),
            _ => Token::Word(span),
        }
    }
}

/// Lazy left-to-right token stream over borrowed text.
///
/// Cloning the iterator replays the remaining tokens.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }

        let found = TOKEN_PATTERN.find_at(self.text, self.pos)?;
        self.pos = found.end();
        Some(Token::classify(found.as_str()))
    }
}

pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { text, pos: 0 }
}
