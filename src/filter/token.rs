//! Filter tokenizer.
//!
//! Only grouping parentheses and the logical keywords are structurally
//! significant. Everything between them is gathered into a single comparison
//! token, so `userName eq "bjensen"` is one token. Text inside double quotes
//! is literal: keywords and parentheses there do not split the comparison.

use crate::error::{ScimError, ScimResult};
use log::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    LeftParen,
    RightParen,
    And,
    Or,
    Not,
    /// A whole comparison expression, words joined by single spaces
    Comparison(String),
}

/// Split a filter string into tokens.
pub fn tokenize(filter: &str) -> ScimResult<Vec<Token>> {
    let mut scanner = Scanner::default();
    let mut chars = filter.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                scanner.word.push(c);
                read_quoted(&mut chars, &mut scanner.word)
                    .ok_or_else(|| ScimError::invalid_filter("Unterminated quoted string"))?;
            }
            '(' => {
                scanner.flush_comparison();
                scanner.tokens.push(Token::LeftParen);
            }
            ')' => {
                scanner.flush_comparison();
                scanner.tokens.push(Token::RightParen);
            }
            c if c.is_whitespace() => scanner.end_word(),
            c => scanner.word.push(c),
        }
    }
    scanner.flush_comparison();

    trace!("Tokenized filter '{}' into {:?}", filter, scanner.tokens);
    Ok(scanner.tokens)
}

/// Copy a quoted literal up to and including its closing quote.
///
/// Returns `None` if the input ends first.
fn read_quoted(chars: &mut std::str::Chars<'_>, word: &mut String) -> Option<()> {
    while let Some(c) = chars.next() {
        word.push(c);
        match c {
            '\\' => word.push(chars.next()?),
            '"' => return Some(()),
            _ => {}
        }
    }
    None
}

#[derive(Default)]
struct Scanner {
    tokens: Vec<Token>,
    words: Vec<String>,
    word: String,
}

impl Scanner {
    /// Finish the current word, emitting a keyword token if it is one.
    fn end_word(&mut self) {
        if self.word.is_empty() {
            return;
        }
        let word = std::mem::take(&mut self.word);
        let keyword = match word.to_ascii_lowercase().as_str() {
            "and" => Some(Token::And),
            "or" => Some(Token::Or),
            "not" => Some(Token::Not),
            _ => None,
        };

        match keyword {
            Some(token) => {
                self.emit_comparison();
                self.tokens.push(token);
            }
            None => self.words.push(word),
        }
    }

    /// Finish the current word and any pending comparison.
    fn flush_comparison(&mut self) {
        self.end_word();
        self.emit_comparison();
    }

    fn emit_comparison(&mut self) {
        if !self.words.is_empty() {
            let comparison = self.words.join(" ");
            self.words.clear();
            self.tokens.push(Token::Comparison(comparison));
        }
    }
}
