//! Recursive-descent filter parser.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expression := term ("or" term)*
//! term       := factor ("and" factor)*
//! factor     := "not" factor | "(" expression ")" | comparison
//! ```
//!
//! Operators are left-associative. Any syntax error fails the whole parse.

use super::node::{ComparisonOperator, FilterNode};
use super::token::{Token, tokenize};
use crate::error::{ScimError, ScimResult};

use log::debug;

/// Parser state for one filter string. Not shared between parses.
#[derive(Debug)]
pub struct FilterParser {
    tokens: Vec<Token>,
    position: usize,
}

impl FilterParser {
    /// Tokenize a filter string ready for parsing.
    pub fn new(filter: &str) -> ScimResult<Self> {
        Ok(Self {
            tokens: tokenize(filter)?,
            position: 0,
        })
    }

    /// Parse the whole token stream into an expression tree.
    pub fn parse(mut self) -> ScimResult<FilterNode> {
        if self.tokens.is_empty() {
            return Err(ScimError::invalid_filter("Filter is empty"));
        }

        let node = self.parse_expression()?;
        if let Some(token) = self.peek() {
            return Err(ScimError::invalid_filter(format!(
                "Unexpected {} after complete expression",
                describe(token)
            )));
        }
        Ok(node)
    }

    fn parse_expression(&mut self) -> ScimResult<FilterNode> {
        let mut node = self.parse_term()?;
        while self.next_if(&Token::Or) {
            let right = self.parse_term()?;
            node = FilterNode::or(node, right);
        }
        Ok(node)
    }

    fn parse_term(&mut self) -> ScimResult<FilterNode> {
        let mut node = self.parse_factor()?;
        while self.next_if(&Token::And) {
            let right = self.parse_factor()?;
            node = FilterNode::and(node, right);
        }
        Ok(node)
    }

    fn parse_factor(&mut self) -> ScimResult<FilterNode> {
        match self.advance() {
            Some(Token::Not) => Ok(FilterNode::not(self.parse_factor()?)),
            Some(Token::LeftParen) => {
                let node = self.parse_expression()?;
                if self.next_if(&Token::RightParen) {
                    Ok(node)
                } else {
                    Err(ScimError::invalid_filter("Missing closing parenthesis"))
                }
            }
            Some(Token::Comparison(text)) => parse_comparison(&text),
            Some(token) => Err(ScimError::invalid_filter(format!(
                "Expected an expression but found {}",
                describe(&token)
            ))),
            None => Err(ScimError::invalid_filter(
                "Expected an expression but the filter ended",
            )),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn next_if(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }
}

/// Parse a filter string into an expression tree.
///
/// ```rust
/// use scim_core::filter::{ComparisonOperator, parse_filter};
///
/// let filter = parse_filter(r#"emails.value co "example.com""#).unwrap();
/// let expression = filter.as_expression().unwrap();
/// assert_eq!(expression.attribute_path, "emails.value");
/// assert_eq!(expression.operator, ComparisonOperator::Contains);
/// assert_eq!(expression.value.as_deref(), Some("example.com"));
/// ```
pub fn parse_filter(filter: &str) -> ScimResult<FilterNode> {
    let node = FilterParser::new(filter)?.parse()?;
    debug!("Parsed filter '{}' as {}", filter, node);
    Ok(node)
}

/// Split a comparison token into attribute path, operator and literal value.
fn parse_comparison(text: &str) -> ScimResult<FilterNode> {
    let (attribute_path, rest) = split_word(text);
    if attribute_path.starts_with('"') {
        return Err(ScimError::invalid_filter(format!(
            "Expected an attribute path in '{}'",
            text
        )));
    }

    let (keyword, rest) = split_word(rest);
    if keyword.is_empty() {
        return Err(ScimError::invalid_filter(format!(
            "Missing comparison operator in '{}'",
            text
        )));
    }
    let operator = ComparisonOperator::from_keyword(keyword).ok_or_else(|| {
        ScimError::invalid_filter(format!(
            "Unrecognized comparison operator '{}' in '{}'",
            keyword, text
        ))
    })?;

    let literal = rest.trim();
    let value = match (operator.takes_value(), literal.is_empty()) {
        (true, false) => Some(parse_literal(literal, text)?),
        (false, true) => None,
        (true, true) => {
            return Err(ScimError::invalid_filter(format!(
                "Operator '{}' requires a value in '{}'",
                operator, text
            )));
        }
        (false, false) => {
            return Err(ScimError::invalid_filter(format!(
                "Operator 'pr' takes no value in '{}'",
                text
            )));
        }
    };

    Ok(FilterNode::comparison(attribute_path, operator, value))
}

/// Split off the first whitespace-delimited word.
fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(end) => (&text[..end], &text[end..]),
        None => (text, ""),
    }
}

/// Read a comparison literal.
///
/// A quoted literal ends at its matching closing quote and is unescaped;
/// nothing may follow it. An unquoted literal must be a single word.
fn parse_literal(literal: &str, text: &str) -> ScimResult<String> {
    let Some(quoted) = literal.strip_prefix('"') else {
        if literal.contains(char::is_whitespace) {
            return Err(ScimError::invalid_filter(format!(
                "Unquoted value '{}' must be a single word in '{}'",
                literal, text
            )));
        }
        return Ok(literal.to_string());
    };

    let mut value = String::with_capacity(quoted.len());
    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => value.push(escaped),
                None => break,
            },
            '"' => {
                let rest = chars.as_str().trim();
                if !rest.is_empty() {
                    return Err(ScimError::invalid_filter(format!(
                        "Unexpected '{}' after quoted value in '{}'",
                        rest, text
                    )));
                }
                return Ok(value);
            }
            c => value.push(c),
        }
    }

    Err(ScimError::invalid_filter(format!(
        "Unterminated quoted value in '{}'",
        text
    )))
}

fn describe(token: &Token) -> String {
    match token {
        Token::LeftParen => "'('".to_string(),
        Token::RightParen => "')'".to_string(),
        Token::And => "'and'".to_string(),
        Token::Or => "'or'".to_string(),
        Token::Not => "'not'".to_string(),
        Token::Comparison(text) => format!("'{}'", text),
    }
}
