//! Filter expression tree.
//!
//! A binary tree of logical operations over attribute comparisons. Built
//! bottom-up by the parser and read-only afterwards; evaluation is left to the
//! storage provider.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute comparison operators (RFC 7644 section 3.4.2.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    /// Equal comparison
    #[serde(rename = "eq")]
    Equal,

    /// Not equal comparison
    #[serde(rename = "ne")]
    NotEqual,

    /// Contains operation for strings
    #[serde(rename = "co")]
    Contains,

    /// Starts with operation for strings
    #[serde(rename = "sw")]
    StartsWith,

    /// Ends with operation for strings
    #[serde(rename = "ew")]
    EndsWith,

    /// Present (attribute exists)
    #[serde(rename = "pr")]
    Present,

    /// Greater than
    #[serde(rename = "gt")]
    GreaterThan,

    /// Greater than or equal
    #[serde(rename = "ge")]
    GreaterThanOrEqual,

    /// Less than
    #[serde(rename = "lt")]
    LessThan,

    /// Less than or equal
    #[serde(rename = "le")]
    LessThanOrEqual,
}

impl ComparisonOperator {
    pub const ALL: [ComparisonOperator; 10] = [
        ComparisonOperator::Equal,
        ComparisonOperator::NotEqual,
        ComparisonOperator::Contains,
        ComparisonOperator::StartsWith,
        ComparisonOperator::EndsWith,
        ComparisonOperator::Present,
        ComparisonOperator::GreaterThan,
        ComparisonOperator::GreaterThanOrEqual,
        ComparisonOperator::LessThan,
        ComparisonOperator::LessThanOrEqual,
    ];

    /// Canonical lowercase symbol.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::Equal => "eq",
            ComparisonOperator::NotEqual => "ne",
            ComparisonOperator::Contains => "co",
            ComparisonOperator::StartsWith => "sw",
            ComparisonOperator::EndsWith => "ew",
            ComparisonOperator::Present => "pr",
            ComparisonOperator::GreaterThan => "gt",
            ComparisonOperator::GreaterThanOrEqual => "ge",
            ComparisonOperator::LessThan => "lt",
            ComparisonOperator::LessThanOrEqual => "le",
        }
    }

    /// Match an operator keyword, ignoring ASCII case.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|operator| operator.as_str().eq_ignore_ascii_case(keyword))
    }

    /// Whether the operator compares against a literal value. Only `pr` does not.
    pub fn takes_value(&self) -> bool {
        !matches!(self, ComparisonOperator::Present)
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical operators joining filter expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalOperator {
    And,
    Or,
    Not,
}

impl LogicalOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOperator::And => "and",
            LogicalOperator::Or => "or",
            LogicalOperator::Not => "not",
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A leaf comparison such as `userName eq "bjensen"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionNode {
    pub attribute_path: String,
    pub operator: ComparisonOperator,
    /// Literal operand with surrounding quotes removed; `None` only for `pr`.
    pub value: Option<String>,
}

/// A logical operation. `not` uses only the right child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationNode {
    pub operator: LogicalOperator,
    pub left: Option<Box<FilterNode>>,
    pub right: Box<FilterNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterNode {
    Operation(OperationNode),
    Expression(ExpressionNode),
}

impl FilterNode {
    pub fn and(left: FilterNode, right: FilterNode) -> Self {
        FilterNode::Operation(OperationNode {
            operator: LogicalOperator::And,
            left: Some(Box::new(left)),
            right: Box::new(right),
        })
    }

    pub fn or(left: FilterNode, right: FilterNode) -> Self {
        FilterNode::Operation(OperationNode {
            operator: LogicalOperator::Or,
            left: Some(Box::new(left)),
            right: Box::new(right),
        })
    }

    pub fn not(operand: FilterNode) -> Self {
        FilterNode::Operation(OperationNode {
            operator: LogicalOperator::Not,
            left: None,
            right: Box::new(operand),
        })
    }

    pub fn comparison(
        attribute_path: impl Into<String>,
        operator: ComparisonOperator,
        value: Option<String>,
    ) -> Self {
        FilterNode::Expression(ExpressionNode {
            attribute_path: attribute_path.into(),
            operator,
            value,
        })
    }

    pub fn as_operation(&self) -> Option<&OperationNode> {
        match self {
            FilterNode::Operation(operation) => Some(operation),
            FilterNode::Expression(_) => None,
        }
    }

    pub fn as_expression(&self) -> Option<&ExpressionNode> {
        match self {
            FilterNode::Expression(expression) => Some(expression),
            FilterNode::Operation(_) => None,
        }
    }
}

impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.attribute_path, self.operator)?;
        match &self.value {
            None => Ok(()),
            Some(value) if is_bare_literal(value) => write!(f, " {}", value),
            Some(value) => write!(
                f,
                " \"{}\"",
                value.replace('\\', "\\\\").replace('"', "\\\"")
            ),
        }
    }
}

impl fmt::Display for FilterNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterNode::Expression(expression) => fmt::Display::fmt(expression, f),
            FilterNode::Operation(operation) => match &operation.left {
                None => write!(f, "{} ({})", operation.operator, operation.right),
                Some(left) => write!(f, "({} {} {})", left, operation.operator, operation.right),
            },
        }
    }
}

/// Literals rendered without quotes: booleans, null and numbers.
fn is_bare_literal(value: &str) -> bool {
    matches!(value, "true" | "false" | "null") || value.parse::<f64>().is_ok()
}
