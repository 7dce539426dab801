//! SCIM filter parsing.
//!
//! Turns a filter query string such as
//! `userName eq "bjensen" and (active eq true or emails pr)` into a
//! [`FilterNode`] tree. Evaluating the tree against stored resources is the
//! storage provider's job.

pub mod node;
pub mod parser;
pub mod token;


pub use node::{ComparisonOperator, ExpressionNode, FilterNode, LogicalOperator, OperationNode};
pub use parser::{FilterParser, parse_filter};
pub use token::{Token, tokenize};
