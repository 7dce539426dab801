//! Filter parsing tests through the public API.

pub mod list_query;
pub mod parsing;
