//! Storage provider boundary.
//!
//! The core ships no storage backend. [`ResourceProvider`] is the interface a
//! backend implements; [`ListQuery`] carries a parsed filter and paging to it.

pub mod provider;

pub use provider::{ListQuery, ResourceProvider, SortOrder};
