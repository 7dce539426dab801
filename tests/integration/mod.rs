//! End-to-end flows driving the core through a storage provider.

pub mod in_memory;
