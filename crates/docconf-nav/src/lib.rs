//! Sidebar navigation tree model for the documentation site configuration.
//!
//! Provides [`NavNode`], a recursive navigation entry matching the shape the
//! static-site generator expects (`title` / `path` / `directory` / nested
//! `children`), plus [`validate`] which enforces the structural rules the
//! generator relies on:
//!
//! - every node has a non-blank title
//! - internal document paths are unique across the whole tree
//! - external links are never marked as directories
//! - grouping nodes actually group something
//!
//! Child ordering is authored, significant, and preserved exactly — nothing
//! here ever sorts.
//!
//! The `serde` feature enables serialization in the generator's expected
//! field layout.

mod error;
mod node;
mod validate;

pub use error::NavError;
pub use node::NavNode;
pub use validate::validate;
