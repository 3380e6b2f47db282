//! Path queries over a parsed [`Node`](crate::parser::Node) tree.
//!
//! A pattern is a `/`-separated list of steps:
//! - `name` moves to the first child with that element name;
//! - `[N]` moves to the child at zero-based position `N`;
//! - `@attr` yields the value of an attribute of the current node as a
//!   nameless scalar node.
//!
//! Matching is first-match, left to right, with no backtracking.

pub mod pattern;
pub mod resolver;

pub use pattern::{Pattern, Step};
pub use resolver::resolve;
