//! Tag matching with OR / AND-NOT semantics.
//!
//! Query tokens:
//!   name    - non-strict, the subject matches if it carries `name` (OR)
//!   +name   - strict match, the subject must carry `name` (AND)
//!   -name   - strict mismatch, the subject must not carry `name` (AND)
//!
//! A subject matches when any non-strict token is present, or when every
//! strict token holds. An empty query matches everything; an empty subject
//! never matches a non-empty query.

mod matcher;
mod token;

pub use matcher::{Query, Tags};
