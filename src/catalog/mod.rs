//! Running one query over a catalog of tagged products.
//!
//! Products are checked one by one in catalog order; there is no index.

mod filter;

pub use filter::{filter_products, resolve_query};
