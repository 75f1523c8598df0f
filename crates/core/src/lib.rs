//! Domain logic for the product category page.
//!
//! Nothing in here touches the database or HTTP; the `db` and `api` crates
//! build on these types.

pub mod error;
pub mod types;
pub mod validation;
