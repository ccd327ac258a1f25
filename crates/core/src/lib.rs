//! Domain types and pure logic for the business directory.
//!
//! Nothing in this crate touches the database or HTTP; the `db` and `api`
//! crates build on top of it.

pub mod error;
pub mod types;
pub mod validation;
