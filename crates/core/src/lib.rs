//! Domain types and pure logic for the prompt explorer.
//!
//! Nothing in this crate touches the database or HTTP; the `db` and `api`
//! crates build on these types.

pub mod chain;
pub mod error;
pub mod seed;
pub mod types;
pub mod validation;
