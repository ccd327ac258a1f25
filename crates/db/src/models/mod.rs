//! Row models returned by the repositories.
//!
//! Each struct derives `FromRow` + `Serialize` so handlers can return rows
//! as JSON without an extra mapping layer.

pub mod business;
pub mod category;
