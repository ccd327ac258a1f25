//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the repositories in `bizdir_db` (or the validator
//! in `bizdir_core`) and map errors via [`AppError`](crate::error::AppError).

pub mod business;
pub mod category;
pub mod validation;
