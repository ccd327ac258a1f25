//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument.

pub mod business_image_repo;
pub mod business_repo;
pub mod category_repo;

pub use business_image_repo::BusinessImageRepo;
pub use business_repo::BusinessRepo;
pub use category_repo::CategoryRepo;
