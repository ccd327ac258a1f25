use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A validation batch was not a JSON array.
    #[error("Input must be an array of businesses, got {found}")]
    InputShape { found: &'static str },
}
