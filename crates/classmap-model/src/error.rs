use thiserror::Error;

/// Errors raised while assembling a model snapshot.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("type `{0}` is already defined in the model")]
    DuplicateType(String),
}
