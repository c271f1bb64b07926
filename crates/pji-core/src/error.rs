use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("duplicate culture sample number: {0}")]
    DuplicateSampleNumber(u32),

    #[error("negative culture sample {0} carries an organism name")]
    UnexpectedOrganismName(u32),

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
