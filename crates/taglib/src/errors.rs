use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagError {
    #[error("No resource path set on tag")]
    MissingValue,

    #[error("End tag evaluated before start tag")]
    NotStarted,

    #[error("Unknown scope: {0}")]
    InvalidScope(String),

    #[error("Failed to write resource url: {0}")]
    Output(#[from] std::io::Error),
}
