use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnimatorError {
    #[error("Cursor opacity is not an integer: {0:?}")]
    InvalidOpacity(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl From<&str> for AnimatorError {
    fn from(error: &str) -> Self {
        AnimatorError::InvalidConfig(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AnimatorError>;
