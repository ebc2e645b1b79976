use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid map: {0}")]
    InvalidMap(String),
    #[error("malformed map file: {0}")]
    MalformedMap(String),
}
