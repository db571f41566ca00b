use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackError {
    #[error("Resource not found: {path}")]
    NotFound { path: String },

    #[error("Resource is a directory: {path}")]
    IsDirectory { path: String },

    #[error("Failed to read resource {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Resource path is not valid UTF-8: {0}")]
    InvalidName(String),

    #[error("Duplicate resource name: {0}")]
    DuplicateName(String),
}

impl PackError {
    pub(crate) fn from_io(path: &str, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => PackError::NotFound {
                path: path.to_string(),
            },
            std::io::ErrorKind::IsADirectory => PackError::IsDirectory {
                path: path.to_string(),
            },
            _ => PackError::Io {
                path: path.to_string(),
                source,
            },
        }
    }
}
