use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read suppliers file {path}: {source}")]
    SuppliersFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse suppliers file: {0}")]
    SuppliersFileParse(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
