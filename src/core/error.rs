use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkyError {
    #[error("Duplicate constellation: {0}")]
    DuplicateConstellation(String),

    #[error("Unknown constellation: {0}")]
    UnknownConstellation(String),

    #[error("Invalid phase {phase} for constellation {name} (must be below {limit})")]
    InvalidPhase { name: String, phase: u8, limit: u8 },

    #[error("Invalid constellation definition: {0}")]
    InvalidDefinition(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SkyError>;
