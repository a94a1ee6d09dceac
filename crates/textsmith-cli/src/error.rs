use textsmith_engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Engine(#[from] EngineError),
    #[error("core error: {0}")]
    Core(#[from] textsmith_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("config serialization error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CliError {
    /// Error kind printed next to the message.
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Engine(err) => err.code(),
            CliError::Core(_) => "invalid_class",
            CliError::Io(_) => "io",
            CliError::Json(_) => "json",
            CliError::Config(_) | CliError::ConfigWrite(_) => "config",
            CliError::InvalidConfig(_) => "config",
            CliError::Logging(_) => "logging",
        }
    }

    /// Engine and I/O failures exit with 1; configuration problems with 2.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_)
            | CliError::ConfigWrite(_)
            | CliError::InvalidConfig(_)
            | CliError::Core(_) => 2,
            _ => 1,
        }
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;
