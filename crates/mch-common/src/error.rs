pub type MchResult<T = (), E = MchError> = Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum MchError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Config not initialized")]
    ConfigNotInitialized,
    #[error("Runtime error: {0}")]
    Runtime(#[from] anyhow::Error),
    #[error("Command error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Invalid Json: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}
