use mch_common::error::MchError;

pub type OperatorResult<T = (), E = OperatorError> = Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum OperatorError {
    #[error(transparent)]
    Common(#[from] MchError),

    #[error("Invalid Kubernetes Yaml: {source}")]
    Yaml {
        #[from]
        source: serde_yaml::Error,
    },
}
