use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictError {
    #[error("Need at least 2 months of data for prediction")]
    InsufficientData,
}
