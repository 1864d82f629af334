use eda_model::OptionsError;
use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EdaError {
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("invalid options: {0}")]
    Options(#[from] OptionsError),
}

pub type Result<T> = std::result::Result<T, EdaError>;
