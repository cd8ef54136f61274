use crate::model::network::WayId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CostFieldError {
    #[error("custom cost factor mapping cannot be empty when building a custom cost field")]
    EmptyFactorMapping,
    #[error("custom cost factor for way id {way_id} must be a non-negative number, found {factor}")]
    InvalidFactor { way_id: WayId, factor: f64 },
    #[error("custom cost factor not found for way id {way_id}")]
    MissingFactor { way_id: WayId },
    #[error("custom cost addition is not a finite number for way id {way_id}")]
    NonFiniteAddition { way_id: WayId },
    #[error("invalid custom cost configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading custom cost factors from {0}: {1}")]
    FactorFileError(String, csv::Error),
}
