use crate::model::cost::CostFieldError;
use crate::model::network::NetworkError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TraversalError {
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error(transparent)]
    CostField(#[from] CostFieldError),
}
