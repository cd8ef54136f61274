use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResultError {
    #[error("travel time matrix row {percentile} has {found} destinations, expected {expected}")]
    RaggedTravelTimeMatrix {
        percentile: usize,
        expected: usize,
        found: usize,
    },
}
