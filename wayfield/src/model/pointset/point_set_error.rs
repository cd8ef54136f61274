use thiserror::Error;

#[derive(Error, Debug)]
pub enum PointSetError {
    #[error("point set has {points} points but {weights} opportunity weights")]
    LengthMismatch { points: usize, weights: usize },
    #[error("point set has {points} points but {times} travel times")]
    TravelTimeLengthMismatch { points: usize, times: usize },
}
