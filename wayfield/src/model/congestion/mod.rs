mod congestion_level;
mod crossing_penalty;
mod street_classification;

pub use congestion_level::CongestionLevel;
pub use crossing_penalty::CrossingPenaltyTable;
pub use street_classification::StreetClassification;
