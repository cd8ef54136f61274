mod accessibility_result;
mod one_origin_result;
mod path_result;
mod result_error;
mod temporal_density_result;
mod travel_time_result;

pub use accessibility_result::AccessibilityResult;
pub use one_origin_result::OneOriginResult;
pub use path_result::{PathResult, PathSummary};
pub use result_error::ResultError;
pub use temporal_density_result::TemporalDensityResult;
pub use travel_time_result::TravelTimeResult;
