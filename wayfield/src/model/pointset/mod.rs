mod freeform;
mod point_set;
mod point_set_error;
mod point_set_times;

pub use freeform::FreeFormPointSet;
pub use point_set::PointSet;
pub use point_set_error::PointSetError;
pub use point_set_times::{PointSetTimes, UNREACHED};
