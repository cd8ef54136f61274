use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// persistent identifier of a real-world road or path segment, assigned by
/// the source data. several directed edges may share one way id.
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash,
)]
pub struct WayId(pub i64);

impl Display for WayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
