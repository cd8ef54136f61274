use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// stable zero-based index of a directed edge within an [`super::EdgeStore`].
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash,
)]
pub struct EdgeId(pub usize);

impl Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
