use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("vertex index {index} out of bounds for store of {count} vertices")]
    VertexIndexOutOfBounds { index: usize, count: usize },
    #[error("cannot modify vertex {index}: indices below {base_count} belong to the shared base segment of an extend-only copy")]
    SharedSegmentWrite { index: usize, base_count: usize },
    #[error("edge index {index} out of bounds for store of {count} edges")]
    EdgeIndexOutOfBounds { index: usize, count: usize },
}
